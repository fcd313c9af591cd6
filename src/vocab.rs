//! Fixed vocabularies the fact generators and builders draw from. All of it
//! is field-service flavored so seeded accounts look like a working HVAC /
//! plumbing / electrical shop rather than lorem ipsum.

use pipedrive::ActivityKind;

pub const BUSINESS_NAMES: [&str; 20] = [
    "All Seasons Climate Control",
    "Summit Heating & Air",
    "Rapid Response Plumbing",
    "Bright Spark Electrical",
    "Comfort Zone Mechanical",
    "Lone Star Air Solutions",
    "Precision Temp Services",
    "Blue Flame Gas & Heating",
    "Evergreen Home Services",
    "Metro Duct & Vent",
    "Reliable Rooter Company",
    "Apex Air Conditioning",
    "Golden Valley Electric",
    "First Choice HVAC",
    "ProFlow Plumbing Group",
    "Airflow Masters",
    "Cornerstone Cooling",
    "Redline Refrigeration",
    "TruNorth Home Comfort",
    "Citywide Service Pros",
];

pub const BUSINESS_CATEGORIES: [&str; 5] = [
    "HVAC",
    "Plumbing",
    "Electrical",
    "Property Management",
    "General Contracting",
];

pub const STREETS: [&str; 12] = [
    "Main St",
    "Oak Ave",
    "Cedar Ln",
    "Elm Dr",
    "Maple Blvd",
    "Pecan Way",
    "Ridge Rd",
    "Sunset Ave",
    "Willow Ct",
    "Lakeview Dr",
    "Industrial Pkwy",
    "Commerce St",
];

pub const CITIES: [(&str, &str); 10] = [
    ("Austin", "TX"),
    ("Dallas", "TX"),
    ("Houston", "TX"),
    ("San Antonio", "TX"),
    ("Fort Worth", "TX"),
    ("El Paso", "TX"),
    ("Plano", "TX"),
    ("Waco", "TX"),
    ("Lubbock", "TX"),
    ("Round Rock", "TX"),
];

pub const AREA_CODES: [u16; 8] = [512, 214, 713, 210, 817, 915, 469, 254];

pub const EMAIL_DOMAINS: [&str; 5] = [
    "gmail.com",
    "yahoo.com",
    "outlook.com",
    "hotmail.com",
    "icloud.com",
];

pub const FIRST_NAMES: [&str; 16] = [
    "James", "Maria", "Robert", "Linda", "Michael", "Patricia", "David", "Jennifer", "Carlos",
    "Sarah", "Kevin", "Angela", "Brian", "Jessica", "Thomas", "Monica",
];

pub const LAST_NAMES: [&str; 16] = [
    "Smith",
    "Garcia",
    "Johnson",
    "Martinez",
    "Brown",
    "Rodriguez",
    "Miller",
    "Hernandez",
    "Davis",
    "Lopez",
    "Wilson",
    "Gonzalez",
    "Anderson",
    "Torres",
    "Taylor",
    "Nguyen",
];

pub const JOB_TITLES: [&str; 8] = [
    "Office Manager",
    "Facilities Director",
    "Property Manager",
    "Homeowner",
    "Operations Manager",
    "Maintenance Supervisor",
    "Building Engineer",
    "Owner",
];

/// Ordinal pipeline stages: lead, estimate, scheduled, in progress, completed.
pub const STAGE_IDS: [i64; 5] = [1, 2, 3, 4, 5];

pub const CURRENCY: &str = "USD";

#[derive(Debug, Clone, Copy)]
pub struct ServiceType {
    pub label: &'static str,
    pub base_value: i64,
    pub equipment: &'static str,
    pub estimated_duration: &'static str,
}

pub const SERVICE_TYPES: [ServiceType; 8] = [
    ServiceType {
        label: "AC Repair",
        base_value: 350,
        equipment: "Condenser unit",
        estimated_duration: "2 hours",
    },
    ServiceType {
        label: "Furnace Installation",
        base_value: 4500,
        equipment: "Gas furnace",
        estimated_duration: "1 day",
    },
    ServiceType {
        label: "Duct Cleaning",
        base_value: 450,
        equipment: "Ductwork",
        estimated_duration: "3 hours",
    },
    ServiceType {
        label: "HVAC Maintenance",
        base_value: 189,
        equipment: "Split system",
        estimated_duration: "1 hour",
    },
    ServiceType {
        label: "Heat Pump Replacement",
        base_value: 6200,
        equipment: "Heat pump",
        estimated_duration: "1 day",
    },
    ServiceType {
        label: "Thermostat Installation",
        base_value: 275,
        equipment: "Smart thermostat",
        estimated_duration: "1 hour",
    },
    ServiceType {
        label: "Water Heater Repair",
        base_value: 425,
        equipment: "Water heater",
        estimated_duration: "2 hours",
    },
    ServiceType {
        label: "Electrical Panel Upgrade",
        base_value: 2800,
        equipment: "Breaker panel",
        estimated_duration: "4 hours",
    },
];

pub fn activity_subjects(kind: ActivityKind) -> &'static [&'static str] {
    match kind {
        ActivityKind::Call => &[
            "Follow up on estimate",
            "Confirm appointment window",
            "Post-service satisfaction call",
            "Discuss maintenance plan",
        ],
        ActivityKind::Meeting => &[
            "On-site walkthrough",
            "Equipment selection meeting",
            "Project kickoff",
            "Final inspection",
        ],
        ActivityKind::Task => &[
            "Order replacement parts",
            "Prepare quote",
            "Pull city permit",
            "Schedule crew",
        ],
        ActivityKind::Deadline => &[
            "Permit expiration",
            "Warranty registration due",
            "Quote expires",
            "Financing approval deadline",
        ],
        ActivityKind::Email => &[
            "Send quote",
            "Email invoice",
            "Share maintenance checklist",
            "Send appointment reminder",
        ],
        ActivityKind::Lunch => &[
            "Lunch with property manager",
            "Vendor lunch",
            "Lunch and learn with crew",
        ],
    }
}

pub fn activity_notes(kind: ActivityKind) -> &'static [&'static str] {
    match kind {
        ActivityKind::Call => &[
            "Left voicemail, will retry tomorrow.",
            "Customer asked for a weekend slot.",
            "Confirmed they received the estimate.",
        ],
        ActivityKind::Meeting => &[
            "Measured returns and supply runs.",
            "Customer leaning toward the high-efficiency option.",
            "Walked the attic, access is tight.",
        ],
        ActivityKind::Task => &[
            "Parts on backorder, ETA next week.",
            "Need two techs for this one.",
            "Quote drafted, pending manager review.",
        ],
        ActivityKind::Deadline => &[
            "Hard date, city will not extend.",
            "Remind customer three days before.",
        ],
        ActivityKind::Email => &[
            "Sent with financing options attached.",
            "Bounced once, verified the address.",
        ],
        ActivityKind::Lunch => &[
            "Discussed the annual service contract.",
            "They manage four more buildings downtown.",
        ],
    }
}

pub fn activity_duration(kind: ActivityKind) -> &'static str {
    match kind {
        ActivityKind::Call | ActivityKind::Email => "00:15",
        ActivityKind::Task => "00:30",
        ActivityKind::Deadline => "00:00",
        ActivityKind::Meeting | ActivityKind::Lunch => "01:00",
    }
}
