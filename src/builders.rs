//! Entity payload builders. Each builder composes random facts into one
//! create-payload, referencing records created by earlier stages. Builders
//! above the organization stage return `None` when their upstream collection
//! is empty; the run degrades instead of aborting.

use pipedrive::{
    ActivityKind, Deal, DealStatus, NewActivity, NewDeal, NewOrganization, NewPerson, Organization,
    Person,
};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::facts;
use crate::vocab;

pub fn organization(index: usize, rng: &mut impl Rng) -> NewOrganization {
    let base = vocab::BUSINESS_NAMES[index % vocab::BUSINESS_NAMES.len()];
    let cycle = index / vocab::BUSINESS_NAMES.len();
    // Numeric suffix once the pool is exhausted so names stay unique.
    let name = if cycle == 0 {
        base.to_string()
    } else {
        format!("{base} {}", cycle + 1)
    };
    let host = facts::normalize_company_name(&name);

    NewOrganization {
        email: format!("info@{host}.com"),
        website: format!("www.{host}.com"),
        name,
        address: facts::address(rng),
        phone: facts::phone_number(rng),
        category: vocab::BUSINESS_CATEGORIES[index % vocab::BUSINESS_CATEGORIES.len()].to_string(),
    }
}

pub fn person(index: usize, orgs: &[Organization], rng: &mut impl Rng) -> Option<NewPerson> {
    if orgs.is_empty() {
        return None;
    }
    // Round-robin, not random: spreads persons evenly across organizations.
    let org = &orgs[index % orgs.len()];

    let first = vocab::FIRST_NAMES.choose(rng)?;
    let last = vocab::LAST_NAMES.choose(rng)?;
    let host = facts::normalize_company_name(&org.name);

    Some(NewPerson {
        name: format!("{first} {last}"),
        email: format!(
            "{}.{}@{host}.com",
            first.to_ascii_lowercase(),
            last.to_ascii_lowercase()
        ),
        phone: facts::phone_number(rng),
        job_title: vocab::JOB_TITLES.choose(rng)?.to_string(),
        org_id: org.id,
    })
}

pub fn deal(persons: &[Person], orgs: &[Organization], rng: &mut impl Rng) -> Option<NewDeal> {
    let person = persons.choose(rng)?;
    let org = orgs.choose(rng)?;
    let service = vocab::SERVICE_TYPES.choose(rng)?;

    let variation: f64 = rng.gen_range(-0.4..=0.4);
    let value = (service.base_value as f64 * (1.0 + variation)).round() as i64;

    let status = if rng.gen_bool(0.8) {
        DealStatus::Open
    } else if rng.gen_bool(0.5) {
        DealStatus::Won
    } else {
        DealStatus::Lost
    };

    Some(NewDeal {
        title: format!("{} - {}", service.label, person.name),
        value,
        currency: vocab::CURRENCY.to_string(),
        stage_id: vocab::STAGE_IDS.choose(rng).copied()?,
        status,
        person_id: person.id,
        org_id: org.id,
        expected_close_date: facts::future_date(rng, 60),
        equipment: service.equipment.to_string(),
        estimated_duration: service.estimated_duration.to_string(),
    })
}

pub fn activity(
    deals: &[Deal],
    persons: &[Person],
    completed_ratio: f64,
    rng: &mut impl Rng,
) -> Option<NewActivity> {
    let deal = deals.choose(rng)?;
    let person = persons.choose(rng)?;
    let kind = *ActivityKind::ALL.choose(rng)?;

    let done = rng.gen_bool(completed_ratio.clamp(0.0, 1.0));
    let due_date = if done {
        facts::past_date(rng, 30)
    } else {
        facts::future_date(rng, 30)
    };

    Some(NewActivity {
        kind,
        subject: vocab::activity_subjects(kind).choose(rng)?.to_string(),
        due_date,
        due_time: facts::business_time(rng),
        duration: vocab::activity_duration(kind).to_string(),
        done,
        note: vocab::activity_notes(kind).choose(rng)?.to_string(),
        deal_id: deal.id,
        person_id: person.id,
    })
}
