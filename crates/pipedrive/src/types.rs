use serde::{Deserialize, Serialize};

/// Wire envelope shared by every Pipedrive endpoint.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewOrganization {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub website: String,
    pub category: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Organization {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewPerson {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub job_title: String,
    pub org_id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Person {
    pub id: i64,
    pub name: String,
    pub org_id: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DealStatus {
    Open,
    Won,
    Lost,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewDeal {
    pub title: String,
    pub value: i64,
    pub currency: String,
    pub stage_id: i64,
    pub status: DealStatus,
    pub person_id: i64,
    pub org_id: i64,
    /// `YYYY-MM-DD`
    pub expected_close_date: String,
    /// Service custom fields: what the job touches and how long it should take.
    pub equipment: String,
    pub estimated_duration: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Deal {
    pub id: i64,
    pub title: String,
    pub person_id: i64,
    pub org_id: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Call,
    Meeting,
    Task,
    Deadline,
    Email,
    Lunch,
}

impl ActivityKind {
    pub const ALL: [ActivityKind; 6] = [
        ActivityKind::Call,
        ActivityKind::Meeting,
        ActivityKind::Task,
        ActivityKind::Deadline,
        ActivityKind::Email,
        ActivityKind::Lunch,
    ];
}

#[derive(Debug, Clone, Serialize)]
pub struct NewActivity {
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub subject: String,
    /// `YYYY-MM-DD`
    pub due_date: String,
    /// `HH:MM`
    pub due_time: String,
    /// `HH:MM`
    pub duration: String,
    pub done: bool,
    pub note: String,
    pub deal_id: i64,
    pub person_id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Activity {
    pub id: i64,
    pub subject: String,
}

/// Returned by `GET /users/me`, used by the pre-flight auth check.
#[derive(Debug, Clone, Deserialize)]
pub struct ConnectedUser {
    pub id: i64,
    pub name: String,
    pub email: String,
}
