mod client;
mod error;
mod types;

pub use client::{CrmApi, DEFAULT_BASE_URL, PipedriveClient};
pub use error::{ApiError, ApiResult};
pub use types::{
    Activity, ActivityKind, ApiResponse, ConnectedUser, Deal, DealStatus, NewActivity, NewDeal,
    NewOrganization, NewPerson, Organization, Person,
};
