//! Data transfer objects.

mod auth_dto;
mod harvest_dto;

pub use auth_dto::{ResolvedToken, TokenSource};
pub use harvest_dto::HarvestReport;
