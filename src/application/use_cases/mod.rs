//! Use case implementations.

mod harvest_use_case;
mod resolve_token_use_case;

pub use harvest_use_case::{HarvestSettings, HarvestUseCase};
pub use resolve_token_use_case::ResolveTokenUseCase;
