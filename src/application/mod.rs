//! Application layer with use cases, services and DTOs.

/// Data transfer objects.
pub mod dto;
/// Scheduling and fetching services.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use dto::{HarvestReport, ResolvedToken, TokenSource};
pub use services::{BoundedScheduler, FailurePolicy, GuildFetcher, TaskGroup};
pub use use_cases::{HarvestSettings, HarvestUseCase, ResolveTokenUseCase};
