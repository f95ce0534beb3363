//! Application services shared by the use cases.

mod guild_fetcher;
mod task_scheduler;

pub use guild_fetcher::GuildFetcher;
pub use task_scheduler::{
    BoundedScheduler, DEFAULT_CAPACITY, FailurePolicy, TaskCanceller, TaskGroup, TaskHandle,
};
