//! Bounded-concurrency task scheduling.
//!
//! Every outbound request goes through one [`BoundedScheduler`]: jobs are
//! admitted in submission order and at most `capacity` of them run at once.
//! [`TaskGroup`] joins a batch of fallible jobs and applies a
//! [`FailurePolicy`] to the rest of the batch when one fails.

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::task::{Context, Poll};

use futures_util::future::{AbortHandle, Abortable, BoxFuture};
use futures_util::stream::{FuturesUnordered, StreamExt};
use serde::{Deserialize, Serialize};
use tokio::sync::{Semaphore, mpsc, oneshot};
use tracing::{debug, trace};

use crate::domain::errors::SchedulerError;

/// Default number of simultaneously running tasks.
pub const DEFAULT_CAPACITY: usize = 5;

type Job = BoxFuture<'static, ()>;

/// What a [`TaskGroup`] does to unfinished siblings once a task fails.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum FailurePolicy {
    /// Leave queued and running siblings alone; they finish unobserved.
    #[default]
    Detach,
    /// Cancel siblings that have not been admitted yet.
    CancelQueued,
    /// Cancel every unfinished sibling.
    CancelAll,
}

impl FailurePolicy {
    fn cancel_siblings(self, cancellers: &[TaskCanceller]) -> usize {
        match self {
            Self::Detach => 0,
            Self::CancelQueued => cancellers
                .iter()
                .filter(|c| !c.has_started())
                .map(TaskCanceller::cancel)
                .count(),
            Self::CancelAll => cancellers.iter().map(TaskCanceller::cancel).count(),
        }
    }
}

impl std::fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Detach => write!(f, "detach"),
            Self::CancelQueued => write!(f, "cancel-queued"),
            Self::CancelAll => write!(f, "cancel-all"),
        }
    }
}

/// Fixed-capacity admission gate shared by every component issuing requests.
///
/// Cloning yields another handle to the same pool. Must be created inside a
/// Tokio runtime.
#[derive(Clone)]
pub struct BoundedScheduler {
    job_tx: mpsc::UnboundedSender<Job>,
    permits: Arc<Semaphore>,
    capacity: usize,
}

impl std::fmt::Debug for BoundedScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundedScheduler")
            .field("capacity", &self.capacity)
            .field("in_flight", &self.in_flight())
            .finish_non_exhaustive()
    }
}

/// State for the background dispatch loop.
struct DispatchState {
    permits: Arc<Semaphore>,
    job_rx: mpsc::UnboundedReceiver<Job>,
}

impl BoundedScheduler {
    /// Creates a scheduler running at most `capacity` tasks at once.
    ///
    /// A capacity of zero is raised to one.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let permits = Arc::new(Semaphore::new(capacity));
        let (job_tx, job_rx) = mpsc::unbounded_channel();

        tokio::spawn(Self::run_dispatch_loop(DispatchState {
            permits: permits.clone(),
            job_rx,
        }));

        debug!(capacity, "Scheduler started");

        Self {
            job_tx,
            permits,
            capacity,
        }
    }

    /// Returns the maximum number of concurrently running tasks.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of tasks currently holding a slot.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.capacity - self.permits.available_permits()
    }

    /// Queues a task and returns a handle resolving to its output.
    ///
    /// The task starts once every earlier submission has been admitted and a
    /// slot is free. Dropping the handle does not cancel the task.
    pub fn submit<F, T>(&self, task: F) -> TaskHandle<T>
    where
        F: Future<Output = T> + Send + 'static,
        T: Send + 'static,
    {
        let (result_tx, result_rx) = oneshot::channel();
        let (abort_handle, registration) = AbortHandle::new_pair();
        let started = Arc::new(AtomicBool::new(false));
        let started_flag = started.clone();

        let job: Job = Box::pin(async move {
            started_flag.store(true, Ordering::SeqCst);
            let outcome = Abortable::new(task, registration)
                .await
                .map_err(|_| SchedulerError::Cancelled);
            let _ = result_tx.send(outcome);
        });

        if self.job_tx.send(job).is_err() {
            debug!("Scheduler dispatch loop has stopped, task dropped");
        }

        TaskHandle {
            result_rx,
            canceller: TaskCanceller {
                abort_handle,
                started,
            },
        }
    }

    /// Dispatch loop admitting queued jobs as permits become available.
    async fn run_dispatch_loop(mut state: DispatchState) {
        let mut queue: VecDeque<Job> = VecDeque::new();

        loop {
            tokio::select! {
                job = state.job_rx.recv() => {
                    match job {
                        Some(job) => queue.push_back(job),
                        None => break,
                    }
                }
                Ok(permit) = state.permits.clone().acquire_owned(), if !queue.is_empty() => {
                    if let Some(job) = queue.pop_front() {
                        trace!(queued = queue.len(), "Admitting task");
                        tokio::spawn(async move {
                            job.await;
                            drop(permit);
                        });
                    }
                }
            }
        }

        // Every handle is gone; still run what was already submitted.
        while let Some(job) = queue.pop_front() {
            let Ok(permit) = state.permits.clone().acquire_owned().await else {
                break;
            };
            tokio::spawn(async move {
                job.await;
                drop(permit);
            });
        }

        debug!("Scheduler dispatch loop stopped");
    }
}

/// Cancels a submitted task without consuming its handle.
#[derive(Debug, Clone)]
pub struct TaskCanceller {
    abort_handle: AbortHandle,
    started: Arc<AtomicBool>,
}

impl TaskCanceller {
    /// Requests cancellation; a running task stops at its next await point.
    pub fn cancel(&self) {
        self.abort_handle.abort();
    }

    /// Returns true once the task has been admitted.
    #[must_use]
    pub fn has_started(&self) -> bool {
        self.started.load(Ordering::SeqCst)
    }
}

/// Handle to a submitted task.
#[derive(Debug)]
pub struct TaskHandle<T> {
    result_rx: oneshot::Receiver<Result<T, SchedulerError>>,
    canceller: TaskCanceller,
}

impl<T> TaskHandle<T> {
    /// Requests cancellation of the task.
    pub fn cancel(&self) {
        self.canceller.cancel();
    }

    /// Returns true once the task has been admitted.
    #[must_use]
    pub fn has_started(&self) -> bool {
        self.canceller.has_started()
    }

    /// Returns a detached canceller for this task.
    #[must_use]
    pub fn canceller(&self) -> TaskCanceller {
        self.canceller.clone()
    }
}

impl<T> Future for TaskHandle<T> {
    type Output = Result<T, SchedulerError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.result_rx)
            .poll(cx)
            .map(|received| received.unwrap_or(Err(SchedulerError::Lost)))
    }
}

/// A batch of fallible tasks joined together.
pub struct TaskGroup<T, E> {
    handles: Vec<TaskHandle<Result<T, E>>>,
    policy: FailurePolicy,
}

impl<T, E> TaskGroup<T, E>
where
    T: Send + 'static,
    E: From<SchedulerError> + Send + 'static,
{
    /// Creates an empty group.
    #[must_use]
    pub const fn new(policy: FailurePolicy) -> Self {
        Self {
            handles: Vec::new(),
            policy,
        }
    }

    /// Submits a task through `scheduler` as part of this group.
    pub fn spawn<F>(&mut self, scheduler: &BoundedScheduler, task: F)
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
    {
        self.handles.push(scheduler.submit(task));
    }

    /// Returns the number of tasks in the group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Returns true if no task has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Waits for every task, returning outputs in submission order.
    ///
    /// # Errors
    /// Returns the first error observed, without waiting for the remaining
    /// tasks; the group's [`FailurePolicy`] decides whether they are cancelled.
    pub async fn join(self) -> Result<Vec<T>, E> {
        let policy = self.policy;
        let total = self.handles.len();
        let cancellers: Vec<TaskCanceller> =
            self.handles.iter().map(TaskHandle::canceller).collect();

        let mut pending: FuturesUnordered<_> = self
            .handles
            .into_iter()
            .enumerate()
            .map(|(index, handle)| async move { (index, handle.await) })
            .collect();

        let mut results: Vec<Option<T>> = std::iter::repeat_with(|| None).take(total).collect();

        while let Some((index, outcome)) = pending.next().await {
            let error = match outcome {
                Ok(Ok(value)) => {
                    results[index] = Some(value);
                    continue;
                }
                Ok(Err(error)) => error,
                Err(scheduler_error) => E::from(scheduler_error),
            };

            let cancelled = policy.cancel_siblings(&cancellers);
            debug!(
                failed_index = index,
                unfinished = pending.len(),
                cancelled,
                %policy,
                "Task failed, abandoning group"
            );
            return Err(error);
        }

        Ok(results.into_iter().flatten().collect())
    }
}
