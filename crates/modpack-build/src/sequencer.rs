//! Strictly sequential, fail-fast execution of build steps.

use std::future::Future;
use std::pin::Pin;

/// A boxed unit of work for [`run_tasks`].
pub type Task<'a, E> =
    Box<dyn FnOnce() -> Pin<Box<dyn Future<Output = Result<(), E>> + Send + 'a>> + Send + 'a>;

/// Run `tasks` one after another through `run`.
///
/// A task is not started before the previous one has completed. The first
/// error stops the sequence and is returned; later tasks are never started.
pub async fn run_series<T, E, F, Fut>(tasks: impl IntoIterator<Item = T>, mut run: F) -> Result<(), E>
where
    F: FnMut(T) -> Fut,
    Fut: Future<Output = Result<(), E>>,
{
    for (index, task) in tasks.into_iter().enumerate() {
        tracing::trace!(index, "starting task");
        if let Err(err) = run(task).await {
            tracing::debug!(index, "task failed, skipping the rest");
            return Err(err);
        }
    }
    Ok(())
}

/// Run self-contained tasks in order with the same semantics as [`run_series`].
pub async fn run_tasks<'a, E>(tasks: Vec<Task<'a, E>>) -> Result<(), E> {
    run_series(tasks, |task| task()).await
}
