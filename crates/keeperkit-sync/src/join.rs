//! Index-preserving join over a fixed batch of futures.

use std::future::Future;

use futures::stream::{FuturesUnordered, StreamExt};
use tokio::task::JoinError;
use tracing::{debug, warn};

use crate::error::SyncError;

/// Drive every computation concurrently and collect results by input index.
///
/// Returns the first error observed in completion order. Computations still
/// pending at that point are dropped.
pub(crate) async fn join_ordered<F, T, E>(computations: Vec<F>) -> Result<Vec<T>, SyncError<E>>
where
    F: Future<Output = Result<T, SyncError<E>>>,
{
    let total = computations.len();
    debug!(total, "joining batch");

    let mut slots: Vec<Option<T>> = std::iter::repeat_with(|| None).take(total).collect();
    let mut pending: FuturesUnordered<_> = computations
        .into_iter()
        .enumerate()
        .map(|(index, fut)| async move { (index, fut.await) })
        .collect();

    while let Some((index, result)) = pending.next().await {
        match result {
            Ok(value) => slots[index] = Some(value),
            Err(err) => {
                warn!(index, total, error = %ErrorKind(&err), "batch computation did not succeed");
                return Err(err);
            }
        }
    }

    debug!(total, "batch joined");
    Ok(slots.into_iter().flatten().collect())
}

/// Lift a plain computation result into the join's error type.
pub(crate) async fn lift<F, T, E>(index: usize, computation: F) -> Result<T, SyncError<E>>
where
    F: Future<Output = Result<T, E>>,
{
    computation
        .await
        .map_err(|source| SyncError::Failed { index, source })
}

/// Map a spawned task's outcome into the join's error type.
pub(crate) fn from_join<T, E>(
    index: usize,
    outcome: Result<Result<T, E>, JoinError>,
) -> Result<T, SyncError<E>> {
    match outcome {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(source)) => Err(SyncError::Failed { index, source }),
        Err(err) if err.is_panic() => Err(SyncError::Panicked {
            index,
            message: panic_message(err.into_panic()),
        }),
        Err(_) => Err(SyncError::Cancelled { index }),
    }
}

fn panic_message(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".into()
    }
}

/// Variant name only, so `E` needs no `Display` bound for logging.
struct ErrorKind<'a, E>(&'a SyncError<E>);

impl<E> std::fmt::Display for ErrorKind<'_, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self.0 {
            SyncError::Failed { .. } => "failed",
            SyncError::Panicked { .. } => "panicked",
            SyncError::Cancelled { .. } => "cancelled",
            SyncError::Runtime(_) => "runtime",
        };
        f.write_str(kind)
    }
}
