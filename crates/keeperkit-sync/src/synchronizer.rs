//! Blocking entry points: the [`synchronize`] free function and [`Synchronizer`].
//!
//! Both block the calling thread and must not be called from inside an async
//! context; tokio panics if a runtime is entered twice on one thread.

use std::future::Future;

use tokio::runtime::{Handle, Runtime};
use tokio::task::JoinHandle;
use tracing::debug;

use crate::config::SyncConfig;
use crate::error::SyncError;
use crate::join;

/// Block until every computation resolves; results come back in input order.
///
/// The computations are polled concurrently on a fresh single-threaded runtime.
/// An empty batch returns immediately without building one. The first failure
/// observed ends the join and the remaining computations are dropped.
pub fn synchronize<I, F, T, E>(computations: I) -> Result<Vec<T>, SyncError<E>>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<T, E>>,
{
    let lifted: Vec<_> = computations
        .into_iter()
        .enumerate()
        .map(|(index, computation)| join::lift(index, computation))
        .collect();
    if lifted.is_empty() {
        return Ok(Vec::new());
    }

    let runtime = SyncConfig::default()
        .build_runtime()
        .map_err(SyncError::Runtime)?;
    runtime.block_on(join::join_ordered(lifted))
}

/// A runtime that computations are spawned onto and joined from sync code.
///
/// ```rust
/// use keeperkit_sync::Synchronizer;
///
/// let sync = Synchronizer::new().unwrap();
/// let a = sync.spawn(async { Ok::<_, std::io::Error>("a") });
/// let b = sync.spawn(async { Ok("b") });
/// assert_eq!(sync.synchronize([a, b]).unwrap(), vec!["a", "b"]);
/// ```
#[derive(Debug)]
pub struct Synchronizer {
    runtime: Runtime,
    config: SyncConfig,
}

impl Synchronizer {
    /// A synchronizer on a single-threaded runtime.
    pub fn new() -> std::io::Result<Self> {
        Self::with_config(SyncConfig::default())
    }

    pub fn with_config(config: SyncConfig) -> std::io::Result<Self> {
        let runtime = config.build_runtime()?;
        debug!(flavor = ?config.flavor, thread_name = %config.thread_name, "synchronizer runtime ready");
        Ok(Self { runtime, config })
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// Handle to the owned runtime, for spawning from other threads.
    pub fn handle(&self) -> &Handle {
        self.runtime.handle()
    }

    /// Put a computation in flight.
    ///
    /// On the single-threaded flavor it only makes progress while some
    /// blocking call on this synchronizer is running.
    pub fn spawn<F, T, E>(&self, computation: F) -> JoinHandle<Result<T, E>>
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
        T: Send + 'static,
        E: Send + 'static,
    {
        self.runtime.spawn(computation)
    }

    /// Block until every spawned computation resolves, results in input order.
    ///
    /// On failure the remaining handles are dropped, which detaches their
    /// tasks: they keep running on this runtime until it shuts down.
    pub fn synchronize<I, T, E>(&self, handles: I) -> Result<Vec<T>, SyncError<E>>
    where
        I: IntoIterator<Item = JoinHandle<Result<T, E>>>,
    {
        let joins: Vec<_> = handles
            .into_iter()
            .enumerate()
            .map(|(index, handle)| async move { join::from_join(index, handle.await) })
            .collect();
        if joins.is_empty() {
            return Ok(Vec::new());
        }
        self.runtime.block_on(join::join_ordered(joins))
    }

    /// Like [`synchronize`] but on this synchronizer's runtime.
    pub fn block_on<I, F, T, E>(&self, computations: I) -> Result<Vec<T>, SyncError<E>>
    where
        I: IntoIterator<Item = F>,
        F: Future<Output = Result<T, E>>,
    {
        let lifted: Vec<_> = computations
            .into_iter()
            .enumerate()
            .map(|(index, computation)| join::lift(index, computation))
            .collect();
        if lifted.is_empty() {
            return Ok(Vec::new());
        }
        self.runtime.block_on(join::join_ordered(lifted))
    }
}
