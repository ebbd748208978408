//! # keeperkit-sync
//!
//! Blocking joins over batches of in-flight async computations. Keeper loops
//! are mostly synchronous but fire several independent async calls per tick;
//! this crate lets the synchronous side wait for all of them:
//!
//! - [`synchronize`]: join a batch of futures on a throwaway single-threaded
//!   runtime, results in input order
//! - [`Synchronizer`]: owns a runtime; `spawn` computations so they are in
//!   flight, then `synchronize` their handles
//! - [`SyncConfig`]: runtime flavor and thread naming
//! - [`SyncError`]: which computation failed and why
//!
//! A failure aborts the join as soon as it is observed. Computations that
//! have not finished yet are not cancelled explicitly.
//!
//! ```rust
//! let results = keeperkit_sync::synchronize([1, 2].map(|n| async move {
//!     Ok::<_, std::io::Error>(n)
//! }))
//! .unwrap();
//! assert_eq!(results, vec![1, 2]);
//! ```

pub mod config;
pub mod error;
mod join;
pub mod synchronizer;

pub use config::{RuntimeFlavor, SyncConfig};
pub use error::SyncError;
pub use synchronizer::{synchronize, Synchronizer};
