//! Runtime configuration for [`Synchronizer`](crate::Synchronizer).

use serde::{Deserialize, Serialize};

/// Which tokio scheduler drives the joined computations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuntimeFlavor {
    /// Single-threaded cooperative scheduler on the calling thread.
    #[default]
    CurrentThread,
    /// Work-stealing pool; spawned computations run between joins too.
    MultiThread,
}

/// Configuration for the runtime owned by a `Synchronizer`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    #[serde(default)]
    pub flavor: RuntimeFlavor,
    /// Worker count for `multi_thread` (None = one per core). Ignored otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub worker_threads: Option<usize>,
    #[serde(default = "default_thread_name")]
    pub thread_name: String,
}

fn default_thread_name() -> String {
    "keeperkit-sync".into()
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            flavor: RuntimeFlavor::CurrentThread,
            worker_threads: None,
            thread_name: default_thread_name(),
        }
    }
}

impl SyncConfig {
    /// A multi-threaded config with `workers` worker threads.
    pub fn multi_thread(workers: usize) -> Self {
        Self {
            flavor: RuntimeFlavor::MultiThread,
            worker_threads: Some(workers),
            ..Self::default()
        }
    }

    /// Build a tokio runtime with all drivers enabled.
    pub fn build_runtime(&self) -> std::io::Result<tokio::runtime::Runtime> {
        let mut builder = match self.flavor {
            RuntimeFlavor::CurrentThread => tokio::runtime::Builder::new_current_thread(),
            RuntimeFlavor::MultiThread => {
                let mut builder = tokio::runtime::Builder::new_multi_thread();
                if let Some(workers) = self.worker_threads {
                    if workers == 0 {
                        return Err(std::io::Error::new(
                            std::io::ErrorKind::InvalidInput,
                            "worker_threads must be at least 1",
                        ));
                    }
                    builder.worker_threads(workers);
                }
                builder
            }
        };
        builder.enable_all().thread_name(&self.thread_name).build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_from_empty_json() {
        let cfg: SyncConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.flavor, RuntimeFlavor::CurrentThread);
        assert_eq!(cfg.worker_threads, None);
        assert_eq!(cfg.thread_name, "keeperkit-sync");
    }

    #[test]
    fn multi_thread_from_json() {
        let cfg: SyncConfig =
            serde_json::from_str(r#"{"flavor":"multi_thread","worker_threads":2}"#).unwrap();
        assert_eq!(cfg.flavor, RuntimeFlavor::MultiThread);
        assert_eq!(cfg.worker_threads, Some(2));
        assert!(cfg.build_runtime().is_ok());
    }

    #[test]
    fn zero_workers_rejected() {
        let err = SyncConfig::multi_thread(0).build_runtime().unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
    }
}
