//! Tracing / logging initialisation helpers.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError, EnvFilter,
};

/// Log level per component.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Global default level: "trace" | "debug" | "info" | "warn" | "error"
    #[serde(default = "default_level")]
    pub level: String,
    /// Override per component: crate name → level
    #[serde(default)]
    pub components: BTreeMap<String, String>,
    /// Emit JSON structured logs (true) or human-readable text (false)
    #[serde(default)]
    pub json: bool,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            components: BTreeMap::new(),
            json: false,
        }
    }
}

impl LogConfig {
    /// Set the level for one component, e.g. `("keeperkit-sync", "debug")`.
    pub fn component(mut self, name: impl Into<String>, level: impl Into<String>) -> Self {
        self.components.insert(name.into(), level.into());
        self
    }

    /// Render the `EnvFilter` directive string: "info,keeperkit_sync=debug".
    pub fn directives(&self) -> String {
        let mut directives = self.level.clone();
        for (component, level) in &self.components {
            directives.push_str(&format!(",{}={}", component.replace('-', "_"), level));
        }
        directives
    }

    fn filter(&self) -> EnvFilter {
        EnvFilter::try_new(self.directives()).unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

/// Install the global subscriber, failing if one is already set.
///
/// An unparsable directive string falls back to `info`.
pub fn try_init_tracing(config: &LogConfig) -> Result<(), TryInitError> {
    let registry = tracing_subscriber::registry().with(config.filter());
    if config.json {
        registry.with(fmt::layer().json()).try_init()
    } else {
        registry.with(fmt::layer()).try_init()
    }
}

/// Initialise tracing with the given log config.
/// Should be called once at application startup; later calls are no-ops.
pub fn init_tracing(config: &LogConfig) {
    let _ = try_init_tracing(config);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_directives() {
        assert_eq!(LogConfig::default().directives(), "info");
    }

    #[test]
    fn component_names_are_normalised() {
        let cfg = LogConfig::default()
            .component("keeperkit-sync", "debug")
            .component("keeperkit-codec", "warn");
        assert_eq!(
            cfg.directives(),
            "info,keeperkit_codec=warn,keeperkit_sync=debug"
        );
    }

    #[test]
    fn deserialize_with_defaults() {
        let cfg: LogConfig = serde_json::from_str(r#"{"json":true}"#).unwrap();
        assert_eq!(cfg.level, "info");
        assert!(cfg.components.is_empty());
        assert!(cfg.json);
    }

    #[test]
    fn second_init_fails() {
        let cfg = LogConfig::default();
        let _ = try_init_tracing(&cfg);
        assert!(try_init_tracing(&cfg).is_err());
        init_tracing(&cfg);
    }
}
