//! Configuration schema definitions.
//!
//! This module defines the route file structure.
//! All types derive Serde traits for deserialization from TOML.

use serde::{Deserialize, Serialize};

use crate::routing::RouterBuilder;

/// Root configuration for the router.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RouterConfig {
    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Route definitions mapping patterns to endpoints.
    pub routes: Vec<RouteConfig>,
}

impl RouterConfig {
    /// Insert every configured route into `builder`, in file order.
    pub fn apply(&self, builder: &mut RouterBuilder) {
        for route in &self.routes {
            builder.insert(&route.pattern, &route.endpoint);
        }
        tracing::debug!(routes = self.routes.len(), "Route file applied");
    }
}

/// One pattern → endpoint mapping.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct RouteConfig {
    /// Slash-separated pattern; a segment equal to `X` is a wildcard.
    pub pattern: String,

    /// Opaque endpoint identifier returned on match.
    pub endpoint: String,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
        }
    }
}
