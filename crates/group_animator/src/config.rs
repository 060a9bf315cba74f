// SPDX-License-Identifier: MIT OR Apache-2.0
//! Animator configuration.
//!
//! Stored as RON, e.g.
//!
//! ```ron
//! (
//!     default_duration_ms: 500,
//!     default_delay_ms: 0,
//!     collision: KeepFirst,
//! )
//! ```

use crate::error::Result;
use crate::timeline::CollisionPolicy;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default animation duration when none is configured (ms)
pub const DEFAULT_DURATION_MS: u32 = 500;

/// Default start delay when none is configured (ms)
pub const DEFAULT_DELAY_MS: u32 = 0;

/// Defaults applied by the builder when a registration omits timing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimatorConfig {
    /// Duration used when a registration names none (ms)
    pub default_duration_ms: u32,
    /// Start delay used when a registration names none (ms)
    pub default_delay_ms: u32,
    /// How entries with an identical key are resolved
    pub collision: CollisionPolicy,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            default_duration_ms: DEFAULT_DURATION_MS,
            default_delay_ms: DEFAULT_DELAY_MS,
            collision: CollisionPolicy::KeepFirst,
        }
    }
}

impl AnimatorConfig {
    /// Parse from a RON string
    pub fn from_ron_str(source: &str) -> Result<Self> {
        Ok(ron::from_str(source)?)
    }

    /// Load from a RON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let config = Self::from_ron_str(&source)?;
        tracing::info!("Loaded animator config from {:?}", path);
        Ok(config)
    }

    /// Serialize to pretty RON
    pub fn to_ron_string(&self) -> Result<String> {
        Ok(ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnimatorError;

    #[test]
    fn test_default_config() {
        let config = AnimatorConfig::default();
        assert_eq!(config.default_duration_ms, 500);
        assert_eq!(config.default_delay_ms, 0);
        assert_eq!(config.collision, CollisionPolicy::KeepFirst);
    }

    #[test]
    fn test_serialization() {
        let config = AnimatorConfig {
            default_duration_ms: 1000,
            default_delay_ms: 250,
            collision: CollisionPolicy::KeepLast,
        };
        let ron_str = config.to_ron_string().unwrap();
        let loaded = AnimatorConfig::from_ron_str(&ron_str).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = AnimatorConfig::from_ron_str("(default_delay_ms: 100)").unwrap();
        assert_eq!(config.default_duration_ms, DEFAULT_DURATION_MS);
        assert_eq!(config.default_delay_ms, 100);
    }

    #[test]
    fn test_parse_error() {
        let err = AnimatorConfig::from_ron_str("(default_delay_ms: \"soon\")").unwrap_err();
        assert!(matches!(err, AnimatorError::ConfigParse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = AnimatorConfig::load("/nonexistent/animator.ron").unwrap_err();
        assert!(matches!(err, AnimatorError::Io(_)));
    }
}
