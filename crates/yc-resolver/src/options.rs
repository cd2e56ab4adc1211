//! Resolver options
//!
//! Options are usually built in code, but can also be read from a TOML file:
//!
//! ```toml
//! side-effect = true
//! exclude = ["Button", { pattern = "^Icon" }]
//! ```

use crate::error::ConfigError;
use crate::exclude::{Exclude, RawExclude};
use serde::Deserialize;
use std::path::Path;

/// Configuration supplied once, when the resolver is built
#[derive(Debug, Clone)]
pub struct ResolverOptions {
    /// Components (short identifiers) left to other resolvers
    pub exclude: Option<Exclude>,

    /// Emit stylesheet side effects (default: true)
    pub side_effect: bool,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            exclude: None,
            side_effect: true,
        }
    }
}

/// Options as written in a file
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct OptionsFile {
    #[serde(default)]
    exclude: Option<RawExclude>,

    #[serde(default = "default_side_effect")]
    side_effect: bool,
}

fn default_side_effect() -> bool {
    true
}

impl ResolverOptions {
    /// Create default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the exclusion rule
    pub fn with_exclude(mut self, exclude: impl Into<Exclude>) -> Self {
        self.exclude = Some(exclude.into());
        self
    }

    /// Enable or disable stylesheet side effects
    pub fn with_side_effect(mut self, side_effect: bool) -> Self {
        self.side_effect = side_effect;
        self
    }

    /// Load options from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parse options from a TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let file: OptionsFile = toml::from_str(content)?;
        let exclude = file.exclude.map(RawExclude::compile).transpose()?;
        Ok(Self {
            exclude,
            side_effect: file.side_effect,
        })
    }

    /// Append an exclusion, keeping any already configured
    pub fn add_exclude(&mut self, exclude: impl Into<Exclude>) {
        let exclude = exclude.into();
        self.exclude = Some(match self.exclude.take() {
            None => exclude,
            Some(Exclude::Any(mut items)) => {
                items.push(exclude);
                Exclude::Any(items)
            }
            Some(existing) => Exclude::Any(vec![existing, exclude]),
        });
    }
}
