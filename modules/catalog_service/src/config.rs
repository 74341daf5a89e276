//! Configuration for catalog service module

use crate::SeedModeDto;
use serde::{Deserialize, Serialize};

/// Catalog service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Indentation width of JSON response bodies
    #[serde(default = "default_json_indent")]
    pub json_indent: usize,

    /// Seed mode used when `/seed` is called without `mode`
    #[serde(default = "default_seed_mode")]
    pub default_seed_mode: SeedModeDto,

    /// Apply migrations when the module starts
    #[serde(default)]
    pub migrate_on_start: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            json_indent: default_json_indent(),
            default_seed_mode: default_seed_mode(),
            migrate_on_start: false,
        }
    }
}

fn default_json_indent() -> usize {
    4
}

fn default_seed_mode() -> SeedModeDto {
    SeedModeDto::Append
}
