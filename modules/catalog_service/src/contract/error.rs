//! Contract error types for catalog service
//!
//! Store-level failures are translated into these kinds before they leave
//! the domain layer; none of them carries driver detail.

use thiserror::Error;

/// Catalog service domain errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// No row matches the requested identifier
    #[error("{resource} not found: {id}")]
    NotFound {
        /// Resource type (product, category)
        resource: &'static str,
        /// Identifier as received from the caller
        id: String,
    },

    /// Schema migration was rejected by the store
    #[error("failed to migrate {stage}")]
    Migration {
        /// Migration stage that failed
        stage: &'static str,
    },

    /// A seed insert failed; earlier inserts of the same run stay committed
    #[error("failed to seed {stage}")]
    Seed {
        /// Seed stage that failed (categories, products)
        stage: &'static str,
    },

    /// A read query failed
    #[error("store error")]
    Store,
}

impl CatalogError {
    pub(crate) fn not_found(resource: &'static str, id: &str) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }
}
