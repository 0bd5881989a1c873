//! Reference-data repository trait.
//!
//! Reference data covers the species table: codes, common names,
//! length-weight regression coefficients, and size-category thresholds.
//! The table is read-only at runtime; deployments swap it out through
//! configuration, not through the repository.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::SpeciesTable;

/// Repository trait for species reference data.
///
/// The species table changes rarely and is read on every metrics request,
/// so implementations may cache it freely.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait ReferenceRepository: Send + Sync {
    /// Fetch the full species reference table.
    ///
    /// # Returns
    /// * `Ok(SpeciesTable)` - All known species entries
    /// * `Err(RepositoryError)` - If the operation fails
    async fn species_table(&self) -> RepositoryResult<SpeciesTable>;
}
