//! Repository trait definitions for storage operations.
//!
//! This module provides a collection of focused repository traits that abstract
//! event storage. By splitting responsibilities across multiple traits,
//! implementations can be more focused and testable.
//!
//! # Module Organization
//!
//! - [`error`]: Error types for repository operations
//! - [`event`]: CRUD and query operations for sampling events
//! - [`reference`]: Species reference-table access
//!
//! # Trait Composition
//!
//! A complete repository implementation implements both traits:
//!
//! ```ignore
//! impl EventRepository for MyRepo { ... }
//! impl ReferenceRepository for MyRepo { ... }
//! ```
//!
//! # Convenience Trait Bound
//!
//! For functions that need all repository capabilities, use the [`FullRepository`] trait bound:
//!
//! ```ignore
//! async fn my_service<R: FullRepository>(repo: &R) -> Result<()> {
//!     // Can use any repository method
//!     let info = repo.store_event(&event).await?;
//!     let table = repo.species_table().await?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod event;
pub mod reference;

// Re-export error types
pub use error::{ErrorContext, RepositoryError, RepositoryResult};

// Re-export all traits
pub use event::EventRepository;
pub use reference::ReferenceRepository;

/// Composite trait bound for a complete repository implementation.
///
/// This trait is automatically implemented for any type that implements
/// both repository traits. Use this as a convenient bound when you
/// need access to all repository operations.
///
/// # Example
///
/// ```ignore
/// async fn summarize_event<R: FullRepository>(
///     repo: &R,
///     event_id: EventId,
/// ) -> RepositoryResult<()> {
///     let event = repo.get_event(event_id).await?;
///     let table = repo.species_table().await?;
///     Ok(())
/// }
/// ```
pub trait FullRepository: EventRepository + ReferenceRepository {}

// Blanket implementation: any type implementing both traits automatically implements FullRepository
impl<T> FullRepository for T where T: EventRepository + ReferenceRepository {}

// Debug for the trait object so containers like `Result<Arc<dyn FullRepository>, _>`
// can be debug-formatted (e.g. by `unwrap_err`).
impl std::fmt::Debug for dyn FullRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FullRepository").finish_non_exhaustive()
    }
}
