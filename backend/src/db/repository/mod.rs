//! Repository trait definitions for database operations.
//!
//! # Module Organization
//!
//! - [`error`]: Error types for repository operations
//! - [`contact`]: CRUD operations on the contacts table
//!
//! Handlers and services receive the repository as an explicit
//! `Arc<dyn ContactRepository>` handle; there is no process-wide instance.

pub mod contact;
pub mod error;

pub use contact::ContactRepository;
pub use error::{ErrorContext, RepositoryError, RepositoryResult};
