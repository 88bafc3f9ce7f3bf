//! # Bilarn Core
//!
//! The domain layer of the Bilarn blog API.
//! Blog posts, the ports that storage must implement, and Markdown rendering.
//! No database or filesystem code lives here.

pub mod domain;
pub mod error;
pub mod markdown;
pub mod ports;

pub use error::{BlobError, DomainError, RepoError};
