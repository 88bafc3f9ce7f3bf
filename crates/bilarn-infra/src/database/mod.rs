//! Blog post persistence: SeaORM/Postgres and in-memory stores.

mod connections;
mod memory;

#[cfg(feature = "postgres")]
mod postgres_base;
#[cfg(feature = "postgres")]
pub mod postgres_repo;

#[cfg(feature = "postgres")]
pub mod entity;

pub use connections::DatabaseConfig;
pub use memory::InMemoryBlogPostRepository;

#[cfg(feature = "postgres")]
pub use connections::DbHandle;
#[cfg(feature = "postgres")]
pub use postgres_repo::PostgresBlogPostRepository;

#[cfg(feature = "postgres")]
#[cfg(test)]
mod tests;
