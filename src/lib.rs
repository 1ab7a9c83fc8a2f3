//! # Cinema schema for Sea-ORM
//!
//! Storage layer of a single-cinema booking system, written against
//! [Sea-ORM](https://crates.io/crates/sea-orm).
//!
//! The crate provides:
//!
//! - entity models for users, movies, show rooms, seat types, seatings,
//!   movie sessions and bookings ([`entity`]);
//! - a versioned, forward-only migration that creates those tables and their
//!   foreign keys in dependency order ([`migration`], behind the default
//!   `migration` feature);
//! - a self-referential `menu_item` entity and [`MenuTree`], an in-memory
//!   arena for walking the menu hierarchy;
//! - [`DatabaseConfig`] for building a connection pool from the environment.
//!
//! Booking rules (seat locking, overbooking checks, price calculation) are not
//! part of this crate. The schema only guarantees that referenced rows exist.
//!
//! ## Quick Start
//!
//! ```no_run
//! use cinema_seaorm_schema::migration::{Migrator, MigratorTrait};
//! use cinema_seaorm_schema::{DatabaseConfig, MenuTree};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let conn = DatabaseConfig::from_env()?.connect().await?;
//!
//! // Create every table that is still missing
//! Migrator::up(&conn, None).await?;
//!
//! // Walk the navigation menu
//! let tree = MenuTree::load(&conn).await?;
//! for item in tree.depth_first() {
//!     let depth = tree.ancestors(item.id).len();
//!     println!("{}{} -> {}", "  ".repeat(depth), item.name, item.url);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - `postgres` (default): PostgreSQL driver
//! - `sqlite`: SQLite driver
//! - `migration` (default): the [`migration`] module

mod config;
pub mod entity;
mod error;
mod menu_tree;
#[cfg(feature = "migration")]
pub mod migration;

pub use config::DatabaseConfig;
pub use error::{Error, Result};
pub use menu_tree::MenuTree;
