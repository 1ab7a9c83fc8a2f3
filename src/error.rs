//! Error type shared by the configuration layer and the menu tree.

use sea_orm::DbErr;

/// Errors raised by this crate.
///
/// Constraint violations (a missing foreign-key target, a duplicate primary
/// key, deleting a referenced row) are not translated: they arrive from the
/// storage engine as a [`DbErr`] and are carried in [`Error::Database`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Any error reported by Sea-ORM or the underlying driver.
    #[error("database error: {0}")]
    Database(#[from] DbErr),

    /// A menu item with this id is already part of the tree.
    #[error("menu item {0} is already in the tree")]
    DuplicateMenuItem(i32),

    /// A configuration value is missing or malformed.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, Error>;
