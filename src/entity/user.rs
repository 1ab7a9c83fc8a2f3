//! User entity.
//!
//! Administrators are ordinary users with `is_admin` set; there is no separate
//! role table.

use sea_orm::entity::prelude::*;

/// A customer or administrator account.
///
/// # Database Schema
///
/// | Column    | Type              |
/// |-----------|-------------------|
/// | id        | INTEGER (PK)      |
/// | firstName | VARCHAR           |
/// | lastName  | VARCHAR           |
/// | email     | VARCHAR           |
/// | password  | VARCHAR           |
/// | isAdmin   | BOOLEAN           |
/// | createdAt | TIMESTAMP         |
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "firstName")]
    pub first_name: String,
    #[sea_orm(column_name = "lastName")]
    pub last_name: String,
    pub email: String,
    /// Stored as given; hashing is the caller's concern.
    pub password: String,
    #[sea_orm(column_name = "isAdmin")]
    pub is_admin: bool,
    #[sea_orm(column_name = "createdAt")]
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::booking::Entity")]
    Booking,
}

impl Related<super::booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Booking.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
