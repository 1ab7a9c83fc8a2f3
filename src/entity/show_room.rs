//! Show room entity.

use sea_orm::entity::prelude::*;

/// A screening hall.
///
/// `total_remaining_seats` is plain data: nothing in this crate decrements it
/// when a booking is made.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "show_room")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_name = "totalSeats")]
    pub total_seats: i32,
    #[sea_orm(column_name = "totalRemainingSeats")]
    pub total_remaining_seats: i32,
    #[sea_orm(column_name = "createdAt")]
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::seating::Entity")]
    Seating,
    #[sea_orm(has_many = "super::movie_session::Entity")]
    MovieSession,
}

impl Related<super::seating::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Seating.def()
    }
}

impl Related<super::movie_session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MovieSession.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
