//! Seating entity.
//!
//! A seating is a physical seat slot in one show room. It is configured once
//! per room and reused by every movie session shown there.

use sea_orm::entity::prelude::*;

/// A seat within a show room, typed by a [`seat_type`](super::seat_type).
///
/// # Database Schema
///
/// | Column     | Type                          |
/// |------------|-------------------------------|
/// | id         | INTEGER (PK)                  |
/// | code       | VARCHAR                       |
/// | showRoomId | INTEGER (FK → show_room.id)   |
/// | seatTypeId | INTEGER (FK → seat_type.id)   |
/// | addOnPrice | DECIMAL                       |
/// | createdAt  | TIMESTAMP                     |
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "seating")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Label printed on the ticket, e.g. "F12".
    pub code: String,
    #[sea_orm(column_name = "showRoomId")]
    pub show_room_id: i32,
    #[sea_orm(column_name = "seatTypeId")]
    pub seat_type_id: i32,
    /// Premium charged on top of the session price.
    #[sea_orm(column_name = "addOnPrice")]
    pub add_on_price: Decimal,
    #[sea_orm(column_name = "createdAt")]
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::show_room::Entity",
        from = "Column::ShowRoomId",
        to = "super::show_room::Column::Id"
    )]
    ShowRoom,
    #[sea_orm(
        belongs_to = "super::seat_type::Entity",
        from = "Column::SeatTypeId",
        to = "super::seat_type::Column::Id"
    )]
    SeatType,
    #[sea_orm(has_many = "super::booking::Entity")]
    Booking,
}

impl Related<super::show_room::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ShowRoom.def()
    }
}

impl Related<super::seat_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SeatType.def()
    }
}

impl Related<super::booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Booking.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
