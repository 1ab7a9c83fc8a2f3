//! Movie session entity: one scheduled screening.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "movie_session")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "movieId")]
    pub movie_id: i32,
    #[sea_orm(column_name = "showRoomId")]
    pub show_room_id: i32,
    /// Start of the screening.
    pub time: DateTime,
    /// Base ticket price for this screening.
    pub price: Decimal,
    #[sea_orm(column_name = "createdAt")]
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::movie::Entity",
        from = "Column::MovieId",
        to = "super::movie::Column::Id"
    )]
    Movie,
    #[sea_orm(
        belongs_to = "super::show_room::Entity",
        from = "Column::ShowRoomId",
        to = "super::show_room::Column::Id"
    )]
    ShowRoom,
    #[sea_orm(has_many = "super::booking::Entity")]
    Booking,
}

impl Related<super::movie::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Movie.def()
    }
}

impl Related<super::show_room::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ShowRoom.def()
    }
}

impl Related<super::booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Booking.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
