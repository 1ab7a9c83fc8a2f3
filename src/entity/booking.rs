//! Booking entity, the fact table of the schema.
//!
//! A booking ties a user to one seating in one movie session. The schema only
//! guarantees that all three rows exist; it does not stop two bookings from
//! claiming the same seating for the same session.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "booking")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "userId")]
    pub user_id: i32,
    #[sea_orm(column_name = "movieSessionId")]
    pub movie_session_id: i32,
    #[sea_orm(column_name = "seatingId")]
    pub seating_id: i32,
    /// Price charged, as computed by the caller at booking time.
    #[sea_orm(column_name = "totalPrice")]
    pub total_price: Decimal,
    #[sea_orm(column_name = "createdAt")]
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::movie_session::Entity",
        from = "Column::MovieSessionId",
        to = "super::movie_session::Column::Id"
    )]
    MovieSession,
    #[sea_orm(
        belongs_to = "super::seating::Entity",
        from = "Column::SeatingId",
        to = "super::seating::Column::Id"
    )]
    Seating,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::movie_session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MovieSession.def()
    }
}

impl Related<super::seating::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Seating.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
