use sea_orm::entity::prelude::*;

/// Seat category such as "VIP" or "couple".
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "seat_type")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_name = "createdAt")]
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::seating::Entity")]
    Seating,
}

impl Related<super::seating::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Seating.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
