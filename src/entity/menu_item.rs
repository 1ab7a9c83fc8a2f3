//! Menu item entity.
//!
//! Navigation menus are stored as an adjacency list: every row carries an
//! optional `parentId` pointing at another row of the same table. Children are
//! never stored; they are whatever rows point back at a given id.
//!
//! Nothing prevents a parent chain from looping back on itself. Code walking
//! the hierarchy should go through [`MenuTree`](crate::MenuTree), which guards
//! against revisiting a node.

use sea_orm::entity::prelude::*;
use sea_orm::{QueryOrder, Set};

/// A single node of a navigation menu.
///
/// # Database Schema
///
/// | Column    | Type                                 |
/// |-----------|--------------------------------------|
/// | id        | INTEGER (PK)                         |
/// | name      | VARCHAR                              |
/// | url       | VARCHAR                              |
/// | parentId  | INTEGER NULL (FK → menu_item.id)     |
/// | createdAt | DATETIME                             |
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "menu_item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub url: String,
    /// `None` for a top-level item.
    #[sea_orm(column_name = "parentId")]
    pub parent_id: Option<i32>,
    /// Set on insert when the caller leaves it unset; the column has no
    /// database default.
    #[sea_orm(column_name = "createdAt")]
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(belongs_to = "Entity", from = "Column::ParentId", to = "Column::Id")]
    Parent,
}

/// Follows `parentId` from a child to its parent.
pub struct ParentLink;

impl Linked for ParentLink {
    type FromEntity = Entity;
    type ToEntity = Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![Relation::Parent.def()]
    }
}

impl Model {
    /// Loads the parent row, or `None` for a top-level item.
    pub async fn parent<C>(&self, db: &C) -> Result<Option<Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        match self.parent_id {
            Some(parent_id) => Entity::find_by_id(parent_id).one(db).await,
            None => Ok(None),
        }
    }

    /// Loads every row whose `parentId` is this item's id, ordered by id.
    pub async fn children<C>(&self, db: &C) -> Result<Vec<Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        Entity::find()
            .filter(Column::ParentId.eq(self.id))
            .order_by_asc(Column::Id)
            .all(db)
            .await
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if insert && self.created_at.is_not_set() {
            self.created_at = Set(chrono::Utc::now().naive_utc());
        }
        Ok(self)
    }
}
