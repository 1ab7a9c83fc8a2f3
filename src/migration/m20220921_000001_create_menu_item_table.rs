//! Creates the self-referencing `menu_item` table.
//!
//! Forward-only like the cinema migration: `down` leaves the table in place.

use sea_orm_migration::prelude::*;
use tracing::info;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        info!("creating table menu_item");
        manager
            .create_table(
                Table::create()
                    .table(MenuItem::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MenuItem::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(MenuItem::Name).string().not_null())
                    .col(ColumnDef::new(MenuItem::Url).string().not_null())
                    .col(
                        ColumnDef::new(MenuItem::ParentId)
                            .integer()
                            .null()
                            .default(Value::Int(None)),
                    )
                    .col(ColumnDef::new(MenuItem::CreatedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_menu_item_parent_id")
                            .from(MenuItem::Table, MenuItem::ParentId)
                            .to(MenuItem::Table, MenuItem::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, _manager: &SchemaManager) -> Result<(), DbErr> {
        info!("menu_item migration is forward-only, nothing to revert");
        Ok(())
    }
}

#[derive(DeriveIden)]
enum MenuItem {
    Table,
    Id,
    Name,
    Url,
    #[sea_orm(iden = "parentId")]
    ParentId,
    #[sea_orm(iden = "createdAt")]
    CreatedAt,
}
