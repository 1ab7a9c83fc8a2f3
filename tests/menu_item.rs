#![cfg(feature = "migration")]

mod common;

use cinema_seaorm_schema::entity::menu_item::{self, ParentLink};
use cinema_seaorm_schema::MenuTree;
use common::migrated_db;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, Set};

async fn add_item(
    db: &DatabaseConnection,
    name: &str,
    parent_id: Option<i32>,
) -> Result<menu_item::Model, sea_orm::DbErr> {
    menu_item::ActiveModel {
        name: Set(name.to_owned()),
        url: Set(format!("/{}", name.to_lowercase())),
        parent_id: Set(parent_id),
        ..Default::default()
    }
    .insert(db)
    .await
}

#[tokio::test]
async fn top_level_item_has_no_parent() {
    let db = migrated_db().await;
    let home = add_item(&db, "Home", None).await.unwrap();

    assert_eq!(home.parent_id, None);
    assert_eq!(home.parent(&db).await.unwrap(), None);
    assert!(home.children(&db).await.unwrap().is_empty());
}

#[tokio::test]
async fn child_points_at_parent_and_is_listed_under_it() {
    let db = migrated_db().await;
    let movies = add_item(&db, "Movies", None).await.unwrap();
    let now_showing = add_item(&db, "NowShowing", Some(movies.id)).await.unwrap();
    let coming_soon = add_item(&db, "ComingSoon", Some(movies.id)).await.unwrap();

    assert_eq!(now_showing.parent(&db).await.unwrap(), Some(movies.clone()));
    assert_eq!(
        movies.children(&db).await.unwrap(),
        vec![now_showing.clone(), coming_soon.clone()]
    );

    let linked = coming_soon
        .find_linked(ParentLink)
        .one(&db)
        .await
        .unwrap();
    assert_eq!(linked, Some(movies));
}

#[tokio::test]
async fn created_at_is_filled_on_insert() {
    let db = migrated_db().await;
    let before = chrono::Utc::now().naive_utc() - chrono::Duration::seconds(1);
    let item = add_item(&db, "Home", None).await.unwrap();

    assert!(item.created_at >= before);

    let stored = menu_item::Entity::find_by_id(item.id)
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.created_at, item.created_at);
}

#[tokio::test]
async fn parent_must_exist() {
    let db = migrated_db().await;
    let result = add_item(&db, "Orphan", Some(42)).await;
    assert!(result.is_err());
    assert!(menu_item::Entity::find().all(&db).await.unwrap().is_empty());
}

#[tokio::test]
async fn tree_loads_from_the_database() {
    let db = migrated_db().await;
    let home = add_item(&db, "Home", None).await.unwrap();
    let movies = add_item(&db, "Movies", None).await.unwrap();
    let now_showing = add_item(&db, "NowShowing", Some(movies.id)).await.unwrap();
    let imax = add_item(&db, "Imax", Some(now_showing.id)).await.unwrap();

    let tree = MenuTree::load(&db).await.unwrap();

    assert_eq!(tree.len(), 4);
    let order: Vec<_> = tree.depth_first().iter().map(|m| m.id).collect();
    assert_eq!(order, vec![home.id, movies.id, now_showing.id, imax.id]);

    assert_eq!(tree.parent(imax.id), Some(&now_showing));
    let ancestors: Vec<_> = tree.ancestors(imax.id).iter().map(|m| m.id).collect();
    assert_eq!(ancestors, vec![now_showing.id, movies.id]);

    let children: Vec<_> = tree.children(movies.id).cloned().collect();
    assert_eq!(children, movies.children(&db).await.unwrap());
}
