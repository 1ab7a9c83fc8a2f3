//! In-memory menu hierarchy.
//!
//! [`MenuTree`] is an arena of [`menu_item::Model`] rows keyed by id. Parent
//! links live on the rows themselves; children are looked up through a
//! separate `parent id -> child ids` index, so no node owns another and the
//! structure never holds reference cycles even when the data does.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use sea_orm::{ConnectionTrait, EntityTrait, QueryOrder};
use tracing::debug;

use crate::entity::menu_item::{self, Entity as MenuItemEntity};
use crate::error::{Error, Result};

/// An adjacency-list tree of menu items.
///
/// Siblings are always returned in ascending id order. A node whose parent id
/// is not present in the arena is neither a root nor anybody's child; it can
/// still be fetched with [`get`](Self::get).
///
/// ```
/// use cinema_seaorm_schema::{entity::menu_item, MenuTree};
///
/// # fn item(id: i32, parent_id: Option<i32>) -> menu_item::Model {
/// #     menu_item::Model {
/// #         id,
/// #         name: format!("item {id}"),
/// #         url: format!("/{id}"),
/// #         parent_id,
/// #         created_at: chrono::NaiveDateTime::default(),
/// #     }
/// # }
/// let tree = MenuTree::from_models([item(1, None), item(2, Some(1)), item(3, Some(1))])?;
///
/// assert_eq!(tree.parent(2).map(|p| p.id), Some(1));
/// assert_eq!(tree.children(1).map(|c| c.id).collect::<Vec<_>>(), vec![2, 3]);
/// # Ok::<(), cinema_seaorm_schema::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct MenuTree {
    nodes: HashMap<i32, menu_item::Model>,
    children: BTreeMap<Option<i32>, BTreeSet<i32>>,
}

impl MenuTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a tree from rows in any order.
    pub fn from_models<I>(models: I) -> Result<Self>
    where
        I: IntoIterator<Item = menu_item::Model>,
    {
        let mut tree = Self::new();
        for model in models {
            tree.insert(model)?;
        }
        Ok(tree)
    }

    /// Loads every `menu_item` row into a new tree.
    pub async fn load<C>(db: &C) -> Result<Self>
    where
        C: ConnectionTrait,
    {
        let models = MenuItemEntity::find()
            .order_by_asc(menu_item::Column::Id)
            .all(db)
            .await?;
        debug!(count = models.len(), "loaded menu items");
        Self::from_models(models)
    }

    /// Adds a node. Its parent does not need to be present yet.
    pub fn insert(&mut self, model: menu_item::Model) -> Result<()> {
        if self.nodes.contains_key(&model.id) {
            return Err(Error::DuplicateMenuItem(model.id));
        }
        self.children
            .entry(model.parent_id)
            .or_default()
            .insert(model.id);
        self.nodes.insert(model.id, model);
        Ok(())
    }

    pub fn get(&self, id: i32) -> Option<&menu_item::Model> {
        self.nodes.get(&id)
    }

    pub fn contains(&self, id: i32) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The parent of `id`, if `id` is present and has a parent in the arena.
    pub fn parent(&self, id: i32) -> Option<&menu_item::Model> {
        self.get(id)?
            .parent_id
            .and_then(|parent_id| self.nodes.get(&parent_id))
    }

    /// Direct children of `id`.
    pub fn children(&self, id: i32) -> impl Iterator<Item = &menu_item::Model> + '_ {
        self.child_ids(Some(id))
    }

    /// Nodes without a parent.
    pub fn roots(&self) -> impl Iterator<Item = &menu_item::Model> + '_ {
        self.child_ids(None)
    }

    /// The chain of parents of `id`, nearest first.
    ///
    /// The walk ends at a root, at a parent missing from the arena, or at the
    /// first id already seen, so a cyclic chain yields each member once.
    pub fn ancestors(&self, id: i32) -> Vec<&menu_item::Model> {
        let mut seen = HashSet::from([id]);
        let mut chain = Vec::new();
        let mut current = self.parent(id);
        while let Some(node) = current {
            if !seen.insert(node.id) {
                break;
            }
            chain.push(node);
            current = self.parent(node.id);
        }
        chain
    }

    /// Pre-order walk from every root. Each node is yielded at most once;
    /// nodes caught in a parent cycle are unreachable from a root and are
    /// skipped.
    pub fn depth_first(&self) -> Vec<&menu_item::Model> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut seen = HashSet::new();
        let mut stack: Vec<&menu_item::Model> = self.roots().collect();
        stack.reverse();

        while let Some(node) = stack.pop() {
            if !seen.insert(node.id) {
                continue;
            }
            order.push(node);
            let before = stack.len();
            stack.extend(self.children(node.id));
            stack[before..].reverse();
        }
        order
    }

    fn child_ids(&self, parent_id: Option<i32>) -> impl Iterator<Item = &menu_item::Model> + '_ {
        self.children
            .get(&parent_id)
            .into_iter()
            .flatten()
            .filter_map(|id| self.nodes.get(id))
    }
}
