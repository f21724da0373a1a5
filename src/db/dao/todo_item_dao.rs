use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationDef, Select, Set, TransactionTrait,
    sea_query::{Expr, ExprTrait, Query, SelectStatement},
};

use super::{DaoBase, DaoLayerError, DaoResult};
use crate::db::entities::prelude::{ListItem, TodoItem, UserList};
use crate::db::entities::{list_item, todo_item, user_list};

const ENTITY: &str = "todo_item";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodoItem {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTodoItem {
    pub title: Option<String>,
    pub description: Option<String>,
    pub done: Option<bool>,
}

impl UpdateTodoItem {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.done.is_none()
    }
}

/// Items reachable through `list_items` and the owner's `user_lists` rows.
#[derive(Clone)]
pub struct TodoItemDao {
    db: DatabaseConnection,
}

impl DaoBase for TodoItemDao {
    fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl TodoItemDao {
    /// Inserts the item (not done) and attaches it to `list_id` in one transaction.
    /// Callers check list ownership first.
    pub async fn create(&self, list_id: i32, input: NewTodoItem) -> DaoResult<i32> {
        let txn = self.db.begin().await?;

        let item = todo_item::ActiveModel {
            title: Set(input.title),
            description: Set(input.description),
            done: Set(false),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        ListItem::insert(list_item::ActiveModel {
            list_id: Set(list_id),
            item_id: Set(item.id),
            ..Default::default()
        })
        .exec_without_returning(&txn)
        .await?;

        txn.commit().await?;
        Ok(item.id)
    }

    pub async fn get_all(&self, owner_id: i32, list_id: i32) -> DaoResult<Vec<todo_item::Model>> {
        let items = owned_items(owner_id)
            .filter(list_item::Column::ListId.eq(list_id))
            .order_by_asc(todo_item::Column::Id)
            .all(self.db())
            .await?;
        Ok(items)
    }

    pub async fn get_by_id(&self, owner_id: i32, item_id: i32) -> DaoResult<todo_item::Model> {
        owned_items(owner_id)
            .filter(todo_item::Column::Id.eq(item_id))
            .one(self.db())
            .await?
            .ok_or(DaoLayerError::NotFound {
                entity: ENTITY,
                id: item_id,
            })
    }

    pub async fn update(&self, owner_id: i32, item_id: i32, input: UpdateTodoItem) -> DaoResult<()> {
        if input.is_empty() {
            return Err(DaoLayerError::EmptyUpdate { entity: ENTITY });
        }

        let mut update = TodoItem::update_many();
        if let Some(title) = input.title {
            update = update.col_expr(todo_item::Column::Title, Expr::value(title));
        }
        if let Some(description) = input.description {
            update = update.col_expr(todo_item::Column::Description, Expr::value(description));
        }
        if let Some(done) = input.done {
            update = update.col_expr(todo_item::Column::Done, Expr::value(done));
        }

        update
            .filter(todo_item::Column::Id.eq(item_id))
            .filter(todo_item::Column::Id.in_subquery(owned_item_ids(owner_id)))
            .exec(self.db())
            .await?;
        Ok(())
    }

    pub async fn delete(&self, owner_id: i32, item_id: i32) -> DaoResult<()> {
        TodoItem::delete_many()
            .filter(todo_item::Column::Id.eq(item_id))
            .filter(todo_item::Column::Id.in_subquery(owned_item_ids(owner_id)))
            .exec(self.db())
            .await?;
        Ok(())
    }
}

// todo_items -> list_items -> user_lists
fn owned_items(owner_id: i32) -> Select<TodoItem> {
    TodoItem::find()
        .join_rev(JoinType::InnerJoin, item_link())
        .join_rev(JoinType::InnerJoin, owner_link())
        .filter(user_list::Column::UserId.eq(owner_id))
}

fn item_link() -> RelationDef {
    ListItem::belongs_to(TodoItem)
        .from(list_item::Column::ItemId)
        .to(todo_item::Column::Id)
        .into()
}

fn owner_link() -> RelationDef {
    UserList::belongs_to(ListItem)
        .from(user_list::Column::ListId)
        .to(list_item::Column::ListId)
        .into()
}

pub(crate) fn owned_item_ids(owner_id: i32) -> SelectStatement {
    Query::select()
        .column((ListItem, list_item::Column::ItemId))
        .from(ListItem)
        .inner_join(
            UserList,
            Expr::col((UserList, user_list::Column::ListId))
                .equals((ListItem, list_item::Column::ListId)),
        )
        .and_where(Expr::col((UserList, user_list::Column::UserId)).eq(owner_id))
        .to_owned()
}

pub(crate) fn owned_item_ids_in_list(owner_id: i32, list_id: i32) -> SelectStatement {
    let mut query = owned_item_ids(owner_id);
    query.and_where(Expr::col((ListItem, list_item::Column::ListId)).eq(list_id));
    query
}
