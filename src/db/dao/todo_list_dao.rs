use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationDef, Set, TransactionTrait,
    sea_query::{Expr, Query, SelectStatement},
};

use super::{DaoBase, DaoLayerError, DaoResult, todo_item_dao};
use crate::db::entities::prelude::{TodoItem, TodoList, UserList};
use crate::db::entities::{todo_item, todo_list, user_list};

const ENTITY: &str = "todo_list";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodoList {
    pub title: String,
    pub description: String,
}

/// Partial update. `None` leaves the column untouched, `Some("")` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTodoList {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl UpdateTodoList {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none()
    }
}

/// Lists reachable only through the owner's `user_lists` rows.
#[derive(Clone)]
pub struct TodoListDao {
    db: DatabaseConnection,
}

impl DaoBase for TodoListDao {
    fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl TodoListDao {
    /// Inserts the list and its ownership row in one transaction.
    pub async fn create(&self, owner_id: i32, input: NewTodoList) -> DaoResult<i32> {
        let txn = self.db.begin().await?;

        let list = todo_list::ActiveModel {
            title: Set(input.title),
            description: Set(input.description),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        UserList::insert(user_list::ActiveModel {
            user_id: Set(owner_id),
            list_id: Set(list.id),
            ..Default::default()
        })
        .exec_without_returning(&txn)
        .await?;

        txn.commit().await?;
        Ok(list.id)
    }

    pub async fn get_all(&self, owner_id: i32) -> DaoResult<Vec<todo_list::Model>> {
        let lists = TodoList::find()
            .join_rev(JoinType::InnerJoin, owner_link())
            .filter(user_list::Column::UserId.eq(owner_id))
            .order_by_asc(todo_list::Column::Id)
            .all(self.db())
            .await?;
        Ok(lists)
    }

    pub async fn get_by_id(&self, owner_id: i32, list_id: i32) -> DaoResult<todo_list::Model> {
        TodoList::find()
            .join_rev(JoinType::InnerJoin, owner_link())
            .filter(user_list::Column::UserId.eq(owner_id))
            .filter(todo_list::Column::Id.eq(list_id))
            .one(self.db())
            .await?
            .ok_or(DaoLayerError::NotFound {
                entity: ENTITY,
                id: list_id,
            })
    }

    /// Lists owned by someone else match no rows and are left untouched.
    pub async fn update(&self, owner_id: i32, list_id: i32, input: UpdateTodoList) -> DaoResult<()> {
        if input.is_empty() {
            return Err(DaoLayerError::EmptyUpdate { entity: ENTITY });
        }

        let mut update = TodoList::update_many();
        if let Some(title) = input.title {
            update = update.col_expr(todo_list::Column::Title, Expr::value(title));
        }
        if let Some(description) = input.description {
            update = update.col_expr(todo_list::Column::Description, Expr::value(description));
        }

        update
            .filter(todo_list::Column::Id.eq(list_id))
            .filter(todo_list::Column::Id.in_subquery(owned_list_ids(owner_id)))
            .exec(self.db())
            .await?;
        Ok(())
    }

    /// Removes the list together with its items. Missing or foreign ids are a no-op.
    pub async fn delete(&self, owner_id: i32, list_id: i32) -> DaoResult<()> {
        let txn = self.db.begin().await?;

        TodoItem::delete_many()
            .filter(todo_item::Column::Id.in_subquery(todo_item_dao::owned_item_ids_in_list(
                owner_id, list_id,
            )))
            .exec(&txn)
            .await?;

        TodoList::delete_many()
            .filter(todo_list::Column::Id.eq(list_id))
            .filter(todo_list::Column::Id.in_subquery(owned_list_ids(owner_id)))
            .exec(&txn)
            .await?;

        txn.commit().await?;
        Ok(())
    }
}

fn owner_link() -> RelationDef {
    UserList::belongs_to(TodoList)
        .from(user_list::Column::ListId)
        .to(todo_list::Column::Id)
        .into()
}

pub(crate) fn owned_list_ids(owner_id: i32) -> SelectStatement {
    Query::select()
        .column(user_list::Column::ListId)
        .from(UserList)
        .and_where(user_list::Column::UserId.eq(owner_id))
        .to_owned()
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};

    use crate::db::entities::todo_list;

    use super::{NewTodoList, TodoListDao, UpdateTodoList};
    use crate::db::dao::{DaoBase, DaoLayerError};

    fn list_model(id: i32, title: &str) -> todo_list::Model {
        todo_list::Model {
            id,
            title: title.to_string(),
            description: "weekly".to_string(),
        }
    }

    fn exec(rows_affected: u64) -> MockExecResult {
        MockExecResult {
            last_insert_id: 0,
            rows_affected,
        }
    }

    fn groceries() -> NewTodoList {
        NewTodoList {
            title: "Groceries".to_string(),
            description: "weekly".to_string(),
        }
    }

    #[tokio::test]
    async fn create_inserts_list_and_membership_in_one_transaction() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[list_model(5, "Groceries")]])
            .append_exec_results([exec(1)])
            .into_connection();
        let dao = TodoListDao::new(&db);

        let id = dao.create(1, groceries()).await.expect("create should succeed");
        assert_eq!(id, 5);

        let log = format!("{:?}", db.into_transaction_log());
        assert!(log.contains("todo_lists"));
        assert!(log.contains("user_lists"));
    }

    #[tokio::test]
    async fn create_fails_when_membership_insert_fails() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[list_model(5, "Groceries")]])
            .append_exec_errors([DbErr::Custom("foreign key violation".to_string())])
            .into_connection();
        let dao = TodoListDao::new(&db);

        let err = dao
            .create(99, groceries())
            .await
            .expect_err("membership failure should abort create");
        assert!(matches!(err, DaoLayerError::Db(_)));
    }

    #[tokio::test]
    async fn get_all_filters_through_membership() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![list_model(1, "Groceries"), list_model(2, "Chores")]])
            .into_connection();
        let dao = TodoListDao::new(&db);

        let lists = dao.get_all(1).await.expect("query should succeed");
        assert_eq!(lists.len(), 2);

        let log = format!("{:?}", db.into_transaction_log());
        assert!(log.contains("INNER JOIN"));
        assert!(log.contains("user_lists"));
    }

    #[tokio::test]
    async fn get_by_id_maps_missing_row_to_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<todo_list::Model>::new()])
            .into_connection();
        let dao = TodoListDao::new(&db);

        let err = dao.get_by_id(2, 1).await.expect_err("list should be hidden");
        assert!(matches!(
            err,
            DaoLayerError::NotFound { entity: "todo_list", id: 1 }
        ));
    }

    #[tokio::test]
    async fn update_without_fields_issues_no_sql() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let dao = TodoListDao::new(&db);

        let err = dao
            .update(1, 1, UpdateTodoList::default())
            .await
            .expect_err("empty update should be rejected");
        assert!(matches!(err, DaoLayerError::EmptyUpdate { .. }));
        assert!(db.into_transaction_log().is_empty());
    }

    #[tokio::test]
    async fn update_sets_only_present_fields() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([exec(1)])
            .into_connection();
        let dao = TodoListDao::new(&db);

        dao.update(
            1,
            1,
            UpdateTodoList {
                title: Some("Food".to_string()),
                description: None,
            },
        )
        .await
        .expect("update should succeed");

        let log = format!("{:?}", db.into_transaction_log());
        assert!(log.contains("title"));
        assert!(!log.contains("description"));
        assert!(log.contains("user_lists"));
    }

    #[tokio::test]
    async fn delete_runs_item_and_list_deletes() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([exec(0), exec(0)])
            .into_connection();
        let dao = TodoListDao::new(&db);

        dao.delete(1, 42).await.expect("missing list delete is a no-op");

        let log = format!("{:?}", db.into_transaction_log());
        assert!(log.contains("todo_items"));
        assert!(log.contains("todo_lists"));
    }
}
