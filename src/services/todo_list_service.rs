use crate::{
    db::{
        dao::{NewTodoList, TodoListDao, UpdateTodoList},
        entities::todo_list,
    },
    error::AppError,
    services::{EMPTY_TITLE_MESSAGE, require_non_blank, validate_update},
};

#[derive(Clone)]
pub struct TodoListService {
    lists: TodoListDao,
}

impl TodoListService {
    pub fn new(lists: TodoListDao) -> Self {
        Self { lists }
    }

    pub async fn create(&self, user_id: i32, input: NewTodoList) -> Result<i32, AppError> {
        require_non_blank(&input.title, EMPTY_TITLE_MESSAGE)?;
        Ok(self.lists.create(user_id, input).await?)
    }

    pub async fn get_all(&self, user_id: i32) -> Result<Vec<todo_list::Model>, AppError> {
        Ok(self.lists.get_all(user_id).await?)
    }

    pub async fn get_by_id(&self, user_id: i32, list_id: i32) -> Result<todo_list::Model, AppError> {
        Ok(self.lists.get_by_id(user_id, list_id).await?)
    }

    pub async fn update(
        &self,
        user_id: i32,
        list_id: i32,
        input: UpdateTodoList,
    ) -> Result<(), AppError> {
        validate_update(input.is_empty(), input.title.as_deref())?;
        Ok(self.lists.update(user_id, list_id, input).await?)
    }

    pub async fn delete(&self, user_id: i32, list_id: i32) -> Result<(), AppError> {
        Ok(self.lists.delete(user_id, list_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, MockDatabase};

    use super::TodoListService;
    use crate::{
        db::dao::{DaoBase, NewTodoList, TodoListDao, UpdateTodoList},
        error::AppError,
    };

    fn service(db: &sea_orm::DatabaseConnection) -> TodoListService {
        TodoListService::new(TodoListDao::new(db))
    }

    #[tokio::test]
    async fn create_requires_title() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let err = service(&db)
            .create(
                1,
                NewTodoList {
                    title: " ".to_string(),
                    description: "weekly".to_string(),
                },
            )
            .await
            .expect_err("blank title should fail");
        assert_eq!(err.message(), "title must not be empty");
        assert!(db.into_transaction_log().is_empty());
    }

    #[tokio::test]
    async fn update_rejects_empty_structure() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let err = service(&db)
            .update(1, 1, UpdateTodoList::default())
            .await
            .expect_err("empty update should fail");
        assert!(matches!(err, AppError::BadRequest(_)));
        assert_eq!(err.message(), "update structure has no values");
    }

    #[tokio::test]
    async fn update_rejects_blank_title_but_allows_empty_description() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([sea_orm::MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();
        let service = service(&db);

        let err = service
            .update(
                1,
                1,
                UpdateTodoList {
                    title: Some(String::new()),
                    description: None,
                },
            )
            .await
            .expect_err("blank title should fail");
        assert_eq!(err.message(), "title must not be empty");

        service
            .update(
                1,
                1,
                UpdateTodoList {
                    title: None,
                    description: Some(String::new()),
                },
            )
            .await
            .expect("clearing the description is allowed");
    }
}
