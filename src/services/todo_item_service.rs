use crate::{
    db::{
        dao::{NewTodoItem, TodoItemDao, TodoListDao, UpdateTodoItem},
        entities::todo_item,
    },
    error::AppError,
    services::{EMPTY_TITLE_MESSAGE, require_non_blank, validate_update},
};

#[derive(Clone)]
pub struct TodoItemService {
    lists: TodoListDao,
    items: TodoItemDao,
}

impl TodoItemService {
    pub fn new(lists: TodoListDao, items: TodoItemDao) -> Self {
        Self { lists, items }
    }

    /// The parent list must be visible to `user_id` before anything is inserted.
    pub async fn create(
        &self,
        user_id: i32,
        list_id: i32,
        input: NewTodoItem,
    ) -> Result<i32, AppError> {
        self.lists.get_by_id(user_id, list_id).await?;
        require_non_blank(&input.title, EMPTY_TITLE_MESSAGE)?;
        Ok(self.items.create(list_id, input).await?)
    }

    pub async fn get_all(
        &self,
        user_id: i32,
        list_id: i32,
    ) -> Result<Vec<todo_item::Model>, AppError> {
        Ok(self.items.get_all(user_id, list_id).await?)
    }

    pub async fn get_by_id(&self, user_id: i32, item_id: i32) -> Result<todo_item::Model, AppError> {
        Ok(self.items.get_by_id(user_id, item_id).await?)
    }

    pub async fn update(
        &self,
        user_id: i32,
        item_id: i32,
        input: UpdateTodoItem,
    ) -> Result<(), AppError> {
        validate_update(input.is_empty(), input.title.as_deref())?;
        Ok(self.items.update(user_id, item_id, input).await?)
    }

    pub async fn delete(&self, user_id: i32, item_id: i32) -> Result<(), AppError> {
        Ok(self.items.delete(user_id, item_id).await?)
    }
}
