mod context;
pub mod error;
pub mod todo_item_dao;
pub mod todo_list_dao;
pub mod user_dao;

use sea_orm::DatabaseConnection;

pub use context::DaoContext;
pub use error::{DaoLayerError, DaoResult};
pub use todo_item_dao::{NewTodoItem, TodoItemDao, UpdateTodoItem};
pub use todo_list_dao::{NewTodoList, TodoListDao, UpdateTodoList};
pub use user_dao::UserDao;

pub trait DaoBase: Sized {
    fn new(db: &DatabaseConnection) -> Self;

    fn db(&self) -> &DatabaseConnection;
}
