use sea_orm::DatabaseConnection;

use super::{DaoBase, TodoItemDao, TodoListDao, UserDao};

#[derive(Clone)]
pub struct DaoContext {
    db: DatabaseConnection,
}

impl DaoContext {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    pub fn user(&self) -> UserDao {
        DaoBase::new(&self.db)
    }

    pub fn todo_list(&self) -> TodoListDao {
        DaoBase::new(&self.db)
    }

    pub fn todo_item(&self) -> TodoItemDao {
        DaoBase::new(&self.db)
    }
}
