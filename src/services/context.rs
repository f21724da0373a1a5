use sea_orm::DatabaseConnection;

use crate::{
    auth::TokenSigner,
    db::dao::DaoContext,
    services::{
        auth_service::AuthService, todo_item_service::TodoItemService,
        todo_list_service::TodoListService,
    },
    state::AppState,
};

#[derive(Clone)]
pub struct ServiceContext {
    daos: DaoContext,
}

impl ServiceContext {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self {
            daos: DaoContext::new(db),
        }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(&state.db)
    }

    pub fn auth<'a>(&self, tokens: &'a TokenSigner) -> AuthService<'a> {
        AuthService::new(self.daos.user(), tokens)
    }

    pub fn todo_list(&self) -> TodoListService {
        TodoListService::new(self.daos.todo_list())
    }

    pub fn todo_item(&self) -> TodoItemService {
        TodoItemService::new(self.daos.todo_list(), self.daos.todo_item())
    }
}
