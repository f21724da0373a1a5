#[allow(unused_imports)]
pub mod prelude {
    pub use super::list_item::Entity as ListItem;
    pub use super::todo_item::Entity as TodoItem;
    pub use super::todo_list::Entity as TodoList;
    pub use super::user::Entity as User;
    pub use super::user_list::Entity as UserList;
}

pub mod list_item;
pub mod todo_item;
pub mod todo_list;
pub mod user;
pub mod user_list;
