use sea_orm::entity::prelude::*;

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "todo_lists")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub description: String,
    #[sea_orm(has_many)]
    pub owners: HasMany<super::user_list::Entity>,
    #[sea_orm(has_many)]
    pub items: HasMany<super::list_item::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
