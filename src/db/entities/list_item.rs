use sea_orm::entity::prelude::*;

/// Membership row: the item belongs to the list.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "list_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
    pub list_id: i32,
    #[sea_orm(indexed)]
    pub item_id: i32,
    #[sea_orm(belongs_to, from = "list_id", to = "id", on_delete = "Cascade")]
    pub list: HasOne<super::todo_list::Entity>,
    #[sea_orm(belongs_to, from = "item_id", to = "id", on_delete = "Cascade")]
    pub item: HasOne<super::todo_item::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
