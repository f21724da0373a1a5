use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    middleware,
    routing::get,
};
use serde::{Deserialize, Serialize};

use crate::{
    db::{
        dao::{NewTodoItem, UpdateTodoItem},
        entities::todo_item,
    },
    middleware::{CurrentUser, require_user},
    response::{ApiResult, DataResponse, IdResponse, StatusResponse},
    services::{ServiceContext, todo_item_service::TodoItemService},
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateItemRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub done: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct TodoItemResponse {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub done: bool,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/lists/{id}/items", get(get_all_items).post(create_item))
        .route(
            "/items/{item_id}",
            get(get_item_by_id).put(update_item).delete(delete_item),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_user))
        .with_state(state)
}

async fn create_item(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
    Path(list_id): Path<i32>,
    Json(body): Json<CreateItemRequest>,
) -> ApiResult<IdResponse> {
    let id = item_service(&state)
        .create(user_id, list_id, body.into())
        .await?;
    Ok(Json(IdResponse { id }))
}

async fn get_all_items(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
    Path(list_id): Path<i32>,
) -> ApiResult<DataResponse<TodoItemResponse>> {
    let items = item_service(&state).get_all(user_id, list_id).await?;
    Ok(Json(DataResponse {
        data: items.into_iter().map(TodoItemResponse::from).collect(),
    }))
}

async fn get_item_by_id(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
    Path(item_id): Path<i32>,
) -> ApiResult<TodoItemResponse> {
    let item = item_service(&state).get_by_id(user_id, item_id).await?;
    Ok(Json(item.into()))
}

async fn update_item(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
    Path(item_id): Path<i32>,
    Json(body): Json<UpdateItemRequest>,
) -> ApiResult<StatusResponse> {
    item_service(&state)
        .update(user_id, item_id, body.into())
        .await?;
    StatusResponse::ok()
}

async fn delete_item(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
    Path(item_id): Path<i32>,
) -> ApiResult<StatusResponse> {
    item_service(&state).delete(user_id, item_id).await?;
    StatusResponse::ok()
}

fn item_service(state: &AppState) -> TodoItemService {
    ServiceContext::from_state(state).todo_item()
}

impl From<CreateItemRequest> for NewTodoItem {
    fn from(body: CreateItemRequest) -> Self {
        Self {
            title: body.title,
            description: body.description.unwrap_or_default(),
        }
    }
}

impl From<UpdateItemRequest> for UpdateTodoItem {
    fn from(body: UpdateItemRequest) -> Self {
        Self {
            title: body.title,
            description: body.description,
            done: body.done,
        }
    }
}

impl From<todo_item::Model> for TodoItemResponse {
    fn from(model: todo_item::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            done: model.done,
        }
    }
}
