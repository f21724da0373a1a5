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
        dao::{NewTodoList, UpdateTodoList},
        entities::todo_list,
    },
    middleware::{CurrentUser, require_user},
    response::{ApiResult, DataResponse, IdResponse, StatusResponse},
    services::{ServiceContext, todo_list_service::TodoListService},
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct CreateListRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateListRequest {
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TodoListResponse {
    pub id: i32,
    pub title: String,
    pub description: String,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/lists", get(get_all_lists).post(create_list))
        .route(
            "/lists/{id}",
            get(get_list_by_id).put(update_list).delete(delete_list),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_user))
        .with_state(state)
}

async fn create_list(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
    Json(body): Json<CreateListRequest>,
) -> ApiResult<IdResponse> {
    let id = list_service(&state).create(user_id, body.into()).await?;
    Ok(Json(IdResponse { id }))
}

async fn get_all_lists(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
) -> ApiResult<DataResponse<TodoListResponse>> {
    let lists = list_service(&state).get_all(user_id).await?;
    Ok(Json(DataResponse {
        data: lists.into_iter().map(TodoListResponse::from).collect(),
    }))
}

async fn get_list_by_id(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
    Path(list_id): Path<i32>,
) -> ApiResult<TodoListResponse> {
    let list = list_service(&state).get_by_id(user_id, list_id).await?;
    Ok(Json(list.into()))
}

async fn update_list(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
    Path(list_id): Path<i32>,
    Json(body): Json<UpdateListRequest>,
) -> ApiResult<StatusResponse> {
    list_service(&state)
        .update(user_id, list_id, body.into())
        .await?;
    StatusResponse::ok()
}

async fn delete_list(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
    Path(list_id): Path<i32>,
) -> ApiResult<StatusResponse> {
    list_service(&state).delete(user_id, list_id).await?;
    StatusResponse::ok()
}

fn list_service(state: &AppState) -> TodoListService {
    ServiceContext::from_state(state).todo_list()
}

impl From<CreateListRequest> for NewTodoList {
    fn from(body: CreateListRequest) -> Self {
        Self {
            title: body.title,
            description: body.description.unwrap_or_default(),
        }
    }
}

impl From<UpdateListRequest> for UpdateTodoList {
    fn from(body: UpdateListRequest) -> Self {
        Self {
            title: body.title,
            description: body.description,
        }
    }
}

impl From<todo_list::Model> for TodoListResponse {
    fn from(model: todo_list::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
        }
    }
}
