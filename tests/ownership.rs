mod common;

use axum::http::StatusCode;
use sea_orm::{EntityTrait, PaginatorTrait};
use serde_json::json;

use common::{create_item, create_list, json_response, register, request};
use todo_server::{
    db::{
        dao::{DaoContext, DaoLayerError, NewTodoItem, NewTodoList},
        entities::prelude::{ListItem, TodoItem, TodoList, UserList},
    },
    test_helpers::sqlite_app,
};

#[tokio::test]
async fn other_users_cannot_read_or_change_a_list() {
    let (app, _state) = sqlite_app().await.expect("sqlite app");
    let alice = register(&app, "alice", "pw1").await;
    let bob = register(&app, "bob", "pw2").await;
    let list_id = create_list(&app, &alice, "Groceries", "weekly").await;
    let path = format!("/lists/{list_id}");

    let (status, _) = json_response(&app, request("GET", &path, Some(&bob), None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = json_response(&app, request("GET", "/lists", Some(&bob), None)).await;
    assert_eq!(body, json!({ "data": [] }));

    let (status, _) = json_response(
        &app,
        request("PUT", &path, Some(&bob), Some(json!({ "title": "Hijacked" }))),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = json_response(&app, request("DELETE", &path, Some(&bob), None)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = json_response(&app, request("GET", &path, Some(&alice), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "id": list_id, "title": "Groceries", "description": "weekly" })
    );
}

#[tokio::test]
async fn other_users_cannot_reach_items() {
    let (app, _state) = sqlite_app().await.expect("sqlite app");
    let alice = register(&app, "alice", "pw1").await;
    let bob = register(&app, "bob", "pw2").await;
    let list_id = create_list(&app, &alice, "Groceries", "weekly").await;
    let item_id = create_item(&app, &alice, list_id, "Milk").await;
    let item_path = format!("/items/{item_id}");

    let (status, _) = json_response(
        &app,
        request(
            "POST",
            &format!("/lists/{list_id}/items"),
            Some(&bob),
            Some(json!({ "title": "Intruder" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = json_response(
        &app,
        request("GET", &format!("/lists/{list_id}/items"), Some(&bob), None),
    )
    .await;
    assert_eq!(body, json!({ "data": [] }));

    let (status, _) = json_response(&app, request("GET", &item_path, Some(&bob), None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    json_response(
        &app,
        request("PUT", &item_path, Some(&bob), Some(json!({ "done": true }))),
    )
    .await;
    json_response(&app, request("DELETE", &item_path, Some(&bob), None)).await;

    let (status, body) = json_response(&app, request("GET", &item_path, Some(&alice), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "id": item_id, "title": "Milk", "description": "", "done": false })
    );

    let (_, body) = json_response(
        &app,
        request("GET", &format!("/lists/{list_id}/items"), Some(&alice), None),
    )
    .await;
    assert_eq!(body["data"].as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn failed_membership_insert_leaves_no_list_behind() {
    let (_app, state) = sqlite_app().await.expect("sqlite app");
    let daos = DaoContext::new(&state.db);

    let err = daos
        .todo_list()
        .create(
            999,
            NewTodoList {
                title: "Orphan".to_string(),
                description: String::new(),
            },
        )
        .await
        .expect_err("unknown owner should violate the foreign key");
    assert!(matches!(err, DaoLayerError::Db(_)));

    assert_eq!(TodoList::find().count(&state.db).await.expect("count"), 0);
    assert_eq!(UserList::find().count(&state.db).await.expect("count"), 0);
}

#[tokio::test]
async fn failed_list_link_leaves_no_item_behind() {
    let (_app, state) = sqlite_app().await.expect("sqlite app");
    let daos = DaoContext::new(&state.db);

    let err = daos
        .todo_item()
        .create(
            999,
            NewTodoItem {
                title: "Orphan".to_string(),
                description: String::new(),
            },
        )
        .await
        .expect_err("unknown list should violate the foreign key");
    assert!(matches!(err, DaoLayerError::Db(_)));

    assert_eq!(TodoItem::find().count(&state.db).await.expect("count"), 0);
    assert_eq!(ListItem::find().count(&state.db).await.expect("count"), 0);
}
