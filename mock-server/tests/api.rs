use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with, Todo};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(String::new())
        .unwrap()
}

fn milk() -> Todo {
    Todo {
        id: 7,
        title: "Buy milk".to_string(),
        is_completed: false,
    }
}

// --- list ---

#[tokio::test]
async fn list_todos_empty() {
    let resp = app().oneshot(empty_request("GET", "/allTodos")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let todos: Vec<Todo> = body_json(resp).await;
    assert!(todos.is_empty());
}

#[tokio::test]
async fn list_todos_returns_seed() {
    let resp = app_with(vec![milk()])
        .oneshot(empty_request("GET", "/allTodos"))
        .await
        .unwrap();

    let todos: Vec<Todo> = body_json(resp).await;
    assert_eq!(todos, vec![milk()]);
}

// --- edit ---

#[tokio::test]
async fn edit_todo_title_only() {
    let resp = app_with(vec![milk()])
        .oneshot(json_request("PUT", "/editTodo/7", r#"{"title":"Buy oat milk"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let todo: Todo = body_json(resp).await;
    assert_eq!(todo.title, "Buy oat milk");
    assert!(!todo.is_completed);
}

#[tokio::test]
async fn edit_todo_completion_only() {
    let resp = app_with(vec![milk()])
        .oneshot(json_request("PUT", "/editTodo/7", r#"{"isCompleted":true}"#))
        .await
        .unwrap();

    let todo: Todo = body_json(resp).await;
    assert_eq!(todo.title, "Buy milk");
    assert!(todo.is_completed);
}

#[tokio::test]
async fn edit_todo_not_found() {
    let resp = app()
        .oneshot(json_request("PUT", "/editTodo/7", r#"{"title":"Nope"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn edit_todo_bad_id_returns_400() {
    let resp = app()
        .oneshot(json_request("PUT", "/editTodo/seven", r#"{"title":"Nope"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn paths_are_case_sensitive() {
    let resp = app_with(vec![milk()])
        .oneshot(json_request("PUT", "/edittodo/7", r#"{"title":"Nope"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- delete ---

#[tokio::test]
async fn delete_todo_returns_204_with_empty_body() {
    let resp = app_with(vec![milk()])
        .oneshot(empty_request("DELETE", "/deleteTodo/7"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(resp).await.is_empty());
}

#[tokio::test]
async fn delete_todo_not_found() {
    let resp = app()
        .oneshot(empty_request("DELETE", "/deleteTodo/3"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- full lifecycle ---

#[tokio::test]
async fn edit_and_delete_lifecycle() {
    use tower::Service;

    let mut app = app_with(vec![Todo {
        id: 1,
        title: "Walk dog".to_string(),
        is_completed: false,
    }])
    .into_service();
    let id = 1;

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("PUT", &format!("/editTodo/{id}"), r#"{"isCompleted":true}"#))
        .await
        .unwrap();
    let updated: Todo = body_json(resp).await;
    assert_eq!(updated.title, "Walk dog"); // unchanged
    assert!(updated.is_completed);

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("PUT", &format!("/editTodo/{id}"), r#"{"title":"Walk cat"}"#))
        .await
        .unwrap();
    let updated: Todo = body_json(resp).await;
    assert_eq!(updated.title, "Walk cat");
    assert!(updated.is_completed); // unchanged from previous edit

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("DELETE", &format!("/deleteTodo/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("DELETE", &format!("/deleteTodo/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", "/allTodos"))
        .await
        .unwrap();
    let todos: Vec<Todo> = body_json(resp).await;
    assert!(todos.is_empty());
}
