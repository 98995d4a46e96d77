use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub is_completed: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditTodo {
    pub title: Option<String>,
    pub is_completed: Option<bool>,
}

/// Todos keyed by id, so listing comes out in id order.
pub type Db = Arc<RwLock<BTreeMap<i64, Todo>>>;

pub fn app() -> Router {
    app_with(Vec::new())
}

/// Router preloaded with `seed`.
pub fn app_with(seed: Vec<Todo>) -> Router {
    let items = seed.into_iter().map(|todo| (todo.id, todo)).collect();
    let db: Db = Arc::new(RwLock::new(items));
    Router::new()
        .route("/allTodos", get(list_todos))
        .route("/editTodo/{id}", put(edit_todo))
        .route("/deleteTodo/{id}", delete(delete_todo))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_with(listener, Vec::new()).await
}

pub async fn run_with(listener: TcpListener, seed: Vec<Todo>) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(seed)).await
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    let todos = db.read().await;
    Json(todos.values().cloned().collect())
}

async fn edit_todo(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<EditTodo>,
) -> Result<Json<Todo>, StatusCode> {
    let mut todos = db.write().await;
    let todo = todos.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    if let Some(title) = input.title {
        todo.title = title;
    }
    if let Some(is_completed) = input.is_completed {
        todo.is_completed = is_completed;
    }
    info!(id, "edited todo");
    Ok(Json(todo.clone()))
}

async fn delete_todo(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<StatusCode, StatusCode> {
    let mut todos = db.write().await;
    todos.remove(&id).ok_or(StatusCode::NOT_FOUND)?;
    info!(id, "deleted todo");
    Ok(StatusCode::NO_CONTENT)
}
