//! In-memory stand-in for the remote to-do service.
//!
//! Items live in an ordered list so `GET` responses come back in creation
//! order, which keeps client-side assertions deterministic.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: Uuid,
    pub text: String,
    pub done: bool,
}

/// Body of create and update requests: a todo without its id.
#[derive(Debug, Deserialize)]
pub struct UnsavedTodo {
    pub text: String,
    pub done: bool,
}

pub type Db = Arc<RwLock<Vec<Todo>>>;

pub fn app() -> Router {
    app_with(Vec::new())
}

/// Router pre-seeded with `todos`.
pub fn app_with(todos: Vec<Todo>) -> Router {
    let db: Db = Arc::new(RwLock::new(todos));
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/open", get(list_open_todos))
        .route("/todos/{id}", put(update_todo).delete(delete_todo))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    Json(db.read().await.clone())
}

async fn list_open_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    let todos = db.read().await;
    Json(todos.iter().filter(|t| !t.done).cloned().collect())
}

async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<UnsavedTodo>,
) -> (StatusCode, Json<Todo>) {
    let todo = Todo {
        id: Uuid::new_v4(),
        text: input.text,
        done: input.done,
    };
    db.write().await.push(todo.clone());
    info!(id = %todo.id, "created todo");
    (StatusCode::CREATED, Json(todo))
}

async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
    Json(input): Json<UnsavedTodo>,
) -> Result<Json<Todo>, StatusCode> {
    let mut todos = db.write().await;
    let todo = todos
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    todo.text = input.text;
    todo.done = input.done;
    Ok(Json(todo.clone()))
}

async fn delete_todo(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<Json<Option<Todo>>, StatusCode> {
    let mut todos = db.write().await;
    let pos = todos
        .iter()
        .position(|t| t.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    todos.remove(pos);
    info!(%id, "deleted todo");
    Ok(Json(None))
}
