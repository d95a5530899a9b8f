use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{debug, info};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub due_date: DateTime<FixedOffset>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of create and update. A client-sent `id` is ignored; the path wins.
#[derive(Deserialize)]
pub struct TaskInput {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub due_date: DateTime<FixedOffset>,
}

#[derive(Default)]
pub struct Store {
    next_id: i64,
    tasks: BTreeMap<i64, Task>,
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/tasks", get(list_tasks).post(create_task))
        .route("/tasks/{id}", get(get_task).put(update_task).delete(delete_task))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "mock task server listening");
    }
    axum::serve(listener, app()).await
}

async fn list_tasks(State(db): State<Db>) -> Json<Vec<Task>> {
    let store = db.read().await;
    Json(store.tasks.values().cloned().collect())
}

async fn create_task(
    State(db): State<Db>,
    Json(input): Json<TaskInput>,
) -> Result<(StatusCode, Json<Task>), StatusCode> {
    if input.title.trim().is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }
    let mut store = db.write().await;
    store.next_id += 1;
    let now = Utc::now();
    let task = Task {
        id: store.next_id,
        title: input.title,
        description: input.description,
        due_date: input.due_date,
        created_at: now,
        updated_at: now,
    };
    store.tasks.insert(task.id, task.clone());
    debug!(id = task.id, "task created");
    Ok((StatusCode::CREATED, Json(task)))
}

async fn get_task(State(db): State<Db>, Path(id): Path<i64>) -> Result<Json<Task>, StatusCode> {
    let store = db.read().await;
    store.tasks.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_task(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<TaskInput>,
) -> Result<Json<Task>, StatusCode> {
    if input.title.trim().is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }
    let mut store = db.write().await;
    let task = store.tasks.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    task.title = input.title;
    task.description = input.description;
    task.due_date = input.due_date;
    task.updated_at = Utc::now();
    debug!(id, "task updated");
    Ok(Json(task.clone()))
}

async fn delete_task(State(db): State<Db>, Path(id): Path<i64>) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    let removed = store.tasks.remove(&id);
    debug!(id, found = removed.is_some(), "task delete");
    removed.map(|_| StatusCode::NO_CONTENT).ok_or(StatusCode::NOT_FOUND)
}
