use std::{
    collections::BTreeMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::trace::TraceLayer;
use tracing::debug;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Comment {
    pub id: u64,
    pub name: String,
    pub text: String,
}

#[derive(Deserialize)]
pub struct CreateComment {
    pub name: String,
    pub text: String,
}

#[derive(Deserialize)]
pub struct UpdateComment {
    pub name: Option<String>,
    pub text: Option<String>,
}

/// In-memory comment store. Ids start at 1 and are never reused.
#[derive(Default)]
pub struct Store {
    comments: RwLock<BTreeMap<u64, Comment>>,
    last_id: AtomicU64,
}

pub type Db = Arc<Store>;

pub fn app() -> Router {
    let db: Db = Arc::new(Store::default());
    Router::new()
        .route("/comments", get(list_comments))
        .route("/comment", post(create_comment))
        .route("/comment/{id}", put(update_comment))
        .layer(TraceLayer::new_for_http())
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_comments(State(db): State<Db>) -> Json<Vec<Comment>> {
    let comments = db.comments.read().await;
    Json(comments.values().cloned().collect())
}

async fn create_comment(
    State(db): State<Db>,
    Json(input): Json<CreateComment>,
) -> (StatusCode, Json<Comment>) {
    let comment = Comment {
        id: db.last_id.fetch_add(1, Ordering::Relaxed) + 1,
        name: input.name,
        text: input.text,
    };
    debug!(id = comment.id, "created comment");
    db.comments.write().await.insert(comment.id, comment.clone());
    (StatusCode::CREATED, Json(comment))
}

async fn update_comment(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<UpdateComment>,
) -> Result<Json<Comment>, StatusCode> {
    let mut comments = db.comments.write().await;
    let comment = comments.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    if let Some(name) = input.name {
        comment.name = name;
    }
    if let Some(text) = input.text {
        comment.text = text;
    }
    debug!(id, "updated comment");
    Ok(Json(comment.clone()))
}
