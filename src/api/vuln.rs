//! Deliberately injectable counterparts of the handlers in `safe`.
//!
//! User input reaches SQL text, HTML output and the shell unmodified.

use axum::{
    Json,
    extract::{Query, State},
    response::Html,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::api::safe::{ReflectParams, SearchParams};
use crate::api::server::AppState;
use crate::db::{models::User, repo};
use crate::error::AppError;
use crate::exec;

#[derive(Deserialize)]
pub struct CmdParams {
    pub cmd: String,
}

pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<User>>, AppError> {
    tracing::warn!(q = %params.q, "Running concatenated search query");
    let users = repo::search_users_unsafe(&state.db, &params.q).await?;
    Ok(Json(users))
}

pub async fn reflect(Query(params): Query<ReflectParams>) -> Html<String> {
    tracing::warn!("Reflecting raw input into HTML");
    Html(format!(
        "<html><body>User said: {}</body></html>",
        params.input
    ))
}

pub async fn cmd(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CmdParams>,
) -> Result<String, AppError> {
    tracing::warn!(cmd = %params.cmd, "Executing shell command from request");
    exec::run_shell(&params.cmd, state.cmd_timeout).await
}
