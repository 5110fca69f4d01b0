use axum::{
    Json,
    extract::{Query, State},
    response::Html,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::api::server::AppState;
use crate::db::{models::User, repo};
use crate::encode;
use crate::error::AppError;

#[derive(Deserialize)]
pub struct SearchParams {
    pub q: String,
}

#[derive(Deserialize)]
pub struct ReflectParams {
    pub input: String,
}

#[derive(Deserialize)]
pub struct EchoParams {
    pub msg: Option<String>,
}

pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<User>>, AppError> {
    let users = repo::search_users(&state.db, &params.q).await?;
    Ok(Json(users))
}

pub async fn reflect(Query(params): Query<ReflectParams>) -> Html<String> {
    Html(encode::escape_html(&params.input))
}

pub async fn echo(Query(params): Query<EchoParams>) -> String {
    params
        .msg
        .as_deref()
        .map(encode::form_urlencode)
        .unwrap_or_default()
}
