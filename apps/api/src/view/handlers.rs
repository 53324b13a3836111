//! Axum route handlers for the resume view.
//!
//! Every request mounts a fresh view, so the accent effect runs exactly once.

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    response::Html,
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::resume::non_empty;
use crate::state::AppState;
use crate::view::component::{render_once, ResumeProps};
use crate::view::document::standalone_document;
use crate::view::node::Node;

#[derive(Debug, Default, Deserialize)]
pub struct RenderQuery {
    #[serde(default)]
    pub document: bool,
}

/// Oversized bodies and wrong content types keep their own status; anything
/// else wrong with the body is a validation error.
fn rejection_error(rejection: JsonRejection) -> AppError {
    match rejection.status() {
        StatusCode::PAYLOAD_TOO_LARGE => AppError::PayloadTooLarge(rejection.body_text()),
        StatusCode::UNSUPPORTED_MEDIA_TYPE => AppError::UnsupportedMediaType(rejection.body_text()),
        _ => AppError::Validation(rejection.body_text()),
    }
}

/// Unwraps the JSON body and fills in the configured default accent.
fn resolve_props(
    state: &AppState,
    payload: Result<Json<ResumeProps>, JsonRejection>,
) -> Result<ResumeProps, AppError> {
    let Json(mut props) = payload.map_err(rejection_error)?;
    if props.active_color.is_none() {
        props.active_color = state.config.default_accent_color.clone();
    }
    Ok(props)
}

/// POST /api/v1/resume/render
///
/// Returns the rendered resume as an HTML fragment, or a full page with `?document=true`.
pub async fn handle_render(
    State(state): State<AppState>,
    Query(query): Query<RenderQuery>,
    payload: Result<Json<ResumeProps>, JsonRejection>,
) -> Result<Html<String>, AppError> {
    let props = resolve_props(&state, payload)?;
    let root = render_once(&props);

    if query.document {
        let title = props.information.basic_info().and_then(|b| non_empty(&b.name));
        return Ok(Html(standalone_document(&root, title)));
    }
    Ok(Html(root.to_html()))
}

/// POST /api/v1/resume/tree
///
/// Returns the rendered node tree as JSON, item keys included.
pub async fn handle_tree(
    State(state): State<AppState>,
    payload: Result<Json<ResumeProps>, JsonRejection>,
) -> Result<Json<Node>, AppError> {
    let props = resolve_props(&state, payload)?;
    Ok(Json(render_once(&props)))
}
