use axum::{
    extract::State,
    response::Html,
    routing::get,
    Router,
};
use tower_sessions::Session;

use crate::{utils::{base_context, render_template}, AppState};

// Handlers for static pages
pub async fn home(State(state): State<AppState>, session: Session) -> Html<String> {
    let context = base_context(&session).await;
    render_template(&state.templates, "home.html", context)
}

pub async fn exam_page(State(state): State<AppState>, session: Session) -> Html<String> {
    let context = base_context(&session).await;
    render_template(&state.templates, "exam.html", context)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/exam", get(exam_page))
}
