use axum::{
    extract::State,
    response::Html,
    routing::{get, post},
    Router,
};
use tower_sessions::Session;

use crate::{
    data::models::AppError,
    data::repositories::{ResultRepository, VocabRepository},
    utils::{base_context, render_template, require_admin},
    AppState,
};

pub mod bulk;
pub mod login;
pub mod results;
pub mod vocab;

pub async fn dashboard(
    State(state): State<AppState>,
    session: Session,
) -> Result<Html<String>, AppError> {
    require_admin(&session).await?;

    let mut context = base_context(&session).await;
    context.insert("vocab_count", &VocabRepository::all(&state.store).len());
    context.insert("attempts", &ResultRepository::all(&state.store).len());
    Ok(render_template(&state.templates, "admin/dashboard.html", context))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard))
        .route("/login", get(login::show_login_form).post(login::handle_login))
        .route("/logout", get(login::handle_logout))
        .route("/vocab", get(vocab::list_vocab).post(vocab::add_vocab))
        .route("/vocab/{item_id}/update", post(vocab::update_vocab))
        .route("/vocab/{item_id}/delete", post(vocab::delete_vocab))
        .route("/bulk", get(bulk::show_bulk_form).post(bulk::handle_bulk))
        .route("/results", get(results::list_results))
        .route("/results/{attempt_id}/delete", post(results::delete_result))
}
