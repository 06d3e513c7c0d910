use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
};
use tower_sessions::Session;

use crate::{
    data::models::{AppError, FlashLevel},
    data::repositories::ResultRepository,
    utils::{base_context, push_flash, render_template, require_admin},
    AppState,
};

pub async fn list_results(
    State(state): State<AppState>,
    session: Session,
) -> Result<Html<String>, AppError> {
    require_admin(&session).await?;

    let mut context = base_context(&session).await;
    context.insert("results", &ResultRepository::newest_first(&state.store));
    Ok(render_template(&state.templates, "admin/results.html", context))
}

pub async fn delete_result(
    State(state): State<AppState>,
    session: Session,
    Path(attempt_id): Path<i64>,
) -> Result<Redirect, AppError> {
    require_admin(&session).await?;

    if ResultRepository::delete(&state.store, attempt_id)? {
        push_flash(&session, FlashLevel::Success, "Attempt deleted successfully.").await?;
    } else {
        push_flash(&session, FlashLevel::Warning, "Attempt not found.").await?;
    }
    Ok(Redirect::to("/admin/results"))
}
