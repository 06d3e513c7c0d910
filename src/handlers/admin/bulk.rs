use axum::{
    extract::{Form, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::{
    data::models::{AppError, BulkForm, FlashLevel, VocabDraft},
    data::repositories::VocabRepository,
    features::vocab::parse_bulk,
    utils::{base_context, push_flash, render_template, require_admin},
    AppState,
};

/// Most lines accepted from a single paste.
pub const BULK_IMPORT_LIMIT: usize = 50;

async fn render_preview(
    state: &AppState,
    session: &Session,
    preview: &[VocabDraft],
) -> Html<String> {
    let text = preview
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n");

    let mut context = base_context(session).await;
    context.insert("preview", preview);
    context.insert("bulk_text", &text);
    context.insert("limit", &BULK_IMPORT_LIMIT);
    render_template(&state.templates, "admin/upload.html", context)
}

pub async fn show_bulk_form(
    State(state): State<AppState>,
    session: Session,
) -> Result<Html<String>, AppError> {
    require_admin(&session).await?;
    Ok(render_preview(&state, &session, &[]).await)
}

/// Previews the parsed paste, or imports it when `confirm` is present.
#[axum::debug_handler]
pub async fn handle_bulk(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<BulkForm>,
) -> Result<Response, AppError> {
    require_admin(&session).await?;

    let mut preview = parse_bulk(&form.bulk_text);
    preview.truncate(BULK_IMPORT_LIMIT);

    if form.confirm.is_some() {
        let summary = VocabRepository::import(&state.store, preview)?;
        log::info!(
            "Bulk import: {} added, {} duplicates skipped",
            summary.added, summary.skipped
        );
        push_flash(
            &session,
            FlashLevel::Success,
            format!("Imported {} items ({} duplicates skipped).", summary.added, summary.skipped),
        )
        .await?;
        return Ok(Redirect::to("/admin/vocab").into_response());
    }

    if preview.is_empty() && !form.bulk_text.trim().is_empty() {
        push_flash(&session, FlashLevel::Warning, "Nothing to import.").await?;
    }
    Ok(render_preview(&state, &session, &preview).await.into_response())
}
