use axum::{
    extract::{Form, Path, State},
    response::{Html, Redirect},
};
use tower_sessions::Session;
use validator::{Validate, ValidationErrors};

use crate::{
    data::models::{AppError, FlashLevel, NewVocabForm, UpdateVocabForm, VocabDraft},
    data::repositories::{InsertOutcome, VocabRepository},
    utils::{base_context, push_flash, render_template, require_admin},
    AppState,
};

fn first_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| "Invalid input.".to_string())
}

pub async fn list_vocab(
    State(state): State<AppState>,
    session: Session,
) -> Result<Html<String>, AppError> {
    require_admin(&session).await?;

    let mut context = base_context(&session).await;
    context.insert("vocab", &VocabRepository::all(&state.store));
    Ok(render_template(&state.templates, "admin/vocab.html", context))
}

pub async fn add_vocab(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<NewVocabForm>,
) -> Result<Redirect, AppError> {
    require_admin(&session).await?;

    let form = form.trimmed();
    if let Err(errors) = form.validate() {
        push_flash(&session, FlashLevel::Error, first_message(&errors)).await?;
        return Ok(Redirect::to("/admin/vocab"));
    }

    let draft = VocabDraft::new(form.word, form.pos, form.meaning);
    match VocabRepository::add(&state.store, draft)? {
        InsertOutcome::Added(id) => {
            log::info!("Added vocabulary entry {}", id);
            push_flash(&session, FlashLevel::Success, "Word added.").await?;
        }
        InsertOutcome::Duplicate => {
            push_flash(&session, FlashLevel::Warning, "Duplicate entry skipped.").await?;
        }
    }
    Ok(Redirect::to("/admin/vocab"))
}

pub async fn update_vocab(
    State(state): State<AppState>,
    session: Session,
    Path(item_id): Path<u64>,
    Form(form): Form<UpdateVocabForm>,
) -> Result<Redirect, AppError> {
    require_admin(&session).await?;

    if VocabRepository::update(&state.store, item_id, form)? {
        push_flash(&session, FlashLevel::Success, "Updated.").await?;
    } else {
        push_flash(&session, FlashLevel::Warning, "Entry not found.").await?;
    }
    Ok(Redirect::to("/admin/vocab"))
}

pub async fn delete_vocab(
    State(state): State<AppState>,
    session: Session,
    Path(item_id): Path<u64>,
) -> Result<Redirect, AppError> {
    require_admin(&session).await?;

    VocabRepository::delete(&state.store, item_id)?;
    push_flash(&session, FlashLevel::Success, "Deleted.").await?;
    Ok(Redirect::to("/admin/vocab"))
}
