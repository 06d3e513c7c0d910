use axum::{
    extract::{rejection::JsonRejection, Form, Path, State},
    response::{Html, Redirect},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use tower_sessions::Session;

use crate::{
    data::models::{AppError, FinishResponse, FinishSubmission, StartForm},
    data::repositories::{ResultRepository, VocabRepository},
    features::quiz::{ScoringEngine, QUIZ_DURATION_SECONDS},
    utils::{base_context, quiz_context, render_template, session::{start_quiz, GUEST_NAME}},
    AppState,
};

pub async fn show_start_form(State(state): State<AppState>, session: Session) -> Html<String> {
    let context = base_context(&session).await;
    render_template(&state.templates, "user_start.html", context)
}

pub async fn handle_start(
    session: Session,
    Form(form): Form<StartForm>,
) -> Result<Redirect, AppError> {
    let name = match form.name.trim() {
        "" => GUEST_NAME,
        name => name,
    };
    start_quiz(&session, name, Utc::now()).await?;
    Ok(Redirect::to("/learn/quiz"))
}

pub async fn quiz_page(State(state): State<AppState>, session: Session) -> Html<String> {
    let quiz = quiz_context(&session).await;
    let mut context = base_context(&session).await;
    context.insert("name", &quiz.name);
    context.insert("started_at", &quiz.started_at.to_rfc3339());
    context.insert("duration_seconds", &QUIZ_DURATION_SECONDS);
    render_template(&state.templates, "quiz.html", context)
}

/// Stores a finished timed quiz. A malformed body counts as an empty attempt.
pub async fn finish(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<FinishSubmission>, JsonRejection>,
) -> Result<Json<FinishResponse>, AppError> {
    let submission = match payload {
        Ok(Json(submission)) => submission,
        Err(e) => {
            log::warn!("Unreadable quiz submission, storing empty attempt: {}", e);
            FinishSubmission::default()
        }
    };

    let quiz = quiz_context(&session).await;
    let vocab = VocabRepository::all(&state.store);
    let (items, tally) = ScoringEngine::grade_submitted(&vocab, &submission.items);
    let record = ScoringEngine::build_record(
        &quiz,
        Utc::now(),
        Some(QUIZ_DURATION_SECONDS),
        items,
        tally,
    );

    ResultRepository::append(&state.store, &record)?;
    log::info!(
        "Stored attempt {} for {}: {}/{}",
        record.id, record.name, record.score, record.total_questions
    );

    Ok(Json(FinishResponse {
        ok: true,
        redirect: format!("/results/{}", record.id),
    }))
}

pub async fn result_page(
    State(state): State<AppState>,
    session: Session,
    Path(attempt_id): Path<i64>,
) -> Result<Html<String>, AppError> {
    let record = ResultRepository::find(&state.store, attempt_id)
        .ok_or_else(|| AppError::NotFound("Result not found".into()))?;

    let mut context = base_context(&session).await;
    context.insert("rec", &record);
    Ok(render_template(&state.templates, "results.html", context))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/learn/start", get(show_start_form).post(handle_start))
        .route("/learn/quiz", get(quiz_page))
        .route("/learn/finish", post(finish))
        .route("/results/{attempt_id}", get(result_page))
}
