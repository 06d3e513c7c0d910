use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use rand::seq::SliceRandom;
use tower_sessions::Session;

use crate::{
    data::models::{
        AppError, ExamQuestion, ExamScore, ExamSubmission, QuestionsResponse, VocabEntry,
    },
    data::repositories::{ResultRepository, VocabRepository},
    features::quiz::ScoringEngine,
    utils::quiz_context,
    AppState,
};

pub async fn api_vocab(State(state): State<AppState>) -> Json<Vec<VocabEntry>> {
    Json(VocabRepository::all(&state.store))
}

/// The whole vocabulary in random order, numbered by position.
pub async fn get_questions(State(state): State<AppState>) -> Json<QuestionsResponse> {
    let mut vocab = VocabRepository::all(&state.store);
    vocab.shuffle(&mut rand::rng());

    let questions = vocab
        .into_iter()
        .enumerate()
        .map(|(idx, v)| ExamQuestion {
            id: idx,
            word: v.word,
            pos: v.pos,
            meaning: v.meaning,
        })
        .collect();

    Json(QuestionsResponse { questions })
}

pub async fn submit_exam(
    State(state): State<AppState>,
    session: Session,
    Json(submission): Json<ExamSubmission>,
) -> Result<Json<ExamScore>, AppError> {
    let quiz = quiz_context(&session).await;
    let vocab = VocabRepository::all(&state.store);
    let (items, tally) = ScoringEngine::grade_exam(&vocab, &submission.answers);
    let record = ScoringEngine::build_record(&quiz, Utc::now(), None, items, tally);

    ResultRepository::append(&state.store, &record)?;
    log::info!(
        "Stored exam {} for {}: {}/{}",
        record.id, record.name, record.score, record.total_questions
    );

    Ok(Json(ExamScore {
        score: record.score,
        total: record.total_questions,
    }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/vocab", get(api_vocab))
        .route("/get_questions", get(get_questions))
        .route("/submit_exam", post(submit_exam))
}
