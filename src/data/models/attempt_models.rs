use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Per-question outcome stored inside an attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vocab_id: Option<u64>,
    #[serde(default)]
    pub user_word: String,
    #[serde(default)]
    pub user_pos: String,
    #[serde(alias = "correct_word")]
    pub word: String,
    #[serde(default, alias = "correct_pos")]
    pub pos: String,
    #[serde(default)]
    pub meaning: String,
    #[serde(default)]
    pub is_word_correct: bool,
    #[serde(default)]
    pub is_pos_correct: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub skipped: bool,
}

/// One completed quiz submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttemptRecord {
    pub id: i64, // Millisecond timestamp of submission
    pub name: String,
    #[serde(default, deserialize_with = "null_as_epoch")]
    pub started_at: DateTime<Utc>,
    #[serde(alias = "timestamp")]
    pub ended_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<u32>,
    pub total_questions: usize,
    #[serde(default)]
    pub answered: usize,
    pub correct_pos: usize,
    pub correct_word: usize,
    pub score: f64,
    pub items: Vec<QuestionResult>,
}

// Older records may carry `"started_at": null`.
fn null_as_epoch<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<DateTime<Utc>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Who is taking the quiz and since when, read from the session per request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizContext {
    pub name: String,
    pub started_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnswerInput {
    #[serde(default)]
    pub english: String,
    #[serde(default)]
    pub pos: String,
}

/// Body of `POST /submit_exam`
#[derive(Debug, Deserialize)]
pub struct ExamSubmission {
    #[serde(default)]
    pub answers: BTreeMap<String, AnswerInput>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExamScore {
    pub score: f64,
    pub total: usize,
}

/// An item as posted by the timed quiz client
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SubmittedItem {
    pub vocab_id: Option<u64>,
    pub meaning: String,
    pub correct_pos: String,
    pub correct_word: String,
    pub user_pos: String,
    pub user_word: String,
    pub is_pos_correct: Option<bool>,  // Client-side verdict, re-graded on the server
    pub is_word_correct: Option<bool>, // Client-side verdict, re-graded on the server
    pub skipped: bool,
}

/// Body of `POST /learn/finish`
#[derive(Debug, Default, Deserialize)]
pub struct FinishSubmission {
    #[serde(default)]
    pub items: Vec<SubmittedItem>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FinishResponse {
    pub ok: bool,
    pub redirect: String,
}

#[derive(Debug, Deserialize)]
pub struct StartForm {
    #[serde(default)]
    pub name: String,
}
