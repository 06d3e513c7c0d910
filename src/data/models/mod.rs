pub mod app_models;
pub mod attempt_models;
pub mod auth_models;
pub mod vocab_models;

pub use attempt_models::{
    AnswerInput, AttemptRecord, ExamScore, ExamSubmission, FinishResponse,
    FinishSubmission, QuestionResult, QuizContext, StartForm, SubmittedItem,
};
pub use app_models::{AppError, Flash, FlashLevel};
pub use auth_models::{AdminConfig, LoginForm};
pub use vocab_models::{
    BulkForm, ExamQuestion, NewVocabForm, QuestionsResponse, UpdateVocabForm,
    VocabDraft, VocabEntry,
};
