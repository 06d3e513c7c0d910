use chrono::{DateTime, Utc};
use tera::Context;
use tower_sessions::Session;

use crate::data::models::{AppError, Flash, FlashLevel, QuizContext};

const IS_ADMIN_KEY: &str = "is_admin";
const QUIZ_NAME_KEY: &str = "quiz_user_name";
const QUIZ_STARTED_KEY: &str = "quiz_started_at";
const FLASHES_KEY: &str = "_flashes";

pub const GUEST_NAME: &str = "Guest";

pub async fn set_admin(session: &Session) -> Result<(), AppError> {
    session.insert(IS_ADMIN_KEY, true).await?;
    Ok(())
}

pub async fn is_admin(session: &Session) -> bool {
    session.get::<bool>(IS_ADMIN_KEY).await.unwrap_or(None).unwrap_or(false)
}

pub async fn require_admin(session: &Session) -> Result<(), AppError> {
    if is_admin(session).await {
        Ok(())
    } else {
        Err(AppError::Forbidden)
    }
}

pub async fn start_quiz(
    session: &Session,
    name: &str,
    started_at: DateTime<Utc>,
) -> Result<(), AppError> {
    session.insert(QUIZ_NAME_KEY, name).await?;
    session.insert(QUIZ_STARTED_KEY, started_at).await?;
    Ok(())
}

/// The current quiz taker, falling back to a guest who started just now.
pub async fn quiz_context(session: &Session) -> QuizContext {
    let name = match session.get::<String>(QUIZ_NAME_KEY).await {
        Ok(Some(name)) => name,
        Ok(None) => GUEST_NAME.to_string(),
        Err(e) => {
            log::error!("Failed to read quiz name from session: {}", e);
            GUEST_NAME.to_string()
        }
    };
    let started_at = session
        .get::<DateTime<Utc>>(QUIZ_STARTED_KEY)
        .await
        .unwrap_or(None)
        .unwrap_or_else(Utc::now);

    QuizContext { name, started_at }
}

pub async fn push_flash(
    session: &Session,
    level: FlashLevel,
    message: impl Into<String>,
) -> Result<(), AppError> {
    let mut flashes = session
        .get::<Vec<Flash>>(FLASHES_KEY)
        .await?
        .unwrap_or_default();
    flashes.push(Flash {
        level,
        message: message.into(),
    });
    session.insert(FLASHES_KEY, flashes).await?;
    Ok(())
}

pub async fn take_flashes(session: &Session) -> Vec<Flash> {
    match session.remove::<Vec<Flash>>(FLASHES_KEY).await {
        Ok(flashes) => flashes.unwrap_or_default(),
        Err(e) => {
            log::warn!("Dropping unreadable flash messages: {}", e);
            Vec::new()
        }
    }
}

/// Template context every page starts from.
pub async fn base_context(session: &Session) -> Context {
    let mut context = Context::new();
    context.insert("flashes", &take_flashes(session).await);
    context.insert("is_admin", &is_admin(session).await);
    context
}
