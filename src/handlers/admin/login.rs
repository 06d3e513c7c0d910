use axum::{
    extract::{Form, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::{
    data::models::{AdminConfig, AppError, FlashLevel, LoginForm},
    store::CONFIG_FILE,
    utils::{base_context, push_flash, render_template, session::set_admin},
    AppState,
};

pub async fn show_login_form(State(state): State<AppState>, session: Session) -> Html<String> {
    let mut context = base_context(&session).await;
    context.insert("title", "Admin login");
    render_template(&state.templates, "admin/login.html", context)
}

#[axum::debug_handler]
pub async fn handle_login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let cfg: AdminConfig = state.store.load(CONFIG_FILE, AdminConfig::default());

    if form.username.trim() == cfg.admin_username && form.password.trim() == cfg.admin_password {
        set_admin(&session).await?;
        log::info!("Admin {} logged in", cfg.admin_username);
        return Ok(Redirect::to("/admin").into_response());
    }

    log::warn!("Failed admin login for user: {}", form.username.trim());
    push_flash(&session, FlashLevel::Error, "Invalid credentials").await?;
    Ok(show_login_form(State(state), session).await.into_response())
}

pub async fn handle_logout(session: Session) -> Result<Redirect, AppError> {
    session.flush().await.map_err(|e| {
        log::error!("Failed to delete session: {}", e);
        AppError::SessionError("Failed to logout".into())
    })?;
    Ok(Redirect::to("/"))
}
