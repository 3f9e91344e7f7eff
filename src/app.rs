use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/cookie", post(handlers::cookie_form))
        .route("/undo", post(handlers::undo_form))
        .route("/clear", post(handlers::clear_form))
        .route("/api/state", get(handlers::get_state))
        .route("/api/history", get(handlers::get_history))
        .route("/api/translations", get(handlers::get_translations))
        .route("/api/cookie", post(handlers::cookie))
        .route("/api/payment", post(handlers::payment))
        .route("/api/edit", post(handlers::edit))
        .route("/api/undo", post(handlers::undo))
        .route("/api/clear", post(handlers::clear))
        .with_state(state)
}
