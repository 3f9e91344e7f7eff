use axum::http::StatusCode;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Debt,
    Credit,
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Debt => f.write_str("debt"),
            Bound::Credit => f.write_str("credit"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LedgerError {
    #[error("{bound} limit of {limit} would be exceeded (balance would be {candidate})")]
    OutOfBounds {
        bound: Bound,
        candidate: f64,
        limit: f64,
    },
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("nothing to undo")]
    EmptyHistory,
    #[error("nothing to apply")]
    NoOp,
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    /// Converts a ledger failure the client has to see. `NoOp` is not one:
    /// it yields `None` and the caller answers with the unchanged state.
    pub fn rejection(err: LedgerError) -> Option<Self> {
        let status = match err {
            LedgerError::OutOfBounds { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            LedgerError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            LedgerError::EmptyHistory => StatusCode::CONFLICT,
            LedgerError::NoOp => return None,
        };
        Some(Self {
            status,
            message: err.to_string(),
        })
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
