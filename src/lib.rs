pub mod app;
pub mod config;
pub mod display;
pub mod errors;
pub mod handlers;
pub mod history;
pub mod i18n;
pub mod ledger;
pub mod models;
pub mod storage;
pub mod ui;
pub mod state;

pub use app::router;
pub use config::Config;
pub use ledger::{Ledger, Limits};
pub use state::AppState;
pub use storage::{load_balance, resolve_data_path};
