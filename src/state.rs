use crate::ledger::Ledger;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub ledger: Arc<Mutex<Ledger>>,
    pub payment_url: Option<Arc<str>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, ledger: Ledger) -> Self {
        Self {
            data_path,
            ledger: Arc::new(Mutex::new(ledger)),
            payment_url: None,
        }
    }

    pub fn with_payment_url(mut self, url: Option<String>) -> Self {
        self.payment_url = url.map(Arc::from);
        self
    }
}
