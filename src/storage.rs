use crate::models::StoredBalance;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::{error, warn};

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/state.json"))
}

/// Reads the stored balance. Anything missing or unreadable counts as no
/// stored balance.
pub async fn load_balance(path: &Path) -> Option<f64> {
    let bytes = match fs::read(path).await {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return None,
        Err(err) => {
            error!("failed to read data file: {err}");
            return None;
        }
    };

    let stored: StoredBalance = match serde_json::from_slice(&bytes) {
        Ok(stored) => stored,
        Err(err) => {
            error!("failed to parse data file: {err}");
            return None;
        }
    };

    match stored.cookie_debt.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => {
            warn!("stored balance {:?} is not a number", stored.cookie_debt);
            None
        }
    }
}

pub async fn persist_balance(path: &Path, balance: f64) -> Result<(), std::io::Error> {
    let stored = StoredBalance {
        cookie_debt: balance.to_string(),
    };
    let payload = serde_json::to_vec_pretty(&stored)?;
    fs::write(path, payload).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(tag: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let mut path = env::temp_dir();
        path.push(format!("cookie_debt_{tag}_{}_{}.json", std::process::id(), nanos));
        path
    }

    #[tokio::test]
    async fn missing_file_has_no_balance() {
        assert_eq!(load_balance(&temp_path("missing")).await, None);
    }

    #[tokio::test]
    async fn persisted_balance_is_a_decimal_string() {
        let path = temp_path("persist");
        persist_balance(&path, -7.5).await.unwrap();

        let raw: serde_json::Value =
            serde_json::from_slice(&fs::read(&path).await.unwrap()).unwrap();
        assert_eq!(raw["cookieDebt"], serde_json::json!("-7.5"));
        assert_eq!(load_balance(&path).await, Some(-7.5));

        fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn corrupt_file_is_ignored() {
        let path = temp_path("corrupt");
        fs::write(&path, b"{ not json").await.unwrap();
        assert_eq!(load_balance(&path).await, None);

        fs::write(&path, br#"{"cookieDebt":"lots"}"#).await.unwrap();
        assert_eq!(load_balance(&path).await, None);

        fs::remove_file(&path).await.unwrap();
    }
}
