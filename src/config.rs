use crate::ledger::Limits;
use crate::storage::resolve_data_path;
use std::{env, path::PathBuf};
use tracing::warn;

const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub data_path: PathBuf,
    pub limits: Limits,
    pub payment_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, std::io::Error> {
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let limits = Limits::new(
            parse_limit("DEBT_LIMIT", env::var("DEBT_LIMIT").ok()),
            parse_limit("CREDIT_LIMIT", env::var("CREDIT_LIMIT").ok()),
        );

        Ok(Self {
            port,
            data_path: resolve_data_path()?,
            limits,
            payment_url: parse_payment_url(env::var("PAYMENT_URL").ok()),
        })
    }
}

fn parse_limit(name: &str, raw: Option<String>) -> f64 {
    let Some(raw) = raw else {
        return Limits::DEFAULT;
    };

    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => value,
        _ => {
            warn!("ignoring {name}={raw:?}, using {}", Limits::DEFAULT);
            Limits::DEFAULT
        }
    }
}

/// Link for the "pay with app" button. Only http(s) URLs are rendered.
fn parse_payment_url(raw: Option<String>) -> Option<String> {
    let url = raw?.trim().to_string();
    if url.is_empty() {
        return None;
    }
    if url.starts_with("https://") || url.starts_with("http://") {
        Some(url)
    } else {
        warn!("ignoring PAYMENT_URL={url:?}, expected an http(s) URL");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_defaults_when_unset() {
        assert_eq!(parse_limit("DEBT_LIMIT", None), Limits::DEFAULT);
    }

    #[test]
    fn limit_accepts_non_negative_numbers() {
        assert_eq!(parse_limit("DEBT_LIMIT", Some(" 35 ".into())), 35.0);
        assert_eq!(parse_limit("CREDIT_LIMIT", Some("0".into())), 0.0);
        assert_eq!(parse_limit("CREDIT_LIMIT", Some("12.5".into())), 12.5);
    }

    #[test]
    fn payment_url_requires_http_scheme() {
        assert_eq!(parse_payment_url(None), None);
        assert_eq!(parse_payment_url(Some("  ".into())), None);
        assert_eq!(parse_payment_url(Some("javascript:alert(1)".into())), None);
        assert_eq!(
            parse_payment_url(Some(" https://pay.example/me ".into())).as_deref(),
            Some("https://pay.example/me")
        );
    }

    #[test]
    fn limit_falls_back_on_bad_values() {
        for raw in ["lots", "-5", "inf", "NaN"] {
            assert_eq!(parse_limit("DEBT_LIMIT", Some(raw.into())), Limits::DEFAULT);
        }
    }
}
