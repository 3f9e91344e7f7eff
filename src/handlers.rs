use crate::display::debt_view;
use crate::errors::{AppError, LedgerError};
use crate::i18n::{message_table, translate, Language};
use crate::ledger::Ledger;
use crate::models::{
    CookieRequest, EditRequest, HistoryItem, LangQuery, PaymentRequest, StateResponse,
    TranslationsResponse,
};
use crate::state::AppState;
use crate::storage::persist_balance;
use crate::ui::render_index;
use axum::{
    extract::{Query, State},
    http::{header::ACCEPT_LANGUAGE, HeaderMap},
    response::{Html, Redirect},
    Form, Json,
};
use tracing::{debug, error};

pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<LangQuery>,
    headers: HeaderMap,
) -> Html<String> {
    let lang = request_language(&query, &headers);
    let ledger = state.ledger.lock().await;
    Html(render_index(
        &debt_view(&ledger),
        lang,
        state.payment_url.as_deref(),
    ))
}

pub async fn get_state(
    State(state): State<AppState>,
    Query(query): Query<LangQuery>,
    headers: HeaderMap,
) -> Json<StateResponse> {
    let lang = request_language(&query, &headers);
    let ledger = state.ledger.lock().await;
    Json(to_response(&ledger, lang))
}

pub async fn get_history(State(state): State<AppState>) -> Json<Vec<HistoryItem>> {
    let ledger = state.ledger.lock().await;
    let items = ledger
        .history()
        .iter()
        .map(|entry| HistoryItem {
            kind: entry.kind,
            delta: entry.delta,
            label: entry.label.clone(),
            prior_balance: entry.prior_balance,
            recorded_at: entry.recorded_at.to_rfc3339(),
        })
        .collect();
    Json(items)
}

pub async fn get_translations(
    Query(query): Query<LangQuery>,
    headers: HeaderMap,
) -> Json<TranslationsResponse> {
    let lang = request_language(&query, &headers);
    Json(TranslationsResponse {
        lang,
        dir: lang.dir(),
        messages: message_table(lang),
    })
}

pub async fn cookie(
    State(state): State<AppState>,
    Query(query): Query<LangQuery>,
    headers: HeaderMap,
    Json(payload): Json<CookieRequest>,
) -> Result<Json<StateResponse>, AppError> {
    let lang = request_language(&query, &headers);
    let name = cookie_name(&payload);
    let response = apply(&state, lang, |ledger| ledger.record_cookie(&name, payload.price)).await?;
    Ok(Json(response))
}

pub async fn payment(
    State(state): State<AppState>,
    Query(query): Query<LangQuery>,
    headers: HeaderMap,
    Json(payload): Json<PaymentRequest>,
) -> Result<Json<StateResponse>, AppError> {
    let lang = request_language(&query, &headers);
    let response = apply(&state, lang, |ledger| ledger.record_payment(payload.amount)).await?;
    Ok(Json(response))
}

pub async fn edit(
    State(state): State<AppState>,
    Query(query): Query<LangQuery>,
    headers: HeaderMap,
    Json(payload): Json<EditRequest>,
) -> Result<Json<StateResponse>, AppError> {
    let lang = request_language(&query, &headers);
    let response = apply(&state, lang, |ledger| ledger.record_manual_edit(&payload.value)).await?;
    Ok(Json(response))
}

pub async fn undo(
    State(state): State<AppState>,
    Query(query): Query<LangQuery>,
    headers: HeaderMap,
) -> Result<Json<StateResponse>, AppError> {
    let lang = request_language(&query, &headers);
    let response = apply(&state, lang, Ledger::undo).await?;
    Ok(Json(response))
}

pub async fn clear(
    State(state): State<AppState>,
    Query(query): Query<LangQuery>,
    headers: HeaderMap,
) -> Result<Json<StateResponse>, AppError> {
    let lang = request_language(&query, &headers);
    let response = apply(&state, lang, clear_ledger).await?;
    Ok(Json(response))
}

pub async fn cookie_form(
    State(state): State<AppState>,
    Form(payload): Form<CookieRequest>,
) -> Result<Redirect, AppError> {
    let name = cookie_name(&payload);
    apply(&state, Language::DEFAULT, |ledger| ledger.record_cookie(&name, payload.price)).await?;
    Ok(Redirect::to("/"))
}

pub async fn undo_form(State(state): State<AppState>) -> Result<Redirect, AppError> {
    apply(&state, Language::DEFAULT, Ledger::undo).await?;
    Ok(Redirect::to("/"))
}

pub async fn clear_form(State(state): State<AppState>) -> Result<Redirect, AppError> {
    apply(&state, Language::DEFAULT, clear_ledger).await?;
    Ok(Redirect::to("/"))
}

/// Runs one ledger operation under the lock and persists the result.
/// The save is best effort: a failed write is logged and the in-memory
/// state stands.
async fn apply<F>(state: &AppState, lang: Language, op: F) -> Result<StateResponse, AppError>
where
    F: FnOnce(&mut Ledger) -> Result<f64, LedgerError>,
{
    let mut ledger = state.ledger.lock().await;
    match op(&mut ledger) {
        Ok(balance) => {
            if let Err(err) = persist_balance(&state.data_path, balance).await {
                error!("failed to persist balance {balance}: {err}");
            }
        }
        Err(err) => {
            debug!("request rejected: {err}");
            if let Some(rejection) = AppError::rejection(err) {
                return Err(rejection);
            }
        }
    }

    Ok(to_response(&ledger, lang))
}

fn clear_ledger(ledger: &mut Ledger) -> Result<f64, LedgerError> {
    ledger.clear();
    Ok(ledger.current_balance())
}

fn cookie_name(payload: &CookieRequest) -> String {
    payload
        .name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or("Cookie")
        .to_string()
}

fn request_language(query: &LangQuery, headers: &HeaderMap) -> Language {
    if let Some(code) = query.lang.as_deref() {
        return Language::from_code(code);
    }

    headers
        .get(ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok())
        .map(Language::from_accept_language)
        .unwrap_or(Language::DEFAULT)
}

fn to_response(ledger: &Ledger, lang: Language) -> StateResponse {
    let view = debt_view(ledger);
    let limits = ledger.limits();
    StateResponse {
        balance: view.balance,
        label: translate(lang, view.label_key).to_string(),
        amount: view.amount,
        tone: view.tone,
        intensity: view.intensity,
        background_alpha: view.background_alpha,
        border_alpha: view.border_alpha,
        can_undo: view.can_undo,
        history_len: ledger.history().len(),
        debt_limit: limits.debt,
        credit_limit: limits.credit,
    }
}
