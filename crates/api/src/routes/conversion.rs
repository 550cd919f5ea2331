//! Currency conversion route.

use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use forex_core::{ConversionError, Forex};
use forex_shared::AppResult;
use tracing::{debug, info};

use crate::{AppState, error::error_response};

/// Creates the conversion routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/conv", get(convert))
}

/// Query parameters for a conversion.
///
/// All fields are optional so missing values surface as JSON errors rather
/// than extractor rejections.
#[derive(Debug, Default)]
pub struct ConversionQuery {
    /// Source currency code.
    pub from: Option<String>,
    /// Target currency code.
    pub to: Option<String>,
    /// Amount in the source currency, as typed by the user.
    pub amount: Option<String>,
}

impl ConversionQuery {
    /// Collects the known parameters; the first occurrence of a repeated
    /// parameter wins and unknown parameters are ignored.
    #[must_use]
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "from" => &mut query.from,
                "to" => &mut query.to,
                "amount" => &mut query.amount,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        query
    }
}

/// GET `/conv?from=USD&to=EUR&amount=10` - Convert and format an amount.
///
/// Answers `200 "€ 2.50"` or `400 {"error", "message"}`.
async fn convert(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Response {
    let query = ConversionQuery::from_pairs(pairs);
    match run(&state.forex, &query) {
        Ok(formatted) => {
            debug!(
                from = ?query.from,
                to = ?query.to,
                amount = ?query.amount,
                result = %formatted,
                "Converted amount"
            );
            (StatusCode::OK, formatted).into_response()
        }
        Err(err) => {
            info!(
                kind = err.error_code(),
                from = ?query.from,
                to = ?query.to,
                amount = ?query.amount,
                "Rejected conversion request"
            );
            error_response(&err)
        }
    }
}

fn run(forex: &Forex, query: &ConversionQuery) -> AppResult<String> {
    let amount = query
        .amount
        .as_deref()
        .ok_or(ConversionError::MissingParameter("amount"))?;
    let from = query
        .from
        .as_deref()
        .ok_or(ConversionError::MissingParameter("from"))?;
    let to = query
        .to
        .as_deref()
        .ok_or(ConversionError::MissingParameter("to"))?;

    Ok(forex.convert_request(from, to, amount)?)
}
