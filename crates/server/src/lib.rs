use axum::{Json, http::StatusCode, response::IntoResponse};
use engine::{EngineError, MoneyCents};

use serde::Serialize;
pub use server::{app, run, run_with_listener, spawn_with_listener};

mod costs;
mod export;
mod incomes;
mod server;
mod summary;

pub mod types {
    pub mod income {
        pub use api_types::income::{IncomeNew, IncomeView};
    }

    pub mod cost {
        pub use api_types::cost::{CostNew, CostView};
    }

    pub mod summary {
        pub use api_types::summary::MonthSummary;
    }
}

pub enum ServerError {
    Engine(EngineError),
    /// A create payload failed validation; `field` names the offending field.
    Validation {
        field: &'static str,
        message: String,
    },
    Internal(String),
}

#[derive(Serialize)]
struct Error {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<&'static str>,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, message, field) = match self {
            ServerError::Engine(EngineError::Database(db_err)) => {
                tracing::error!("database error: {db_err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                    None,
                )
            }
            ServerError::Engine(err @ EngineError::InvalidAmount(_)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, err.to_string(), None)
            }
            ServerError::Validation { field, message } => {
                (StatusCode::BAD_REQUEST, message, Some(field))
            }
            ServerError::Internal(err) => {
                tracing::error!("{err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                    None,
                )
            }
        };

        (status, Json(Error { message, field })).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}

/// Parses a required decimal-string amount, rejecting negatives.
pub(crate) fn parse_money(field: &'static str, raw: &str) -> Result<MoneyCents, ServerError> {
    let amount: MoneyCents = raw.parse().map_err(|err: EngineError| ServerError::Validation {
        field,
        message: err.to_string(),
    })?;
    if amount.is_negative() {
        return Err(ServerError::Validation {
            field,
            message: "must not be negative".to_string(),
        });
    }
    Ok(amount)
}

/// Optional income cost components default to zero when absent.
pub(crate) fn parse_money_opt(
    field: &'static str,
    raw: Option<&str>,
) -> Result<MoneyCents, ServerError> {
    match raw {
        None => Ok(MoneyCents::ZERO),
        Some(raw) => parse_money(field, raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_400() {
        let res = ServerError::Validation {
            field: "amount",
            message: "invalid amount".to_string(),
        }
        .into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn engine_invalid_amount_maps_to_422() {
        let res = ServerError::from(EngineError::InvalidAmount("x".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn internal_maps_to_500() {
        let res = ServerError::Internal("boom".to_string()).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn parse_money_rejects_negative_and_garbage() {
        assert!(parse_money("amount", "10.50").is_ok());
        assert!(parse_money("amount", "-1").is_err());
        assert!(parse_money("amount", "abc").is_err());
    }

    #[test]
    fn absent_optional_amount_defaults_to_zero() {
        assert_eq!(
            parse_money_opt("laborCost", None).ok(),
            Some(MoneyCents::ZERO)
        );
    }
}
