//! Monthly summary API endpoint

use api_types::summary::MonthSummary;
use axum::{Json, extract::State};

use crate::{ServerError, server::ServerState};

/// `GET /api/summary`: always exactly 12 entries, January first.
pub async fn get_summary(
    State(state): State<ServerState>,
) -> Result<Json<Vec<MonthSummary>>, ServerError> {
    let buckets = state.engine.monthly_summary().await?;

    let summary = buckets
        .into_iter()
        .map(|bucket| MonthSummary {
            month: bucket.month.to_string(),
            total_income: bucket.total_income.cents(),
            total_cost: bucket.total_cost.cents(),
            total_labor: bucket.total_labor.cents(),
            total_products: bucket.total_products.cents(),
            profit: bucket.profit.cents(),
        })
        .collect();

    Ok(Json(summary))
}
