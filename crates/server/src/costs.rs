//! Cost record API endpoints

use api_types::cost::{CostNew, CostView};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{ServerError, parse_money, server::ServerState};
use engine::{Cost, NewCost};

fn view(cost: Cost) -> CostView {
    CostView {
        id: cost.id,
        date: cost.date,
        description: cost.description,
        material_cost_cents: cost.material_cost.cents(),
        labor_cost_cents: cost.labor_cost.cents(),
    }
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<CostView>>, ServerError> {
    let costs = state.engine.costs().await?;
    Ok(Json(costs.into_iter().map(view).collect()))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CostNew>,
) -> Result<(StatusCode, Json<CostView>), ServerError> {
    let cost = state
        .engine
        .create_cost(NewCost {
            date: payload.date,
            description: payload.description,
            material_cost: parse_money("materialCost", &payload.material_cost)?,
            labor_cost: parse_money("laborCost", &payload.labor_cost)?,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(view(cost))))
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ServerError> {
    state.engine.delete_cost(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
