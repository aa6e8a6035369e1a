//! Income record API endpoints

use api_types::income::{IncomeNew, IncomeView};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{ServerError, parse_money, parse_money_opt, server::ServerState};
use engine::{Income, NewIncome};

fn view(income: Income) -> IncomeView {
    IncomeView {
        id: income.id,
        date: income.date,
        description: income.description,
        amount_cents: income.amount.cents(),
        product_amount_cents: income.product_amount.cents(),
        material_cost_cents: income.material_cost.cents(),
        labor_cost_cents: income.labor_cost.cents(),
        gasoline_cost_cents: income.gasoline_cost.cents(),
        utilities_cost_cents: income.utilities_cost.cents(),
    }
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<IncomeView>>, ServerError> {
    let incomes = state.engine.incomes().await?;
    Ok(Json(incomes.into_iter().map(view).collect()))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<IncomeNew>,
) -> Result<(StatusCode, Json<IncomeView>), ServerError> {
    let income = state
        .engine
        .create_income(NewIncome {
            date: payload.date,
            description: payload.description,
            amount: parse_money("amount", &payload.amount)?,
            product_amount: parse_money_opt("productAmount", payload.product_amount.as_deref())?,
            material_cost: parse_money_opt("materialCost", payload.material_cost.as_deref())?,
            labor_cost: parse_money_opt("laborCost", payload.labor_cost.as_deref())?,
            gasoline_cost: parse_money_opt("gasolineCost", payload.gasoline_cost.as_deref())?,
            utilities_cost: parse_money_opt("utilitiesCost", payload.utilities_cost.as_deref())?,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(view(income))))
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ServerError> {
    state.engine.delete_income(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
