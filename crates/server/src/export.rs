//! CSV download endpoints.
//!
//! The original application shipped a single spreadsheet with three
//! worksheets (entries, costs, summary); here each one is its own CSV
//! download, keeping the worksheet column titles. Amounts are rendered as
//! two-decimal strings.

use axum::{extract::State, http::header, response::IntoResponse};
use chrono::NaiveDate;
use csv::Writer;
use serde::Serialize;

use crate::{ServerError, server::ServerState};

fn csv_response(
    filename: &'static str,
    writer: Writer<Vec<u8>>,
) -> Result<impl IntoResponse, ServerError> {
    let data = writer
        .into_inner()
        .map_err(|err| ServerError::Internal(format!("failed to finalize export: {err}")))?;
    let body = String::from_utf8(data)
        .map_err(|err| ServerError::Internal(format!("export is not valid utf-8: {err}")))?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        body,
    ))
}

fn serialize_row<R: Serialize>(writer: &mut Writer<Vec<u8>>, row: R) -> Result<(), ServerError> {
    writer
        .serialize(row)
        .map_err(|err| ServerError::Internal(format!("failed to serialize export row: {err}")))
}

pub async fn incomes(State(state): State<ServerState>) -> Result<impl IntoResponse, ServerError> {
    #[derive(Serialize)]
    struct Row {
        #[serde(rename = "Data")]
        date: NaiveDate,
        #[serde(rename = "Descrição")]
        description: String,
        #[serde(rename = "Valor Entrada")]
        amount: String,
    }

    let mut writer = Writer::from_writer(vec![]);
    for income in state.engine.incomes().await? {
        serialize_row(
            &mut writer,
            Row {
                date: income.date,
                description: income.description,
                amount: income.amount.to_string(),
            },
        )?;
    }

    csv_response("entradas.csv", writer)
}

pub async fn costs(State(state): State<ServerState>) -> Result<impl IntoResponse, ServerError> {
    #[derive(Serialize)]
    struct Row {
        #[serde(rename = "Data")]
        date: NaiveDate,
        #[serde(rename = "Descrição")]
        description: String,
        #[serde(rename = "Custo Material")]
        material_cost: String,
        #[serde(rename = "Custo Mão de Obra")]
        labor_cost: String,
    }

    let mut writer = Writer::from_writer(vec![]);
    for cost in state.engine.costs().await? {
        serialize_row(
            &mut writer,
            Row {
                date: cost.date,
                description: cost.description,
                material_cost: cost.material_cost.to_string(),
                labor_cost: cost.labor_cost.to_string(),
            },
        )?;
    }

    csv_response("custos.csv", writer)
}

pub async fn summary(State(state): State<ServerState>) -> Result<impl IntoResponse, ServerError> {
    #[derive(Serialize)]
    struct Row {
        #[serde(rename = "Mês")]
        month: &'static str,
        #[serde(rename = "Total Entradas")]
        total_income: String,
        #[serde(rename = "Total Custos")]
        total_cost: String,
        #[serde(rename = "Lucro")]
        profit: String,
    }

    let mut writer = Writer::from_writer(vec![]);
    for bucket in state.engine.monthly_summary().await? {
        serialize_row(
            &mut writer,
            Row {
                month: bucket.month,
                total_income: bucket.total_income.to_string(),
                total_cost: bucket.total_cost.to_string(),
                profit: bucket.profit.to_string(),
            },
        )?;
    }

    csv_response("resumo.csv", writer)
}
