use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub mod income {
    use super::*;

    /// Request body for creating an income record.
    ///
    /// Monetary values are decimal strings (`"123.45"`, `.` or `,` as
    /// separator). The component fields default to zero when absent.
    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct IncomeNew {
        /// Calendar date, `YYYY-MM-DD`.
        pub date: NaiveDate,
        pub description: String,
        /// Total charged to the customer.
        pub amount: String,
        pub product_amount: Option<String>,
        pub material_cost: Option<String>,
        pub labor_cost: Option<String>,
        pub gasoline_cost: Option<String>,
        pub utilities_cost: Option<String>,
    }

    /// A stored income record. Amounts are integer cents.
    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct IncomeView {
        pub id: i32,
        pub date: NaiveDate,
        pub description: String,
        pub amount_cents: i64,
        pub product_amount_cents: i64,
        pub material_cost_cents: i64,
        pub labor_cost_cents: i64,
        pub gasoline_cost_cents: i64,
        pub utilities_cost_cents: i64,
    }
}

pub mod cost {
    use super::*;

    /// Request body for creating a cost record. Both monetary fields are
    /// required decimal strings.
    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct CostNew {
        /// Calendar date, `YYYY-MM-DD`.
        pub date: NaiveDate,
        pub description: String,
        pub material_cost: String,
        pub labor_cost: String,
    }

    /// A stored cost record. Amounts are integer cents.
    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct CostView {
        pub id: i32,
        pub date: NaiveDate,
        pub description: String,
        pub material_cost_cents: i64,
        pub labor_cost_cents: i64,
    }
}

pub mod summary {
    use super::*;

    /// One of the twelve month buckets returned by `GET /api/summary`.
    ///
    /// Amounts are integer cents. `total_labor` carries income-side labor
    /// only; cost-side labor is already folded into `total_cost`.
    #[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
    #[serde(rename_all = "camelCase")]
    pub struct MonthSummary {
        pub month: String,
        pub total_income: i64,
        pub total_cost: i64,
        pub total_labor: i64,
        pub total_products: i64,
        pub profit: i64,
    }
}
