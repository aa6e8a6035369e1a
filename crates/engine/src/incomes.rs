//! Income record primitives.
//!
//! An `Income` is a revenue event with an optional cost breakdown (material,
//! labor, gasoline, utilities) and a product-value component.

use chrono::NaiveDate;
use sea_orm::{ActiveValue, entity::prelude::*};

use crate::{EngineError, MoneyCents, ResultEngine};

/// A stored income record. Immutable once created; the only mutation the
/// engine offers is deletion by id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Income {
    pub id: i32,
    pub date: NaiveDate,
    pub description: String,
    /// Total charged to the customer.
    pub amount: MoneyCents,
    /// Value of products sold as part of this income.
    pub product_amount: MoneyCents,
    pub material_cost: MoneyCents,
    /// Labor embedded in the income. Surfaced through the summary's
    /// `total_labor`, never counted as cost.
    pub labor_cost: MoneyCents,
    pub gasoline_cost: MoneyCents,
    pub utilities_cost: MoneyCents,
}

/// Payload for creating an income record. The component fields default to
/// zero when the caller omits them.
#[derive(Clone, Debug, Default)]
pub struct NewIncome {
    pub date: NaiveDate,
    pub description: String,
    pub amount: MoneyCents,
    pub product_amount: MoneyCents,
    pub material_cost: MoneyCents,
    pub labor_cost: MoneyCents,
    pub gasoline_cost: MoneyCents,
    pub utilities_cost: MoneyCents,
}

impl NewIncome {
    /// All monetary fields on a record must be non-negative.
    pub(crate) fn validate(&self) -> ResultEngine<()> {
        for (field, value) in [
            ("amount", self.amount),
            ("productAmount", self.product_amount),
            ("materialCost", self.material_cost),
            ("laborCost", self.labor_cost),
            ("gasolineCost", self.gasoline_cost),
            ("utilitiesCost", self.utilities_cost),
        ] {
            if value.is_negative() {
                return Err(EngineError::InvalidAmount(format!(
                    "{field} must not be negative"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "incomes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub date: Date,
    pub description: String,
    pub amount_cents: i64,
    pub product_amount_cents: i64,
    pub material_cost_cents: i64,
    pub labor_cost_cents: i64,
    pub gasoline_cost_cents: i64,
    pub utilities_cost_cents: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&NewIncome> for ActiveModel {
    fn from(income: &NewIncome) -> Self {
        Self {
            id: ActiveValue::NotSet,
            date: ActiveValue::Set(income.date),
            description: ActiveValue::Set(income.description.clone()),
            amount_cents: ActiveValue::Set(income.amount.cents()),
            product_amount_cents: ActiveValue::Set(income.product_amount.cents()),
            material_cost_cents: ActiveValue::Set(income.material_cost.cents()),
            labor_cost_cents: ActiveValue::Set(income.labor_cost.cents()),
            gasoline_cost_cents: ActiveValue::Set(income.gasoline_cost.cents()),
            utilities_cost_cents: ActiveValue::Set(income.utilities_cost.cents()),
        }
    }
}

impl From<Model> for Income {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            date: model.date,
            description: model.description,
            amount: MoneyCents::new(model.amount_cents),
            product_amount: MoneyCents::new(model.product_amount_cents),
            material_cost: MoneyCents::new(model.material_cost_cents),
            labor_cost: MoneyCents::new(model.labor_cost_cents),
            gasoline_cost: MoneyCents::new(model.gasoline_cost_cents),
            utilities_cost: MoneyCents::new(model.utilities_cost_cents),
        }
    }
}
