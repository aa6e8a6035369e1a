//! Cost record primitives.
//!
//! A `Cost` is a standalone expense with material and labor components, not
//! tied to any income event.

use chrono::NaiveDate;
use sea_orm::{ActiveValue, entity::prelude::*};

use crate::{EngineError, MoneyCents, ResultEngine};

/// A stored cost record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cost {
    pub id: i32,
    pub date: NaiveDate,
    pub description: String,
    pub material_cost: MoneyCents,
    /// Labor on a standalone cost counts as real expense; the summary folds
    /// it into `total_cost` (unlike income-side labor).
    pub labor_cost: MoneyCents,
}

/// Payload for creating a cost record. Both monetary fields are required.
#[derive(Clone, Debug, Default)]
pub struct NewCost {
    pub date: NaiveDate,
    pub description: String,
    pub material_cost: MoneyCents,
    pub labor_cost: MoneyCents,
}

impl NewCost {
    pub(crate) fn validate(&self) -> ResultEngine<()> {
        for (field, value) in [
            ("materialCost", self.material_cost),
            ("laborCost", self.labor_cost),
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
#[sea_orm(table_name = "costs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub date: Date,
    pub description: String,
    pub material_cost_cents: i64,
    pub labor_cost_cents: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&NewCost> for ActiveModel {
    fn from(cost: &NewCost) -> Self {
        Self {
            id: ActiveValue::NotSet,
            date: ActiveValue::Set(cost.date),
            description: ActiveValue::Set(cost.description.clone()),
            material_cost_cents: ActiveValue::Set(cost.material_cost.cents()),
            labor_cost_cents: ActiveValue::Set(cost.labor_cost.cents()),
        }
    }
}

impl From<Model> for Cost {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            date: model.date,
            description: model.description,
            material_cost: MoneyCents::new(model.material_cost_cents),
            labor_cost: MoneyCents::new(model.labor_cost_cents),
        }
    }
}
