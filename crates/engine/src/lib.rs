pub use costs::{Cost, NewCost};
pub use error::EngineError;
pub use incomes::{Income, NewIncome};
pub use money::MoneyCents;
use sea_orm::{QueryOrder, prelude::*};
pub use summary::{MONTH_LABELS, MonthBucket, monthly_summary};

mod costs;
mod error;
mod incomes;
mod money;
mod summary;

type ResultEngine<T> = Result<T, EngineError>;

/// Record store over an injected database connection.
///
/// The engine holds no in-memory state of its own; every read operates on a
/// fully-materialized snapshot pulled from the store, so concurrent requests
/// need no coordination here.
#[derive(Clone, Debug)]
pub struct Engine {
    database: DatabaseConnection,
}

impl Engine {
    pub fn new(database: DatabaseConnection) -> Self {
        Self { database }
    }

    /// Insert an income record, returning it with its assigned id.
    pub async fn create_income(&self, income: NewIncome) -> ResultEngine<Income> {
        income.validate()?;
        let model = incomes::ActiveModel::from(&income)
            .insert(&self.database)
            .await?;
        Ok(model.into())
    }

    /// All income records, newest date first.
    pub async fn incomes(&self) -> ResultEngine<Vec<Income>> {
        let models = incomes::Entity::find()
            .order_by_desc(incomes::Column::Date)
            .all(&self.database)
            .await?;
        Ok(models.into_iter().map(Income::from).collect())
    }

    /// Delete an income by id. Unknown ids are a silent no-op.
    pub async fn delete_income(&self, id: i32) -> ResultEngine<()> {
        incomes::Entity::delete_by_id(id)
            .exec(&self.database)
            .await?;
        Ok(())
    }

    /// Insert a cost record, returning it with its assigned id.
    pub async fn create_cost(&self, cost: NewCost) -> ResultEngine<Cost> {
        cost.validate()?;
        let model = costs::ActiveModel::from(&cost)
            .insert(&self.database)
            .await?;
        Ok(model.into())
    }

    /// All cost records, newest date first.
    pub async fn costs(&self) -> ResultEngine<Vec<Cost>> {
        let models = costs::Entity::find()
            .order_by_desc(costs::Column::Date)
            .all(&self.database)
            .await?;
        Ok(models.into_iter().map(Cost::from).collect())
    }

    /// Delete a cost by id. Unknown ids are a silent no-op.
    pub async fn delete_cost(&self, id: i32) -> ResultEngine<()> {
        costs::Entity::delete_by_id(id).exec(&self.database).await?;
        Ok(())
    }

    /// Loads both full record lists and runs the pure monthly aggregation.
    ///
    /// A failure to load either list propagates whole; there is no partial
    /// summary.
    pub async fn monthly_summary(&self) -> ResultEngine<[MonthBucket; 12]> {
        let incomes = self.incomes().await?;
        let costs = self.costs().await?;
        Ok(summary::monthly_summary(&incomes, &costs))
    }
}
