//! Initial schema migration.
//!
//! Creates the two record tables:
//!
//! - `incomes`: revenue events with an optional cost breakdown
//! - `costs`: standalone expenses
//!
//! All monetary columns store integer cents.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
enum Incomes {
    Table,
    Id,
    Date,
    Description,
    AmountCents,
    ProductAmountCents,
    MaterialCostCents,
    LaborCostCents,
    GasolineCostCents,
    UtilitiesCostCents,
}

#[derive(Iden)]
enum Costs {
    Table,
    Id,
    Date,
    Description,
    MaterialCostCents,
    LaborCostCents,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Incomes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Incomes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Incomes::Date).date().not_null())
                    .col(ColumnDef::new(Incomes::Description).string().not_null())
                    .col(ColumnDef::new(Incomes::AmountCents).big_integer().not_null())
                    .col(
                        ColumnDef::new(Incomes::ProductAmountCents)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Incomes::MaterialCostCents)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Incomes::LaborCostCents)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Incomes::GasolineCostCents)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Incomes::UtilitiesCostCents)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-incomes-date")
                    .table(Incomes::Table)
                    .col(Incomes::Date)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Costs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Costs::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Costs::Date).date().not_null())
                    .col(ColumnDef::new(Costs::Description).string().not_null())
                    .col(
                        ColumnDef::new(Costs::MaterialCostCents)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Costs::LaborCostCents)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-costs-date")
                    .table(Costs::Table)
                    .col(Costs::Date)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Costs::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Incomes::Table).to_owned())
            .await
    }
}
