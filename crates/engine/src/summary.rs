//! Monthly aggregation over the full record set.
//!
//! [`monthly_summary`] is a pure function: it takes snapshots of both record
//! lists and returns a fixed sequence of 12 month buckets, January first.
//! Bucketing looks at month-of-year only; records from different years land
//! in the same bucket.

use chrono::Datelike;

use crate::{Cost, Income, MoneyCents};

/// Short month labels, calendar order, as shown by the original application.
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Fev", "Mar", "Abr", "Mai", "Jun", "Jul", "Ago", "Set", "Out", "Nov", "Dez",
];

/// Aggregated totals for one calendar month.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonthBucket {
    pub month: &'static str,
    pub total_income: MoneyCents,
    /// Material/gasoline/utilities from incomes plus material *and* labor
    /// from standalone costs. Income-side labor never lands here; it is
    /// reported through `total_labor` instead.
    pub total_cost: MoneyCents,
    /// Labor from income records only.
    pub total_labor: MoneyCents,
    pub total_products: MoneyCents,
    pub profit: MoneyCents,
}

impl MonthBucket {
    fn zeroed(month: &'static str) -> Self {
        Self {
            month,
            total_income: MoneyCents::ZERO,
            total_cost: MoneyCents::ZERO,
            total_labor: MoneyCents::ZERO,
            total_products: MoneyCents::ZERO,
            profit: MoneyCents::ZERO,
        }
    }
}

/// Buckets all records by month-of-year and sums the five derived metrics.
///
/// Total over well-formed input: empty lists yield 12 all-zero buckets, and
/// the inputs are never mutated.
pub fn monthly_summary(incomes: &[Income], costs: &[Cost]) -> [MonthBucket; 12] {
    let mut buckets = MONTH_LABELS.map(MonthBucket::zeroed);

    for income in incomes {
        let bucket = &mut buckets[income.date.month0() as usize];
        bucket.total_income += income.amount;
        bucket.total_cost += income.material_cost + income.gasoline_cost + income.utilities_cost;
        bucket.total_labor += income.labor_cost;
        bucket.total_products += income.product_amount;
    }

    for cost in costs {
        let bucket = &mut buckets[cost.date.month0() as usize];
        bucket.total_cost += cost.material_cost + cost.labor_cost;
    }

    for bucket in &mut buckets {
        bucket.profit = bucket.total_income - bucket.total_cost;
    }

    buckets
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn income(date: NaiveDate, cents: [i64; 6]) -> Income {
        let [amount, product, material, labor, gasoline, utilities] = cents;
        Income {
            id: 0,
            date,
            description: "income".to_string(),
            amount: MoneyCents::new(amount),
            product_amount: MoneyCents::new(product),
            material_cost: MoneyCents::new(material),
            labor_cost: MoneyCents::new(labor),
            gasoline_cost: MoneyCents::new(gasoline),
            utilities_cost: MoneyCents::new(utilities),
        }
    }

    fn cost(date: NaiveDate, material: i64, labor: i64) -> Cost {
        Cost {
            id: 0,
            date,
            description: "cost".to_string(),
            material_cost: MoneyCents::new(material),
            labor_cost: MoneyCents::new(labor),
        }
    }

    #[test]
    fn empty_inputs_yield_twelve_zero_buckets() {
        let buckets = monthly_summary(&[], &[]);

        assert_eq!(buckets.len(), 12);
        assert_eq!(buckets[0].month, "Jan");
        assert_eq!(buckets[11].month, "Dez");
        for bucket in &buckets {
            assert!(bucket.total_income.is_zero());
            assert!(bucket.total_cost.is_zero());
            assert!(bucket.total_labor.is_zero());
            assert!(bucket.total_products.is_zero());
            assert!(bucket.profit.is_zero());
        }
    }

    #[test]
    fn month_labels_are_unique_and_in_calendar_order() {
        let mut labels = MONTH_LABELS.to_vec();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), 12);
        assert_eq!(MONTH_LABELS[2], "Mar");
        assert_eq!(MONTH_LABELS[5], "Jun");
    }

    #[test]
    fn income_labor_is_excluded_from_cost_but_cost_labor_is_not() {
        // One income in March: amount 100.00, labor 20.00, material 10.00.
        // One standalone cost in March: material 5.00, labor 15.00.
        let incomes = [income(date(2024, 3, 10), [100_00, 0, 10_00, 20_00, 0, 0])];
        let costs = [cost(date(2024, 3, 20), 5_00, 15_00)];

        let march = monthly_summary(&incomes, &costs)[2];
        assert_eq!(march.total_income.cents(), 100_00);
        assert_eq!(march.total_cost.cents(), 30_00);
        assert_eq!(march.total_labor.cents(), 20_00);
        assert_eq!(march.total_products.cents(), 0);
        assert_eq!(march.profit.cents(), 70_00);
    }

    #[test]
    fn cost_table_only_month() {
        let costs = [cost(date(2023, 6, 1), 50_00, 10_00)];

        let june = monthly_summary(&[], &costs)[5];
        assert_eq!(june.total_income.cents(), 0);
        assert_eq!(june.total_cost.cents(), 60_00);
        assert_eq!(june.total_labor.cents(), 0);
        assert_eq!(june.total_products.cents(), 0);
        assert_eq!(june.profit.cents(), -60_00);
    }

    #[test]
    fn years_collapse_into_the_same_bucket() {
        let incomes = [
            income(date(2022, 4, 1), [10_00, 0, 0, 0, 0, 0]),
            income(date(2025, 4, 30), [5_00, 0, 0, 0, 0, 0]),
        ];

        let buckets = monthly_summary(&incomes, &[]);
        assert_eq!(buckets[3].total_income.cents(), 15_00);
        for (index, bucket) in buckets.iter().enumerate() {
            if index != 3 {
                assert!(bucket.total_income.is_zero());
            }
        }
    }

    #[test]
    fn record_affects_only_its_own_month() {
        let incomes = [income(date(2024, 1, 31), [7_00, 0, 0, 0, 0, 0])];
        let costs = [cost(date(2024, 12, 1), 3_00, 0)];

        let buckets = monthly_summary(&incomes, &costs);
        assert_eq!(buckets[0].total_income.cents(), 7_00);
        assert_eq!(buckets[0].total_cost.cents(), 0);
        assert_eq!(buckets[11].total_cost.cents(), 3_00);
        assert_eq!(buckets[11].profit.cents(), -3_00);
    }

    #[test]
    fn bucket_totals_add_up_to_the_full_dataset() {
        let incomes = [
            income(date(2024, 1, 5), [100_00, 10_00, 5_00, 8_00, 1_00, 2_00]),
            income(date(2024, 7, 5), [200_00, 0, 0, 12_00, 0, 0]),
            income(date(2023, 7, 9), [50_00, 20_00, 3_00, 0, 0, 0]),
        ];
        let costs = [
            cost(date(2024, 2, 1), 9_00, 4_00),
            cost(date(2024, 7, 1), 1_00, 1_00),
        ];

        let buckets = monthly_summary(&incomes, &costs);

        let total_income: i64 = buckets.iter().map(|b| b.total_income.cents()).sum();
        let total_cost: i64 = buckets.iter().map(|b| b.total_cost.cents()).sum();
        let total_labor: i64 = buckets.iter().map(|b| b.total_labor.cents()).sum();
        let total_products: i64 = buckets.iter().map(|b| b.total_products.cents()).sum();
        let profit: i64 = buckets.iter().map(|b| b.profit.cents()).sum();

        assert_eq!(total_income, 350_00);
        // Income-side material/gasoline/utilities (5+1+2+3) plus both cost
        // records (9+4+1+1); income-side labor (8+12) stays out.
        assert_eq!(total_cost, 26_00);
        assert_eq!(total_labor, 20_00);
        assert_eq!(total_products, 30_00);
        assert_eq!(profit, total_income - total_cost);
    }

    #[test]
    fn summary_is_deterministic() {
        let incomes = [income(date(2024, 9, 2), [42_00, 0, 7_00, 3_00, 0, 0])];
        let costs = [cost(date(2024, 9, 3), 2_00, 2_00)];

        let first = monthly_summary(&incomes, &costs);
        let second = monthly_summary(&incomes, &costs);
        assert_eq!(first, second);
    }
}
