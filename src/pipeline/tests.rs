#![expect(clippy::unwrap_used)]

mod split;

use polars::prelude::*;

/// Ten clean rows: ids 1..=10, amounts 10..=100 step 10, labels alternating
/// non-fraud/fraud.
pub(crate) fn sample_table() -> DataFrame {
    let ids: Vec<f64> = (1..=10).map(f64::from).collect();
    let amounts: Vec<f64> = (1..=10).map(|i| f64::from(i) * 10.0).collect();
    let labels: Vec<i64> = (0..10i64).map(|i| i % 2).collect();
    DataFrame::new(vec![
        Column::from(Series::new("id".into(), ids)),
        Column::from(Series::new("Amount".into(), amounts)),
        Column::from(Series::new("Class".into(), labels)),
    ])
    .unwrap()
}

/// Column values as `f64`, nulls skipped.
pub(crate) fn f64_values(df: &DataFrame, name: &str) -> Vec<f64> {
    df.column(name)
        .unwrap()
        .as_materialized_series()
        .cast(&DataType::Float64)
        .unwrap()
        .f64()
        .unwrap()
        .into_iter()
        .flatten()
        .collect()
}
