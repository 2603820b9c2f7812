use super::{f64_values, sample_table};
use crate::error::PrepError;
use crate::pipeline::split::{split_train_test, SplitConfig};
use anyhow::Result;
use polars::prelude::*;

fn by_id(test_fraction: f64) -> SplitConfig {
    SplitConfig {
        test_fraction,
        sort_key: Some("id".to_owned()),
    }
}

#[test]
fn boundary_split_on_sorted_ids() -> Result<()> {
    // Reversed input proves ordering comes from the key, not file order.
    let df = sample_table().reverse();
    let (train, test) = split_train_test(&df, &by_id(0.2))?;

    assert_eq!(
        f64_values(&train, "id"),
        vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]
    );
    assert_eq!(f64_values(&test, "id"), vec![9.0, 10.0]);
    Ok(())
}

#[test]
fn split_is_deterministic() -> Result<()> {
    let df = sample_table().reverse();
    let cfg = by_id(0.3);

    let (train_a, test_a) = split_train_test(&df, &cfg)?;
    let (train_b, test_b) = split_train_test(&df, &cfg)?;
    assert!(train_a.equals(&train_b));
    assert!(test_a.equals(&test_b));
    Ok(())
}

#[test]
fn partition_sizes_are_exact() -> Result<()> {
    let df = sample_table();
    for fraction in [0.0, 0.1, 0.25, 0.33, 0.5, 0.75, 0.9, 1.0] {
        let (train, test) = split_train_test(&df, &by_id(fraction))?;
        let expected_test = (fraction * 10.0).ceil() as usize;
        assert_eq!(test.height(), expected_test, "fraction {fraction}");
        assert_eq!(train.height() + test.height(), df.height());
    }
    Ok(())
}

#[test]
fn fraction_edges_produce_empty_partitions() -> Result<()> {
    let df = sample_table();

    let (train, test) = split_train_test(&df, &by_id(0.0))?;
    assert_eq!((train.height(), test.height()), (10, 0));

    let (train, test) = split_train_test(&df, &by_id(1.0))?;
    assert_eq!((train.height(), test.height()), (0, 10));
    Ok(())
}

#[test]
fn empty_table_splits_without_error() -> Result<()> {
    let df = DataFrame::new(vec![Column::from(Series::new(
        "id".into(),
        Vec::<f64>::new(),
    ))])
    .unwrap();

    let (train, test) = split_train_test(&df, &by_id(0.5))?;
    assert_eq!((train.height(), test.height()), (0, 0));
    Ok(())
}

#[test]
fn absent_sort_key_keeps_row_order() -> Result<()> {
    let df = sample_table().reverse();
    let cfg = SplitConfig {
        test_fraction: 0.2,
        sort_key: Some("no_such_column".to_owned()),
    };

    let (train, _) = split_train_test(&df, &cfg)?;
    assert_eq!(
        f64_values(&train, "id"),
        vec![10.0, 9.0, 8.0, 7.0, 6.0, 5.0, 4.0, 3.0]
    );
    Ok(())
}

#[test]
fn stable_sort_preserves_tied_row_order() -> Result<()> {
    let df = DataFrame::new(vec![
        Column::from(Series::new("id".into(), vec![2i64, 1, 2, 1])),
        Column::from(Series::new("Amount".into(), vec![1.0f64, 2.0, 3.0, 4.0])),
    ])
    .unwrap();

    let (train, test) = split_train_test(&df, &by_id(0.5))?;
    // Ties keep their original relative order within each key.
    assert_eq!(f64_values(&train, "Amount"), vec![2.0, 4.0]);
    assert_eq!(f64_values(&test, "Amount"), vec![1.0, 3.0]);
    Ok(())
}

#[test]
fn null_sort_keys_go_last() -> Result<()> {
    let df = DataFrame::new(vec![
        Column::from(Series::new("id".into(), vec![Some(2.0f64), None, Some(1.0)])),
        Column::from(Series::new("Amount".into(), vec![1.0f64, 2.0, 3.0])),
    ])
    .unwrap();

    let (train, test) = split_train_test(&df, &by_id(1.0 / 3.0))?;
    assert_eq!(f64_values(&train, "Amount"), vec![3.0, 1.0]);
    assert_eq!(f64_values(&test, "Amount"), vec![2.0]);
    Ok(())
}

#[test]
fn out_of_range_fraction_is_config_error() {
    let df = sample_table();
    let err = split_train_test(&df, &by_id(1.5)).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<PrepError>(),
        Some(PrepError::Config(_))
    ));
    assert!(err.to_string().contains("test_fraction"));
}
