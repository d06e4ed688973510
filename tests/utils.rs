use proptest::prelude::*;
use sample_package::dataframe::Value;
use sample_package::{UtilsError, add_numbers, mean};

#[test]
fn add_numbers_sums_its_arguments() {
    assert_eq!(add_numbers(2, 3), 5);
    assert_eq!(add_numbers(-1.0, 1.5), 0.5);
}

#[test]
fn add_numbers_is_commutative() {
    let pairs = [(0.25, -4.0), (1e10, 3.5), (-7.0, -0.125)];
    for (a, b) in pairs {
        assert_eq!(add_numbers(a, b), a + b);
        assert_eq!(add_numbers(a, b), add_numbers(b, a));
    }
}

#[test]
fn mean_basic() {
    assert_eq!(mean([1, 2, 3, 4]).unwrap(), 2.5);
    assert_eq!(mean(vec![7.0]).unwrap(), 7.0);
}

#[test]
fn mean_lies_between_min_and_max() {
    let vals = [3.5, -2.0, 10.25, 0.0, 4.0];
    let avg = mean(vals).unwrap();

    assert_eq!(avg, vals.iter().sum::<f64>() / vals.len() as f64);
    let min = vals.iter().copied().fold(f64::INFINITY, f64::min);
    let max = vals.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    assert!((min..=max).contains(&avg));
}

#[test]
fn mean_accepts_integer_types() {
    assert_eq!(mean(vec![1i64, 2, 3, 4]).unwrap(), 2.5);
    assert_eq!(mean([10u64, 20]).unwrap(), 15.0);
    assert_eq!(mean(vec![1usize, 2]).unwrap(), 1.5);
    assert_eq!(mean([0.5f32, 1.5]).unwrap(), 1.0);
}

#[test]
fn mean_of_range_ids() {
    let spark = sample_package::session::Session::builder()
        .get_or_create()
        .unwrap();
    let ids: Vec<i64> = spark
        .range(10)
        .unwrap()
        .collect()
        .iter()
        .filter_map(|row| match row[0] {
            Value::Long(val) => Some(val),
            _ => None,
        })
        .collect();
    assert_eq!(ids.len(), 10);
    assert_eq!(mean(ids).unwrap(), 4.5);
}

#[test]
fn mean_accepts_lazy_iterators() {
    assert_eq!(mean((1..=5).map(|i| i as f64)).unwrap(), 3.0);
}

#[test]
fn mean_raises_on_empty() {
    let error = mean(Vec::<f64>::new()).unwrap_err();
    assert!(matches!(error, UtilsError::InvalidArgument(_)));
    assert!(error.to_string().contains("at least one value"));
}

#[test]
fn mean_propagates_non_finite_values() {
    assert!(mean([1.0, f64::NAN]).unwrap().is_nan());
    assert_eq!(mean([1.0, f64::INFINITY]).unwrap(), f64::INFINITY);
}

fn finite() -> impl Strategy<Value = f64> {
    -1e12f64..1e12f64
}

proptest! {
    #[test]
    fn add_numbers_matches_plus(a in finite(), b in finite()) {
        prop_assert_eq!(add_numbers(a, b), a + b);
        prop_assert_eq!(add_numbers(a, b), add_numbers(b, a));
    }

    #[test]
    fn add_numbers_on_integers(a in -1_000_000i64..1_000_000, b in -1_000_000i64..1_000_000) {
        prop_assert_eq!(add_numbers(a, b), a + b);
        prop_assert_eq!(add_numbers(a, b), add_numbers(b, a));
    }

    #[test]
    fn mean_is_sum_over_len(vals in prop::collection::vec(finite(), 1..64)) {
        let avg = mean(vals.clone()).unwrap();
        prop_assert_eq!(avg, vals.iter().sum::<f64>() / vals.len() as f64);

        // sum/len may land a few ulps outside [min, max].
        let min = vals.iter().copied().fold(f64::INFINITY, f64::min);
        let max = vals.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let tol = 1e-12 * min.abs().max(max.abs()).max(1.0);
        prop_assert!(avg >= min - tol && avg <= max + tol, "{avg} outside [{min}, {max}]");
    }

    #[test]
    fn mean_fails_only_on_empty(vals in prop::collection::vec(finite(), 0..8)) {
        prop_assert_eq!(mean(vals.clone()).is_err(), vals.is_empty());
    }
}
