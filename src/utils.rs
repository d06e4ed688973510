use std::ops::Add;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum UtilsError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// A primitive number that [`mean`] can average.
pub trait Scalar: Copy {
    fn to_f64(self) -> f64;
}

macro_rules! impl_scalar {
    ($($ty:ty),*) => {
        $(
            impl Scalar for $ty {
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_scalar!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

/// Return the sum of two numbers.
pub fn add_numbers<T: Add<Output = T>>(a: T, b: T) -> T {
    a + b
}

/// Compute the arithmetic mean of a collection of numbers.
///
/// The values are collected before summing. Integers wider than 53 bits
/// are rounded to the nearest `f64`. Infinities and NaN are not
/// rejected and propagate through the result.
///
/// # Errors
/// Returns [`UtilsError::InvalidArgument`] if `values` is empty.
pub fn mean<I>(values: I) -> Result<f64, UtilsError>
where
    I: IntoIterator,
    I::Item: Scalar,
{
    let vals: Vec<f64> = values.into_iter().map(Scalar::to_f64).collect();
    if vals.is_empty() {
        return Err(UtilsError::InvalidArgument(
            "mean() requires at least one value".to_string(),
        ));
    }
    Ok(vals.iter().sum::<f64>() / vals.len() as f64)
}
