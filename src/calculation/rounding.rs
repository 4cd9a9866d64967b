//! Averages, medians and the rounding policy applied to them.
//!
//! Averages are kept as exact [`Decimal`] quotients until the last step and
//! then rounded half-up. Medians follow the usual definition: the middle value
//! for an odd count, the mean of the two middle values for an even count.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{RosterError, RosterResult};

/// Returns the arithmetic mean of `values`, or `None` if there are none.
///
/// # Example
///
/// ```
/// use roster_stats::calculation::mean;
/// use rust_decimal::Decimal;
///
/// assert_eq!(mean([10, 20, 40]), Some(Decimal::new(70, 0) / Decimal::new(3, 0)));
/// assert_eq!(mean(Vec::<u32>::new()), None);
/// ```
pub fn mean<I>(values: I) -> Option<Decimal>
where
    I: IntoIterator<Item = u32>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0u64, 0usize), |(sum, count), v| (sum + u64::from(v), count + 1));

    if count == 0 {
        return None;
    }
    Some(Decimal::from(sum) / Decimal::from(count))
}

/// Returns the median of `values`, or `None` if there are none.
///
/// # Example
///
/// ```
/// use roster_stats::calculation::median;
/// use rust_decimal::Decimal;
///
/// assert_eq!(median(&[40, 10, 30]), Some(Decimal::from(30)));
/// assert_eq!(median(&[10, 20, 30, 40]), Some(Decimal::from(25)));
/// ```
pub fn median(values: &[u32]) -> Option<Decimal> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();

    let mid = sorted.len() / 2;
    match sorted.len() {
        0 => None,
        n if n % 2 == 1 => Some(Decimal::from(sorted[mid])),
        _ => Some((Decimal::from(sorted[mid - 1]) + Decimal::from(sorted[mid])) / Decimal::TWO),
    }
}

/// Rounds half-up to `dp` decimal places.
pub fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds half-up to a whole number.
///
/// # Errors
///
/// Returns `CalculationError` if the rounded value does not fit in a `u32`.
pub fn round_to_whole(value: Decimal) -> RosterResult<u32> {
    let rounded = round_half_up(value, 0);
    rounded
        .to_u32()
        .ok_or_else(|| RosterError::CalculationError {
            message: format!("{} is not a non-negative whole number", rounded),
        })
}
