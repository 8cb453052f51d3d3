use std::str::FromStr;

use serde::Serialize;

use crate::{core::error::InvalidInputError, quantity::currency::Ringgit};

/// Average monthly electricity bill.
///
/// Only constructible from a finite, strictly positive amount, which is what makes every
/// division further down the estimation safe. The upper bound keeps the lifetime projections
/// finite.
#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, derive_more::Display, derive_more::Into)]
#[serde(transparent)]
pub struct BillAmount(Ringgit);

impl BillAmount {
    pub const MAX: f64 = 1e12;
}

impl TryFrom<f64> for BillAmount {
    type Error = InvalidInputError;

    fn try_from(amount: f64) -> Result<Self, Self::Error> {
        if amount.is_nan() {
            Err(InvalidInputError::NotANumber(amount.to_string()))
        } else if !amount.is_finite() {
            Err(InvalidInputError::NotFinite)
        } else if amount <= 0.0 {
            Err(InvalidInputError::NotPositive(amount))
        } else if amount > Self::MAX {
            Err(InvalidInputError::TooLarge(amount))
        } else {
            Ok(Self(Ringgit(amount)))
        }
    }
}

impl FromStr for BillAmount {
    type Err = InvalidInputError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let amount = text
            .trim()
            .parse::<f64>()
            .map_err(|_| InvalidInputError::NotANumber(text.to_owned()))?;
        Self::try_from(amount)
    }
}
