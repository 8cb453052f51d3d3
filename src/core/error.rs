use crate::core::{bill::BillAmount, constants::NoSunDays};

/// Rejected user input. Nothing is calculated once this is raised.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum InvalidInputError {
    #[error("`{0}` is not a number, enter the monthly bill amount in MYR")]
    NotANumber(String),

    #[error("the bill amount must be a finite number")]
    NotFinite,

    #[error("the bill amount must be greater than zero, got {0}")]
    NotPositive(f64),

    #[error("the bill amount must not exceed {max}, got {0}", max = BillAmount::MAX)]
    TooLarge(f64),

    #[error("a month has at most {max} no-sun days, got {0}", max = NoSunDays::MAX)]
    TooManyNoSunDays(u8),
}
