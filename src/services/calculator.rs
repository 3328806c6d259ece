//! # Calculator Service
//!
//! Stateless arithmetic behind the `/plus` endpoint. The service knows nothing
//! about HTTP; it takes a [`Calculation`] and returns the result.
//!
//! Addition is checked: a sum outside the `i32` range is reported as
//! [`CalculationError::Overflow`] instead of wrapping around.

use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::models::Calculation;

/// Errors that can occur while performing a calculation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalculationError {
    #[error("sum of {num1} and {num2} overflows a 32-bit integer")]
    Overflow { num1: i32, num2: i32 },
}

/// Service performing the calculator's arithmetic.
#[derive(Debug, Clone, Copy, Default)]
pub struct CalculatorService;

impl CalculatorService {
    pub fn new() -> Self {
        Self
    }

    /// Adds the two operands of `calculation`.
    ///
    /// # Errors
    ///
    /// Returns [`CalculationError::Overflow`] if the sum does not fit in `i32`.
    #[instrument(skip(self))]
    pub fn plus_two_numbers(&self, calculation: &Calculation) -> Result<i32, CalculationError> {
        let (num1, num2) = (calculation.num1(), calculation.num2());

        match num1.checked_add(num2) {
            Some(sum) => {
                debug!(sum, "Addition completed");
                Ok(sum)
            }
            None => {
                warn!(num1, num2, "Addition overflowed");
                Err(CalculationError::Overflow { num1, num2 })
            }
        }
    }
}
