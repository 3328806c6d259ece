use serde::{Deserialize, Serialize};

/// Operands of an addition request together with its result.
///
/// Built from the `num1` and `num2` query parameters. The operands cannot be
/// changed after construction and `sum` stays `None` until the calculator
/// service has run. A `sum` sent by the client is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calculation {
    num1: i32,
    num2: i32,
    #[serde(skip_deserializing)]
    sum: Option<i32>,
}

impl Calculation {
    pub fn new(num1: i32, num2: i32) -> Self {
        Self {
            num1,
            num2,
            sum: None,
        }
    }

    pub fn num1(&self) -> i32 {
        self.num1
    }

    pub fn num2(&self) -> i32 {
        self.num2
    }

    /// The computed sum, or `None` if the service has not run yet.
    pub fn sum(&self) -> Option<i32> {
        self.sum
    }

    /// Consumes the calculation and returns it with `sum` filled in.
    pub fn with_sum(self, sum: i32) -> Self {
        debug_assert!(self.sum.is_none(), "sum must only be set once");
        Self {
            sum: Some(sum),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn sum_is_absent_after_construction() {
        let calculation = Calculation::new(2, 3);
        assert_eq!(calculation.num1(), 2);
        assert_eq!(calculation.num2(), 3);
        assert_eq!(calculation.sum(), None);
    }

    #[test]
    fn with_sum_keeps_operands() {
        let calculation = Calculation::new(-5, 5).with_sum(0);
        assert_eq!(calculation.num1(), -5);
        assert_eq!(calculation.num2(), 5);
        assert_eq!(calculation.sum(), Some(0));
    }

    #[test]
    fn client_supplied_sum_is_ignored() {
        let calculation: Calculation =
            serde_json::from_value(json!({"num1": 1, "num2": 2, "sum": 100})).unwrap();
        assert_eq!(calculation, Calculation::new(1, 2));
    }

    #[test]
    fn serializes_all_fields() {
        let body = serde_json::to_value(Calculation::new(2, 3).with_sum(5)).unwrap();
        assert_eq!(body, json!({"num1": 2, "num2": 3, "sum": 5}));
    }
}
