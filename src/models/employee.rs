//! Employee model.
//!
//! The engine only needs an employee's identity and monthly salary; the
//! hourly rate is derived from the salary and the policy divisor.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::{MAX_MONTHLY_SALARY, WagePolicy};
use crate::error::{EngineError, EngineResult};

/// Represents an employee whose punches are being paid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name, used for export labels.
    #[serde(default)]
    pub name: Option<String>,
    /// Monthly base salary. Falls back to the policy default when absent.
    #[serde(default)]
    pub salary: Option<Decimal>,
}

impl Employee {
    /// Returns the monthly salary, or the policy default when none is set.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidEmployee`] if the salary is not positive or
    /// exceeds [`MAX_MONTHLY_SALARY`].
    pub fn monthly_salary(&self, policy: &WagePolicy) -> EngineResult<Decimal> {
        match self.salary {
            Some(salary) if salary <= Decimal::ZERO => Err(EngineError::InvalidEmployee {
                field: "salary".to_string(),
                message: format!("must be positive, got {}", salary),
            }),
            Some(salary) if salary > MAX_MONTHLY_SALARY => Err(EngineError::InvalidEmployee {
                field: "salary".to_string(),
                message: format!("must not exceed {}, got {}", MAX_MONTHLY_SALARY, salary),
            }),
            Some(salary) => Ok(salary),
            None => Ok(policy.default_monthly_salary()),
        }
    }

    /// Returns the hourly rate: monthly salary divided by the policy's
    /// standard monthly hours.
    ///
    /// # Examples
    ///
    /// ```
    /// use wage_engine::config::WagePolicy;
    /// use wage_engine::models::Employee;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     id: "emp_001".to_string(),
    ///     name: None,
    ///     salary: Some(Decimal::from(36000)),
    /// };
    /// let rate = employee.hourly_rate(&WagePolicy::default()).unwrap();
    /// assert_eq!(rate, Decimal::from(150));
    /// ```
    pub fn hourly_rate(&self, policy: &WagePolicy) -> EngineResult<Decimal> {
        Ok(self.monthly_salary(policy)? / policy.standard_monthly_hours())
    }

    /// Name for display, falling back to the id.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(self.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn create_test_employee(salary: Option<Decimal>) -> Employee {
        Employee {
            id: "emp_001".to_string(),
            name: Some("Lin".to_string()),
            salary,
        }
    }

    #[test]
    fn test_deserialize_employee_with_salary() {
        let json = r#"{"id": "emp_001", "name": "Lin", "salary": "36000"}"#;
        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.salary, Some(Decimal::from(36000)));
        assert_eq!(employee.display_name(), "Lin");
    }

    #[test]
    fn test_deserialize_employee_without_salary() {
        let employee: Employee = serde_json::from_str(r#"{"id": "emp_002"}"#).unwrap();
        assert_eq!(employee.salary, None);
        assert_eq!(employee.display_name(), "emp_002");
    }

    #[test]
    fn test_missing_salary_uses_policy_default() {
        let employee = create_test_employee(None);
        let policy = WagePolicy::default();
        assert_eq!(employee.monthly_salary(&policy).unwrap(), Decimal::from(30000));
        assert_eq!(employee.hourly_rate(&policy).unwrap(), Decimal::from(125));
    }

    #[test]
    fn test_hourly_rate_keeps_full_precision() {
        let employee = create_test_employee(Some(Decimal::from(31000)));
        let rate = employee.hourly_rate(&WagePolicy::default()).unwrap();
        assert_eq!(rate.round_dp(4), Decimal::from_str("129.1667").unwrap());
        assert!(rate.scale() > 4);
    }

    #[test]
    fn test_non_positive_salary_rejected() {
        let employee = create_test_employee(Some(Decimal::ZERO));
        match employee.hourly_rate(&WagePolicy::default()) {
            Err(EngineError::InvalidEmployee { field, .. }) => assert_eq!(field, "salary"),
            other => panic!("Expected InvalidEmployee, got {:?}", other),
        }
    }

    #[test]
    fn test_salary_above_maximum_rejected() {
        let employee = create_test_employee(Some(Decimal::MAX));
        match employee.hourly_rate(&WagePolicy::default()) {
            Err(EngineError::InvalidEmployee { field, message }) => {
                assert_eq!(field, "salary");
                assert!(message.contains("must not exceed"));
            }
            other => panic!("Expected InvalidEmployee, got {:?}", other),
        }
    }

    #[test]
    fn test_maximum_salary_accepted() {
        let employee = create_test_employee(Some(MAX_MONTHLY_SALARY));
        let policy = WagePolicy::default();
        assert_eq!(employee.monthly_salary(&policy).unwrap(), MAX_MONTHLY_SALARY);
        assert!(employee.hourly_rate(&policy).is_ok());
    }
}
