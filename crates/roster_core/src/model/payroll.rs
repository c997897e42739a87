//! Monthly salary inputs and the computed slip.
//!
//! # Invariants
//! - Only `salary_amount` is required; every other amount defaults to zero
//!   when absent.
//! - Nothing here is persisted.

use serde::{Deserialize, Serialize};

/// Figures entered for one employee and month.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryInput {
    pub month: Option<String>,
    pub year: Option<i32>,
    pub employee_name: Option<String>,
    pub salary_amount: f64,
    pub overtime_days: Option<f64>,
    /// Amount paid per overtime day.
    pub overtime_rate: Option<f64>,
    pub leave_taken: Option<f64>,
    /// Amount deducted per leave day.
    pub leave_deduction_amount: Option<f64>,
    pub bonus: Option<f64>,
    pub deductions: Option<f64>,
}

impl SalaryInput {
    pub fn new(salary_amount: f64) -> Self {
        Self {
            salary_amount,
            ..Self::default()
        }
    }
}

/// Computed monthly totals, rounded to two decimals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalarySlip {
    pub month: Option<String>,
    pub year: Option<i32>,
    pub employee_name: Option<String>,
    pub total_overtime_amount: f64,
    pub total_leave_deduction: f64,
    pub total_paid_salary: f64,
}
