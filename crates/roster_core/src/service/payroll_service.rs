//! Monthly salary computation.
//!
//! # Invariants
//! - `paid = salary + bonus - deductions + overtime - leave`, where
//!   `overtime = overtime_days * overtime_rate` and
//!   `leave = leave_taken * leave_deduction_amount`.
//! - Totals are computed from unrounded parts, then rounded half away from
//!   zero to two decimals.
//! - Negative results are returned as computed.

use crate::model::payroll::{SalaryInput, SalarySlip};
use log::debug;

/// Computes the salary slip for one month of `input`.
pub fn compute_salary_slip(input: &SalaryInput) -> SalarySlip {
    let total_overtime_amount =
        input.overtime_days.unwrap_or(0.0) * input.overtime_rate.unwrap_or(0.0);
    let total_leave_deduction =
        input.leave_taken.unwrap_or(0.0) * input.leave_deduction_amount.unwrap_or(0.0);
    let total_paid_salary = input.salary_amount + input.bonus.unwrap_or(0.0)
        - input.deductions.unwrap_or(0.0)
        + total_overtime_amount
        - total_leave_deduction;

    debug!("event=salary_slip module=service status=ok");

    SalarySlip {
        month: input.month.clone(),
        year: input.year,
        employee_name: input.employee_name.clone(),
        total_overtime_amount: round_cents(total_overtime_amount),
        total_leave_deduction: round_cents(total_leave_deduction),
        total_paid_salary: round_cents(total_paid_salary),
    }
}

fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::round_cents;

    #[test]
    fn round_cents_rounds_half_away_from_zero() {
        assert_eq!(round_cents(10.125), 10.13);
        assert_eq!(round_cents(-10.125), -10.13);
        assert_eq!(round_cents(7.0), 7.0);
    }
}
