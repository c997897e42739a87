use roster_core::{compute_salary_slip, SalaryInput};
use serde_json::json;

#[test]
fn slip_combines_overtime_leave_bonus_and_deductions() {
    let input = SalaryInput {
        month: Some("March".to_string()),
        year: Some(2025),
        employee_name: Some("Meera Joshi".to_string()),
        salary_amount: 30_000.0,
        overtime_days: Some(2.0),
        overtime_rate: Some(1_250.5),
        leave_taken: Some(1.5),
        leave_deduction_amount: Some(1_000.333),
        bonus: Some(500.0),
        deductions: Some(200.25),
    };

    let slip = compute_salary_slip(&input);
    assert_eq!(slip.total_overtime_amount, 2_501.0);
    assert_eq!(slip.total_leave_deduction, 1_500.5);
    // 30000 + 500 - 200.25 + 2501 - 1500.4995, rounded from unrounded parts.
    assert_eq!(slip.total_paid_salary, 31_300.25);
    assert_eq!(slip.month.as_deref(), Some("March"));
    assert_eq!(slip.year, Some(2025));
    assert_eq!(slip.employee_name.as_deref(), Some("Meera Joshi"));
}

#[test]
fn missing_amounts_count_as_zero() {
    let slip = compute_salary_slip(&SalaryInput::new(18_000.0));
    assert_eq!(slip.total_overtime_amount, 0.0);
    assert_eq!(slip.total_leave_deduction, 0.0);
    assert_eq!(slip.total_paid_salary, 18_000.0);

    // A rate without days still yields no overtime.
    let mut input = SalaryInput::new(18_000.0);
    input.overtime_rate = Some(900.0);
    input.leave_taken = Some(3.0);
    assert_eq!(compute_salary_slip(&input).total_paid_salary, 18_000.0);
}

#[test]
fn paid_salary_is_rounded_to_two_decimals() {
    let mut input = SalaryInput::new(10.0);
    input.bonus = Some(0.125);
    assert_eq!(compute_salary_slip(&input).total_paid_salary, 10.13);

    input.deductions = Some(20.0);
    assert_eq!(compute_salary_slip(&input).total_paid_salary, -9.88);
}

#[test]
fn salary_wire_shape_uses_form_field_names() {
    let input: SalaryInput = serde_json::from_value(json!({
        "salaryAmount": 25000.0,
        "overtimeDays": 1.0,
        "overtimeRate": 800.0,
        "leaveDeductionAmount": 400.0
    }))
    .unwrap();
    assert_eq!(input.leave_taken, None);

    let slip = serde_json::to_value(compute_salary_slip(&input)).unwrap();
    assert_eq!(slip["totalOvertimeAmount"], json!(800.0));
    assert_eq!(slip["totalLeaveDeduction"], json!(0.0));
    assert_eq!(slip["totalPaidSalary"], json!(25800.0));
}
