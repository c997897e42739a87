//! Payroll commands

use clap::{Args, Subcommand};
use roster_core::{compute_salary_slip, SalaryInput};

#[derive(Debug, Args)]
pub struct PayrollArgs {
    #[command(subcommand)]
    pub command: PayrollCommand,
}

#[derive(Debug, Subcommand)]
pub enum PayrollCommand {
    /// Compute one month's salary slip
    Slip {
        /// Base monthly salary
        #[arg(long)]
        salary: f64,
        #[arg(long)]
        overtime_days: Option<f64>,
        /// Amount per overtime day
        #[arg(long)]
        overtime_rate: Option<f64>,
        #[arg(long)]
        leave_taken: Option<f64>,
        /// Amount deducted per leave day
        #[arg(long)]
        leave_deduction: Option<f64>,
        #[arg(long)]
        bonus: Option<f64>,
        #[arg(long)]
        deductions: Option<f64>,
    },
}

pub fn execute(args: PayrollArgs) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        PayrollCommand::Slip {
            salary,
            overtime_days,
            overtime_rate,
            leave_taken,
            leave_deduction,
            bonus,
            deductions,
        } => {
            let slip = compute_salary_slip(&SalaryInput {
                overtime_days,
                overtime_rate,
                leave_taken,
                leave_deduction_amount: leave_deduction,
                bonus,
                deductions,
                ..SalaryInput::new(salary)
            });
            println!("overtime={:.2}", slip.total_overtime_amount);
            println!("leave_deduction={:.2}", slip.total_leave_deduction);
            println!("paid={:.2}", slip.total_paid_salary);
        }
    }

    Ok(())
}
