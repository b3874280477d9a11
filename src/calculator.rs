//! Credit and deposit calculators.
//!
//! Both calculators are total functions: degenerate input (non-positive
//! amount, negative rate, zero term) yields an all-zero result instead of an
//! error, so a caller wired to a form never has to special-case bad values.
//! All arithmetic is plain `f64`; non-finite inputs propagate per IEEE 754.

use serde::{Deserialize, Serialize};

/// Repayment figures for a fixed-payment (annuity) credit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CreditCalculation {
    /// The fixed monthly payment.
    pub monthly_payment: f64,
    /// The total amount paid over the whole term.
    pub total_payment: f64,
    /// Interest cost of the credit: `total_payment - amount`.
    pub overpayment: f64,
}

/// Income figures for a deposit with monthly capitalization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepositCalculation {
    /// Average income per month over the term. Because interest is
    /// capitalized this is not the first month's income once the term
    /// exceeds one month.
    pub monthly_income: f64,
    /// Total income accrued over the whole term.
    pub total_income: f64,
}

/// Result of running the calculator matching a product's kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CalculationResult {
    Credit(CreditCalculation),
    Deposit(DepositCalculation),
}

/// Rounds to the cent, half away from zero. Matches rounding the value
/// scaled by 100 and dividing back, applied to each output independently.
fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn monthly_rate(annual_rate: f64) -> f64 {
    annual_rate / 100.0 / 12.0
}

/// Calculates the annuity repayment schedule for a credit.
///
/// The annuity formula is: PMT = P * [i(1 + i)^n] / [(1 + i)^n - 1], with a
/// straight-line fallback `P / n` when the rate is zero.
///
/// # Arguments
///
/// * `amount` - The principal amount of the credit.
/// * `annual_rate` - The annual interest rate as a percentage (e.g., 9.9 for 9.9%).
/// * `months` - The term of the credit in months.
///
/// Each output is rounded to two decimals on its own; `total_payment` is
/// derived from the unrounded monthly payment, so it is not guaranteed to be
/// bit-identical to `monthly_payment * months` after rounding.
pub fn calculate_credit_payment(amount: f64, annual_rate: f64, months: u32) -> CreditCalculation {
    if amount <= 0.0 || annual_rate < 0.0 || months == 0 {
        return CreditCalculation {
            monthly_payment: 0.0,
            total_payment: 0.0,
            overpayment: 0.0,
        };
    }

    let rate = monthly_rate(annual_rate);

    let monthly_payment = if rate == 0.0 {
        amount / f64::from(months)
    } else {
        let growth = (1.0 + rate).powf(f64::from(months));
        amount * rate * growth / (growth - 1.0)
    };

    let total_payment = monthly_payment * f64::from(months);
    let overpayment = total_payment - amount;

    CreditCalculation {
        monthly_payment: round_to_cents(monthly_payment),
        total_payment: round_to_cents(total_payment),
        overpayment: round_to_cents(overpayment),
    }
}

/// Calculates the income of a deposit with monthly capitalization.
///
/// Interest accrues month by month on the running balance and is added back
/// to it, so each period's income grows over the term. No intermediate
/// rounding happens inside the loop.
///
/// # Arguments
///
/// * `amount` - The principal amount of the deposit.
/// * `annual_rate` - The annual interest rate as a percentage.
/// * `months` - The term of the deposit in months.
pub fn calculate_deposit_income(amount: f64, annual_rate: f64, months: u32) -> DepositCalculation {
    if amount <= 0.0 || annual_rate < 0.0 || months == 0 {
        return DepositCalculation {
            monthly_income: 0.0,
            total_income: 0.0,
        };
    }

    let rate = monthly_rate(annual_rate);

    let mut current_balance = amount;
    let mut total_income = 0.0;

    for _ in 0..months {
        let month_income = current_balance * rate;
        total_income += month_income;
        current_balance += month_income;
    }

    let monthly_income = total_income / f64::from(months);

    DepositCalculation {
        monthly_income: round_to_cents(monthly_income),
        total_income: round_to_cents(total_income),
    }
}
