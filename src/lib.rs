//! `fin_catalog` is a Rust library backing a showcase catalog of bank
//! products: cash credits, deposits, debit and credit cards, and promotions.
//!
//! It provides:
//! - **Calculators** for the two product kinds with numeric terms: an
//!   annuity repayment schedule for credits and a monthly-capitalization
//!   income projection for deposits.
//! - **Formatting** of amounts for display in the ru-RU locale.
//! - A **product model** matching the catalog's JSON records, tagged by
//!   category.
//! - A file-backed **catalog store** with the CRUD operations an admin
//!   panel needs.
//!
//! ## Usage
//!
//! Add `fin_catalog` to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! fin_catalog = "0.1.0"
//! ```
//!
//! Then run a calculation and format it for display:
//!
//! ```rust
//! use fin_catalog::{calculate_credit_payment, calculate_deposit_income, format_currency};
//!
//! fn main() {
//!     let credit = calculate_credit_payment(1_000_000.0, 12.0, 12);
//!     println!("Monthly payment: {}", format_currency(credit.monthly_payment));
//!     println!("Overpayment:     {}", format_currency(credit.overpayment));
//!
//!     let deposit = calculate_deposit_income(500_000.0, 16.0, 6);
//!     println!("Total income:    {}", format_currency(deposit.total_income));
//! }
//! ```
//!
//! The calculators never fail: degenerate input (a non-positive amount, a
//! negative rate, a zero term) yields an all-zero result, so they can sit
//! directly behind a form that recomputes on every change.

pub mod calculator;
pub mod catalog;
pub mod format;
pub mod product;

pub use calculator::{
    CalculationResult, CreditCalculation, DepositCalculation, calculate_credit_payment,
    calculate_deposit_income,
};
pub use catalog::Catalog;
pub use format::{format_currency, format_number};
pub use product::{
    CreditCardProduct, CreditProduct, DebitCardProduct, DepositProduct, Product, ProductCategory,
    ProductCommon, PromoProduct,
};
