//! The bank product data model.
//!
//! A product is one flat JSON object tagged by its `category` field, with
//! camelCase keys. The five categories carry different payloads, so the
//! model is a sum type rather than one struct of optionals.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::calculator::{CalculationResult, calculate_credit_payment, calculate_deposit_income};

/// The five product categories the catalog serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductCategory {
    Credit,
    Deposit,
    DebitCard,
    CreditCard,
    Promo,
}

/// Fields every product carries regardless of category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCommon {
    /// Catalog-assigned identifier.
    pub id: String,
    pub bank_name: String,
    pub product_name: String,
    pub image_url: String,
    /// Where "apply" sends the visitor.
    pub application_url: String,
    /// Shown in the featured section when set.
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A cash credit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditProduct {
    #[serde(flatten)]
    pub common: ProductCommon,
    /// Annual rate as a percentage.
    pub interest_rate: f64,
    pub min_amount: f64,
    pub max_amount: f64,
    pub term_months: u32,
    pub conditions: String,
}

/// A savings deposit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositProduct {
    #[serde(flatten)]
    pub common: ProductCommon,
    /// Annual rate as a percentage.
    pub interest_rate: f64,
    pub min_amount: f64,
    pub max_amount: f64,
    pub term_months: u32,
    pub conditions: String,
}

/// A debit card. No calculator applies.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebitCardProduct {
    #[serde(flatten)]
    pub common: ProductCommon,
    pub benefits: String,
    pub conditions: String,
}

/// A credit card. The amount bounds are the credit limit range; the term is
/// chosen by the visitor, not configured on the product.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditCardProduct {
    #[serde(flatten)]
    pub common: ProductCommon,
    /// Annual rate as a percentage.
    pub interest_rate: f64,
    pub min_amount: f64,
    pub max_amount: f64,
    pub grace_period_days: u32,
    pub conditions: String,
}

/// A bank promotion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromoProduct {
    #[serde(flatten)]
    pub common: ProductCommon,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<NaiveDate>,
}

/// A catalog product of any category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "kebab-case")]
pub enum Product {
    Credit(CreditProduct),
    Deposit(DepositProduct),
    DebitCard(DebitCardProduct),
    CreditCard(CreditCardProduct),
    Promo(PromoProduct),
}

impl Product {
    pub fn category(&self) -> ProductCategory {
        match self {
            Product::Credit(_) => ProductCategory::Credit,
            Product::Deposit(_) => ProductCategory::Deposit,
            Product::DebitCard(_) => ProductCategory::DebitCard,
            Product::CreditCard(_) => ProductCategory::CreditCard,
            Product::Promo(_) => ProductCategory::Promo,
        }
    }

    pub fn common(&self) -> &ProductCommon {
        match self {
            Product::Credit(p) => &p.common,
            Product::Deposit(p) => &p.common,
            Product::DebitCard(p) => &p.common,
            Product::CreditCard(p) => &p.common,
            Product::Promo(p) => &p.common,
        }
    }

    pub fn common_mut(&mut self) -> &mut ProductCommon {
        match self {
            Product::Credit(p) => &mut p.common,
            Product::Deposit(p) => &mut p.common,
            Product::DebitCard(p) => &mut p.common,
            Product::CreditCard(p) => &mut p.common,
            Product::Promo(p) => &mut p.common,
        }
    }

    pub fn id(&self) -> &str {
        &self.common().id
    }

    pub fn is_featured(&self) -> bool {
        self.common().is_featured
    }

    /// The configured principal bounds, for categories that have them. The
    /// display layer clamps its slider to this range; the calculators
    /// themselves never enforce it.
    pub fn amount_range(&self) -> Option<(f64, f64)> {
        match self {
            Product::Credit(p) => Some((p.min_amount, p.max_amount)),
            Product::Deposit(p) => Some((p.min_amount, p.max_amount)),
            Product::CreditCard(p) => Some((p.min_amount, p.max_amount)),
            Product::DebitCard(_) | Product::Promo(_) => None,
        }
    }

    /// Runs the calculator matching this product's category at the product's
    /// configured rate: the annuity calculator for credits and credit cards,
    /// the deposit calculator for deposits. Debit cards and promos have no
    /// calculator.
    pub fn calculate(&self, amount: f64, months: u32) -> Option<CalculationResult> {
        match self {
            Product::Credit(p) => Some(CalculationResult::Credit(calculate_credit_payment(
                amount,
                p.interest_rate,
                months,
            ))),
            Product::CreditCard(p) => Some(CalculationResult::Credit(calculate_credit_payment(
                amount,
                p.interest_rate,
                months,
            ))),
            Product::Deposit(p) => Some(CalculationResult::Deposit(calculate_deposit_income(
                amount,
                p.interest_rate,
                months,
            ))),
            Product::DebitCard(_) | Product::Promo(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::CalculationResult;
    use chrono::TimeZone;
    use rstest::rstest;

    fn common(id: &str) -> ProductCommon {
        let stamp = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        ProductCommon {
            id: id.to_string(),
            bank_name: "Т-Банк".to_string(),
            product_name: "Тестовый продукт".to_string(),
            image_url: "https://example.com/card.png".to_string(),
            application_url: "https://example.com/apply".to_string(),
            is_featured: false,
            created_at: stamp,
            updated_at: stamp,
        }
    }

    fn credit_product(id: &str) -> Product {
        Product::Credit(CreditProduct {
            common: common(id),
            interest_rate: 12.0,
            min_amount: 50_000.0,
            max_amount: 3_000_000.0,
            term_months: 12,
            conditions: "Без залога".to_string(),
        })
    }

    fn deposit_product(id: &str) -> Product {
        Product::Deposit(DepositProduct {
            common: common(id),
            interest_rate: 12.0,
            min_amount: 10_000.0,
            max_amount: 10_000_000.0,
            term_months: 12,
            conditions: "С капитализацией".to_string(),
        })
    }

    fn promo_product(id: &str) -> Product {
        Product::Promo(PromoProduct {
            common: common(id),
            description: "Кэшбэк 10% на всё".to_string(),
            valid_until: NaiveDate::from_ymd_opt(2025, 12, 31),
        })
    }

    #[test]
    fn product_json_is_flat_and_tagged_by_category() {
        let json = serde_json::to_value(credit_product("100")).unwrap();
        assert_eq!(json["category"], "credit");
        assert_eq!(json["bankName"], "Т-Банк");
        assert_eq!(json["interestRate"], 12.0);
        assert_eq!(json["termMonths"], 12);
        assert!(json.get("common").is_none());
    }

    #[test]
    fn product_parses_from_original_record_shape() {
        let json = r#"{
            "id": "1718000000000",
            "category": "credit-card",
            "bankName": "Альфа-Банк",
            "productName": "Кредитная карта",
            "imageUrl": "https://example.com/cc.png",
            "applicationUrl": "https://example.com/apply",
            "isFeatured": true,
            "createdAt": "2025-06-10T08:30:00Z",
            "updatedAt": "2025-06-10T08:30:00Z",
            "interestRate": 29.9,
            "minAmount": 10000,
            "maxAmount": 500000,
            "gracePeriodDays": 60,
            "conditions": "Льготный период 60 дней"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.category(), ProductCategory::CreditCard);
        assert_eq!(product.id(), "1718000000000");
        assert!(product.is_featured());
        assert_eq!(product.amount_range(), Some((10_000.0, 500_000.0)));
    }

    #[test]
    fn credit_dispatches_to_the_annuity_calculator() {
        let result = credit_product("1").calculate(1_000_000.0, 12).unwrap();
        match result {
            CalculationResult::Credit(c) => assert_eq!(c.monthly_payment, 88_848.79),
            CalculationResult::Deposit(_) => panic!("credit product produced a deposit result"),
        }
    }

    #[test]
    fn deposit_dispatches_to_the_income_calculator() {
        let result = deposit_product("2").calculate(100_000.0, 1).unwrap();
        match result {
            CalculationResult::Deposit(d) => assert_eq!(d.total_income, 1_000.0),
            CalculationResult::Credit(_) => panic!("deposit product produced a credit result"),
        }
    }

    #[rstest]
    #[case(promo_product("3"))]
    fn non_financial_products_have_no_calculator(#[case] product: Product) {
        assert!(product.calculate(100_000.0, 12).is_none());
        assert!(product.amount_range().is_none());
    }
}
