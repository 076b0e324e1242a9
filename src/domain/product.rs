use std::fmt;

use chrono::{DateTime, Utc};

use super::account::AccountId;
use super::amount::Amount;

/// Catalog product identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProductId(pub u64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Catalog item; the engine only reads `price` and existence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Amount,
    pub description: Option<String>,
}

/// Record linking an account, a product, and the debit ledger entry that
/// paid for it. Created atomically with that entry, never without one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Purchase {
    pub id: u64,
    pub account: AccountId,
    pub product: ProductId,
    pub amount_paid: Amount,
    pub entry_seq: u64,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_id_displays_as_number() {
        assert_eq!(ProductId(42).to_string(), "42");
    }

    #[test]
    fn product_is_clonable() {
        let product = Product {
            id: ProductId(1),
            name: "Widget".to_string(),
            price: Amount::from_minor(599),
            description: Some("A widget".to_string()),
        };

        assert_eq!(product, product.clone());
    }

    #[test]
    fn purchase_references_ledger_entry() {
        let purchase = Purchase {
            id: 1,
            account: AccountId::from("alice"),
            product: ProductId(1),
            amount_paid: Amount::from_minor(599),
            entry_seq: 7,
            timestamp: Utc::now(),
        };

        assert_eq!(purchase.entry_seq, 7);
        assert_eq!(purchase.amount_paid, Amount::from_minor(599));
    }
}
