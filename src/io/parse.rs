use serde::Deserialize;

use super::error::IoError;
use crate::domain::{AccountId, Amount, ProductId, WalletOp};

/// Raw CSV record as read from input.
///
/// Column meaning depends on the operation: `to` carries the recipient
/// for `pay`, the product name for `product`, and the product id for
/// `buy`; `amount` carries the price for `product`.
#[derive(Debug, Deserialize)]
pub struct RawOpRecord {
    pub op: String,
    #[serde(default)]
    pub account: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub amount: Option<String>,
}

impl RawOpRecord {
    /// Parse this raw record into a strongly-typed operation
    pub fn parse(self) -> Result<WalletOp, IoError> {
        let op = self.op.trim().to_lowercase();

        match op.as_str() {
            "register" => Ok(WalletOp::Register {
                account: require_account(self.account, "register")?,
            }),
            "fund" => Ok(WalletOp::Fund {
                account: require_account(self.account, "fund")?,
                amount: require_amount(self.amount, "fund")?,
            }),
            "pay" => Ok(WalletOp::Pay {
                sender: require_account(self.account, "pay")?,
                recipient: self
                    .to
                    .filter(|s| !s.trim().is_empty())
                    .map(|s| AccountId::new(s.trim()))
                    .ok_or_else(|| IoError::MissingField("to required for pay".to_string()))?,
                amount: require_amount(self.amount, "pay")?,
            }),
            "product" => Ok(WalletOp::AddProduct {
                name: self
                    .to
                    .filter(|s| !s.trim().is_empty())
                    .map(|s| s.trim().to_string())
                    .ok_or_else(|| {
                        IoError::MissingField("to (product name) required for product".to_string())
                    })?,
                price: require_amount(self.amount, "product")?,
                description: None,
            }),
            "buy" => {
                let raw_id = self
                    .to
                    .filter(|s| !s.trim().is_empty())
                    .ok_or_else(|| {
                        IoError::MissingField("to (product id) required for buy".to_string())
                    })?;
                let product = raw_id
                    .trim()
                    .parse::<u64>()
                    .map(ProductId)
                    .map_err(|_| IoError::InvalidProductId(raw_id))?;

                Ok(WalletOp::Buy {
                    account: require_account(self.account, "buy")?,
                    product,
                })
            }
            _ => Err(IoError::UnknownOp(self.op)),
        }
    }
}

fn require_account(account: Option<String>, op: &str) -> Result<AccountId, IoError> {
    account
        .filter(|s| !s.trim().is_empty())
        .map(|s| AccountId::new(s.trim()))
        .ok_or_else(|| IoError::MissingField(format!("account required for {op}")))
}

fn require_amount(amount: Option<String>, op: &str) -> Result<Amount, IoError> {
    let raw = amount
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| IoError::MissingField(format!("amount required for {op}")))?;

    Amount::from_decimal_str(&raw).map_err(|_| IoError::InvalidAmount(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(op: &str, account: &str, to: &str, amount: &str) -> RawOpRecord {
        let opt = |s: &str| {
            if s.is_empty() {
                None
            } else {
                Some(s.to_string())
            }
        };
        RawOpRecord {
            op: op.to_string(),
            account: opt(account),
            to: opt(to),
            amount: opt(amount),
        }
    }

    #[test]
    fn parse_register() {
        let op = record("register", "alice", "", "").parse().unwrap();
        assert_eq!(
            op,
            WalletOp::Register {
                account: AccountId::from("alice")
            }
        );
    }

    #[test]
    fn parse_fund() {
        let op = record("fund", "alice", "", "100.00").parse().unwrap();
        assert_eq!(
            op,
            WalletOp::Fund {
                account: AccountId::from("alice"),
                amount: Amount::from_minor(10_000),
            }
        );
    }

    #[test]
    fn parse_pay() {
        let op = record("pay", "alice", "bob", "40.00").parse().unwrap();
        assert_eq!(
            op,
            WalletOp::Pay {
                sender: AccountId::from("alice"),
                recipient: AccountId::from("bob"),
                amount: Amount::from_minor(4_000),
            }
        );
    }

    #[test]
    fn parse_product() {
        let op = record("product", "", "Widget", "5.99").parse().unwrap();
        assert_eq!(
            op,
            WalletOp::AddProduct {
                name: "Widget".to_string(),
                price: Amount::from_minor(599),
                description: None,
            }
        );
    }

    #[test]
    fn parse_buy() {
        let op = record("buy", "alice", "3", "").parse().unwrap();
        assert_eq!(
            op,
            WalletOp::Buy {
                account: AccountId::from("alice"),
                product: ProductId(3),
            }
        );
    }

    #[test]
    fn parse_is_case_insensitive_and_trims() {
        let op = record(" FUND ", " alice ", "", " 1.50 ").parse().unwrap();
        assert!(matches!(op, WalletOp::Fund { .. }));
    }

    #[test]
    fn parse_unknown_op_fails() {
        let result = record("teleport", "alice", "", "").parse();
        assert!(matches!(result, Err(IoError::UnknownOp(_))));
    }

    #[test]
    fn parse_fund_missing_amount_fails() {
        let result = record("fund", "alice", "", "").parse();
        assert!(matches!(result, Err(IoError::MissingField(_))));
    }

    #[test]
    fn parse_fund_missing_account_fails() {
        let result = record("fund", "", "", "100").parse();
        assert!(matches!(result, Err(IoError::MissingField(_))));
    }

    #[test]
    fn parse_pay_missing_recipient_fails() {
        let result = record("pay", "alice", "", "100").parse();
        assert!(matches!(result, Err(IoError::MissingField(_))));
    }

    #[test]
    fn parse_invalid_amount_fails() {
        let result = record("fund", "alice", "", "not_a_number").parse();
        assert!(matches!(result, Err(IoError::InvalidAmount(_))));
    }

    #[test]
    fn parse_negative_amount_fails() {
        let result = record("fund", "alice", "", "-5.00").parse();
        assert!(matches!(result, Err(IoError::InvalidAmount(_))));
    }

    #[test]
    fn parse_buy_with_non_numeric_product_fails() {
        let result = record("buy", "alice", "widget", "").parse();
        assert!(matches!(result, Err(IoError::InvalidProductId(_))));
    }
}
