use super::account::AccountId;
use super::amount::Amount;
use super::product::ProductId;

/// Wallet operations with separate variants for type safety.
///
/// This is the command form consumed by the replay surface and applied
/// by the transfer engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletOp {
    Register {
        account: AccountId,
    },
    Fund {
        account: AccountId,
        amount: Amount,
    },
    Pay {
        sender: AccountId,
        recipient: AccountId,
        amount: Amount,
    },
    AddProduct {
        name: String,
        price: Amount,
        description: Option<String>,
    },
    Buy {
        account: AccountId,
        product: ProductId,
    },
}

impl WalletOp {
    /// The account initiating this operation, if any
    pub fn account(&self) -> Option<&AccountId> {
        match self {
            Self::Register { account } => Some(account),
            Self::Fund { account, .. } => Some(account),
            Self::Pay { sender, .. } => Some(sender),
            Self::AddProduct { .. } => None,
            Self::Buy { account, .. } => Some(account),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fund_reports_its_account() {
        let op = WalletOp::Fund {
            account: AccountId::from("alice"),
            amount: Amount::from_minor(1_000),
        };

        assert_eq!(op.account(), Some(&AccountId::from("alice")));
    }

    #[test]
    fn pay_reports_the_sender() {
        let op = WalletOp::Pay {
            sender: AccountId::from("alice"),
            recipient: AccountId::from("bob"),
            amount: Amount::from_minor(500),
        };

        assert_eq!(op.account(), Some(&AccountId::from("alice")));
    }

    #[test]
    fn add_product_has_no_account() {
        let op = WalletOp::AddProduct {
            name: "Widget".to_string(),
            price: Amount::from_minor(599),
            description: None,
        };

        assert_eq!(op.account(), None);
    }

    #[test]
    fn operation_variants_are_distinct() {
        let fund = WalletOp::Fund {
            account: AccountId::from("alice"),
            amount: Amount::from_minor(100),
        };
        let register = WalletOp::Register {
            account: AccountId::from("alice"),
        };

        assert_ne!(fund, register);
    }
}
