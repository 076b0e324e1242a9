use super::account::Account;
use super::amount::Amount;
use super::error::DomainError;

/// Credit an account, returning the new balance
pub fn apply_credit(account: &mut Account, amount: Amount) -> Result<Amount, DomainError> {
    if !amount.is_positive() {
        return Err(DomainError::InvalidAmount);
    }

    let new_balance = account
        .balance()
        .checked_add(amount)
        .ok_or(DomainError::Overflow)?;

    account.set_balance(new_balance);
    Ok(new_balance)
}

/// Debit an account, returning the new balance
///
/// Fails with `InsufficientFunds` if the debit would drive the balance
/// negative, leaving the account untouched.
pub fn apply_debit(account: &mut Account, amount: Amount) -> Result<Amount, DomainError> {
    if !amount.is_positive() {
        return Err(DomainError::InvalidAmount);
    }

    if account.balance() < amount {
        return Err(DomainError::InsufficientFunds);
    }

    let new_balance = account
        .balance()
        .checked_sub(amount)
        .ok_or(DomainError::Overflow)?;

    account.set_balance(new_balance);
    Ok(new_balance)
}

/// Move funds between two accounts as one all-or-nothing step.
///
/// Both new balances are computed with checked arithmetic before either
/// account is mutated, so a failure on either side leaves both untouched.
/// Returns `(sender_balance, recipient_balance)` after the transfer.
pub fn apply_transfer(
    sender: &mut Account,
    recipient: &mut Account,
    amount: Amount,
) -> Result<(Amount, Amount), DomainError> {
    if !amount.is_positive() {
        return Err(DomainError::InvalidAmount);
    }

    if sender.balance() < amount {
        return Err(DomainError::InsufficientFunds);
    }

    let new_sender = sender
        .balance()
        .checked_sub(amount)
        .ok_or(DomainError::Overflow)?;

    let new_recipient = recipient
        .balance()
        .checked_add(amount)
        .ok_or(DomainError::Overflow)?;

    sender.set_balance(new_sender);
    recipient.set_balance(new_recipient);
    Ok((new_sender, new_recipient))
}
