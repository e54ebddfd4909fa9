use rust_decimal::Decimal;

use crate::account::Account;
use crate::errors::Rejection;

/// National identity number, the unique key for a customer
pub type NationalId = String;

pub type AccountNumber = u32;

pub type Amount = Decimal;

/// All accounts belong to the same branch
pub const BRANCH_CODE: &str = "0001";

/// A requested balance-affecting operation with a fixed amount
#[derive(Debug, Clone, PartialEq)]
pub enum Transaction {
    Deposit(Amount),
    Withdrawal(Amount),
}

impl Transaction {
    /// The amount of money this transaction moves
    pub fn amount(&self) -> Amount {
        match self {
            Transaction::Deposit(amount) | Transaction::Withdrawal(amount) => *amount,
        }
    }

    /// Apply this transaction to an account
    ///
    /// On success the account records the transaction in its history; a
    /// rejection leaves balance and history untouched.
    pub fn apply(&self, account: &mut Account) -> Result<(), Rejection> {
        match self {
            Transaction::Deposit(amount) => account.deposit(*amount),
            Transaction::Withdrawal(amount) => account.withdraw(*amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rust_decimal_macros::dec;

    #[test]
    fn apply_dispatches_on_the_tag() {
        let mut account = Account::standard("100".into(), 1);

        Transaction::Deposit(dec!(2.5)).apply(&mut account).unwrap();
        Transaction::Withdrawal(dec!(1.0)).apply(&mut account).unwrap();

        assert_eq!(account.balance(), dec!(1.5));
    }

    #[test]
    fn rejected_apply_has_no_side_effect() {
        let mut account = Account::standard("100".into(), 1);

        let rejection = Transaction::Withdrawal(dec!(1.0))
            .apply(&mut account)
            .unwrap_err();

        assert_eq!(rejection, Rejection::InsufficientBalance);
        assert_eq!(account.balance(), Amount::ZERO);
        assert!(account.history().is_empty());
    }

    #[test]
    fn amount_of_both_variants() {
        assert_eq!(Transaction::Deposit(dec!(3)).amount(), dec!(3));
        assert_eq!(Transaction::Withdrawal(dec!(4)).amount(), dec!(4));
    }
}
