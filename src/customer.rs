use crate::account::Account;
use crate::errors::TransactionError;
use crate::types::{AccountNumber, NationalId, Transaction};

/// The closed set of customer identities
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomerIdentity {
    Individual {
        national_id: NationalId,
        full_name: String,
        birth_date: String,
    },
}

/// A customer owning an ordered list of accounts
///
/// The customer only routes transactions; the accounts enforce the balance
/// rules themselves.
#[derive(Debug, PartialEq)]
pub struct Customer {
    identity: CustomerIdentity,
    address: String,
    accounts: Vec<Account>,
}

impl Customer {
    pub fn individual(
        national_id: NationalId,
        full_name: String,
        birth_date: String,
        address: String,
    ) -> Self {
        Self {
            identity: CustomerIdentity::Individual {
                national_id,
                full_name,
                birth_date,
            },
            address,
            accounts: Vec::new(),
        }
    }

    pub fn national_id(&self) -> &str {
        match &self.identity {
            CustomerIdentity::Individual { national_id, .. } => national_id,
        }
    }

    pub fn full_name(&self) -> &str {
        match &self.identity {
            CustomerIdentity::Individual { full_name, .. } => full_name,
        }
    }

    pub fn birth_date(&self) -> &str {
        match &self.identity {
            CustomerIdentity::Individual { birth_date, .. } => birth_date,
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn identity(&self) -> &CustomerIdentity {
        &self.identity
    }

    /// Append an account to this customer's list
    ///
    /// Duplicates are not rejected; callers are expected to hand out fresh
    /// account numbers.
    pub fn add_account(&mut self, account: Account) {
        self.accounts.push(account);
    }

    /// Accounts in opening order
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn account(&self, number: AccountNumber) -> Option<&Account> {
        self.accounts.iter().find(|a| a.number() == number)
    }

    pub fn account_mut(&mut self, number: AccountNumber) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|a| a.number() == number)
    }

    /// Route a transaction to one of this customer's accounts
    ///
    /// Every balance-affecting operation flows through here. The result is
    /// reported to the caller, never thrown: business-rule rejections come
    /// back as `TransactionError::Rejected`.
    pub fn attempt_transaction(
        &mut self,
        number: AccountNumber,
        transaction: &Transaction,
    ) -> Result<(), TransactionError> {
        let account = self
            .account_mut(number)
            .ok_or(TransactionError::UnknownAccount(number))?;
        transaction.apply(account).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::errors::Rejection;
    use rust_decimal_macros::dec;

    fn customer_with_accounts() -> Customer {
        let mut customer = Customer::individual(
            "100".into(),
            "Ana Souza".into(),
            "12-03-1990".into(),
            "12 Market St - Centro - Recife/PE".into(),
        );
        customer.add_account(Account::standard("100".into(), 1));
        customer.add_account(Account::standard("100".into(), 2));
        customer
    }

    #[test]
    fn identity_accessors() {
        let customer = customer_with_accounts();

        assert_eq!(customer.national_id(), "100");
        assert_eq!(customer.full_name(), "Ana Souza");
        assert_eq!(customer.birth_date(), "12-03-1990");
        assert_eq!(customer.address(), "12 Market St - Centro - Recife/PE");
    }

    #[test]
    fn transaction_reaches_the_selected_account() {
        let mut customer = customer_with_accounts();

        customer
            .attempt_transaction(2, &Transaction::Deposit(dec!(30)))
            .unwrap();

        assert_eq!(customer.account(2).unwrap().balance(), dec!(30));
        assert_eq!(customer.account(1).unwrap().balance(), dec!(0));
        assert!(customer.account(1).unwrap().history().is_empty());
    }

    #[test]
    fn unknown_account_number() {
        let mut customer = customer_with_accounts();

        let err = customer
            .attempt_transaction(9, &Transaction::Deposit(dec!(30)))
            .unwrap_err();

        assert_eq!(err, TransactionError::UnknownAccount(9));
    }

    #[test]
    fn rejection_is_reported_not_thrown() {
        let mut customer = customer_with_accounts();

        let err = customer
            .attempt_transaction(1, &Transaction::Withdrawal(dec!(5)))
            .unwrap_err();

        assert_eq!(
            err,
            TransactionError::Rejected(Rejection::InsufficientBalance)
        );
    }
}
