use log::{debug, info};

use crate::account::{Account, AccountKind};
use crate::customer::Customer;
use crate::customer_store::{CustomerStore, VecCustomerStore};
use crate::errors::{TellerError, TransactionError};
use crate::types::{AccountNumber, Amount, NationalId, Transaction};

/// Withdrawal budget granted to every account opened at this branch
pub const CHECKING_MAX_WITHDRAWALS: u32 = 3;

/// Per-withdrawal cap in whole currency units
pub const CHECKING_WITHDRAW_LIMIT: i64 = 500;

/// Processes operator commands while keeping track of the branch's state
///
/// The teller owns the customer registry, hands out sequential account
/// numbers, and routes every transaction through the owning customer.
pub struct Teller {
    customers: VecCustomerStore,
}

impl Teller {
    pub fn new() -> Self {
        Self {
            customers: VecCustomerStore::new(),
        }
    }

    /// Enroll a new individual customer
    pub fn enroll_customer(
        &mut self,
        national_id: NationalId,
        full_name: String,
        birth_date: String,
        address: String,
    ) -> Result<(), TellerError> {
        info!("enrolling customer (national id = {})", national_id);
        self.customers.enroll(Customer::individual(
            national_id,
            full_name,
            birth_date,
            address,
        ))
    }

    /// Open a checking account with the branch's fixed withdrawal policy
    ///
    /// Account numbers are sequential across all customers, starting at 1.
    pub fn open_account(&mut self, national_id: &str) -> Result<AccountNumber, TellerError> {
        let number = self.next_account_number();
        let customer = self
            .customers
            .find_mut(national_id)
            .ok_or_else(|| TellerError::UnknownCustomer(national_id.to_owned()))?;

        customer.add_account(Account::checking(
            customer.national_id().to_owned(),
            number,
            Amount::new(CHECKING_WITHDRAW_LIMIT, 0),
            CHECKING_MAX_WITHDRAWALS,
        ));
        info!("opened account {} (national id = {})", number, national_id);
        Ok(number)
    }

    pub fn deposit(
        &mut self,
        national_id: &str,
        selector: Option<AccountNumber>,
        amount: Amount,
    ) -> Result<(), TellerError> {
        self.attempt(national_id, selector, Transaction::Deposit(amount))
    }

    pub fn withdraw(
        &mut self,
        national_id: &str,
        selector: Option<AccountNumber>,
        amount: Amount,
    ) -> Result<(), TellerError> {
        self.attempt(national_id, selector, Transaction::Withdrawal(amount))
    }

    fn attempt(
        &mut self,
        national_id: &str,
        selector: Option<AccountNumber>,
        transaction: Transaction,
    ) -> Result<(), TellerError> {
        let customer = self
            .customers
            .find_mut(national_id)
            .ok_or_else(|| TellerError::UnknownCustomer(national_id.to_owned()))?;
        let number = select_account(customer, selector)?;

        debug!("applying {:?} to account {}", transaction, number);
        customer
            .attempt_transaction(number, &transaction)
            .map_err(Into::into)
    }

    /// Read-only view of one account, for the statement display
    pub fn statement(
        &self,
        national_id: &str,
        selector: Option<AccountNumber>,
    ) -> Result<&Account, TellerError> {
        let customer = self
            .customers
            .find(national_id)
            .ok_or_else(|| TellerError::UnknownCustomer(national_id.to_owned()))?;
        let number = select_account(customer, selector)?;

        customer
            .account(number)
            .ok_or_else(|| TransactionError::UnknownAccount(number).into())
    }

    /// Numbers of the accounts a customer holds, in opening order
    pub fn account_numbers(&self, national_id: &str) -> Result<Vec<AccountNumber>, TellerError> {
        let customer = self
            .customers
            .find(national_id)
            .ok_or_else(|| TellerError::UnknownCustomer(national_id.to_owned()))?;
        Ok(customer.accounts().iter().map(Account::number).collect())
    }

    /// Every open account together with its holder, for the listing display
    pub fn accounts(&self) -> impl Iterator<Item = (&Customer, &Account)> + '_ {
        self.customers
            .iter()
            .flat_map(|customer| customer.accounts().iter().map(move |a| (customer, a)))
    }

    // next number = count of existing accounts + 1
    fn next_account_number(&self) -> AccountNumber {
        let open_accounts: usize = self
            .customers
            .iter()
            .map(|customer| customer.accounts().len())
            .sum();
        open_accounts as AccountNumber + 1
    }
}

/// Resolve which of `customer`'s accounts a request targets
///
/// Without an explicit number the customer must hold exactly one account;
/// with several, the operator has to name one.
fn select_account(
    customer: &Customer,
    selector: Option<AccountNumber>,
) -> Result<AccountNumber, TellerError> {
    match selector {
        Some(number) => {
            if customer.account(number).is_some() {
                Ok(number)
            } else {
                Err(TransactionError::UnknownAccount(number).into())
            }
        }
        None => match customer.accounts() {
            [] => Err(TellerError::NoAccounts(customer.national_id().to_owned())),
            [single] => Ok(single.number()),
            _ => Err(TellerError::AmbiguousAccount(
                customer.national_id().to_owned(),
            )),
        },
    }
}
