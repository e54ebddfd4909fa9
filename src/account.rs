use crate::errors::Rejection;
use crate::history::History;
use crate::types::{AccountNumber, Amount, NationalId, Transaction, BRANCH_CODE};

/// The closed set of account kinds, chosen when the account is opened
#[derive(Debug, Clone, PartialEq)]
pub enum AccountKind {
    /// Base deposit/withdraw rules only
    Standard,
    /// Adds a per-withdrawal cap and a budget of permitted withdrawals
    Checking {
        withdraw_limit: Amount,
        max_withdrawals: u32,
        withdrawals_used: u32,
    },
}

/// A customer account holding a balance and its transaction history
///
/// The balance never goes negative and only changes through `deposit` and
/// `withdraw`, each of which appends exactly one transaction to the history
/// on success.
#[derive(Debug, PartialEq)]
pub struct Account {
    number: AccountNumber,
    branch_code: &'static str,
    holder: NationalId,
    balance: Amount,
    history: History,
    kind: AccountKind,
}

impl Account {
    /// Open an account with base rules only
    pub fn standard(holder: NationalId, number: AccountNumber) -> Self {
        Self::open(holder, number, AccountKind::Standard)
    }

    /// Open a checking account with the given withdrawal policy
    pub fn checking(
        holder: NationalId,
        number: AccountNumber,
        withdraw_limit: Amount,
        max_withdrawals: u32,
    ) -> Self {
        Self::open(
            holder,
            number,
            AccountKind::Checking {
                withdraw_limit,
                max_withdrawals,
                withdrawals_used: 0,
            },
        )
    }

    fn open(holder: NationalId, number: AccountNumber, kind: AccountKind) -> Self {
        Self {
            number,
            branch_code: BRANCH_CODE,
            holder,
            balance: Amount::ZERO,
            history: History::new(),
            kind,
        }
    }

    /// Add `amount` to the balance
    ///
    /// Succeeds for any positive amount and records a `Deposit` in the
    /// history; otherwise nothing changes.
    pub fn deposit(&mut self, amount: Amount) -> Result<(), Rejection> {
        if amount <= Amount::ZERO {
            return Err(Rejection::NonPositiveAmount);
        }

        self.balance += amount;
        self.history.record(Transaction::Deposit(amount));
        Ok(())
    }

    /// Take `amount` from the balance
    ///
    /// A checking account first enforces its withdrawal budget, then the
    /// per-withdrawal cap; the base rule requires a positive amount covered
    /// by the balance. The first failing check wins and nothing changes on
    /// rejection. A successful checking withdrawal consumes one unit of the
    /// budget; a rejected one does not.
    pub fn withdraw(&mut self, amount: Amount) -> Result<(), Rejection> {
        if let AccountKind::Checking {
            withdraw_limit,
            max_withdrawals,
            withdrawals_used,
        } = &self.kind
        {
            if withdrawals_used >= max_withdrawals {
                return Err(Rejection::WithdrawalCountExceeded);
            }
            if amount > *withdraw_limit {
                return Err(Rejection::AmountOverWithdrawLimit);
            }
        }

        self.debit(amount)?;

        if let AccountKind::Checking {
            withdrawals_used, ..
        } = &mut self.kind
        {
            *withdrawals_used += 1;
        }
        Ok(())
    }

    fn debit(&mut self, amount: Amount) -> Result<(), Rejection> {
        if amount <= Amount::ZERO {
            return Err(Rejection::NonPositiveAmount);
        }
        if self.balance < amount {
            return Err(Rejection::InsufficientBalance);
        }

        self.balance -= amount;
        self.history.record(Transaction::Withdrawal(amount));
        Ok(())
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    pub fn branch_code(&self) -> &str {
        self.branch_code
    }

    /// National id of the owning customer
    pub fn holder(&self) -> &str {
        &self.holder
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn kind(&self) -> &AccountKind {
        &self.kind
    }
}
