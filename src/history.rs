use crate::types::Transaction;

/// Append-only ledger of the transactions applied to one account
///
/// Entries are never reordered or pruned.
#[derive(Debug, Default, PartialEq)]
pub struct History {
    transactions: Vec<Transaction>,
}

impl History {
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
        }
    }

    /// Append a transaction to the ledger
    pub fn record(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    /// Transactions in insertion order
    pub fn entries(&self) -> impl Iterator<Item = &Transaction> + '_ {
        self.transactions.iter()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
