use crate::customer::Customer;
use crate::errors::TellerError;

/// Store customers for lookup by national id
pub trait CustomerStore {
    /// Add a customer to the store
    /// No customer with the same national id may have been enrolled before.
    fn enroll(&mut self, customer: Customer) -> Result<(), TellerError>;

    fn find(&self, national_id: &str) -> Option<&Customer>;

    fn find_mut(&mut self, national_id: &str) -> Option<&mut Customer>;

    /// All customers in enrollment order
    fn iter(&self) -> Box<dyn Iterator<Item = &Customer> + '_>;
}

/// A simple RAM-backed customer store using a standard Rust `Vec`
///
/// Lookups scan linearly; enumeration preserves enrollment order.
#[derive(Debug, Default)]
pub struct VecCustomerStore {
    customers: Vec<Customer>,
}

impl VecCustomerStore {
    pub fn new() -> Self {
        Self {
            customers: Vec::new(),
        }
    }
}

impl CustomerStore for VecCustomerStore {
    fn enroll(&mut self, customer: Customer) -> Result<(), TellerError> {
        if self.find(customer.national_id()).is_some() {
            return Err(TellerError::DuplicateCustomer(
                customer.national_id().to_owned(),
            ));
        }

        self.customers.push(customer);
        Ok(())
    }

    fn find(&self, national_id: &str) -> Option<&Customer> {
        self.customers
            .iter()
            .find(|customer| customer.national_id() == national_id)
    }

    fn find_mut(&mut self, national_id: &str) -> Option<&mut Customer> {
        self.customers
            .iter_mut()
            .find(|customer| customer.national_id() == national_id)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &Customer> + '_> {
        Box::new(self.customers.iter())
    }
}
