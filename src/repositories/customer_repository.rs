//! Customer dataset providers.
//!
//! [`CustomerRepository`] is the read-only contract the listing service
//! consumes. [`FixtureCustomerRepository`] is the in-memory implementation
//! used until a persistent store exists.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use log::{debug, info};

use crate::models::Customer;

/// Fault raised by a dataset provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryError {
    pub message: String,
}

impl RepositoryError {
    #[cfg(test)]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Repository error: {}", self.message)
    }
}

impl std::error::Error for RepositoryError {}

/// Read-only, ordered access to the customer dataset.
///
/// Implementations must return records in the same order on every call while
/// the data is unchanged, and must be safe to share across in-flight requests.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Number of customers in the dataset.
    async fn count(&self) -> Result<u64, RepositoryError>;

    /// Customers in the half-open range `[start, end)`, clamped to the dataset bounds.
    async fn slice(&self, start: u64, end: u64) -> Result<Vec<Customer>, RepositoryError>;
}

/// In-memory customer fixture, generated once and read-only afterwards.
#[derive(Debug, Clone)]
pub struct FixtureCustomerRepository {
    customers: Arc<Vec<Customer>>,
}

impl FixtureCustomerRepository {
    /// Wrap an existing, already ordered set of customers.
    pub fn new(customers: Vec<Customer>) -> Self {
        Self {
            customers: Arc::new(customers),
        }
    }

    /// Generate `size` sample customers. Customer `n` registered `n - 1` days ago.
    pub fn generate(size: usize) -> Self {
        let now = Utc::now();
        let customers = (1..=size)
            .map(|n| {
                let registered = now - Duration::days(n as i64 - 1);
                Customer {
                    id: format!("cust_id_{}", n),
                    full_name: format!("Customer{} User", n),
                    email: format!("user{}@superco.com", n),
                    registration_date: registered.format("%a %b %d %Y").to_string(),
                }
            })
            .collect();

        info!("Generated {} fixture customers", size);
        Self::new(customers)
    }

    /// All customers in dataset order.
    #[cfg(test)]
    pub fn all(&self) -> &[Customer] {
        &self.customers
    }
}

#[async_trait]
impl CustomerRepository for FixtureCustomerRepository {
    async fn count(&self) -> Result<u64, RepositoryError> {
        Ok(self.customers.len() as u64)
    }

    async fn slice(&self, start: u64, end: u64) -> Result<Vec<Customer>, RepositoryError> {
        let len = self.customers.len();
        let start = usize::try_from(start).unwrap_or(usize::MAX).min(len);
        let end = usize::try_from(end).unwrap_or(usize::MAX).clamp(start, len);
        debug!("Repository: Slicing fixture customers [{}, {})", start, end);
        Ok(self.customers[start..end].to_vec())
    }
}
