//! Customer service for paginated listing.

use std::sync::Arc;

use log::debug;

use crate::models::{Customer, PageRequest, PaginatedResponse};
use crate::repositories::{CustomerRepository, RepositoryError};

pub struct CustomerService {
    repository: Arc<dyn CustomerRepository>,
}

impl CustomerService {
    /// Create a CustomerService over a shared dataset provider.
    pub fn new(repository: Arc<dyn CustomerRepository>) -> Self {
        Self { repository }
    }

    /// Fetch one page of customers together with the dataset total.
    pub async fn list_customers(
        &self,
        page_request: PageRequest,
    ) -> Result<PaginatedResponse<Customer>, RepositoryError> {
        let (start, end) = page_request.range();
        debug!(
            "Listing customers page={} limit={} range=[{}, {})",
            page_request.page, page_request.limit, start, end
        );

        let data = self.repository.slice(start, end).await?;
        let total = self.repository.count().await?;

        Ok(PaginatedResponse {
            data,
            total,
            page: page_request.page,
            limit: page_request.limit,
        })
    }
}
