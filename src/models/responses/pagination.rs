//! Pagination response models.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Paginated list response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PaginatedResponse<T> {
    /// Items on the requested page, in dataset order
    pub data: Vec<T>,
    /// Total number of items in the dataset
    pub total: u64,
    /// Current page number (after normalization)
    pub page: u64,
    /// Items per page (after normalization)
    pub limit: u64,
}

impl<T> PaginatedResponse<T> {
    /// Number of pages a client needs to walk the whole dataset.
    pub fn total_pages(&self) -> u64 {
        if self.limit == 0 {
            return 0;
        }
        self.total.div_ceil(self.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(total: u64, limit: u64) -> PaginatedResponse<u8> {
        PaginatedResponse {
            data: Vec::new(),
            total,
            page: 1,
            limit,
        }
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(envelope(100, 10).total_pages(), 10);
        assert_eq!(envelope(101, 10).total_pages(), 11);
        assert_eq!(envelope(0, 10).total_pages(), 0);
        assert_eq!(envelope(7, 50).total_pages(), 1);
    }

    #[test]
    fn test_serialized_shape() {
        let value = serde_json::to_value(PaginatedResponse {
            data: vec![1u8, 2],
            total: 2,
            page: 1,
            limit: 10,
        })
        .unwrap();

        assert_eq!(
            value,
            serde_json::json!({ "data": [1, 2], "total": 2, "page": 1, "limit": 10 })
        );
    }
}
