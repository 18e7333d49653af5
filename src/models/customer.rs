use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A customer record as exposed by the listing endpoint.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Stable unique identifier
    #[schema(example = "cust_id_1")]
    pub id: String,
    /// Customer's full name
    #[schema(example = "Customer1 User")]
    pub full_name: String,
    /// Customer's email address
    #[schema(example = "user1@superco.com")]
    pub email: String,
    /// Registration date, e.g. `Tue Oct 13 2026`
    #[schema(example = "Tue Oct 13 2026")]
    pub registration_date: String,
}
