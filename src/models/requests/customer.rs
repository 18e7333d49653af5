//! Customer listing request models.

/// Raw query parameters for `GET /customers`.
///
/// Both values are kept as strings so that malformed numbers never fail
/// extraction; normalization happens in [`crate::validators::resolve_page_request`].
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CustomerListQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl CustomerListQuery {
    /// Decode a raw query string. When a key repeats, its last value wins.
    pub fn from_query_string(query: &str) -> Result<Self, serde_urlencoded::de::Error> {
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query)?;

        let mut parsed = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "page" => parsed.page = Some(value),
                "limit" => parsed.limit = Some(value),
                _ => {}
            }
        }
        Ok(parsed)
    }
}

/// Normalized pagination parameters. `page >= 1` and `1 <= limit <= MAX_PAGE_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub limit: u64,
}

impl PageRequest {
    /// Half-open index range `[start, end)` covered by this page.
    ///
    /// Saturates instead of overflowing; callers slice with clamping so an
    /// unreachable range just yields nothing.
    pub fn range(&self) -> (u64, u64) {
        let start = self.page.saturating_sub(1).saturating_mul(self.limit);
        let end = start.saturating_add(self.limit);
        (start, end)
    }
}
