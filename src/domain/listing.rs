/// One page returned by a bucket listing call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingPage {
    /// Object keys in the order the service returned them
    pub keys: Vec<String>,
    /// Cursor for the next page, if the service supplied one
    pub continuation_token: Option<String>,
    /// True when more objects remain past this page
    pub is_truncated: bool,
}

/// Where a pagination walk currently stands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationState {
    pub page_count: usize,
    pub total_processed: u64,
    pub continuation_token: Option<String>,
}

impl PaginationState {
    /// Fold a consumed page into the state.
    pub fn advance(&mut self, page: &ListingPage) {
        self.page_count += 1;
        self.total_processed += page.keys.len() as u64;
        self.continuation_token = page.continuation_token.clone();
    }

    /// Whether the walk is finished after the page just consumed.
    pub fn is_done(&self, last_page: &ListingPage, max_pages: usize) -> bool {
        !last_page.is_truncated || self.page_count >= max_pages
    }
}
