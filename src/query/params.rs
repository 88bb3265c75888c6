use crate::query::QueryError;

/// Validated pagination parameters: `page` is 1-indexed, `limit` is bounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    limit: usize
}

impl PageRequest {
    pub const DEFAULT_PAGE: usize = 1;
    pub const DEFAULT_LIMIT: usize = 50;
    pub const MAX_LIMIT: usize = 100;

    pub fn new(page: usize, limit: usize) -> Result<Self, QueryError> {
        if page < 1 {
            return Err(QueryError::invalid_argument("page must be >= 1"));
        }

        if !(1..=Self::MAX_LIMIT).contains(&limit) {
            return Err(QueryError::invalid_argument(format!("limit must be between 1 and {}", Self::MAX_LIMIT)));
        }

        Ok(Self { page, limit })
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Zero-based offset of the first item on this page.
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.limit)
    }

    /// Returns this page of `items`, empty when the page lies past the end.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.offset().min(items.len());
        let end = start.saturating_add(self.limit).min(items.len());
        &items[start..end]
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: Self::DEFAULT_PAGE,
            limit: Self::DEFAULT_LIMIT
        }
    }
}

/// Number of histogram bins, bounded to `MIN..=MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinCount(usize);

impl BinCount {
    pub const MIN: usize = 5;
    pub const MAX: usize = 50;
    pub const DEFAULT: usize = 10;

    pub fn new(bins: usize) -> Result<Self, QueryError> {
        if !(Self::MIN..=Self::MAX).contains(&bins) {
            return Err(QueryError::invalid_argument(format!("bins must be between {} and {}", Self::MIN, Self::MAX)));
        }

        Ok(Self(bins))
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for BinCount {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}
