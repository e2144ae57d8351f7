//! In-memory pagination over an ordered result set.
//!
//! Query parameters are parsed leniently: anything unparseable falls back to
//! a default instead of rejecting the request.

use std::fmt;

/// Page length used when the client omits `size` or sends an invalid one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Sentinel `size` value meaning "return every row".
pub const SIZE_ALL: i64 = -1;

/// Requested page length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSize {
    /// No limit; the whole ordered set is returned.
    All,
    /// At most this many items per page. Always > 0.
    Limit(usize),
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageSize::All => write!(f, "{}", SIZE_ALL),
            PageSize::Limit(n) => write!(f, "{}", n),
        }
    }
}

/// A resolved `(page, size)` pair. `page` is 1-based and always >= 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub size: PageSize,
}

impl PageRequest {
    pub fn new(page: usize, size: PageSize) -> Self {
        Self {
            page: page.max(1),
            size,
        }
    }

    /// Resolve raw query values.
    ///
    /// `page` defaults to 1 when absent, unparseable or < 1. `size` is -1 for
    /// all rows, a positive page length, or `default_size` otherwise
    /// (absent, unparseable, zero, or any other negative value).
    pub fn parse(page: Option<&str>, size: Option<&str>, default_size: usize) -> Self {
        let page = page
            .and_then(|s| s.parse::<i64>().ok())
            .filter(|p| *p >= 1)
            .map(|p| usize::try_from(p).unwrap_or(usize::MAX))
            .unwrap_or(1);

        let size = match size.and_then(|s| s.parse::<i64>().ok()) {
            Some(SIZE_ALL) => PageSize::All,
            Some(n) if n > 0 => PageSize::Limit(usize::try_from(n).unwrap_or(usize::MAX)),
            _ => PageSize::Limit(default_size.max(1)),
        };

        Self::new(page, size)
    }

    /// Index of the first item on this page. Saturates rather than overflows.
    pub fn offset(&self) -> usize {
        match self.size {
            PageSize::All => 0,
            PageSize::Limit(n) => (self.page - 1).saturating_mul(n),
        }
    }

    /// Slice `items` down to this page, preserving order.
    ///
    /// A page starting past the end yields an empty vector.
    pub fn apply<T>(&self, items: Vec<T>) -> Vec<T> {
        match self.size {
            PageSize::All => items,
            PageSize::Limit(n) => {
                let start = self.offset();
                if start >= items.len() {
                    return Vec::new();
                }
                items.into_iter().skip(start).take(n).collect()
            }
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, PageSize::Limit(DEFAULT_PAGE_SIZE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(page: Option<&str>, size: Option<&str>) -> PageRequest {
        PageRequest::parse(page, size, DEFAULT_PAGE_SIZE)
    }

    #[test]
    fn test_parse_defaults_when_absent() {
        assert_eq!(parse(None, None), PageRequest::default());
    }

    #[test]
    fn test_parse_invalid_page_falls_back_to_first() {
        assert_eq!(parse(Some("abc"), None).page, 1);
        assert_eq!(parse(Some("0"), None).page, 1);
        assert_eq!(parse(Some("-3"), None).page, 1);
        assert_eq!(parse(Some(""), None).page, 1);
        assert_eq!(parse(Some("4"), None).page, 4);
    }

    #[test]
    fn test_parse_size_variants() {
        assert_eq!(parse(None, Some("-1")).size, PageSize::All);
        assert_eq!(parse(None, Some("0")).size, PageSize::Limit(10));
        assert_eq!(parse(None, Some("-7")).size, PageSize::Limit(10));
        assert_eq!(parse(None, Some("x")).size, PageSize::Limit(10));
        assert_eq!(parse(None, Some("3")).size, PageSize::Limit(3));
    }

    #[test]
    fn test_parse_uses_configured_default_size() {
        let req = PageRequest::parse(None, Some("nope"), 25);
        assert_eq!(req.size, PageSize::Limit(25));
    }

    #[test]
    fn test_apply_returns_correct_slices() {
        let items: Vec<u32> = (1..=25).collect();

        for page in 1..=4 {
            for size in 1..=12 {
                let req = PageRequest::new(page, PageSize::Limit(size));
                let got = req.apply(items.clone());
                let start = ((page - 1) * size).min(items.len());
                let end = (start + size).min(items.len());
                assert!(got.len() <= size);
                assert_eq!(got, items[start..end].to_vec(), "page={page} size={size}");
            }
        }
    }

    #[test]
    fn test_apply_all_returns_everything() {
        let items: Vec<u32> = (1..=25).collect();
        let req = PageRequest::new(3, PageSize::All);
        assert_eq!(req.apply(items.clone()), items);
    }

    #[test]
    fn test_apply_past_end_is_empty() {
        let items: Vec<u32> = (1..=5).collect();
        let req = PageRequest::new(2, PageSize::Limit(5));
        assert!(req.apply(items).is_empty());
    }

    #[test]
    fn test_apply_partial_last_page() {
        let items: Vec<u32> = (1..=5).collect();
        let req = PageRequest::new(2, PageSize::Limit(3));
        assert_eq!(req.apply(items), vec![4, 5]);
    }

    #[test]
    fn test_huge_page_saturates() {
        let req = parse(Some("9223372036854775807"), Some("9223372036854775807"));
        assert_eq!(req.offset(), usize::MAX);
        assert!(req.apply(vec![1, 2, 3]).is_empty());
    }

    #[test]
    fn test_page_size_display() {
        assert_eq!(PageSize::All.to_string(), "-1");
        assert_eq!(PageSize::Limit(10).to_string(), "10");
    }
}
