//! Bookkeeping for infinite-scroll pagination.
//!
//! `Paginator` holds the page counter and busy flag for one container. The
//! browser side reads scroll metrics, asks `begin` for the next page, and
//! reports back through `finish`. Claiming and checking happen in one call,
//! so scroll events that arrive while a fetch is in flight are dropped.

use url::Url;

/// Query parameter carrying the page number.
pub const PAGE_PARAM: &str = "page";

/// Scroll position of the document element, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub client_height: f64,
    pub scroll_height: f64,
}

impl ScrollMetrics {
    pub fn near_bottom(&self, threshold: f64) -> bool {
        self.scroll_top + self.client_height >= self.scroll_height - threshold
    }
}

/// How a page fetch ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOutcome {
    /// A non-blank fragment was appended.
    Appended,
    /// The server returned a blank fragment: no more pages.
    Empty,
    /// Network error or non-2xx response.
    Failed,
}

impl PageOutcome {
    pub fn from_fragment(html: &str) -> Self {
        if html.trim().is_empty() {
            PageOutcome::Empty
        } else {
            PageOutcome::Appended
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    page: u32,
    loading: bool,
    exhausted: bool,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new()
    }
}

impl Paginator {
    /// The server-rendered page is page 1.
    pub fn new() -> Self {
        Self {
            page: 1,
            loading: false,
            exhausted: false,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Claim the next page if the viewport is within `threshold` of the bottom.
    ///
    /// Returns the page number to fetch and marks the paginator busy, or `None`
    /// if a fetch is already in flight, pagination is exhausted, or the reader
    /// is not near the bottom yet.
    pub fn begin(&mut self, metrics: ScrollMetrics, threshold: f64) -> Option<u32> {
        if self.loading || self.exhausted || !metrics.near_bottom(threshold) {
            return None;
        }
        self.loading = true;
        self.page += 1;
        Some(self.page)
    }

    /// Release the busy flag after a fetch.
    pub fn finish(&mut self, outcome: PageOutcome) {
        self.loading = false;
        if outcome == PageOutcome::Empty {
            self.exhausted = true;
        }
    }
}

/// `current` with its `page` parameter set to `page`, other parameters kept.
pub fn page_url(current: &str, page: u32) -> Result<String, url::ParseError> {
    let mut url = Url::parse(current)?;
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != PAGE_PARAM)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();
    url.query_pairs_mut()
        .clear()
        .extend_pairs(kept)
        .append_pair(PAGE_PARAM, &page.to_string());
    Ok(url.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: f64 = 500.0;

    fn at(scroll_top: f64) -> ScrollMetrics {
        ScrollMetrics {
            scroll_top,
            client_height: 800.0,
            scroll_height: 3000.0,
        }
    }

    #[test]
    fn test_threshold_boundary() {
        assert!(!at(1699.0).near_bottom(THRESHOLD));
        assert!(at(1700.0).near_bottom(THRESHOLD));
        assert!(at(2200.0).near_bottom(THRESHOLD));
    }

    #[test]
    fn test_far_from_bottom_does_not_fetch() {
        let mut paginator = Paginator::new();
        assert_eq!(paginator.begin(at(0.0), THRESHOLD), None);
        assert_eq!(paginator.page(), 1);
        assert!(!paginator.is_loading());
    }

    #[test]
    fn test_scroll_bursts_claim_one_fetch() {
        let mut paginator = Paginator::new();
        let claimed: Vec<u32> = (0..10).filter_map(|_| paginator.begin(at(2200.0), THRESHOLD)).collect();
        assert_eq!(claimed, vec![2]);
        assert!(paginator.is_loading());
    }

    #[test]
    fn test_pages_advance_after_each_fetch() {
        let mut paginator = Paginator::new();
        assert_eq!(paginator.begin(at(2200.0), THRESHOLD), Some(2));
        paginator.finish(PageOutcome::Appended);
        assert_eq!(paginator.begin(at(2200.0), THRESHOLD), Some(3));
    }

    #[test]
    fn test_failure_releases_busy_flag() {
        let mut paginator = Paginator::new();
        assert_eq!(paginator.begin(at(2200.0), THRESHOLD), Some(2));
        paginator.finish(PageOutcome::Failed);
        assert!(!paginator.is_loading());
        // no retry of the failed page, the counter keeps moving
        assert_eq!(paginator.begin(at(2200.0), THRESHOLD), Some(3));
    }

    #[test]
    fn test_empty_page_stops_pagination() {
        let mut paginator = Paginator::new();
        paginator.begin(at(2200.0), THRESHOLD);
        paginator.finish(PageOutcome::from_fragment("  \n "));
        assert!(!paginator.is_loading());
        assert!(paginator.is_exhausted());
        assert_eq!(paginator.begin(at(2200.0), THRESHOLD), None);
    }

    #[test]
    fn test_outcome_from_fragment() {
        assert_eq!(PageOutcome::from_fragment(""), PageOutcome::Empty);
        assert_eq!(PageOutcome::from_fragment("<div></div>"), PageOutcome::Appended);
    }

    #[test]
    fn test_page_url_adds_param() {
        assert_eq!(
            page_url("https://shop.example/gallery/", 2).unwrap(),
            "https://shop.example/gallery/?page=2"
        );
    }

    #[test]
    fn test_page_url_replaces_param_and_keeps_others() {
        assert_eq!(
            page_url("https://shop.example/events/42/?sort=new&page=2#top", 3).unwrap(),
            "https://shop.example/events/42/?sort=new&page=3#top"
        );
    }

    #[test]
    fn test_page_url_rejects_relative() {
        assert!(page_url("/gallery/", 2).is_err());
    }
}
