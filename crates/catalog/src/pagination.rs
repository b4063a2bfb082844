//! Page slicing and page-number links for result lists.

use serde::Serialize;
use tour_core::config::PaginationConfig;

/// Pages shown in full before page links start collapsing into ellipses.
pub const MAX_UNCOLLAPSED_PAGES: usize = 5;

/// Number of pages needed for `len` items.
pub fn total_pages(len: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    len.div_ceil(per_page)
}

/// One page of a result list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<'a, T> {
    /// Items on this page
    pub items: &'a [T],
    /// 1-based page number after clamping
    pub number: usize,
    /// Total number of pages (0 for an empty list)
    pub total_pages: usize,
    /// Page size used
    pub per_page: usize,
    /// Length of the full list
    pub total_items: usize,
}

impl<'a, T> Page<'a, T> {
    /// Slice page `page` (1-based) out of `items`.
    ///
    /// Out-of-range page numbers are clamped to the first or last page, and a
    /// page size of 0 is treated as 1.
    pub fn of(items: &'a [T], page: usize, per_page: usize) -> Self {
        let per_page = per_page.max(1);
        let total = total_pages(items.len(), per_page);
        let number = page.clamp(1, total.max(1));

        let start = ((number - 1) * per_page).min(items.len());
        let end = (start + per_page).min(items.len());

        Self {
            items: &items[start..end],
            number,
            total_pages: total,
            per_page,
            total_items: items.len(),
        }
    }

    /// Whether a previous page exists.
    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    /// Whether a next page exists.
    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }

    /// Page links for this page's navigation bar.
    pub fn links(&self) -> Vec<PageLink> {
        visible_pages(self.total_pages, self.number)
    }
}

/// An entry in the page navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageLink {
    /// A clickable page number
    Number(usize),
    /// A gap between non-adjacent page numbers
    Ellipsis,
}

/// Page links for `total` pages with `current` selected.
///
/// With up to [`MAX_UNCOLLAPSED_PAGES`] pages every number is shown. Beyond
/// that only the first page, the last page and pages within one of `current`
/// are shown, with an ellipsis wherever numbers are skipped.
pub fn visible_pages(total: usize, current: usize) -> Vec<PageLink> {
    let shown = (1..=total).filter(|&page| {
        total <= MAX_UNCOLLAPSED_PAGES || page == 1 || page == total || page.abs_diff(current) <= 1
    });

    let mut links = Vec::new();
    let mut previous: Option<usize> = None;
    for page in shown {
        if previous.is_some_and(|p| page - p > 1) {
            links.push(PageLink::Ellipsis);
        }
        links.push(PageLink::Number(page));
        previous = Some(page);
    }
    links
}

/// Page sizes chosen by viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSizes {
    mobile_breakpoint: u32,
    tablet_breakpoint: u32,
    mobile: usize,
    tablet: usize,
    desktop: usize,
}

impl PageSizes {
    /// Page size for a viewport `width` in pixels.
    pub fn per_page_for_width(&self, width: u32) -> usize {
        if width < self.mobile_breakpoint {
            self.mobile
        } else if width < self.tablet_breakpoint {
            self.tablet
        } else {
            self.desktop
        }
    }

    /// Page size on wide screens.
    pub fn desktop(&self) -> usize {
        self.desktop
    }
}

impl Default for PageSizes {
    fn default() -> Self {
        Self::from(&PaginationConfig::default())
    }
}

impl From<&PaginationConfig> for PageSizes {
    fn from(config: &PaginationConfig) -> Self {
        Self {
            mobile_breakpoint: config.mobile_breakpoint,
            tablet_breakpoint: config.tablet_breakpoint,
            mobile: config.mobile_per_page,
            tablet: config.tablet_per_page,
            desktop: config.desktop_per_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageLink::{Ellipsis, Number};

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 6), 0);
        assert_eq!(total_pages(6, 6), 1);
        assert_eq!(total_pages(7, 6), 2);
        assert_eq!(total_pages(12, 3), 4);
        assert_eq!(total_pages(5, 0), 0);
    }

    #[test]
    fn test_page_slice() {
        let items: Vec<u32> = (1..=10).collect();
        let page = Page::of(&items, 2, 4);
        assert_eq!(page.items, &[5, 6, 7, 8]);
        assert_eq!(page.total_pages, 3);
        assert!(page.has_previous());
        assert!(page.has_next());

        let last = Page::of(&items, 3, 4);
        assert_eq!(last.items, &[9, 10]);
        assert!(!last.has_next());
    }

    #[test]
    fn test_page_clamped() {
        let items: Vec<u32> = (1..=10).collect();
        assert_eq!(Page::of(&items, 0, 4).number, 1);
        let past_end = Page::of(&items, 99, 4);
        assert_eq!(past_end.number, 3);
        assert_eq!(past_end.items, &[9, 10]);
    }

    #[test]
    fn test_empty_list() {
        let items: Vec<u32> = vec![];
        let page = Page::of(&items, 1, 6);
        assert!(page.items.is_empty());
        assert_eq!(page.number, 1);
        assert_eq!(page.total_pages, 0);
        assert!(!page.has_previous());
        assert!(!page.has_next());
        assert!(page.links().is_empty());
    }

    #[test]
    fn test_visible_pages_small() {
        assert_eq!(
            visible_pages(5, 3),
            vec![Number(1), Number(2), Number(3), Number(4), Number(5)]
        );
    }

    #[test]
    fn test_visible_pages_middle() {
        assert_eq!(
            visible_pages(10, 5),
            vec![Number(1), Ellipsis, Number(4), Number(5), Number(6), Ellipsis, Number(10)]
        );
    }

    #[test]
    fn test_visible_pages_edges() {
        assert_eq!(visible_pages(8, 1), vec![Number(1), Number(2), Ellipsis, Number(8)]);
        assert_eq!(visible_pages(8, 8), vec![Number(1), Ellipsis, Number(7), Number(8)]);
    }

    #[test]
    fn test_visible_pages_no_gap_next_to_first() {
        assert_eq!(
            visible_pages(6, 3),
            vec![Number(1), Number(2), Number(3), Number(4), Ellipsis, Number(6)]
        );
    }

    #[test]
    fn test_page_sizes_by_width() {
        let sizes = PageSizes::default();
        assert_eq!(sizes.per_page_for_width(375), 3);
        assert_eq!(sizes.per_page_for_width(639), 3);
        assert_eq!(sizes.per_page_for_width(640), 4);
        assert_eq!(sizes.per_page_for_width(1023), 4);
        assert_eq!(sizes.per_page_for_width(1440), 6);
    }

    #[test]
    fn test_page_sizes_from_config() {
        let config = PaginationConfig {
            desktop_per_page: 9,
            ..PaginationConfig::default()
        };
        assert_eq!(PageSizes::from(&config).per_page_for_width(1920), 9);
    }
}
