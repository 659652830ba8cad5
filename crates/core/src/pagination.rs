//! Pagination math shared by server-paged lists and in-memory tables.
//!
//! Pages are 1-based throughout.

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Largest page size a list may request.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Page buttons shown on each side of the current page.
pub const DEFAULT_WINDOW_RADIUS: u32 = 1;

/// Clamp a requested page size to `1..=MAX_PAGE_SIZE`.
pub fn clamp_limit(limit: u32) -> u32 {
    limit.clamp(1, MAX_PAGE_SIZE)
}

/// Number of pages needed for `total` rows. An empty list still has one page.
pub fn total_pages(total: u64, limit: u32) -> u32 {
    let limit = u64::from(clamp_limit(limit));
    let pages = total.div_ceil(limit).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Clamp `page` to `1..=total_pages`.
pub fn clamp_page(page: u32, total_pages: u32) -> u32 {
    page.clamp(1, total_pages.max(1))
}

/// Page to show after removing a row, given how many rows remain on the
/// current page. Steps back one page when the current page beyond the
/// first has become empty.
pub fn page_after_removal(page: u32, remaining_on_page: usize) -> u32 {
    if remaining_on_page == 0 && page > 1 {
        page - 1
    } else {
        page
    }
}

/// One-based row range (`first`, `last`) shown on `page`, or `None` when the
/// page is past the end.
pub fn item_range(page: u32, limit: u32, total: u64) -> Option<(u64, u64)> {
    let limit = u64::from(clamp_limit(limit));
    let first = u64::from(page.max(1) - 1) * limit + 1;
    if first > total {
        return None;
    }
    Some((first, (first + limit - 1).min(total)))
}

/// Client-side slice of an in-memory list.
pub fn paginate<T>(items: &[T], page: u32, limit: u32) -> &[T] {
    let limit = clamp_limit(limit) as usize;
    let start = (page.max(1) as usize - 1).saturating_mul(limit);
    if start >= items.len() {
        return &[];
    }
    let end = (start + limit).min(items.len());
    &items[start..end]
}

/// An entry in a pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    /// Collapsed run of pages (`…`).
    Gap,
}

/// Page buttons: first, last, and `radius` pages around `current`, with
/// gaps where pages are skipped.
pub fn page_window(current: u32, total_pages: u32, radius: u32) -> Vec<PageItem> {
    let total_pages = total_pages.max(1);
    let current = clamp_page(current, total_pages);
    let low = current.saturating_sub(radius).max(1);
    let high = current.saturating_add(radius).min(total_pages);

    let mut items = Vec::new();
    if low > 1 {
        items.push(PageItem::Page(1));
        if low > 2 {
            items.push(PageItem::Gap);
        }
    }
    items.extend((low..=high).map(PageItem::Page));
    if high < total_pages {
        if high < total_pages - 1 {
            items.push(PageItem::Gap);
        }
        items.push(PageItem::Page(total_pages));
    }
    items
}
