//! Pure client-style pagination: a fixed page size partitions the full
//! snapshot into consecutive windows. Changing page is a re-slice, never
//! a re-fetch.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

/// Slice `items` into the window for `page`, clamping the requested page
/// into `[1, max(1, total_pages)]`.
pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> Paginated<T> {
    assert!(per_page > 0, "page size must be positive");

    let total_items = items.len();
    let total_pages = total_items.div_ceil(per_page);
    let page = page.clamp(1, total_pages.max(1));

    let start = (page - 1) * per_page;
    let window = items
        .iter()
        .skip(start)
        .take(per_page)
        .cloned()
        .collect::<Vec<_>>();

    Paginated {
        items: window,
        page,
        per_page,
        total_items,
        total_pages,
    }
}
