//! Page window arithmetic shared by every screen.

/// The resolved window for one page of a collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageWindow {
    pub effective_page: usize,
    pub total_pages: usize,
    pub slice_start: usize,
    pub slice_end: usize,
}

/// Clamp `requested_page` into a valid window over `total_items`.
///
/// There is never a page zero: an empty collection is page 1 of 1 with an
/// empty slice, which keeps the pagination affordances well-defined.
pub fn compute_window(total_items: usize, page_size: usize, requested_page: usize) -> PageWindow {
    let page_size = page_size.max(1);
    let total_pages = total_items.div_ceil(page_size).max(1);
    let effective_page = requested_page.clamp(1, total_pages);
    let slice_start = ((effective_page - 1) * page_size).min(total_items);
    let slice_end = (slice_start + page_size).min(total_items);
    PageWindow {
        effective_page,
        total_pages,
        slice_start,
        slice_end,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_collection_is_page_one_of_one() {
        let window = compute_window(0, 10, 1);
        assert_eq!(window.effective_page, 1);
        assert_eq!(window.total_pages, 1);
        assert_eq!(window.slice_start, window.slice_end);
    }

    #[test]
    fn window_invariants_hold_for_a_range_of_inputs() {
        for total_items in 0..40 {
            for page_size in 1..6 {
                for requested_page in 0..10 {
                    let window = compute_window(total_items, page_size, requested_page);
                    assert!(window.total_pages >= 1);
                    assert!(window.effective_page >= 1);
                    assert!(window.effective_page <= window.total_pages);
                    assert!(window.slice_start <= window.slice_end);
                    assert!(window.slice_end <= total_items);
                }
            }
        }
    }

    #[test]
    fn out_of_range_page_is_clamped() {
        let window = compute_window(15, 7, 99);
        assert_eq!(window.total_pages, 3);
        assert_eq!(window.effective_page, 3);
        assert_eq!(window.slice_start, 14);
        assert_eq!(window.slice_end, 15);
        let window = compute_window(15, 7, 0);
        assert_eq!(window.effective_page, 1);
        assert_eq!(window.slice_start, 0);
        assert_eq!(window.slice_end, 7);
    }

    #[test]
    fn deleting_the_only_item_on_page_one_stays_on_page_one() {
        // total_items=1, page_size=10, then the single item is deleted.
        let window = compute_window(0, 10, 1);
        assert_eq!(window.effective_page, 1);
        assert_eq!(window.total_pages, 1);
        assert_eq!(window.slice_start, window.slice_end);
    }

    #[test]
    fn deleting_the_last_item_of_page_two_steps_back() {
        // total_items=11, page_size=10, current page 2 holds one item.
        let before = compute_window(11, 10, 2);
        assert_eq!(before.total_pages, 2);
        assert_eq!(before.slice_end - before.slice_start, 1);
        // After the delete the same requested page resolves to page 1 of 1.
        let after = compute_window(10, 10, 2);
        assert_eq!(after.effective_page, 1);
        assert_eq!(after.total_pages, 1);
        assert_eq!(after.slice_end - after.slice_start, 10);
    }

    #[test]
    fn zero_page_size_does_not_divide_by_zero() {
        let window = compute_window(5, 0, 1);
        assert_eq!(window.total_pages, 5);
        assert_eq!(window.slice_end - window.slice_start, 1);
    }
}
