//! Pagination window computation for the public journal listing.
//!
//! Offsets are zero-based item indexes, not page numbers. The calculator
//! hands back the previous/next offsets as raw values with two sentinel
//! conventions carried over from the site's URL scheme:
//!
//! - `previous == -1` means there is no previous page.
//! - `next == 0` means there is no next page.
//!
//! The sentinels are reused concrete values, not `Option`s: `0` is also a
//! perfectly good offset (the first page), so a `next` of `0` must be read
//! through [`PageWindow::has_next`] rather than as a link target. In
//! particular, when `total_count <= page_size` the next offset collapses to
//! `0` and cannot be told apart from "next page starts at item 0". That
//! ambiguity is part of the contract.

/// Sentinel for "no previous page". Always exactly `-1`, never any other
/// negative value.
pub const NO_PREVIOUS: i64 = -1;

/// Sentinel for "no next page". Collides with the offset of the first
/// page; see the module docs.
pub const NO_NEXT: i64 = 0;

/// Previous/next offsets for one page of the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// Offset of the previous page, or [`NO_PREVIOUS`].
    pub previous: i64,
    /// Offset of the next page, or [`NO_NEXT`].
    pub next: i64,
}

impl PageWindow {
    /// Whether a previous-page link should be rendered.
    pub fn has_previous(&self) -> bool {
        self.previous != NO_PREVIOUS
    }

    /// Whether a next-page link should be rendered.
    pub fn has_next(&self) -> bool {
        self.next != NO_NEXT
    }
}

/// Compute the previous/next offsets for the page starting at
/// `current_offset`.
///
/// - `previous` is `current_offset - page_size`, clamped to exactly
///   [`NO_PREVIOUS`] when that would be negative.
/// - `next` is `current_offset + page_size`, clamped to [`NO_NEXT`] when it
///   reaches `total_count - 1`.
///
/// Arguments outside their intended ranges (non-positive `page_size`,
/// negative `current_offset` or `total_count`) are not validated; the
/// arithmetic stands as written, saturating at the integer extremes so a
/// crafted offset cannot overflow.
pub fn paginate(current_offset: i64, page_size: i64, total_count: i64) -> PageWindow {
    let previous = current_offset.saturating_sub(page_size);
    let previous = if previous < 0 { NO_PREVIOUS } else { previous };

    let next = current_offset.saturating_add(page_size);
    let next = if next >= total_count - 1 { NO_NEXT } else { next };

    PageWindow { previous, next }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_of_three_pages() {
        let w = paginate(0, 10, 25);
        assert_eq!((w.previous, w.next), (-1, 10));
        assert!(!w.has_previous());
        assert!(w.has_next());
    }

    #[test]
    fn middle_page() {
        let w = paginate(10, 10, 25);
        assert_eq!((w.previous, w.next), (0, 20));
        assert!(w.has_previous());
        assert!(w.has_next());
    }

    #[test]
    fn last_page() {
        let w = paginate(20, 10, 25);
        assert_eq!((w.previous, w.next), (10, 0));
        assert!(w.has_previous());
        assert!(!w.has_next());
    }

    #[test]
    fn previous_clamps_to_exactly_minus_one() {
        // Partial step back still clamps to the sentinel, not to -7 or 0.
        let w = paginate(3, 10, 25);
        assert_eq!(w.previous, -1);
        assert!(!w.has_previous());
    }

    #[test]
    fn next_clamps_at_total_minus_one_boundary() {
        // next == total - 1 already counts as "no next page".
        let w = paginate(10, 10, 21);
        assert_eq!(w.next, 0);
        assert!(!w.has_next());

        // One more item and the link comes back.
        let w = paginate(10, 10, 22);
        assert_eq!(w.next, 20);
        assert!(w.has_next());
    }

    #[test]
    fn single_page_collapses_next_to_zero() {
        // total <= page_size: the sentinel is indistinguishable from a real
        // offset of 0. has_next() reads it as disabled.
        let w = paginate(0, 10, 5);
        assert_eq!((w.previous, w.next), (-1, 0));
        assert!(!w.has_previous());
        assert!(!w.has_next());
    }

    #[test]
    fn empty_listing() {
        let w = paginate(0, 10, 0);
        assert_eq!((w.previous, w.next), (-1, 0));
        assert!(!w.has_next());
    }

    #[test]
    fn previous_of_zero_is_a_real_offset() {
        // previous == 0 is a live link back to the first page, unlike
        // next == 0.
        let w = paginate(10, 10, 100);
        assert_eq!(w.previous, 0);
        assert!(w.has_previous());
    }

    #[test]
    fn extreme_offsets_saturate_instead_of_overflowing() {
        // The offset route accepts any i64, so the sums must not wrap.
        let w = paginate(i64::MAX, 10, 25);
        assert_eq!(w.previous, i64::MAX - 10);
        assert!(!w.has_next());

        let w = paginate(i64::MIN, 10, 25);
        assert_eq!(w.previous, -1);
        assert!(!w.has_previous());
    }
}
