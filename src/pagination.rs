// src/pagination.rs

use crate::config::QUESTIONS_PER_PAGE;

/// Slices one page out of an ordered result set.
///
/// Pages are 1-based: page 1 covers indices `0..10`. A page past the end of
/// `items` yields an empty slice, not an error; callers decide whether an
/// empty page is a 404.
pub fn paginate<T>(page: usize, items: &[T]) -> &[T] {
    // Saturating arithmetic: the page number comes straight from a query
    // parameter and may be arbitrarily large.
    let start = page.saturating_sub(1).saturating_mul(QUESTIONS_PER_PAGE);
    let end = start.saturating_add(QUESTIONS_PER_PAGE).min(items.len());
    items.get(start..end).unwrap_or(&[])
}
