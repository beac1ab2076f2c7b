//! In-memory merge of two paginated result sets.
//!
//! Some listings combine rows reached through different relations (for example the
//! documents a department owns and the documents assigned to it). Instead of a UNION
//! query both sides are fetched newest-first, merged here, and the requested page is
//! sliced out of the combined sequence.

use std::collections::HashSet;

use crate::server::{error::AppError, model::page::Page};

/// Largest row offset a list query may reach. SQLite binds limits and offsets as `i64`.
pub const MAX_OFFSET: u64 = i64::MAX as u64;

/// Largest number of leading rows a merged listing fetches from each source.
pub const MAX_MERGED_ROWS: u64 = 10_000;

/// One side of a merge: the leading rows of a newest-first query plus the total number
/// of rows that query would return without a limit.
#[derive(Debug, Clone)]
pub struct PageSource<T> {
    pub items: Vec<T>,
    pub total: u64,
}

impl<T> PageSource<T> {
    pub fn new(items: Vec<T>, total: u64) -> Self {
        Self { items, total }
    }
}

/// Number of leading rows each source must supply so that `page` can be sliced from
/// the merged sequence, or `None` when that count does not fit in a `u64`.
pub fn required_rows(page: u64, per_page: u64) -> Option<u64> {
    page.checked_add(1)?.checked_mul(per_page)
}

/// Checks that every row of `page` lies below [`MAX_OFFSET`].
///
/// # Returns
/// - `Ok(())` - The page can be fetched
/// - `Err(AppError::BadRequest)` - The page lies past the addressable range
pub fn check_window(page: u64, per_page: u64) -> Result<(), AppError> {
    match required_rows(page, per_page) {
        Some(end) if end <= MAX_OFFSET => Ok(()),
        _ => Err(out_of_range(page)),
    }
}

/// Leading rows to fetch from each source of a merged listing, capped at
/// [`MAX_MERGED_ROWS`].
///
/// # Returns
/// - `Ok(u64)` - Rows to fetch per source
/// - `Err(AppError::BadRequest)` - The page lies past the merged listing's range
pub fn merged_rows(page: u64, per_page: u64) -> Result<u64, AppError> {
    required_rows(page, per_page)
        .filter(|&rows| rows <= MAX_MERGED_ROWS)
        .ok_or_else(|| out_of_range(page))
}

fn out_of_range(page: u64) -> AppError {
    AppError::BadRequest(format!("Page {} is out of range", page))
}

/// Merges two sources into a single page.
///
/// Items are de-duplicated by id, keeping the first occurrence, then sorted by `key`
/// descending with ties broken by id descending. The reported total is the sum of both
/// source totals minus the duplicates that were dropped.
///
/// Each source must contain at least [`required_rows`] items (or all of its rows) for
/// the slice to be correct.
///
/// # Arguments
/// - `first` - First source, wins when the same id appears in both
/// - `second` - Second source
/// - `key` - Returns the sort key and id of an item
/// - `page` - Zero-indexed page number
/// - `per_page` - Number of items per page
///
/// # Returns
/// - `Page<T>` - The requested slice with merged totals
pub fn merge_pages<T, K, F>(
    first: PageSource<T>,
    second: PageSource<T>,
    key: F,
    page: u64,
    per_page: u64,
) -> Page<T>
where
    K: Ord,
    F: Fn(&T) -> (K, i32),
{
    let mut seen = HashSet::new();
    let mut duplicates: u64 = 0;
    let mut merged = Vec::with_capacity(first.items.len() + second.items.len());

    for item in first.items.into_iter().chain(second.items) {
        let (_, id) = key(&item);
        if seen.insert(id) {
            merged.push(item);
        } else {
            duplicates += 1;
        }
    }

    merged.sort_by(|a, b| key(b).cmp(&key(a)));

    let total = (first.total + second.total).saturating_sub(duplicates);
    let start = page.saturating_mul(per_page) as usize;
    let items: Vec<T> = merged
        .into_iter()
        .skip(start)
        .take(per_page as usize)
        .collect();

    Page::new(items, total, page, per_page)
}
