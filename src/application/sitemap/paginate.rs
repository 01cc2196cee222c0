//! Fixed-size chunking of the ordered URL list.

use std::num::NonZeroUsize;

/// Number of pages needed for `len` items.
pub fn page_count(len: usize, page_size: NonZeroUsize) -> usize {
    len.div_ceil(page_size.get())
}

/// Split `items` into consecutive pages; item `i` lands on page `i / page_size`.
pub fn paginate<T>(items: Vec<T>, page_size: NonZeroUsize) -> Vec<Vec<T>> {
    let size = page_size.get();
    let mut pages = Vec::with_capacity(page_count(items.len(), page_size));
    let mut current = Vec::with_capacity(size.min(items.len()));

    for item in items {
        current.push(item);
        if current.len() == size {
            pages.push(std::mem::replace(&mut current, Vec::with_capacity(size)));
        }
    }
    if !current.is_empty() {
        pages.push(current);
    }

    pages
}

/// Take the 1-based `page` out of `pages`; `None` for 0 or past the end.
pub fn take_page<T>(mut pages: Vec<Vec<T>>, page: u32) -> Option<Vec<T>> {
    let index = usize::try_from(page).ok()?.checked_sub(1)?;
    if index >= pages.len() {
        return None;
    }
    Some(pages.swap_remove(index))
}
