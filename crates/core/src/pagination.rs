//! Building [`Page`]s.
//!
//! Stateless helpers; the only public way to obtain a [`Page`]. Every input
//! combination has a defined result, so none of these functions can fail:
//!
//! - an empty source yields [`empty`]
//! - a page size `<= 0` means "no pagination": the whole source as page 0
//! - a page past the end yields empty content with the requested metadata

use crate::page::Page;

/// Empty page: no content, zero elements, page 0 of size 0.
pub fn empty<T>() -> Page<T> {
    Page::new(Vec::new(), 0, 0, 0)
}

/// Wrap an already-fetched slice of results as-is.
///
/// Nothing is recomputed: `total_elements` is the caller's count of the whole
/// result set and `content` is typically a subset of it. `None` content is
/// treated as empty.
pub fn of<T>(
    content: impl Into<Option<Vec<T>>>,
    total_elements: u64,
    number: u64,
    size: i64,
) -> Page<T> {
    Page::new(content.into().unwrap_or_default(), total_elements, number, size)
}

/// Convert a possibly absent page. `None` yields [`empty`].
pub fn map<T, U, F>(page: Option<&Page<T>>, converter: F) -> Page<U>
where
    F: FnMut(&T) -> U,
{
    match page {
        Some(page) => page.map(converter),
        None => empty(),
    }
}

/// Cut page `page_number` of size `page_size` out of a fully materialized
/// sequence. Selected elements are cloned into the page.
pub fn paginate<T: Clone>(items: &[T], page_number: u64, page_size: i64) -> Page<T> {
    let total_elements = items.len() as u64;
    match window(items.len(), page_number, page_size) {
        Window::Empty => empty(),
        Window::Whole => of(items.to_vec(), total_elements, 0, total_elements as i64),
        Window::PastEnd => of(Vec::new(), total_elements, page_number, page_size),
        Window::Range { start, end } => {
            of(items[start..end].to_vec(), total_elements, page_number, page_size)
        }
    }
}

/// Same policy as [`paginate`], moving the selected elements out of an owned
/// vector instead of cloning them.
pub fn paginate_vec<T>(mut items: Vec<T>, page_number: u64, page_size: i64) -> Page<T> {
    let total_elements = items.len() as u64;
    match window(items.len(), page_number, page_size) {
        Window::Empty => empty(),
        Window::Whole => of(items, total_elements, 0, total_elements as i64),
        Window::PastEnd => of(Vec::new(), total_elements, page_number, page_size),
        Window::Range { start, end } => {
            items.truncate(end);
            let content = items.split_off(start);
            of(content, total_elements, page_number, page_size)
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Window {
    Empty,
    Whole,
    PastEnd,
    Range { start: usize, end: usize },
}

fn window(len: usize, page_number: u64, page_size: i64) -> Window {
    if len == 0 {
        return Window::Empty;
    }

    if page_size <= 0 {
        tracing::debug!(
            page_number,
            page_size,
            total_elements = len,
            "non-positive page size, returning all elements as page 0"
        );
        return Window::Whole;
    }

    let size = page_size.unsigned_abs();
    let start = match page_number.checked_mul(size) {
        Some(start) if start < len as u64 => start as usize,
        _ => {
            tracing::debug!(
                page_number,
                page_size,
                total_elements = len,
                "requested page is past the end"
            );
            return Window::PastEnd;
        }
    };

    // start < len, so the remaining count fits in usize.
    let remaining = (len - start) as u64;
    let end = start + size.min(remaining) as usize;
    Window::Range { start, end }
}
