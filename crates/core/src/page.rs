//! Paginated result container.

use serde::ser::{Serialize, SerializeStruct, Serializer};

/// One page of a larger result set, plus where it sits in that set.
///
/// Pages are immutable. They are built only through the functions in
/// [`pagination`](crate::pagination), which apply the degenerate-input policies;
/// `map` produces a new page and leaves `self` untouched.
///
/// `number` is the zero-based page index the caller asked for and may point
/// past the last page. `size` is the requested page size and may be `<= 0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Page<T> {
    content: Vec<T>,
    total_elements: u64,
    number: u64,
    size: i64,
}

impl<T> Page<T> {
    pub(crate) fn new(content: Vec<T>, total_elements: u64, number: u64, size: i64) -> Self {
        Self {
            content,
            total_elements,
            number,
            size,
        }
    }

    /// Elements of this page, in order.
    ///
    /// The view is read-only; the page's content cannot be changed through it:
    ///
    /// ```compile_fail
    /// use domain_shared_core::pagination;
    ///
    /// let page = pagination::of(vec![1, 2], 2, 0, 2);
    /// page.content().push(3);
    /// ```
    pub fn content(&self) -> &[T] {
        &self.content
    }

    pub fn into_content(self) -> Vec<T> {
        self.content
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.content.iter()
    }

    /// Total number of elements across all pages.
    pub fn total_elements(&self) -> u64 {
        self.total_elements
    }

    /// Zero-based page index.
    pub fn number(&self) -> u64 {
        self.number
    }

    /// Requested page size.
    pub fn size(&self) -> i64 {
        self.size
    }

    /// Number of pages, never zero.
    ///
    /// A non-positive size or an empty result set counts as a single page.
    pub fn total_pages(&self) -> u64 {
        if self.size <= 0 || self.total_elements == 0 {
            return 1;
        }
        self.total_elements.div_ceil(self.size.unsigned_abs())
    }

    pub fn has_content(&self) -> bool {
        !self.content.is_empty()
    }

    pub fn is_first(&self) -> bool {
        self.number == 0
    }

    pub fn is_last(&self) -> bool {
        !self.has_next()
    }

    pub fn has_next(&self) -> bool {
        self.number.saturating_add(1) < self.total_pages()
    }

    pub fn has_previous(&self) -> bool {
        self.number > 0
    }

    /// Convert every element, eagerly and in order, keeping the metadata.
    pub fn map<U, F>(&self, converter: F) -> Page<U>
    where
        F: FnMut(&T) -> U,
    {
        let content = self.content.iter().map(converter).collect();
        Page::new(content, self.total_elements, self.number, self.size)
    }

    /// Like [`Page::map`], consuming the page so elements can be moved.
    pub fn map_into<U, F>(self, converter: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        let content = self.content.into_iter().map(converter).collect();
        Page::new(content, self.total_elements, self.number, self.size)
    }
}

impl<'a, T> IntoIterator for &'a Page<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.content.iter()
    }
}

// Derived flags are serialized alongside the stored fields so clients do not
// have to repeat the page arithmetic.
impl<T: Serialize> Serialize for Page<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut page = serializer.serialize_struct("Page", 10)?;
        page.serialize_field("content", &self.content)?;
        page.serialize_field("total_elements", &self.total_elements)?;
        page.serialize_field("total_pages", &self.total_pages())?;
        page.serialize_field("number", &self.number)?;
        page.serialize_field("size", &self.size)?;
        page.serialize_field("first", &self.is_first())?;
        page.serialize_field("last", &self.is_last())?;
        page.serialize_field("has_next", &self.has_next())?;
        page.serialize_field("has_previous", &self.has_previous())?;
        page.serialize_field("has_content", &self.has_content())?;
        page.end()
    }
}
