use std::fmt;

pub const QUESTIONS_PER_PAGE: usize = 10;

/// 1-based page number. Zero and negative numbers are not pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page(usize);

impl Page {
    pub const FIRST: Page = Page(1);

    pub fn new(number: i64) -> Option<Page> {
        usize::try_from(number).ok().filter(|n| *n > 0).map(Page)
    }
}

impl Default for Page {
    fn default() -> Self {
        Page::FIRST
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Returns the `page`-th window of `page_size` items.
/// A page past the end of `items` is an empty slice.
pub fn paginate<T>(items: &[T], page: Page, page_size: usize) -> &[T] {
    let start = (page.0 - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}
