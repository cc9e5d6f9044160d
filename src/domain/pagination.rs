// src/domain/pagination.rs

pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Zero-based page cursor. Construction clamps the page index to `>= 0` and the
/// page size to `>= 1`, so every value of this type is already normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    size: u32,
}

impl PageRequest {
    pub fn new(page: i64, size: i64) -> Self {
        let page = u32::try_from(page.max(0)).unwrap_or(u32::MAX);
        let size = u32::try_from(size.max(1)).unwrap_or(u32::MAX);
        Self { page, size }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of results plus the metadata needed to navigate the rest.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    content: Vec<T>,
    page: u32,
    size: u32,
    total_elements: u64,
}

impl<T> Page<T> {
    pub fn of(content: Vec<T>, request: PageRequest, total_elements: u64) -> Self {
        Self {
            content,
            page: request.page(),
            size: request.size(),
            total_elements,
        }
    }

    pub fn empty(request: PageRequest) -> Self {
        Self::of(Vec::new(), request, 0)
    }

    /// Slice one page out of an already filtered, ordered list.
    pub fn slice(items: Vec<T>, request: PageRequest) -> Self {
        let total_elements = u64::try_from(items.len()).unwrap_or(u64::MAX);
        let start = match usize::try_from(request.offset()) {
            Ok(start) if start < items.len() => start,
            _ => return Self::of(Vec::new(), request, total_elements),
        };

        let size = usize::try_from(request.size()).unwrap_or(usize::MAX);
        let content = items.into_iter().skip(start).take(size).collect();
        Self::of(content, request, total_elements)
    }

    pub fn content(&self) -> &[T] {
        &self.content
    }

    pub fn into_content(self) -> Vec<T> {
        self.content
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn total_elements(&self) -> u64 {
        self.total_elements
    }

    pub fn total_pages(&self) -> u64 {
        if self.size == 0 {
            return u64::from(self.total_elements > 0);
        }
        self.total_elements.div_ceil(u64::from(self.size))
    }

    pub fn number_of_elements(&self) -> usize {
        self.content.len()
    }

    pub fn is_first(&self) -> bool {
        self.page == 0
    }

    pub fn is_last(&self) -> bool {
        u64::from(self.page) + 1 >= self.total_pages()
    }

    pub fn has_next(&self) -> bool {
        !self.is_last()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_elements: self.total_elements,
        }
    }
}
