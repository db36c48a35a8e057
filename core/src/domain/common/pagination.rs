use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::domain::common::entities::app_errors::CoreError;

pub const DEFAULT_PAGE_SIZE: u32 = 15;

/// Zero-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    pub fn new(page: u32, size: u32) -> Self {
        Self { page, size }
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.size == 0 {
            return Err(CoreError::InvalidPagination(
                "size must be >= 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.size)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageModel<T> {
    pub content: Vec<T>,
    pub number: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl<T> PageModel<T> {
    pub fn empty(request: PageRequest) -> Self {
        Self::assemble(Vec::new(), 0, request)
    }

    pub fn assemble(content: Vec<T>, total_elements: u64, request: PageRequest) -> Self {
        Self {
            content,
            number: request.page,
            size: request.size,
            total_elements,
            total_pages: total_pages(total_elements, request.size),
        }
    }

    pub fn map<U, F>(self, f: F) -> PageModel<U>
    where
        F: FnMut(T) -> U,
    {
        PageModel {
            content: self.content.into_iter().map(f).collect(),
            number: self.number,
            size: self.size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
        }
    }
}

pub fn total_pages(total_elements: u64, size: u32) -> u64 {
    if total_elements == 0 || size == 0 {
        return 0;
    }
    total_elements.div_ceil(u64::from(size))
}

/// Runs `fetch` only when the count found something and assembles the page.
pub async fn paginate<T, F, Fut>(
    total_elements: u64,
    request: PageRequest,
    fetch: F,
) -> Result<PageModel<T>, CoreError>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<Vec<T>, CoreError>>,
{
    if total_elements == 0 {
        return Ok(PageModel::empty(request));
    }

    let content = fetch().await?;

    Ok(PageModel::assemble(content, total_elements, request))
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};

    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(101, 20), 6);
        assert_eq!(total_pages(100, 20), 5);
        assert_eq!(total_pages(1, 20), 1);
    }

    #[test]
    fn test_total_pages_is_zero_without_elements() {
        assert_eq!(total_pages(0, 20), 0);
    }

    #[test]
    fn test_offset_is_page_times_size() {
        let request = PageRequest::new(3, 20);
        assert_eq!(request.offset(), 60);
        assert_eq!(request.limit(), 20);
    }

    #[test]
    fn test_zero_size_is_rejected() {
        assert!(matches!(
            PageRequest::new(0, 0).validate(),
            Err(CoreError::InvalidPagination(_))
        ));
        assert!(PageRequest::default().validate().is_ok());
    }

    #[test]
    fn test_empty_page_keeps_request() {
        let page: PageModel<u8> = PageModel::empty(PageRequest::new(2, 10));
        assert!(page.content.is_empty());
        assert_eq!(page.number, 2);
        assert_eq!(page.size, 10);
        assert_eq!(page.total_elements, 0);
        assert_eq!(page.total_pages, 0);
    }

    #[tokio::test]
    async fn test_paginate_skips_fetch_on_zero_count() {
        let fetched = AtomicBool::new(false);

        let page = paginate(0, PageRequest::default(), || async {
            fetched.store(true, Ordering::SeqCst);
            Ok::<_, CoreError>(vec![1u8])
        })
        .await
        .unwrap();

        assert!(!fetched.load(Ordering::SeqCst));
        assert!(page.content.is_empty());
        assert_eq!(page.total_pages, 0);
    }

    #[tokio::test]
    async fn test_paginate_uses_count_for_total_pages() {
        let page = paginate(41, PageRequest::new(2, 20), || async {
            Ok::<_, CoreError>(vec![1u8])
        })
        .await
        .unwrap();

        assert_eq!(page.content, vec![1]);
        assert_eq!(page.number, 2);
        assert_eq!(page.total_elements, 41);
        assert_eq!(page.total_pages, 3);
    }
}
