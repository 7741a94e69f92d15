// crates/shared-kernel/src/application/pagination.rs

use crate::errors::{DomainError, Result};
use serde::{Deserialize, Serialize};

/// Page demandée, numérotée à partir de 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    page: u32,
    size: u32,
}

impl PageRequest {
    pub fn try_new(page: u32, size: u32) -> Result<Self> {
        if page == 0 {
            return Err(DomainError::Validation {
                field: "page",
                reason: "page numbers start at 1".into(),
            });
        }
        if size == 0 {
            return Err(DomainError::Validation {
                field: "size",
                reason: "page size must be positive".into(),
            });
        }
        Ok(Self { page, size })
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn offset(&self) -> u64 {
        (self.page as u64 - 1) * self.size as u64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub has_previous: bool,
    pub has_next: bool,
    pub page: u32,
    pub size: u32,
    pub total_entities: u64,
    pub total_pages: u64,
}

impl Pagination {
    pub fn new(request: PageRequest, total_entities: u64) -> Self {
        let size = request.size as u64;
        Self {
            has_previous: request.page > 1,
            has_next: (request.page as u64) * size < total_entities,
            page: request.page,
            size: request.size,
            total_entities,
            total_pages: total_entities.div_ceil(size),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T> {
    pub content: Vec<T>,
    pub pagination: Pagination,
}

impl<T> PageResponse<T> {
    pub fn new(content: Vec<T>, request: PageRequest, total_entities: u64) -> Self {
        Self {
            content,
            pagination: Pagination::new(request, total_entities),
        }
    }
}
