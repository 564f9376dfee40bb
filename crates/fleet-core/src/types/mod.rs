//! Core type definitions used across the fleet workspace.

pub mod filter;
pub mod pagination;
pub mod sorting;

pub use filter::{FilterCondition, FilterValue};
pub use pagination::{PageRequest, PageResponse, total_pages};
pub use sorting::{AllowList, SortDirection, SortError, SortField};
