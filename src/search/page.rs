//! Page Module
//!
//! Shapes of the cached search results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// == Page Result ==
/// One page of search results plus totals for the whole result set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult<T> {
    /// Total matching records
    pub total: u64,
    /// Total number of pages
    pub total_pages: u64,
    /// Records on this page
    pub data: Vec<T>,
}

impl<T> PageResult<T> {
    /// Creates a page, deriving `total_pages` from `total` and `page_size`.
    pub fn new(data: Vec<T>, total: u64, page_size: u32) -> Self {
        let total_pages = if page_size == 0 {
            0
        } else {
            total.div_ceil(u64::from(page_size))
        };
        Self {
            total,
            total_pages,
            data,
        }
    }

    pub fn empty() -> Self {
        Self {
            total: 0,
            total_pages: 0,
            data: Vec::new(),
        }
    }
}

// == Note Summary ==
/// The parts of a note shown in a search result list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteSummary {
    pub id: i64,
    pub notebook_id: i64,
    pub notebook_name: String,
    pub title: String,
    #[serde(default)]
    pub tag_ids: Vec<i64>,
    pub update_time: DateTime<Utc>,
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        let page: PageResult<u8> = PageResult::new(vec![1, 2], 21, 10);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_total_pages_zero_page_size() {
        let page: PageResult<u8> = PageResult::new(Vec::new(), 5, 0);
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn test_page_serialize_camel_case() {
        let page: PageResult<u8> = PageResult::new(vec![1], 1, 10);
        let json = serde_json::to_value(&page).unwrap();

        assert_eq!(json["totalPages"], 1);
        assert_eq!(json["data"][0], 1);
    }

    #[test]
    fn test_note_summary_deserialize() {
        let json = r#"{
            "id": 1,
            "notebookId": 2,
            "notebookName": "Inbox",
            "title": "Groceries",
            "updateTime": "2025-12-21T10:00:00Z"
        }"#;
        let note: NoteSummary = serde_json::from_str(json).unwrap();

        assert_eq!(note.notebook_name, "Inbox");
        assert!(note.tag_ids.is_empty());
    }
}
