//! Search Query Module
//!
//! Search parameters and the cache keys derived from them.

use serde::{Deserialize, Serialize};

/// Separator between key fields
const KEY_DELIMITER: char = '|';

// == Search Query ==
/// Parameters of one paginated note search.
///
/// An id of `0` means "no filter" for that dimension.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    /// Page number, starting from 1
    pub page_index: u32,
    /// Results per page
    pub page_size: u32,
    #[serde(default)]
    pub notebook_id: i64,
    #[serde(default)]
    pub tag_id: i64,
    /// Matched against title and content
    #[serde(default)]
    pub keyword: String,
}

impl SearchQuery {
    /// Creates an unfiltered query for one page.
    pub fn page(page_index: u32, page_size: u32) -> Self {
        Self {
            page_index,
            page_size,
            notebook_id: 0,
            tag_id: 0,
            keyword: String::new(),
        }
    }

    pub fn with_notebook(mut self, notebook_id: i64) -> Self {
        self.notebook_id = notebook_id;
        self
    }

    pub fn with_tag(mut self, tag_id: i64) -> Self {
        self.tag_id = tag_id;
        self
    }

    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = keyword.into();
        self
    }

    // == Cache Key ==
    /// Builds the cache key `page_index|page_size|notebook_id|tag_id|keyword`.
    ///
    /// The keyword goes last and every field before it is numeric, so a
    /// keyword containing the delimiter cannot make two queries collide.
    pub fn cache_key(&self) -> String {
        format!(
            "{}{d}{}{d}{}{d}{}{d}{}",
            self.page_index,
            self.page_size,
            self.notebook_id,
            self.tag_id,
            self.keyword,
            d = KEY_DELIMITER
        )
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_key_format() {
        let query = SearchQuery::page(2, 50)
            .with_notebook(7)
            .with_tag(3)
            .with_keyword("rust");

        assert_eq!(query.cache_key(), "2|50|7|3|rust");
    }

    #[test]
    fn test_cache_key_unfiltered() {
        assert_eq!(SearchQuery::page(1, 10).cache_key(), "1|10|0|0|");
    }

    #[test]
    fn test_cache_key_distinguishes_every_field() {
        let base = SearchQuery::page(1, 10).with_keyword("a");
        let variants = [
            SearchQuery::page(2, 10).with_keyword("a"),
            SearchQuery::page(1, 20).with_keyword("a"),
            base.clone().with_notebook(1),
            base.clone().with_tag(1),
            base.clone().with_keyword("b"),
        ];

        for variant in &variants {
            assert_ne!(variant.cache_key(), base.cache_key(), "{:?}", variant);
        }
    }

    #[test]
    fn test_cache_key_delimiter_in_keyword() {
        let tricky = SearchQuery::page(1, 10).with_keyword("0|x");
        let plain = SearchQuery::page(1, 10).with_tag(0).with_keyword("x");

        assert_ne!(tricky.cache_key(), plain.cache_key());
    }

    #[test]
    fn test_query_deserialize_camel_case() {
        let json = r#"{"pageIndex": 3, "pageSize": 20, "notebookId": 5, "keyword": "todo"}"#;
        let query: SearchQuery = serde_json::from_str(json).unwrap();

        assert_eq!(query.page_index, 3);
        assert_eq!(query.page_size, 20);
        assert_eq!(query.notebook_id, 5);
        assert_eq!(query.tag_id, 0);
        assert_eq!(query.keyword, "todo");
    }
}
