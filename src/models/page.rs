//! Pagination envelope shared by the console's listing endpoints.

use serde::Deserialize;

/// One page of records as returned by the backend.
#[derive(Debug, Clone, Deserialize)]
pub struct PageResult<T> {
    pub records: Vec<T>,
    pub current: u64,
    pub size: u64,
    pub total: u64,
    pub pages: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_page_envelope() {
        let page: PageResult<String> = serde_json::from_str(
            r#"{"records":["a","b"],"current":1,"size":10,"total":2,"pages":1}"#,
        )
        .unwrap();

        assert_eq!(page.records, vec!["a", "b"]);
        assert_eq!(page.total, 2);
    }
}
