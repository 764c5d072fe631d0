//! Query-string assembly for the catalog listing endpoint.

/// Parameters of GET /api/catalogs. Empty search/status terms are
/// omitted from the query entirely; the server treats absence and
/// empty string the same, and the URLs stay readable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub search: String,
    pub status: String,
    pub page: u32,
    pub per_page: u32,
}

impl ListQuery {
    pub fn to_query_string(&self) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(4);
        let search = self.search.trim();
        if !search.is_empty() {
            parts.push(format!("search={}", urlencoding::encode(search)));
        }
        if !self.status.is_empty() {
            parts.push(format!("status={}", urlencoding::encode(&self.status)));
        }
        parts.push(format!("page={}", self.page));
        parts.push(format!("per_page={}", self.per_page));
        format!("?{}", parts.join("&"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_terms_are_omitted() {
        let q = ListQuery {
            page: 1,
            per_page: 10,
            ..ListQuery::default()
        };
        assert_eq!(q.to_query_string(), "?page=1&per_page=10");
    }

    #[test]
    fn search_terms_are_percent_encoded() {
        let q = ListQuery {
            search: "summer & sun".into(),
            status: "active".into(),
            page: 2,
            per_page: 10,
        };
        assert_eq!(
            q.to_query_string(),
            "?search=summer%20%26%20sun&status=active&page=2&per_page=10"
        );
    }

    #[test]
    fn whitespace_only_search_counts_as_empty() {
        let q = ListQuery {
            search: "   ".into(),
            page: 1,
            per_page: 10,
            ..ListQuery::default()
        };
        assert_eq!(q.to_query_string(), "?page=1&per_page=10");
    }
}
