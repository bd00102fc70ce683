use crate::models::ClientRow;

/// Result of filtering the client table against a search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome {
    /// One flag per input row, in input order.
    pub visible: Vec<bool>,
    pub visible_count: usize,
    pub show_no_results: bool,
}

impl FilterOutcome {
    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(false)
    }
}

/// Lowercased haystacks for one row, computed once per dataset.
#[derive(Debug, Clone, PartialEq)]
struct SearchKey {
    fields: Vec<String>,
    full_text: String,
}

impl SearchKey {
    fn new(row: &ClientRow) -> Self {
        let fields = [row.name.as_deref(), row.email.as_deref(), row.company.as_deref()]
            .into_iter()
            .flatten()
            .map(str::to_lowercase)
            .collect();
        Self {
            fields,
            full_text: row.full_text().to_lowercase(),
        }
    }

    fn matches(&self, query: &str) -> bool {
        self.fields.iter().any(|f| f.contains(query)) || self.full_text.contains(query)
    }
}

/// Substring filter over the rendered client rows.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RowFilter {
    keys: Vec<SearchKey>,
}

impl RowFilter {
    pub fn new(rows: &[ClientRow]) -> Self {
        Self {
            keys: rows.iter().map(SearchKey::new).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn apply(&self, query: &str) -> FilterOutcome {
        let query = query.trim().to_lowercase();
        let visible: Vec<bool> = self
            .keys
            .iter()
            .map(|key| query.is_empty() || key.matches(&query))
            .collect();
        let visible_count = visible.iter().filter(|v| **v).count();

        FilterOutcome {
            visible,
            visible_count,
            show_no_results: visible_count == 0,
        }
    }

    /// Outcome after the clear control resets the query.
    pub fn clear(&self) -> FilterOutcome {
        self.apply("")
    }
}
