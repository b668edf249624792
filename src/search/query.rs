use crate::config::SearchConfig;
use crate::state::search_box::{ActiveFilters, FilterKey};

/// Clauses of one Google Books query: free text, then author, then subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPlan {
    clauses: Vec<String>,
}

/// Lower-cases and trims the free text, dropping everything that is not an
/// ASCII letter, ASCII digit or whitespace.
pub fn sanitize_term(term: &str) -> String {
    term.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect::<String>()
        .trim()
        .to_string()
}

impl SearchPlan {
    /// `None` when there is nothing to ask the endpoint for.
    pub fn build(term: &str, filters: &ActiveFilters) -> Option<Self> {
        let mut clauses = Vec::new();

        let term = sanitize_term(term);
        if !term.is_empty() {
            clauses.push(term);
        }
        if let Some(author) = filters.get(FilterKey::Autor).map(str::trim).filter(|a| !a.is_empty()) {
            clauses.push(format!("inauthor:\"{}\"", author));
        }
        if let Some(genre) = filters.get(FilterKey::Genero).map(str::trim).filter(|g| !g.is_empty()) {
            clauses.push(format!("subject:\"{}\"", genre));
        }

        (!clauses.is_empty()).then_some(Self { clauses })
    }

    pub fn clauses(&self) -> &[String] {
        &self.clauses
    }

    /// Clauses percent-encoded and joined with `+`.
    pub fn query(&self) -> String {
        self.clauses
            .iter()
            .map(|c| urlencoding::encode(c).into_owned())
            .collect::<Vec<_>>()
            .join("+")
    }

    pub fn url(&self, config: &SearchConfig) -> String {
        format!(
            "{}?q={}&orderBy={}&maxResults={}&startIndex=0",
            config.endpoint,
            self.query(),
            config.order_by,
            config.max_results
        )
    }
}
