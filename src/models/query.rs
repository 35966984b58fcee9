// src/models/query.rs

use serde::Deserialize;
use utoipa::IntoParams;

// ?search=... usado pelas listagens
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Termo de busca (case-insensitive, por substring)
    pub search: Option<String>,
}

impl SearchParams {
    /// Termo normalizado em minúsculas, ou `None` se vazio.
    pub fn term(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }
}

/// Verdadeiro se `haystack` contém `term` (já em minúsculas).
pub fn matches(haystack: Option<&str>, term: &str) -> bool {
    haystack.is_some_and(|h| h.to_lowercase().contains(term))
}
