use crate::state::{Column, FilterState, Record};

/// What: Composite record predicate built from the current filter inputs.
///
/// Inputs:
/// - Built by [`Predicate::new`] from a [`FilterState`].
///
/// Output:
/// - [`Predicate::matches`] is the logical AND of the search, selector and column groups.
///
/// Details:
/// - All inputs are trimmed and lower-cased once at build time.
/// - Blank inputs are inactive and match every record.
#[derive(Debug, Clone, Default)]
pub struct Predicate {
    /// Lower-cased free-text term; empty matches everything.
    search: String,
    /// Lower-cased language selection.
    language: Option<String>,
    /// Lower-cased license selection.
    license: Option<String>,
    /// Active column filters as lower-cased prefixes.
    columns: Vec<(Column, String)>,
}

/// Fields searched by the free-text term.
const SEARCH_FIELDS: [Column; 6] = [
    Column::Name,
    Column::Description,
    Column::InstitutionName,
    Column::Institution,
    Column::Language,
    Column::License,
];

impl Predicate {
    /// Build the predicate for `filter`.
    #[must_use]
    pub fn new(filter: &FilterState) -> Self {
        let fold = |s: &str| s.trim().to_lowercase();
        Self {
            search: fold(&filter.search),
            language: filter.language.as_deref().map(fold).filter(|s| !s.is_empty()),
            license: filter.license.as_deref().map(fold).filter(|s| !s.is_empty()),
            columns: filter
                .columns
                .iter()
                .map(|(c, v)| (*c, fold(v)))
                .filter(|(_, v)| !v.is_empty())
                .collect(),
        }
    }

    /// Whether `record` passes every active filter group.
    #[must_use]
    pub fn matches(&self, record: &Record) -> bool {
        self.matches_search(record) && self.matches_selectors(record) && self.matches_columns(record)
    }

    /// Free-text group: substring of any searched field.
    fn matches_search(&self, record: &Record) -> bool {
        if self.search.is_empty() {
            return true;
        }
        SEARCH_FIELDS
            .iter()
            .any(|c| record.filter_text(*c).to_lowercase().contains(&self.search))
    }

    /// Dropdown group: case-insensitive equality with the selected language/license.
    fn matches_selectors(&self, record: &Record) -> bool {
        let eq = |selected: &Option<String>, value: Option<&str>| {
            selected
                .as_deref()
                .is_none_or(|sel| value.unwrap_or_default().to_lowercase() == sel)
        };
        eq(&self.language, record.language.as_deref()) && eq(&self.license, record.license.as_deref())
    }

    /// Column group: every active filter must be a prefix of the cell's filter text.
    fn matches_columns(&self, record: &Record) -> bool {
        self.columns
            .iter()
            .all(|(c, prefix)| record.filter_text(*c).to_lowercase().starts_with(prefix.as_str()))
    }
}

/// What: Build a predicate closure over records from the current filter inputs.
///
/// Inputs:
/// - `filter`: Current filter state.
///
/// Output:
/// - A closure returning `true` for records that pass every active filter.
pub fn build_predicate(filter: &FilterState) -> impl Fn(&Record) -> bool + use<> {
    let predicate = Predicate::new(filter);
    move |r: &Record| predicate.matches(r)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::QueryState;

    fn record(name: &str, lang: Option<&str>, stars: Option<u64>) -> Record {
        Record {
            name: name.into(),
            link: format!("https://example.org/{name}"),
            institution: "Universidade Federal do Exemplo".into(),
            institution_code: "UFE".into(),
            language: lang.map(Into::into),
            license: Some("MIT".into()),
            stars,
            ..Record::default()
        }
    }

    #[test]
    /// What: Empty filters match every record
    ///
    /// - Input: Default filter state
    /// - Output: Predicate accepts a record with absent fields
    fn filter_empty_matches_all() {
        let p = build_predicate(&FilterState::default());
        assert!(p(&Record::default()));
    }

    #[test]
    /// What: Free-text search is a trimmed, case-insensitive substring over several fields
    ///
    /// - Input: Term "  API " against name, institution code and license matches
    /// - Output: Name match accepted; non-matching record rejected; code and license also searched
    fn filter_search_across_fields() {
        let f = QueryState::default().with_search("  API ").filter;
        let p = build_predicate(&f);
        assert!(p(&record("My API Gateway", None, None)));
        assert!(!p(&record("frontend", None, None)));

        let p = build_predicate(&QueryState::default().with_search("ufe").filter);
        assert!(p(&record("frontend", None, None)));
        let p = build_predicate(&QueryState::default().with_search("mit").filter);
        assert!(p(&record("frontend", None, None)));
        let p = build_predicate(&QueryState::default().with_search("exemplo").filter);
        assert!(p(&record("frontend", None, None)));
    }

    #[test]
    /// What: Language selector uses case-insensitive equality, not substring
    ///
    /// - Input: Selector "python" against Python, `MicroPython` and absent language
    /// - Output: Only the exact (case-folded) match passes
    fn filter_language_selector_equality() {
        let f = QueryState::default().with_language(Some("python".into())).filter;
        let p = build_predicate(&f);
        assert!(p(&record("a", Some("Python"), None)));
        assert!(!p(&record("b", Some("MicroPython"), None)));
        assert!(!p(&record("c", None, None)));
    }

    #[test]
    /// What: Column filters use prefix semantics on the stringified value
    ///
    /// - Input: Stars prefix "10" against 100, 10 and 5 stars
    /// - Output: 100 and 10 pass; 5 fails
    fn filter_column_prefix_on_stars() {
        let f = QueryState::default().with_column_filter(Column::Stars, "10").filter;
        let p = build_predicate(&f);
        assert!(p(&record("a", None, Some(100))));
        assert!(p(&record("b", None, Some(10))));
        assert!(!p(&record("c", None, Some(5))));
        assert!(!p(&record("d", None, None)));
    }

    #[test]
    /// What: Date column filters compare against the DD/MM/YYYY rendering
    ///
    /// - Input: Record updated 2024-05-07; prefixes "07/05" and "2024"
    /// - Output: Formatted prefix matches; ISO prefix does not
    fn filter_column_prefix_on_dates() {
        let r = Record {
            updated_at: Some("2024-05-07T10:00:00Z".into()),
            ..Record::default()
        };
        let ok = QueryState::default().with_column_filter(Column::UpdatedAt, "07/05");
        assert!(build_predicate(&ok.filter)(&r));
        let iso = QueryState::default().with_column_filter(Column::UpdatedAt, "2024");
        assert!(!build_predicate(&iso.filter)(&r));
    }

    #[test]
    /// What: All active column filters must pass
    ///
    /// - Input: Name prefix "api" and language prefix "ru" on mixed records
    /// - Output: Only the record satisfying both passes
    fn filter_columns_are_conjunctive() {
        let f = QueryState::default()
            .with_column_filter(Column::Name, "API")
            .with_column_filter(Column::Language, " ru ")
            .filter;
        let p = build_predicate(&f);
        assert!(p(&record("api-core", Some("Rust"), None)));
        assert!(!p(&record("api-web", Some("Go"), None)));
        assert!(!p(&record("core-api", Some("Rust"), None)));
    }
}
