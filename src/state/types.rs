//! Core value types used by the repository table.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::util::{NOT_AVAILABLE, format_short_date};

/// Raw input document as produced by the data-collection scripts.
///
/// Repository entries are kept as loose JSON objects because their fields use
/// several inconsistent representations (numbers as strings, `"N/A"`, `null`).
/// They are normalized into [`Record`] values by the record store.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RawDocument {
    /// One entry per institution, each owning its repositories.
    #[serde(default)]
    pub institutions_data: Vec<RawInstitution>,
    /// Upstream cluster classification labels.
    #[serde(default)]
    pub cluster_descriptions: Vec<ClusterDescription>,
}

/// Institution entry of the raw document.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RawInstitution {
    /// Full institution name.
    #[serde(rename = "Nome Completo", default)]
    pub name: Option<String>,
    /// Abbreviated institution code.
    #[serde(rename = "Sigla", default)]
    pub code: Option<String>,
    /// Official website of the institution.
    #[serde(rename = "URL Oficial", default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Repositories attributed to this institution.
    #[serde(rename = "Repositorios", default)]
    pub repositories: Vec<Value>,
}

/// Cluster label assigned upstream.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterDescription {
    /// Cluster identifier.
    pub id: i64,
    /// Human-readable description; `None` renders as `N/A`.
    #[serde(default)]
    pub description: Option<String>,
}

/// One flattened repository with its institution attached.
///
/// Absent values are `None` regardless of how the input spelled them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Repository name.
    pub name: String,
    /// Access link (usually the GitHub URL).
    pub link: String,
    /// Free-text description.
    pub description: Option<String>,
    /// Owning institution's full name.
    pub institution: String,
    /// Owning institution's abbreviated code.
    pub institution_code: String,
    /// Owning institution's official website.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution_url: Option<String>,
    /// Primary language.
    pub language: Option<String>,
    /// License identifier.
    pub license: Option<String>,
    /// Star count.
    pub stars: Option<u64>,
    /// Last-updated timestamp text.
    pub updated_at: Option<String>,
    /// Upstream cluster identifier.
    pub cluster_id: Option<i64>,
}

/// Kind of value a column holds; drives filter formatting and sort coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Compared as lower-cased text.
    Text,
    /// Compared numerically; absent counts as 0.
    Integer,
    /// Compared as epoch milliseconds; absent or invalid counts as 0.
    Timestamp,
}

/// Addressable column of the repository table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Column {
    /// Repository name.
    Name,
    /// Institution code.
    Institution,
    /// Institution full name.
    InstitutionName,
    /// Description.
    Description,
    /// Primary language.
    Language,
    /// Star count.
    Stars,
    /// License.
    License,
    /// Last update.
    UpdatedAt,
    /// Cluster identifier.
    Cluster,
    /// Access link.
    Link,
}

impl Column {
    /// Every column, in declaration order.
    pub const ALL: [Self; 10] = [
        Self::Name,
        Self::Institution,
        Self::InstitutionName,
        Self::Description,
        Self::Language,
        Self::Stars,
        Self::License,
        Self::UpdatedAt,
        Self::Cluster,
        Self::Link,
    ];

    /// Columns shown by the table, in display order.
    pub const TABLE: [Self; 8] = [
        Self::Name,
        Self::Institution,
        Self::Description,
        Self::Language,
        Self::Stars,
        Self::License,
        Self::UpdatedAt,
        Self::Cluster,
    ];

    /// Return the key this column uses in the input document.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Name => "Nome do Repositório",
            Self::Institution => "SiglaInstituicao",
            Self::InstitutionName => "Instituicao",
            Self::Description => "Descricao",
            Self::Language => "Linguagem Principal",
            Self::Stars => "Estrelas",
            Self::License => "Licenca",
            Self::UpdatedAt => "Ultima Atualizacao",
            Self::Cluster => "Cluster_ID",
            Self::Link => "Link de Acesso",
        }
    }

    /// Return the short alias accepted on the command line and in settings.
    #[must_use]
    pub const fn alias(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Institution => "institution",
            Self::InstitutionName => "institution_name",
            Self::Description => "description",
            Self::Language => "language",
            Self::Stars => "stars",
            Self::License => "license",
            Self::UpdatedAt => "updated",
            Self::Cluster => "cluster",
            Self::Link => "link",
        }
    }

    /// Header label used by the renderers.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Name => "Repository",
            Self::Institution => "Institution",
            Self::InstitutionName => "Institution name",
            Self::Description => "Description",
            Self::Language => "Language",
            Self::Stars => "Stars",
            Self::License => "License",
            Self::UpdatedAt => "Updated",
            Self::Cluster => "Cluster",
            Self::Link => "Link",
        }
    }

    /// Value kind of this column.
    #[must_use]
    pub const fn kind(self) -> ColumnKind {
        match self {
            Self::Stars | Self::Cluster => ColumnKind::Integer,
            Self::UpdatedAt => ColumnKind::Timestamp,
            _ => ColumnKind::Text,
        }
    }

    /// What: Parse a column from its document key or alias.
    ///
    /// Inputs: `s` key or alias (case-insensitive, surrounding whitespace ignored).
    ///
    /// Output: `Some(Column)` on recognized value; `None` otherwise.
    #[must_use]
    pub fn from_key(s: &str) -> Option<Self> {
        let t = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(t) || c.alias().eq_ignore_ascii_case(t))
    }
}

/// Borrowed view of one record cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellValue<'a> {
    /// Text cell.
    Text(&'a str),
    /// Integer cell.
    Integer(i64),
    /// Timestamp cell, still in its textual form.
    Timestamp(&'a str),
    /// No value.
    Absent,
}

impl Record {
    /// What: Read the value of `column` from this record.
    ///
    /// Inputs:
    /// - `column`: Column to read.
    ///
    /// Output:
    /// - A [`CellValue`] borrowing from the record; [`CellValue::Absent`] for `None` fields.
    #[must_use]
    pub fn cell(&self, column: Column) -> CellValue<'_> {
        fn text(v: Option<&str>) -> CellValue<'_> {
            v.map_or(CellValue::Absent, CellValue::Text)
        }
        match column {
            Column::Name => CellValue::Text(&self.name),
            Column::Institution => CellValue::Text(&self.institution_code),
            Column::InstitutionName => CellValue::Text(&self.institution),
            Column::Description => text(self.description.as_deref()),
            Column::Language => text(self.language.as_deref()),
            Column::Stars => self
                .stars
                .map_or(CellValue::Absent, |n| {
                    CellValue::Integer(i64::try_from(n).unwrap_or(i64::MAX))
                }),
            Column::License => text(self.license.as_deref()),
            Column::UpdatedAt => self
                .updated_at
                .as_deref()
                .map_or(CellValue::Absent, CellValue::Timestamp),
            Column::Cluster => self.cluster_id.map_or(CellValue::Absent, CellValue::Integer),
            Column::Link => CellValue::Text(&self.link),
        }
    }

    /// What: Coerce a cell to the string used by column filters.
    ///
    /// Output:
    /// - Dates as `DD/MM/YYYY`, integers in decimal, text as-is, absent as `""`.
    #[must_use]
    pub fn filter_text(&self, column: Column) -> String {
        match self.cell(column) {
            CellValue::Text(s) => s.to_string(),
            CellValue::Integer(n) => n.to_string(),
            CellValue::Timestamp(s) => format_short_date(s),
            CellValue::Absent => String::new(),
        }
    }

    /// What: Render a cell for display, using `N/A` for absent values.
    ///
    /// Details:
    /// - The institution column falls back to the full name when the code is empty.
    #[must_use]
    pub fn display_text(&self, column: Column) -> String {
        if column == Column::Institution && self.institution_code.trim().is_empty() {
            return if self.institution.trim().is_empty() {
                NOT_AVAILABLE.to_string()
            } else {
                self.institution.clone()
            };
        }
        match self.cell(column) {
            CellValue::Text(s) if s.is_empty() => NOT_AVAILABLE.to_string(),
            CellValue::Absent => NOT_AVAILABLE.to_string(),
            _ => self.filter_text(column),
        }
    }
}

/// One entry of the language ranking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LanguageCount {
    /// Language name as spelled in the data.
    pub language: String,
    /// Number of records whose primary language is `language`.
    pub count: usize,
}
