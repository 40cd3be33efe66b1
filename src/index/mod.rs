//! Record store: flattening of the institution document and derived lookup data.
//!
//! The store is built exactly once from a [`RawDocument`] and never mutated
//! afterwards. Loading from disk and the optional duplicate-removal pass live
//! in `persist`.

use std::collections::{BTreeSet, HashMap};

use serde_json::Value;

use crate::state::{ClusterDescription, Column, LanguageCount, RawDocument, RawInstitution, Record};
use crate::util::{i64_of, text_of, u64_of};

mod persist;

pub use persist::{LoadError, dedupe_repositories, load_document, load_store};

/// Number of entries kept in the language ranking.
pub const TOP_LANGUAGES: usize = 5;

/// What: Hold the flattened records and everything derived from them at load time.
///
/// Inputs:
/// - Built by [`RecordStore::build`] from a raw document.
///
/// Output:
/// - Read-only accessors used by the query pipeline and the summary panels.
///
/// Details:
/// - Records keep the flatten order (institution order, then repository order).
/// - Language and license lists are distinct, sentinel-free and sorted alphabetically.
#[derive(Clone, Debug, Default)]
pub struct RecordStore {
    /// Flattened records in stable flatten order.
    records: Vec<Record>,
    /// Distinct languages, sorted.
    languages: Vec<String>,
    /// Distinct licenses, sorted.
    licenses: Vec<String>,
    /// Most frequent languages, count descending, first-seen order on ties.
    top_languages: Vec<LanguageCount>,
    /// Cluster labels sorted by id ascending, one per id.
    clusters: Vec<ClusterDescription>,
}

impl RecordStore {
    /// Build the store keeping the default [`TOP_LANGUAGES`] ranking size.
    #[must_use]
    pub fn build(doc: RawDocument) -> Self {
        Self::build_with_top(doc, TOP_LANGUAGES)
    }

    /// What: Flatten `doc` and compute the derived sets and rankings.
    ///
    /// Inputs:
    /// - `doc`: Raw document; consumed, its repositories become records.
    /// - `top_n`: Number of entries to keep in the language ranking.
    ///
    /// Output:
    /// - A fully built, immutable store.
    pub fn build_with_top(doc: RawDocument, top_n: usize) -> Self {
        let RawDocument {
            institutions_data,
            cluster_descriptions,
        } = doc;
        let records = flatten(institutions_data);

        let mut languages: BTreeSet<String> = BTreeSet::new();
        let mut licenses: BTreeSet<String> = BTreeSet::new();
        for r in &records {
            if let Some(lang) = &r.language {
                languages.insert(lang.clone());
            }
            if let Some(lic) = &r.license {
                licenses.insert(lic.clone());
            }
        }
        let top_languages = rank_languages(&records, top_n);
        let clusters = sort_clusters(cluster_descriptions);

        tracing::info!(
            records = records.len(),
            languages = languages.len(),
            licenses = licenses.len(),
            clusters = clusters.len(),
            "record store built"
        );

        Self {
            records,
            languages: languages.into_iter().collect(),
            licenses: licenses.into_iter().collect(),
            top_languages,
            clusters,
        }
    }

    /// All records in flatten order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Distinct languages for the language selector.
    #[must_use]
    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    /// Distinct licenses for the license selector.
    #[must_use]
    pub fn licenses(&self) -> &[String] {
        &self.licenses
    }

    /// Language ranking computed at build time.
    #[must_use]
    pub fn top_languages(&self) -> &[LanguageCount] {
        &self.top_languages
    }

    /// Cluster labels, sorted by id.
    #[must_use]
    pub fn clusters(&self) -> &[ClusterDescription] {
        &self.clusters
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// What: Turn the nested institution -> repository structure into records.
///
/// Inputs:
/// - `institutions`: Institution entries; consumed.
///
/// Output:
/// - One record per repository, institution name/code attached, in input order.
///
/// Details:
/// - Every sentinel spelling becomes `None` on the record.
/// - Repository entries that are not JSON objects are skipped with a warning.
#[must_use]
pub fn flatten(institutions: Vec<RawInstitution>) -> Vec<Record> {
    let total: usize = institutions.iter().map(|i| i.repositories.len()).sum();
    let mut out = Vec::with_capacity(total);
    for inst in institutions {
        let name = inst.name.unwrap_or_default();
        let code = inst.code.unwrap_or_default();
        let url = inst.url.filter(|u| !crate::util::is_sentinel(u));
        for repo in &inst.repositories {
            if !repo.is_object() {
                tracing::warn!(institution = %code, "skipping repository entry that is not an object");
                continue;
            }
            out.push(record_from_value(repo, &name, &code, url.as_ref()));
        }
    }
    out
}

/// Build one record from a raw repository object and its institution.
fn record_from_value(v: &Value, institution: &str, code: &str, url: Option<&String>) -> Record {
    Record {
        name: text_of(v, Column::Name.key()).unwrap_or_default(),
        link: text_of(v, Column::Link.key()).unwrap_or_default(),
        description: text_of(v, Column::Description.key()),
        institution: institution.to_string(),
        institution_code: code.to_string(),
        institution_url: url.cloned(),
        language: text_of(v, Column::Language.key()),
        license: text_of(v, Column::License.key()),
        stars: u64_of(v, Column::Stars.key()),
        updated_at: text_of(v, Column::UpdatedAt.key()),
        cluster_id: i64_of(v, Column::Cluster.key()),
    }
}

/// What: Rank languages by number of records.
///
/// Inputs:
/// - `records`: Records to count.
/// - `top_n`: Maximum number of entries returned.
///
/// Output:
/// - Up to `top_n` entries, count descending.
///
/// Details:
/// - Ties keep first-seen order: counts are collected in encounter order and
///   sorted with a stable sort.
#[must_use]
pub fn rank_languages(records: &[Record], top_n: usize) -> Vec<LanguageCount> {
    let mut ranking: Vec<LanguageCount> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();
    for lang in records.iter().filter_map(|r| r.language.as_deref()) {
        if let Some(&pos) = positions.get(lang) {
            ranking[pos].count += 1;
        } else {
            positions.insert(lang, ranking.len());
            ranking.push(LanguageCount {
                language: lang.to_string(),
                count: 1,
            });
        }
    }
    ranking.sort_by(|a, b| b.count.cmp(&a.count));
    ranking.truncate(top_n);
    ranking
}

/// Sort cluster labels by id, keeping the first label of a duplicated id.
fn sort_clusters(mut clusters: Vec<ClusterDescription>) -> Vec<ClusterDescription> {
    clusters.sort_by_key(|c| c.id);
    let before = clusters.len();
    clusters.dedup_by_key(|c| c.id);
    if clusters.len() != before {
        tracing::warn!(
            dropped = before - clusters.len(),
            "duplicate cluster ids in input; keeping the first description"
        );
    }
    clusters
}
