//! Shared datasets for the pipeline tests.

use repotable::index::RecordStore;
use repotable::state::RawDocument;
use serde_json::{Value, json};

/// What: Build a raw document from institution JSON values.
///
/// Inputs:
/// - `institutions`: `institutions_data` entries.
///
/// Output:
/// - Deserialized document without cluster descriptions.
pub fn doc(institutions: Value) -> RawDocument {
    serde_json::from_value(json!({ "institutions_data": institutions })).unwrap()
}

/// Repository JSON object with the given name, language and stars.
pub fn repo(name: &str, language: &str, stars: u64) -> Value {
    json!({
        "Nome do Repositório": name,
        "Link de Acesso": format!("https://github.com/org/{name}"),
        "Linguagem Principal": language,
        "Estrelas": stars
    })
}

/// What: A store mixing languages, licenses, duplicate keys and sentinels.
///
/// Output:
/// - 30 records across three institutions, in a fixed order.
pub fn mixed_store() -> RecordStore {
    let langs = ["Go", "Python", "N/A", "Rust", "null"];
    let licenses = ["MIT", "GPL-3.0", "N/A"];
    let institutions: Vec<Value> = ["UFA", "UFB", "IFC"]
        .iter()
        .enumerate()
        .map(|(i, code)| {
            let repos: Vec<Value> = (0..10)
                .map(|j| {
                    let n = i * 10 + j;
                    json!({
                        "Nome do Repositório": format!("repo-{:02}", n % 7),
                        "Link de Acesso": format!("https://github.com/{code}/r{n}"),
                        "Descricao": if n % 4 == 0 { "API service".to_string() } else { format!("tool {n}") },
                        "Linguagem Principal": langs[n % langs.len()],
                        "Licenca": licenses[n % licenses.len()],
                        "Estrelas": (n * 13) % 50,
                        "Ultima Atualizacao": format!("2024-{:02}-{:02}T12:00:00Z", n % 12 + 1, n % 28 + 1),
                        "Cluster_ID": n % 3
                    })
                })
                .collect();
            json!({ "Nome Completo": format!("Instituicao {code}"), "Sigla": code, "Repositorios": repos })
        })
        .collect();
    RecordStore::build(doc(Value::Array(institutions)))
}
