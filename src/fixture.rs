use anyhow::{Context, Result};
use serde_json::{Value as JsonValue, json};
use std::io::ErrorKind;
use std::path::PathBuf;

/// File-backed fixture store: the document for key `k` lives at
/// `<dir>/<k>.json`. Read-only while serving; nothing here mutates.
#[derive(Debug, Clone)]
pub struct FixtureStore {
    dir: PathBuf,
}

/// Outcome of a fixture lookup. A missing fixture is a content gap, not an
/// error: the store hands back a placeholder document and callers still
/// answer with a success-class status.
#[derive(Debug, Clone, PartialEq)]
pub enum FixtureLookup {
    Found(JsonValue),
    Missing(JsonValue),
}

impl FixtureLookup {
    pub fn is_found(&self) -> bool {
        matches!(self, FixtureLookup::Found(_))
    }

    pub fn into_body(self) -> JsonValue {
        match self {
            FixtureLookup::Found(value) | FixtureLookup::Missing(value) => value,
        }
    }
}

impl FixtureStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FixtureStore { dir: dir.into() }
    }

    /// Resolve a fixture key to its JSON document.
    ///
    /// A file that exists but does not parse is an error, never treated as
    /// absent; that distinction keeps authoring mistakes visible instead of
    /// silently serving the placeholder.
    pub async fn lookup(&self, key: &str) -> Result<FixtureLookup> {
        let path = self.dir.join(format!("{key}.json"));
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::warn!("fixture file not found: {}.json", key);
                return Ok(FixtureLookup::Missing(json!({
                    "message": format!("no fixture found for {key}"),
                })));
            }
            Err(err) => {
                return Err(anyhow::Error::new(err)
                    .context(format!("failed to read fixture {}", path.display())));
            }
        };
        let value = serde_json::from_slice(&bytes)
            .with_context(|| format!("fixture {} is not valid JSON", path.display()))?;
        Ok(FixtureLookup::Found(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lookup_found() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("users_me.json"),
            r#"{"id": 7, "name": "ada"}"#,
        )
        .unwrap();

        let store = FixtureStore::new(dir.path());
        let lookup = store.lookup("users_me").await.unwrap();
        assert!(lookup.is_found());
        assert_eq!(lookup.into_body(), json!({"id": 7, "name": "ada"}));
    }

    #[tokio::test]
    async fn test_lookup_missing_returns_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let store = FixtureStore::new(dir.path());

        let lookup = store.lookup("orders__id").await.unwrap();
        assert!(!lookup.is_found());
        assert_eq!(
            lookup.into_body(),
            json!({"message": "no fixture found for orders__id"})
        );
    }

    #[tokio::test]
    async fn test_lookup_is_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("k.json"), r#"[1, 2, 3]"#).unwrap();

        let store = FixtureStore::new(dir.path());
        let first = store.lookup("k").await.unwrap();
        let second = store.lookup("k").await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_lookup_malformed_fixture_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("broken.json"), "{not json").unwrap();

        let store = FixtureStore::new(dir.path());
        let err = store.lookup("broken").await.unwrap_err();
        assert!(err.to_string().contains("not valid JSON"));
    }

    #[tokio::test]
    async fn test_scalar_and_array_fixtures_are_valid() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("scalar.json"), "42").unwrap();

        let store = FixtureStore::new(dir.path());
        let lookup = store.lookup("scalar").await.unwrap();
        assert_eq!(lookup.into_body(), json!(42));
    }
}
