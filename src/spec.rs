use anyhow::{Context, Result, bail};
use serde_json::Value as JsonValue;
use serde_yaml::{Mapping, Value as YamlValue};
use std::path::Path;

/// The OpenAPI document driving the mock server.
///
/// Loaded once at startup and immutable afterwards. The YAML form keeps the
/// document's path ordering (serde_yaml mappings are insertion-ordered); the
/// JSON form is rendered once here so the introspection endpoint can serve it
/// without re-converting per request.
#[derive(Debug)]
pub struct ApiSpec {
    doc: YamlValue,
    json: JsonValue,
}

impl ApiSpec {
    /// Load and parse the document from a file. YAML and JSON inputs are both
    /// accepted (JSON is a YAML subset). Any failure here is fatal to startup.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read OpenAPI document at {}", path.display()))?;
        Self::parse(&raw)
            .with_context(|| format!("failed to parse OpenAPI document at {}", path.display()))
    }

    /// Parse the document from its raw text.
    pub fn parse(raw: &str) -> Result<Self> {
        let doc: YamlValue =
            serde_yaml::from_str(raw).context("document is not valid YAML or JSON")?;
        match doc.get("paths") {
            Some(YamlValue::Mapping(_)) => {}
            Some(_) => bail!("`paths` must be a mapping of path templates"),
            None => bail!("document has no `paths` mapping"),
        }
        let json = yaml_to_json(&doc);
        Ok(ApiSpec { doc, json })
    }

    /// Path templates and their path-item mappings, in document order.
    pub fn paths(&self) -> impl Iterator<Item = (&str, &Mapping)> {
        self.doc
            .get("paths")
            .and_then(YamlValue::as_mapping)
            .into_iter()
            .flat_map(|paths| {
                paths
                    .iter()
                    .filter_map(|(template, item)| Some((template.as_str()?, item.as_mapping()?)))
            })
    }

    pub fn path_count(&self) -> usize {
        self.paths().count()
    }

    /// The whole document rendered as JSON, for the introspection endpoint.
    pub fn as_json(&self) -> &JsonValue {
        &self.json
    }
}

/// Convert a YAML value to JSON, stringifying non-string mapping keys.
///
/// OpenAPI documents routinely carry integer keys (`responses: {200: ...}`),
/// which serde_json refuses to serialize directly.
fn yaml_to_json(value: &YamlValue) -> JsonValue {
    match value {
        YamlValue::Null => JsonValue::Null,
        YamlValue::Bool(b) => JsonValue::Bool(*b),
        YamlValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                JsonValue::from(i)
            } else if let Some(u) = n.as_u64() {
                JsonValue::from(u)
            } else {
                // Non-finite floats have no JSON representation
                n.as_f64()
                    .and_then(serde_json::Number::from_f64)
                    .map(JsonValue::Number)
                    .unwrap_or(JsonValue::Null)
            }
        }
        YamlValue::String(s) => JsonValue::String(s.clone()),
        YamlValue::Sequence(seq) => JsonValue::Array(seq.iter().map(yaml_to_json).collect()),
        YamlValue::Mapping(map) => JsonValue::Object(
            map.iter()
                .map(|(k, v)| (yaml_key_to_string(k), yaml_to_json(v)))
                .collect(),
        ),
        YamlValue::Tagged(tagged) => yaml_to_json(&tagged.value),
    }
}

fn yaml_key_to_string(key: &YamlValue) -> String {
    match key {
        YamlValue::String(s) => s.clone(),
        YamlValue::Bool(b) => b.to_string(),
        YamlValue::Number(n) => n.to_string(),
        YamlValue::Null => "null".to_string(),
        _ => String::new(),
    }
}
