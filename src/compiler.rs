use axum::http::StatusCode;
use std::collections::HashMap;

use crate::spec::ApiSpec;

/// The HTTP methods the mock server knows how to answer.
///
/// Matched exhaustively everywhere; anything else in the document takes the
/// explicit skip branch in [`compile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl MockMethod {
    /// Parse an OpenAPI path-item method key.
    pub fn from_spec_key(key: &str) -> Option<Self> {
        if key.eq_ignore_ascii_case("get") {
            Some(MockMethod::Get)
        } else if key.eq_ignore_ascii_case("post") {
            Some(MockMethod::Post)
        } else if key.eq_ignore_ascii_case("put") {
            Some(MockMethod::Put)
        } else if key.eq_ignore_ascii_case("delete") {
            Some(MockMethod::Delete)
        } else {
            None
        }
    }

    /// Status code policy: GET and PUT answer 200, POST answers 201,
    /// DELETE answers 204 with an empty body.
    pub fn status(self) -> StatusCode {
        match self {
            MockMethod::Get | MockMethod::Put => StatusCode::OK,
            MockMethod::Post => StatusCode::CREATED,
            MockMethod::Delete => StatusCode::NO_CONTENT,
        }
    }

    /// DELETE never touches the fixture store; everything else does.
    pub fn performs_lookup(self) -> bool {
        !matches!(self, MockMethod::Delete)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MockMethod::Get => "GET",
            MockMethod::Post => "POST",
            MockMethod::Put => "PUT",
            MockMethod::Delete => "DELETE",
        }
    }
}

/// One compiled route: built once at startup, immutable afterwards, owned by
/// the router. The fixture key is computed here, not per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteBinding {
    pub method: MockMethod,
    /// Route pattern for the dispatcher. axum's `{name}` single-segment
    /// capture syntax coincides with OpenAPI path templates, so this is the
    /// template verbatim.
    pub pattern: String,
    pub fixture_key: String,
}

/// Derive the fixture key for a path template: strip the leading `/`, turn
/// every remaining `/` into `_`, and turn every `{name}` placeholder into
/// `_name`. Pure and method-independent; `/nightclubs/{id}/tables` becomes
/// `nightclubs__id_tables`.
pub fn fixture_key(template: &str) -> String {
    let trimmed = template.strip_prefix('/').unwrap_or(template);
    let mut key = String::with_capacity(trimmed.len());
    for ch in trimmed.chars() {
        match ch {
            '/' | '{' => key.push('_'),
            '}' => {}
            other => key.push(other),
        }
    }
    key
}

/// HTTP methods that can appear in a path item but are not mocked.
const UNSUPPORTED_METHODS: [&str; 4] = ["patch", "head", "options", "trace"];

/// Walk the document's path/method tree and produce one binding per
/// supported (template, method) pair, in document order.
///
/// Unsupported methods are skipped with a warning, never a failure. Two
/// templates deriving the same fixture key is a configuration hazard: both
/// bindings are kept, but the overlap is logged so fixture authors can see
/// which routes share a file.
pub fn compile(spec: &ApiSpec) -> Vec<RouteBinding> {
    let mut bindings = Vec::new();
    let mut key_owners: HashMap<String, String> = HashMap::new();

    for (template, item) in spec.paths() {
        let key = fixture_key(template);
        match key_owners.get(&key) {
            Some(owner) if owner != template => {
                tracing::warn!(
                    "fixture key {:?} is shared by {:?} and {:?}; both routes will serve {}.json",
                    key,
                    owner,
                    template,
                    key
                );
            }
            Some(_) => {}
            None => {
                key_owners.insert(key.clone(), template.to_string());
            }
        }

        for method_key in item.keys().filter_map(|k| k.as_str()) {
            match MockMethod::from_spec_key(method_key) {
                Some(method) => bindings.push(RouteBinding {
                    method,
                    pattern: template.to_string(),
                    fixture_key: key.clone(),
                }),
                None if UNSUPPORTED_METHODS
                    .iter()
                    .any(|m| method_key.eq_ignore_ascii_case(m)) =>
                {
                    tracing::warn!("skipping unsupported method {} on {}", method_key, template);
                }
                // Path-item metadata (summary, parameters, ...), not a method
                None => {}
            }
        }
    }

    bindings
}
