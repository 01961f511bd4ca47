/// Panel segment parsing
///
/// Pure functional parsing of a single URL segment into a panel descriptor.
/// All functions are **pure**: same input → same output, no side effects.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Separator used when none is configured
pub const DEFAULT_SEPARATOR: char = ':';

/// Marker appended to the name of panels that take an id and extras
///
/// Registry keys always use this marker, whatever the runtime separator is,
/// so definitions stay stable when the URL separator changes.
pub const DEFINITION_MARKER: char = ':';

/// A panel addressed by one URL segment
///
/// # Examples
///
/// ```
/// use paneling::segment::parse_panel_path;
///
/// let desc = parse_panel_path("user;42;role=admin", ';').unwrap();
/// assert_eq!(desc.name, "user:");
/// assert_eq!(desc.id.as_deref(), Some("42"));
/// assert_eq!(desc.extras.get("role").map(String::as_str), Some("admin"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelDescriptor {
    /// Registry lookup key (`name` or `name:`)
    pub name: String,
    /// Panel id, present for parametrized panels (may be empty)
    pub id: Option<String>,
    /// Key/value metadata carried after the id
    pub extras: BTreeMap<String, String>,
}

impl PanelDescriptor {
    /// Whether this descriptor names a parametrized panel (`name:`)
    pub fn is_parametrized(&self) -> bool {
        self.name.ends_with(DEFINITION_MARKER) && self.id.is_some()
    }
}

/// Parses one URL segment into a panel descriptor (pure function)
///
/// # Parsing Rules
///
/// 1. **Empty**: `""` → `None`
/// 2. **Plain**: no separator after position 0 → whole segment is the name
/// 3. **Parametrized**: `name<sep>id<sep>key=value<sep>flag`
///    - lookup name is `name:` (definition marker, not the separator)
///    - first piece after the name is the id (may be empty)
///    - following pieces are extras; only the first `=` splits key from value
///    - a bare key gets an empty value, an empty key is skipped
///
/// # Examples
///
/// ```
/// use paneling::segment::parse_panel_path;
///
/// let desc = parse_panel_path("info", ':').unwrap();
/// assert_eq!(desc.name, "info");
/// assert_eq!(desc.id, None);
///
/// let desc = parse_panel_path("extra:9:q=a=b:flag", ':').unwrap();
/// assert_eq!(desc.name, "extra:");
/// assert_eq!(desc.id.as_deref(), Some("9"));
/// assert_eq!(desc.extras["q"], "a=b");
/// assert_eq!(desc.extras["flag"], "");
///
/// assert!(parse_panel_path("", ':').is_none());
/// ```
pub fn parse_panel_path(segment: &str, separator: char) -> Option<PanelDescriptor> {
    if segment.is_empty() {
        return None;
    }

    match segment.find(separator) {
        // Separator at position 0 is part of the name
        Some(first) if first > 0 => {
            let mut pieces = segment.split(separator).skip(1);
            let id = pieces.next().map(str::to_string);
            let extras = pieces.filter_map(parse_extra).collect();

            Some(PanelDescriptor {
                name: format!("{}{}", &segment[..first], DEFINITION_MARKER),
                id,
                extras,
            })
        }
        _ => Some(PanelDescriptor {
            name: segment.to_string(),
            id: None,
            extras: BTreeMap::new(),
        }),
    }
}

/// Splits `key=value` on the first `=` (pure function)
///
/// Returns `None` for an empty key.
fn parse_extra(piece: &str) -> Option<(String, String)> {
    let (key, value) = piece.split_once('=').unwrap_or((piece, ""));
    (!key.is_empty()).then(|| (key.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse_panel_path("", ':'), None);
        assert_eq!(parse_panel_path("", ';'), None);
    }

    #[test]
    fn test_parse_plain_name() {
        let desc = parse_panel_path("info", ':').unwrap();
        assert_eq!(desc.name, "info");
        assert_eq!(desc.id, None);
        assert!(desc.extras.is_empty());
        assert!(!desc.is_parametrized());
    }

    #[test]
    fn test_parse_leading_separator_is_name() {
        let desc = parse_panel_path(":info", ':').unwrap();
        assert_eq!(desc.name, ":info");
        assert_eq!(desc.id, None);
    }

    #[test]
    fn test_parse_custom_separator_keeps_colon_marker() {
        let desc = parse_panel_path("extra;4448", ';').unwrap();
        assert_eq!(desc.name, "extra:");
        assert_eq!(desc.id.as_deref(), Some("4448"));
        assert!(desc.is_parametrized());
    }

    #[test]
    fn test_parse_other_separator_is_literal() {
        // ':' is not the runtime separator here
        let desc = parse_panel_path("extra:4448", ';').unwrap();
        assert_eq!(desc.name, "extra:4448");
        assert_eq!(desc.id, None);
    }

    #[test]
    fn test_parse_empty_id() {
        let desc = parse_panel_path("extra:", ':').unwrap();
        assert_eq!(desc.name, "extra:");
        assert_eq!(desc.id.as_deref(), Some(""));

        let desc = parse_panel_path("extra::k=v", ':').unwrap();
        assert_eq!(desc.id.as_deref(), Some(""));
        assert_eq!(desc.extras["k"], "v");
    }

    #[test]
    fn test_parse_extras() {
        let desc = parse_panel_path("user:1:role=admin:tab=a=b:flag:=skipped", ':').unwrap();
        assert_eq!(desc.extras.len(), 3);
        assert_eq!(desc.extras["role"], "admin");
        assert_eq!(desc.extras["tab"], "a=b");
        assert_eq!(desc.extras["flag"], "");
    }

    #[test]
    fn test_parse_duplicate_extra_last_wins() {
        let desc = parse_panel_path("user:1:k=a:k=b", ':').unwrap();
        assert_eq!(desc.extras["k"], "b");
    }
}
