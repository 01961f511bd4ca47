/// Panel path building and navigation
///
/// The inverse of segment parsing: serialises an ordered list of panel
/// segments back into a URL suffix, and joins it onto the mount prefix for
/// programmatic navigation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::path::{resolve_redirect_path, PanelHierarchy};
use crate::props::PanelProps;
use crate::segment::{PanelDescriptor, DEFAULT_SEPARATOR, DEFINITION_MARKER};

/// A desired panel, input for path building
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PanelSegment {
    /// Panel name, with or without the `:` definition marker
    pub panel: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extras: BTreeMap<String, String>,
}

impl PanelSegment {
    pub fn new(panel: impl Into<String>) -> Self {
        Self {
            panel: panel.into(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Adds an extra; keys must not contain `=`, the first one splits key from value
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extras.insert(key.into(), value.into());
        self
    }

    /// Renders this segment with the given separator
    ///
    /// # Rules
    ///
    /// - neither id nor extras → the panel name alone
    /// - id → `name<sep>id`
    /// - extras → `<sep>key=value` per extra, sorted by key; an empty value
    ///   renders the bare key
    /// - extras without id → an empty id slot keeps them in extras position
    pub fn render(&self, separator: char) -> String {
        let name = self.panel.strip_suffix(DEFINITION_MARKER).unwrap_or(&self.panel);

        if self.id.is_none() && self.extras.is_empty() {
            return name.to_string();
        }

        if !self.round_trips(separator) {
            warn!(panel = %self.panel, %separator, "panel path piece will not round-trip");
        }

        let id = self.id.as_deref().unwrap_or("");
        let mut rendered = format!("{}{}{}", name, separator, id);
        for (key, value) in &self.extras {
            rendered.push(separator);
            rendered.push_str(key);
            if !value.is_empty() {
                rendered.push('=');
                rendered.push_str(value);
            }
        }
        rendered
    }

    /// Whether [`Self::render`] parses back into this id and these extras
    ///
    /// Pieces containing the separator or `/` break the segment apart, and
    /// an extras key containing `=` moves the split point into the key.
    pub fn round_trips(&self, separator: char) -> bool {
        let escaped = |piece: &str| !piece.contains(separator) && !piece.contains('/');

        self.id.as_deref().map_or(true, escaped)
            && self
                .extras
                .iter()
                .all(|(key, value)| escaped(key) && !key.contains('=') && escaped(value))
    }
}

impl From<PanelDescriptor> for PanelSegment {
    fn from(desc: PanelDescriptor) -> Self {
        Self {
            panel: desc.name,
            id: desc.id,
            extras: desc.extras,
        }
    }
}

/// Serialises panel segments into a URL suffix (pure function)
///
/// # Examples
///
/// ```
/// use paneling::{build_panel_path, PanelSegment};
///
/// let suffix = build_panel_path(
///     &[
///         PanelSegment::new("info"),
///         PanelSegment::new("extra:").with_id("4448").with_extra("tab", "notes"),
///     ],
///     ';',
/// );
/// assert_eq!(suffix, "info/extra;4448;tab=notes");
/// ```
pub fn build_panel_path(segments: &[PanelSegment], separator: char) -> String {
    segments
        .iter()
        .map(|segment| segment.render(separator))
        .collect::<Vec<_>>()
        .join("/")
}

/// Builds navigation targets for a paneling route
///
/// # Examples
///
/// ```
/// use paneling::{PanelNavigator, PanelSegment};
///
/// let nav = PanelNavigator::new(Some("/app"), ';');
/// assert_eq!(nav.href(&[PanelSegment::new("info")]), "/app/info");
///
/// let mut visited = Vec::new();
/// nav.navigate(&[PanelSegment::new("extra").with_id("1")], |to| visited.push(to.to_string()));
/// assert_eq!(visited, vec!["/app/extra;1"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelNavigator {
    base: String,
    separator: char,
}

impl PanelNavigator {
    /// Navigator for a route mounted on `path`
    pub fn new(path: Option<&str>, separator: char) -> Self {
        Self {
            base: resolve_redirect_path(path).into_owned(),
            separator,
        }
    }

    /// Mount prefix, always ending with `/`
    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    /// Absolute path of a panel stack
    pub fn href(&self, segments: &[PanelSegment]) -> String {
        format!("{}{}", self.base, build_panel_path(segments, self.separator))
    }

    /// Follows [`Self::href`] through the host's navigation callback
    pub fn navigate<R>(&self, segments: &[PanelSegment], navigate: impl FnOnce(&str) -> R) -> R {
        navigate(&self.href(segments))
    }

    /// Absolute path that opens `segment` after the panel at `current_path`
    ///
    /// `current_path` is a projected (absolute) path such as
    /// [`PanelProps::current_path`].
    pub fn open(&self, current_path: &str, segment: &PanelSegment) -> String {
        let rendered = segment.render(self.separator);
        if current_path.ends_with('/') {
            format!("{}{}", current_path, rendered)
        } else {
            format!("{}/{}", current_path, rendered)
        }
    }

    /// Absolute path shown once the panel is closed
    pub fn close<P>(&self, props: &PanelProps<P>) -> String {
        props.previous_path.clone()
    }

    /// Absolute paths reached by closing panels one by one, deepest first
    ///
    /// ```
    /// use paneling::PanelNavigator;
    ///
    /// let nav = PanelNavigator::new(Some("/app"), ':');
    /// assert_eq!(nav.ancestors("info/extra:9"), vec!["/app/info/extra:9", "/app/info", "/app/"]);
    /// ```
    pub fn ancestors(&self, suffix: &str) -> Vec<String> {
        PanelHierarchy::new(suffix)
            .map(|path| format!("{}{}", self.base, path))
            .collect()
    }
}

impl Default for PanelNavigator {
    fn default() -> Self {
        Self::new(None, DEFAULT_SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::parse_panel_path;

    #[test]
    fn test_render_name_only() {
        assert_eq!(PanelSegment::new("info").render(':'), "info");
        assert_eq!(PanelSegment::new("extra:").render(':'), "extra");
    }

    #[test]
    fn test_render_extras_without_id() {
        let segment = PanelSegment::new("extra").with_extra("flag", "");
        assert_eq!(segment.render(':'), "extra::flag");

        let parsed = parse_panel_path(&segment.render(':'), ':').unwrap();
        assert_eq!(parsed.id.as_deref(), Some(""));
        assert_eq!(parsed.extras["flag"], "");
    }

    #[test]
    fn test_render_sorted_extras() {
        let segment = PanelSegment::new("x").with_id("1").with_extra("b", "2").with_extra("a", "1");
        assert_eq!(segment.render(';'), "x;1;a=1;b=2");
    }

    #[test]
    fn test_descriptor_round_trip() {
        let parsed = parse_panel_path("user;5;q=a=b", ';').unwrap();
        let rendered = PanelSegment::from(parsed.clone()).render(';');
        assert_eq!(rendered, "user;5;q=a=b");
        assert_eq!(parse_panel_path(&rendered, ';'), Some(parsed));
    }

    #[test]
    fn test_extras_key_with_equals_does_not_round_trip() {
        let segment = PanelSegment::new("user").with_id("1").with_extra("a=b", "c");
        assert!(!segment.round_trips(':'));

        let rendered = segment.render(':');
        assert_eq!(rendered, "user:1:a=b=c");
        let parsed = parse_panel_path(&rendered, ':').unwrap();
        assert_eq!(parsed.extras.get("a").map(String::as_str), Some("b=c"));
        assert!(!parsed.extras.contains_key("a=b"));
    }

    #[test]
    fn test_round_trips() {
        let plain = PanelSegment::new("user").with_id("1").with_extra("q", "a=b");
        assert!(plain.round_trips(':'));
        assert!(!plain.clone().with_id("1:2").round_trips(':'));
        assert!(!plain.clone().with_extra("path", "a/b").round_trips(':'));
        assert!(plain.with_extra("k", "x:y").round_trips(';'));
    }

    #[test]
    fn test_navigator_root() {
        let nav = PanelNavigator::default();
        assert_eq!(nav.base(), "/");
        assert_eq!(nav.href(&[]), "/");
        assert_eq!(nav.open("/info", &PanelSegment::new("extra").with_id("2")), "/info/extra:2");
        assert_eq!(nav.open("/", &PanelSegment::new("info")), "/info");
    }
}
