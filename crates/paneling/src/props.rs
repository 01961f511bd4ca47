/// Stack-to-props projection
///
/// Turns resolved stack entries plus the current location into the props a
/// panel component receives: absolute previous/current paths, id, extras
/// and splat, merged with caller-supplied extension props.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::path::{base_url, join_panel_path};
use crate::stack::{ResolvedStack, StackEntry};

/// Props handed to a panel's content
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelContentProps {
    pub current_path: String,
    pub previous_path: String,
    pub splat: Vec<String>,
    pub panel_path: Option<String>,
    pub extras: BTreeMap<String, String>,
    pub id: Option<String>,
}

/// Props handed to a panel component
///
/// Serialises with the extension flattened first, then the positional
/// fields; use [`PanelProps::to_json_map`] when keys may collide.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelProps<P> {
    #[serde(flatten)]
    pub extension: P,
    pub previous_path: String,
    pub current_path: String,
    pub panel_path: Option<String>,
    pub id: Option<String>,
    pub extras: BTreeMap<String, String>,
    pub splat: Vec<String>,
}

impl<P> PanelProps<P> {
    /// The subset forwarded to the panel's content
    pub fn content(&self) -> PanelContentProps {
        PanelContentProps {
            current_path: self.current_path.clone(),
            previous_path: self.previous_path.clone(),
            splat: self.splat.clone(),
            panel_path: self.panel_path.clone(),
            extras: self.extras.clone(),
            id: self.id.clone(),
        }
    }
}

impl<P: Serialize> PanelProps<P> {
    /// Merged props as a JSON object; positional fields win on collision
    ///
    /// An extension that does not serialise to an object contributes nothing.
    pub fn to_json_map(&self) -> Map<String, Value> {
        let mut merged = match serde_json::to_value(&self.extension) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        };

        let positional = serde_json::json!({
            "previousPath": self.previous_path,
            "currentPath": self.current_path,
            "panelPath": self.panel_path,
            "id": self.id,
            "extras": self.extras,
            "splat": self.splat,
        });
        if let Value::Object(fields) = positional {
            merged.extend(fields);
        }
        merged
    }
}

/// Extension props merged into every panel's props
pub enum Extension<'a, P> {
    /// Same props for every panel
    Static(P),
    /// Props computed from the panel's index in the stack
    PerIndex(Box<dyn Fn(usize) -> P + 'a>),
}

impl<'a, P: Clone> Extension<'a, P> {
    pub fn per_index(factory: impl Fn(usize) -> P + 'a) -> Self {
        Extension::PerIndex(Box::new(factory))
    }

    /// Extension props for the panel at `index`
    pub fn at(&self, index: usize) -> P {
        match self {
            Extension::Static(props) => props.clone(),
            Extension::PerIndex(factory) => factory(index),
        }
    }
}

impl<P: fmt::Debug> fmt::Debug for Extension<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Extension::Static(props) => f.debug_tuple("Static").field(props).finish(),
            Extension::PerIndex(_) => f.write_str("PerIndex(..)"),
        }
    }
}

/// Projects one stack entry into panel props
///
/// # Examples
///
/// ```
/// use paneling::{project, PanelRegistry, StackResolver};
///
/// let registry = PanelRegistry::new().with_panel("info", ());
/// let resolved = StackResolver::new(&registry, (), ()).resolve(Some("info")).into_stack();
///
/// let props = project(&resolved.stack[0], &resolved.splat, "/base/info", ());
/// assert_eq!(props.current_path, "/base/info");
/// assert_eq!(props.previous_path, "/base/");
/// ```
pub fn project<C, P>(entry: &StackEntry<C>, splat: &[String], location: &str, extension: P) -> PanelProps<P> {
    let base = base_url(splat, location);

    let current_path = match entry.current_path.as_deref() {
        Some(current) if !current.is_empty() => join_panel_path(&base, current),
        _ => join_panel_path(&base, "/"),
    };

    PanelProps {
        extension,
        previous_path: join_panel_path(&base, &entry.previous_path),
        current_path,
        panel_path: entry.panel_path.clone(),
        id: entry.id.clone(),
        extras: entry.extras.clone(),
        splat: splat.to_vec(),
    }
}

/// A panel ready for rendering
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayedPanel<'s, C, P> {
    /// Stable render key, `panel-{index}`
    pub key: String,
    pub component: &'s C,
    pub props: PanelProps<P>,
}

/// Projects every entry of a resolved stack, in order
///
/// # Examples
///
/// ```
/// use paneling::{display_panels, Extension, PanelRegistry, StackResolver};
///
/// let registry = PanelRegistry::new().with_panel("a", "A").with_panel("b", "B");
/// let resolved = StackResolver::new(&registry, "E", "I").resolve(Some("a/b")).into_stack();
///
/// let panels = display_panels(&resolved, "/a/b", &Extension::per_index(|i| i));
/// assert_eq!(panels[1].key, "panel-1");
/// assert_eq!(*panels[1].component, "B");
/// assert_eq!(panels[1].props.extension, 1);
/// assert_eq!(panels[1].props.previous_path, "/a");
/// ```
pub fn display_panels<'s, C, P: Clone>(
    resolved: &'s ResolvedStack<C>,
    location: &str,
    extension: &Extension<'_, P>,
) -> Vec<DisplayedPanel<'s, C, P>> {
    resolved
        .stack
        .iter()
        .enumerate()
        .map(|(index, entry)| DisplayedPanel {
            key: format!("panel-{}", index),
            component: &entry.component,
            props: project(entry, &resolved.splat, location, extension.at(index)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::PanelRegistry;
    use crate::stack::StackResolver;

    #[derive(Debug, Clone, Serialize)]
    struct Ext {
        #[serde(rename = "currentPath")]
        current_path: &'static str,
        title: &'static str,
    }

    #[test]
    fn test_index_entry_projection() {
        let registry: PanelRegistry<()> = PanelRegistry::new();
        let resolved = StackResolver::new(&registry, (), ()).resolve(Some("")).into_stack();
        let props = project(&resolved.stack[0], &resolved.splat, "/base/", ());

        assert_eq!(props.current_path, "/base");
        assert_eq!(props.previous_path, "/base");
    }

    #[test]
    fn test_root_mount_projection() {
        let registry = PanelRegistry::new().with_panel("info", ());
        let resolved = StackResolver::new(&registry, (), ()).resolve(Some("info")).into_stack();
        let props = project(&resolved.stack[0], &resolved.splat, "/info", ());

        assert_eq!(props.current_path, "/info");
        assert_eq!(props.previous_path, "/");
    }

    #[test]
    fn test_positional_fields_win() {
        let registry = PanelRegistry::new().with_panel("info", ());
        let resolved = StackResolver::new(&registry, (), ()).resolve(Some("info")).into_stack();
        let ext = Ext {
            current_path: "/overridden",
            title: "Info",
        };
        let map = project(&resolved.stack[0], &resolved.splat, "/app/info", ext).to_json_map();

        assert_eq!(map["currentPath"], "/app/info");
        assert_eq!(map["title"], "Info");
        assert_eq!(map["id"], Value::Null);
    }

    #[test]
    fn test_content_props() {
        let registry = PanelRegistry::new().with_parametrized_panel("user", ());
        let resolved = StackResolver::new(&registry, (), ())
            .resolve(Some("user:7:tab=roles"))
            .into_stack();
        let content = project(&resolved.stack[0], &resolved.splat, "/user:7:tab=roles", ()).content();

        assert_eq!(content.id.as_deref(), Some("7"));
        assert_eq!(content.extras["tab"], "roles");
        assert_eq!(content.panel_path.as_deref(), Some("user:7:tab=roles"));
    }

    #[test]
    fn test_static_extension_debug() {
        let ext: Extension<'_, u8> = Extension::Static(3);
        assert_eq!(format!("{:?}", ext), "Static(3)");
        assert_eq!(ext.at(9), 3);
    }
}
