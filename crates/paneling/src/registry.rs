/// Panel registry
///
/// Plain string-keyed map from panel name to component, built once at
/// configuration time. Parametrized panels are keyed `name:`.

use std::collections::HashMap;

use crate::segment::DEFINITION_MARKER;

/// Registry of panel components keyed by lookup name
///
/// # Examples
///
/// ```
/// use paneling::PanelRegistry;
///
/// let registry = PanelRegistry::new()
///     .with_panel("info", "InfoPanel")
///     .with_parametrized_panel("extra", "ExtraPanel");
///
/// assert!(registry.contains("info"));
/// assert!(registry.contains("extra:"));
/// assert_eq!(registry.get("extra:"), Some(&"ExtraPanel"));
/// ```
#[derive(Debug, Clone)]
pub struct PanelRegistry<C> {
    panels: HashMap<String, C>,
}

impl<C> PanelRegistry<C> {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self {
            panels: HashMap::new(),
        }
    }

    /// Registers a panel under its exact lookup key (functional builder)
    pub fn with_panel(mut self, name: impl Into<String>, component: C) -> Self {
        self.insert(name, component);
        self
    }

    /// Registers a panel that takes an id and extras (functional builder)
    ///
    /// The definition marker is appended unless already present, so
    /// `"extra"` and `"extra:"` register the same key.
    pub fn with_parametrized_panel(mut self, name: impl Into<String>, component: C) -> Self {
        let mut name = name.into();
        if !name.ends_with(DEFINITION_MARKER) {
            name.push(DEFINITION_MARKER);
        }
        self.insert(name, component);
        self
    }

    /// Registers a panel under its exact lookup key
    ///
    /// Returns the previously registered component, if any.
    pub fn insert(&mut self, name: impl Into<String>, component: C) -> Option<C> {
        self.panels.insert(name.into(), component)
    }

    /// Looks up a component by name
    pub fn get(&self, name: &str) -> Option<&C> {
        self.panels.get(name)
    }

    /// Whether a panel is registered under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.panels.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Registered lookup names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.panels.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl<C> Default for PanelRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, S: Into<String>> FromIterator<(S, C)> for PanelRegistry<C> {
    fn from_iter<I: IntoIterator<Item = (S, C)>>(iter: I) -> Self {
        Self {
            panels: iter.into_iter().map(|(name, c)| (name.into(), c)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parametrized_marker_not_doubled() {
        let registry = PanelRegistry::new()
            .with_parametrized_panel("a", 1)
            .with_parametrized_panel("b:", 2);
        assert_eq!(registry.names(), vec!["a:", "b:"]);
    }

    #[test]
    fn test_insert_replaces() {
        let mut registry = PanelRegistry::new();
        assert_eq!(registry.insert("info", 1), None);
        assert_eq!(registry.insert("info", 2), Some(1));
        assert_eq!(registry.get("info"), Some(&2));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_from_iter() {
        let registry: PanelRegistry<&str> = [("info", "I"), ("extra:", "E")].into_iter().collect();
        assert!(registry.contains("extra:"));
        assert!(!registry.contains("extra"));
        assert!(!registry.is_empty());
    }
}
