/// Lazy iterator over the ancestors of a panel suffix
///
/// For suffix `info/extra:9/notes`, yields:
/// `info/extra:9/notes` → `info/extra:9` → `info` → `` (no panel)
///
/// Each item is the suffix that remains when the deepest panel is closed,
/// so the n-th item is the `previous_path` of the panel n levels up.
///
/// # Performance
///
/// - **Allocations**: Zero (only borrows from input string)
/// - **Complexity**: O(depth) where depth is the number of panels
///
/// # Examples
///
/// ```
/// use paneling::path::PanelHierarchy;
///
/// let paths: Vec<&str> = PanelHierarchy::new("info/extra:9").collect();
/// assert_eq!(paths, vec!["info/extra:9", "info", ""]);
/// ```
#[derive(Debug, Clone)]
pub struct PanelHierarchy<'a> {
    current: Option<&'a str>,
}

impl<'a> PanelHierarchy<'a> {
    /// Creates a new hierarchy iterator starting from the given suffix
    ///
    /// Leading and trailing `/` are ignored.
    pub fn new(suffix: &'a str) -> Self {
        Self {
            current: Some(suffix.trim_matches('/')),
        }
    }
}

impl<'a> Iterator for PanelHierarchy<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;

        self.current = if current.is_empty() {
            None
        } else if let Some(slash_pos) = current.rfind('/') {
            Some(&current[..slash_pos])
        } else {
            Some("")
        };

        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hierarchy_depths() {
        let paths: Vec<&str> = PanelHierarchy::new("a/b;1/c").collect();
        assert_eq!(paths, vec!["a/b;1/c", "a/b;1", "a", ""]);

        let paths: Vec<&str> = PanelHierarchy::new("").collect();
        assert_eq!(paths, vec![""]);
    }

    #[test]
    fn test_hierarchy_trims_slashes() {
        let paths: Vec<&str> = PanelHierarchy::new("/a/b/").collect();
        assert_eq!(paths, vec!["a/b", "a", ""]);
    }

    #[test]
    fn test_hierarchy_short_circuit() {
        let mut iter = PanelHierarchy::new("a/b/c");
        assert_eq!(iter.find(|p| !p.contains('/')), Some("a"));
        assert_eq!(iter.next(), Some(""));
        assert_eq!(iter.next(), None);
    }
}
