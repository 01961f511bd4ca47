/// Panel stack resolution
///
/// Walks the slash-separated segments of a wildcard route suffix left to
/// right and turns them into an ordered panel stack, or into a redirect
/// when the suffix has to be truncated.
///
/// Resolution is total: every input yields either a stack or a redirect.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::path::resolve_redirect_path;
use crate::registry::PanelRegistry;
use crate::segment::{parse_panel_path, DEFAULT_SEPARATOR};

// ============================================================================
// Core Types
// ============================================================================

/// One resolved panel; position in the stack is its depth
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StackEntry<C> {
    /// Component rendered for this panel
    pub component: C,
    /// Parsed lookup name (`None` for the index entry)
    pub name: Option<String>,
    pub id: Option<String>,
    pub extras: BTreeMap<String, String>,
    /// Suffix of all panels before this one
    pub previous_path: String,
    /// Suffix up to and including this panel (`None` for the index entry)
    pub current_path: Option<String>,
    /// Raw URL segment
    pub panel_path: Option<String>,
    /// Unknown panel name
    pub error: bool,
    /// No panel at all
    pub is_index: bool,
}

impl<C> StackEntry<C> {
    fn index(component: C) -> Self {
        Self {
            component,
            name: None,
            id: None,
            extras: BTreeMap::new(),
            previous_path: "/".to_string(),
            current_path: None,
            panel_path: None,
            error: false,
            is_index: true,
        }
    }
}

/// Stack produced for one navigation; replaced wholesale on the next one
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedStack<C> {
    /// Every raw segment of the suffix, including unresolved ones
    pub splat: Vec<String>,
    pub stack: Vec<StackEntry<C>>,
    pub extras_separator: char,
}

impl<C> ResolvedStack<C> {
    pub fn entries(&self) -> &[StackEntry<C>] {
        &self.stack
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Whether the stack holds only the index entry
    pub fn is_index(&self) -> bool {
        matches!(self.stack.as_slice(), [entry] if entry.is_index)
    }

    /// The error entry, if the suffix named an unknown panel
    pub fn error_entry(&self) -> Option<&StackEntry<C>> {
        self.stack.iter().find(|entry| entry.error)
    }
}

/// Redirect to the validly resolved prefix of the suffix
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Redirect<C> {
    /// Redirect prefix followed by the valid segments
    pub location: String,
    /// Valid resolved segments, in order
    pub segments: Vec<String>,
    /// Stack resolved for the current URL before truncation
    pub pending: ResolvedStack<C>,
}

/// Outcome of resolving a suffix
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Resolution<C> {
    Stack(ResolvedStack<C>),
    Redirect(Redirect<C>),
}

impl<C> Resolution<C> {
    pub fn is_redirect(&self) -> bool {
        matches!(self, Resolution::Redirect(_))
    }

    /// Redirect target, if the suffix must be truncated
    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            Resolution::Redirect(redirect) => Some(&redirect.location),
            Resolution::Stack(_) => None,
        }
    }

    /// The resolved stack, or the pending stack of a redirect
    pub fn stack(&self) -> &ResolvedStack<C> {
        match self {
            Resolution::Stack(stack) => stack,
            Resolution::Redirect(redirect) => &redirect.pending,
        }
    }

    pub fn into_stack(self) -> ResolvedStack<C> {
        match self {
            Resolution::Stack(stack) => stack,
            Resolution::Redirect(redirect) => redirect.pending,
        }
    }
}

// ============================================================================
// Resolver
// ============================================================================

/// Borrowed view of everything resolution needs
///
/// # Examples
///
/// ```
/// use paneling::{PanelRegistry, StackResolver};
///
/// let registry = PanelRegistry::new()
///     .with_panel("info", "Info")
///     .with_parametrized_panel("extra", "Extra");
///
/// let resolver = StackResolver::new(&registry, "Error", "Index").with_separator(';');
/// let resolved = resolver.resolve(Some("info/extra;9")).into_stack();
///
/// assert_eq!(resolved.stack[0].name.as_deref(), Some("info"));
/// assert_eq!(resolved.stack[1].name.as_deref(), Some("extra:"));
/// assert_eq!(resolved.stack[1].id.as_deref(), Some("9"));
/// ```
#[derive(Debug, Clone)]
pub struct StackResolver<'a, C> {
    registry: &'a PanelRegistry<C>,
    error_component: C,
    index_component: C,
    max: Option<usize>,
    extras_separator: char,
    base_path: Option<&'a str>,
}

/// Accumulator for the segment scan
struct ScanState<C> {
    accepted: Vec<String>,
    stack: Vec<StackEntry<C>>,
    stopped: bool,
    failed: bool,
}

impl<C> ScanState<C> {
    fn new() -> Self {
        Self {
            accepted: Vec::new(),
            stack: Vec::new(),
            stopped: false,
            failed: false,
        }
    }

    /// Segments rendered as panels, the error segment included
    fn consumed(&self) -> usize {
        self.accepted.len() + usize::from(self.failed)
    }
}

impl<'a, C: Clone> StackResolver<'a, C> {
    pub fn new(registry: &'a PanelRegistry<C>, error_component: C, index_component: C) -> Self {
        Self {
            registry,
            error_component,
            index_component,
            max: None,
            extras_separator: DEFAULT_SEPARATOR,
            base_path: None,
        }
    }

    /// Caps the stack depth; `0` means unlimited
    pub fn with_max(mut self, max: Option<usize>) -> Self {
        self.max = max.filter(|m| *m > 0);
        self
    }

    pub fn with_separator(mut self, separator: char) -> Self {
        self.extras_separator = separator;
        self
    }

    /// Route path the resolver is mounted on, used for redirect targets
    pub fn with_base_path(mut self, path: Option<&'a str>) -> Self {
        self.base_path = path;
        self
    }

    /// Resolves the unmatched route suffix into a stack or a redirect
    ///
    /// # Algorithm
    ///
    /// 1. Split the suffix on `/`
    /// 2. For each segment, in order:
    ///    - depth cap reached on a non-empty segment → stop
    ///    - empty segment → stop, dropping it
    ///    - registered name → push a panel entry
    ///    - unknown name → push one error entry and stop
    /// 3. Nothing consumed → single index entry, no redirect
    /// 4. Stopped early with raw segments left over → redirect to the
    ///    valid prefix (the unknown segment excluded)
    pub fn resolve(&self, splat: Option<&str>) -> Resolution<C> {
        let raw: Vec<String> = splat
            .map(|s| s.split('/').map(str::to_string).collect())
            .unwrap_or_default();

        debug!(splat = ?splat, segments = raw.len(), "resolving panel stack");

        let mut state = raw
            .iter()
            .try_fold(ScanState::new(), |state, segment| self.scan(state, segment))
            .unwrap_or_else(|stopped| stopped);

        if state.consumed() == 0 {
            state.stack.push(StackEntry::index(self.index_component.clone()));
            return Resolution::Stack(self.finish(raw, state.stack));
        }

        if state.stopped && raw.len() > state.consumed() {
            let location = format!(
                "{}{}",
                resolve_redirect_path(self.base_path),
                state.accepted.join("/")
            );
            info!(%location, depth = state.accepted.len(), "truncating panel path");

            return Resolution::Redirect(Redirect {
                location,
                segments: state.accepted,
                pending: self.finish(raw, state.stack),
            });
        }

        debug!(depth = state.stack.len(), "panel stack resolved");
        Resolution::Stack(self.finish(raw, state.stack))
    }

    /// Processes one segment; `Err` carries the state when scanning stops
    fn scan(&self, mut state: ScanState<C>, segment: &str) -> Result<ScanState<C>, ScanState<C>> {
        let capped = self.max.is_some_and(|max| state.accepted.len() >= max);

        if segment.is_empty() || capped {
            state.stopped = true;
            return Err(state);
        }

        let previous_path = state.accepted.join("/");
        let current_path = if previous_path.is_empty() {
            segment.to_string()
        } else {
            format!("{}/{}", previous_path, segment)
        };

        let parsed = parse_panel_path(segment, self.extras_separator);
        let component = parsed.as_ref().and_then(|desc| self.registry.get(&desc.name));

        match (parsed, component) {
            (Some(desc), Some(component)) => {
                state.stack.push(StackEntry {
                    component: component.clone(),
                    name: Some(desc.name),
                    id: desc.id,
                    extras: desc.extras,
                    previous_path,
                    current_path: Some(current_path),
                    panel_path: Some(segment.to_string()),
                    error: false,
                    is_index: false,
                });
                state.accepted.push(segment.to_string());
                Ok(state)
            }
            (parsed, _) => {
                warn!(segment, "unknown panel");
                state.stack.push(StackEntry {
                    component: self.error_component.clone(),
                    name: parsed.map(|desc| desc.name),
                    id: None,
                    extras: BTreeMap::new(),
                    previous_path,
                    current_path: Some(current_path),
                    panel_path: Some(segment.to_string()),
                    error: true,
                    is_index: false,
                });
                state.failed = true;
                state.stopped = true;
                Err(state)
            }
        }
    }

    fn finish(&self, splat: Vec<String>, stack: Vec<StackEntry<C>>) -> ResolvedStack<C> {
        ResolvedStack {
            splat,
            stack,
            extras_separator: self.extras_separator,
        }
    }
}
