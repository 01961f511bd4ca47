//! # Paneling
//!
//! Panel-stack routing on top of a host router: a single wildcard route
//! suffix encodes an ordered stack of named panels.
//!
//! - Plain panels (`/info`)
//! - Parametrized panels with id and extras (`/extra;4448;tab=notes`)
//! - Depth cap with silent truncation
//! - Unknown panels rendered once as an error panel, then truncated
//! - Inverse path building for programmatic navigation
//!
//! ## URL Grammar
//!
//! ```text
//! suffix  := segment ('/' segment)*
//! segment := name (SEP id? (SEP key('=' value)?)*)?
//! ```
//!
//! `SEP` is configurable and defaults to `:`. Registry keys of parametrized
//! panels always end with `:` whatever `SEP` is.
//!
//! ## Example
//!
//! ```
//! use paneling::{Paneling, PanelRegistry, PanelingConfig};
//!
//! let registry = PanelRegistry::new()
//!     .with_panel("info", "InfoPanel")
//!     .with_parametrized_panel("extra", "ExtraPanel");
//!
//! let paneling = Paneling::new(registry, "ErrorPanel", "IndexPanel")
//!     .with_config(PanelingConfig {
//!         path: Some("/app".to_string()),
//!         extras_separator: ';',
//!         ..PanelingConfig::default()
//!     })
//!     .unwrap();
//!
//! assert_eq!(paneling.route_path(), "/app/*");
//!
//! let resolution = paneling.load(Some("info/extra;4448"));
//! let stack = resolution.stack();
//! assert_eq!(stack.stack[1].component, "ExtraPanel");
//! assert_eq!(stack.stack[1].id.as_deref(), Some("4448"));
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod builder;
pub mod config;
pub mod error;
pub mod path;
pub mod props;
pub mod registry;
pub mod segment;
pub mod stack;
pub mod surface;

pub use builder::{build_panel_path, PanelNavigator, PanelSegment};
pub use config::{ConfigFile, PanelingConfig};
pub use error::PanelingError;
pub use path::{resolve_redirect_path, resolve_route_path, PanelHierarchy};
pub use props::{display_panels, project, DisplayedPanel, Extension, PanelContentProps, PanelProps};
pub use registry::PanelRegistry;
pub use segment::{parse_panel_path, PanelDescriptor, DEFAULT_SEPARATOR, DEFINITION_MARKER};
pub use stack::{Redirect, ResolvedStack, Resolution, StackEntry, StackResolver};
pub use surface::{PanelSurface, PanelingType, SurfaceExtension};

use std::borrow::Cow;

// ============================================================================
// Paneling Route
// ============================================================================

/// A configured paneling route: registry, fallback components and settings
///
/// Built once at configuration time; every navigation calls [`Paneling::load`]
/// with the splat the host router matched.
#[derive(Debug, Clone)]
pub struct Paneling<C> {
    registry: PanelRegistry<C>,
    error_component: C,
    index_component: C,
    config: PanelingConfig,
}

impl<C: Clone> Paneling<C> {
    /// Creates a route mounted at the root with the default separator
    pub fn new(registry: PanelRegistry<C>, error_component: C, index_component: C) -> Self {
        Self {
            registry,
            error_component,
            index_component,
            config: PanelingConfig::default(),
        }
    }

    /// Applies a configuration (functional builder)
    ///
    /// Fails when the separator collides with the URL grammar.
    pub fn with_config(mut self, config: PanelingConfig) -> error::Result<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// Caps the stack depth (functional builder); `0` means unlimited
    pub fn with_max(mut self, max: usize) -> Self {
        self.config.max = Some(max);
        self
    }

    /// Mounts the route on `path` (functional builder)
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.config.path = Some(path.into());
        self
    }

    pub fn config(&self) -> &PanelingConfig {
        &self.config
    }

    pub fn registry(&self) -> &PanelRegistry<C> {
        &self.registry
    }

    pub fn separator(&self) -> char {
        self.config.extras_separator
    }

    /// Pattern the host router should mount this route on
    pub fn route_path(&self) -> Cow<'_, str> {
        resolve_route_path(self.config.path.as_deref())
    }

    /// Prefix every redirect target starts with
    pub fn redirect_base(&self) -> Cow<'_, str> {
        resolve_redirect_path(self.config.path.as_deref())
    }

    /// Resolver borrowing this route's registry and settings
    pub fn resolver(&self) -> StackResolver<'_, C> {
        StackResolver::new(
            &self.registry,
            self.error_component.clone(),
            self.index_component.clone(),
        )
        .with_max(self.config.max_depth())
        .with_separator(self.config.extras_separator)
        .with_base_path(self.config.path.as_deref())
    }

    /// Resolves the matched splat into a stack or a redirect
    ///
    /// # Examples
    ///
    /// ```
    /// use paneling::{Paneling, PanelRegistry};
    ///
    /// let registry = PanelRegistry::new().with_panel("info", 1).with_parametrized_panel("extra", 2);
    /// let paneling = Paneling::new(registry, 0, -1).with_path("/app").with_max(1);
    ///
    /// let resolution = paneling.load(Some("info/extra:9"));
    /// assert_eq!(resolution.redirect_target(), Some("/app/info"));
    /// ```
    pub fn load(&self, splat: Option<&str>) -> Resolution<C> {
        self.resolver().resolve(splat)
    }

    /// Outcome of a form submission on the route: back to the root
    pub fn action(&self) -> &'static str {
        "/"
    }

    /// Navigator building paths under this route
    pub fn navigator(&self) -> PanelNavigator {
        PanelNavigator::new(self.config.path.as_deref(), self.config.extras_separator)
    }

    /// Surface bookkeeping for this route's layout variant
    pub fn surface(&self) -> PanelSurface {
        PanelSurface::new(self.config.layout)
    }
}

impl Paneling<String> {
    /// Route whose components are the registry keys themselves
    ///
    /// Used where components are plain names, e.g. from a config file.
    pub fn from_config_file(file: &ConfigFile) -> error::Result<Self> {
        let registry: PanelRegistry<String> = file
            .panels
            .iter()
            .map(|name| (name.clone(), name.clone()))
            .collect();

        Paneling::new(registry, "error".to_string(), "index".to_string())
            .with_config(file.paneling.clone())
    }
}
