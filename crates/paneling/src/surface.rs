/// Layout variant a panel stack is displayed with
///
/// # Examples
///
/// ```
/// use paneling::PanelingType;
///
/// let layout: PanelingType = "tiling".parse().unwrap();
/// assert_eq!(layout, PanelingType::Tiling);
/// assert_eq!(layout.to_string(), "tiling");
/// assert_eq!(PanelingType::default(), PanelingType::Stacking);
/// ```
///
/// # Variants
///
/// - `stacking` → panels overlap, the active one on top
/// - `tiling` → panels share the surface in rows and columns
/// - `grid` → panels flow into a fixed column grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelingType {
    #[default]
    Stacking,
    Tiling,
    Grid,
}

impl PanelingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PanelingType::Stacking => "stacking",
            PanelingType::Tiling => "tiling",
            PanelingType::Grid => "grid",
        }
    }
}

impl std::fmt::Display for PanelingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PanelingType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stacking" => Ok(PanelingType::Stacking),
            "tiling" => Ok(PanelingType::Tiling),
            "grid" => Ok(PanelingType::Grid),
            other => Err(format!("unknown paneling type: {}", other)),
        }
    }
}

/// Extension props describing a panel's place on the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurfaceExtension {
    pub paneling_type: PanelingType,
    pub nb_panels: usize,
    pub panel_index: usize,
    pub active_panel: usize,
}

/// Active-panel bookkeeping for one displayed stack
///
/// The newest (deepest) panel becomes active whenever the stack length
/// changes; hosts may activate another panel explicitly.
///
/// # Examples
///
/// ```
/// use paneling::{PanelSurface, PanelingType};
///
/// let mut surface = PanelSurface::new(PanelingType::Stacking);
/// surface.sync(3);
/// assert_eq!(surface.active_panel(), 2);
///
/// assert!(surface.set_active(0));
/// assert!(!surface.set_active(0));
/// assert!(!surface.set_active(3));
/// assert_eq!(surface.extension(1).active_panel, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelSurface {
    layout: PanelingType,
    nb_panels: usize,
    active: usize,
}

impl PanelSurface {
    pub fn new(layout: PanelingType) -> Self {
        Self {
            layout,
            nb_panels: 0,
            active: 0,
        }
    }

    pub fn layout(&self) -> PanelingType {
        self.layout
    }

    pub fn nb_panels(&self) -> usize {
        self.nb_panels
    }

    pub fn active_panel(&self) -> usize {
        self.active
    }

    /// Records the stack length; a change activates the last panel
    pub fn sync(&mut self, nb_panels: usize) {
        if nb_panels != self.nb_panels {
            self.nb_panels = nb_panels;
            self.active = nb_panels.saturating_sub(1);
        }
    }

    /// Activates panel `index`; returns whether the active panel changed
    pub fn set_active(&mut self, index: usize) -> bool {
        if index >= self.nb_panels || index == self.active {
            return false;
        }
        self.active = index;
        true
    }

    /// Extension props for the panel at `panel_index`
    pub fn extension(&self, panel_index: usize) -> SurfaceExtension {
        SurfaceExtension {
            paneling_type: self.layout,
            nb_panels: self.nb_panels,
            panel_index,
            active_panel: self.active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sync_same_length_keeps_active() {
        let mut surface = PanelSurface::new(PanelingType::Grid);
        surface.sync(4);
        surface.set_active(1);
        surface.sync(4);
        assert_eq!(surface.active_panel(), 1);

        surface.sync(2);
        assert_eq!(surface.active_panel(), 1);
        surface.sync(0);
        assert_eq!(surface.active_panel(), 0);
    }

    #[test]
    fn test_set_active_on_empty_surface() {
        let mut surface = PanelSurface::new(PanelingType::Tiling);
        assert!(!surface.set_active(0));
    }

    #[test]
    fn test_paneling_type_parse_error() {
        assert!("cascade".parse::<PanelingType>().is_err());
        assert_eq!("grid".parse::<PanelingType>(), Ok(PanelingType::Grid));
    }
}
