use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use paneling::{parse_panel_path, PanelSegment, DEFAULT_SEPARATOR};

use super::load_paneling;

/// Parses panel arguments, returning the segments and the positions of
/// empty arguments that were skipped
pub fn segments_from_args(panels: &[String]) -> (Vec<PanelSegment>, Vec<usize>) {
    let mut segments = Vec::with_capacity(panels.len());
    let mut skipped = Vec::new();

    for (position, panel) in panels.iter().enumerate() {
        match parse_panel_path(panel, DEFAULT_SEPARATOR) {
            Some(desc) => segments.push(PanelSegment::from(desc)),
            None => skipped.push(position),
        }
    }

    (segments, skipped)
}

/// Panels are written in the default `:` notation and re-emitted with the
/// configured separator
pub fn execute(config: Option<&Path>, panels: &[String], json: bool) -> Result<()> {
    let paneling = load_paneling(config)?;
    let navigator = paneling.navigator();

    let (segments, skipped) = segments_from_args(panels);
    let href = navigator.href(&segments);

    if json {
        println!("{}", serde_json::json!({ "segments": segments, "skipped": skipped, "href": href }));
        return Ok(());
    }

    for position in &skipped {
        println!("{} argument {}", "⚠ empty panel skipped:".yellow(), position + 1);
    }
    for segment in &segments {
        if !paneling.registry().contains(&segment.panel) {
            println!("{} {}", "⚠ not registered:".yellow(), segment.panel);
        }
        if !segment.round_trips(paneling.separator()) {
            println!("{} {}", "⚠ will not round-trip:".yellow(), segment.panel);
        }
    }
    println!("{}", href.green().bold());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_argument_is_reported() {
        let panels = vec!["info".to_string(), String::new(), "extra:9:tab=notes".to_string()];
        let (segments, skipped) = segments_from_args(&panels);

        assert_eq!(skipped, vec![1]);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[1].panel, "extra:");
        assert_eq!(segments[1].id.as_deref(), Some("9"));
    }

    #[test]
    fn test_all_arguments_parsed() {
        let panels = vec!["info".to_string()];
        let (segments, skipped) = segments_from_args(&panels);
        assert!(skipped.is_empty());
        assert_eq!(segments, vec![PanelSegment::new("info")]);
    }
}
