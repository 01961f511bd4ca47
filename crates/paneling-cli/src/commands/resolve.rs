use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use paneling::{display_panels, Extension, ResolvedStack, Resolution};

use super::load_paneling;

/// Resolves `suffix` against the configured route
pub fn resolve_suffix(config: Option<&Path>, suffix: &str) -> Result<Resolution<String>> {
    let paneling = load_paneling(config)?;
    Ok(paneling.load(Some(suffix)))
}

pub fn execute(config: Option<&Path>, suffix: &str, location: Option<&str>, json: bool) -> Result<()> {
    let resolution = resolve_suffix(config, suffix)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&resolution)?);
        return Ok(());
    }

    match &resolution {
        Resolution::Stack(stack) => {
            println!("{} {}", "Stack".green().bold(), format!("({} panels)", stack.len()).dimmed());
            print_stack(stack, location);
        }
        Resolution::Redirect(redirect) => {
            println!("{} {}", "Redirect →".yellow().bold(), redirect.location.cyan());
            println!();
            println!("{}", "Pending stack".dimmed());
            print_stack(&redirect.pending, location);
        }
    }

    Ok(())
}

fn print_stack(stack: &ResolvedStack<String>, location: Option<&str>) {
    for (index, entry) in stack.entries().iter().enumerate() {
        let label = if entry.is_index {
            "(index)".blue().to_string()
        } else if entry.error {
            format!("{} {}", entry.panel_path.as_deref().unwrap_or(""), "(unknown panel)".red())
        } else {
            entry.component.cyan().to_string()
        };

        println!("  [{}] {}", index, label);
        if let Some(id) = &entry.id {
            println!("      id: {}", id);
        }
        for (key, value) in &entry.extras {
            println!("      {} = {}", key, value);
        }
    }

    let Some(location) = location else {
        return;
    };

    println!();
    for panel in display_panels(stack, location, &Extension::Static(())) {
        println!(
            "  {}  {} → {}",
            panel.key.dimmed(),
            panel.props.previous_path,
            panel.props.current_path.green()
        );
    }
}
