use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use paneling::config::validate_separator;
use paneling::parse_panel_path;

use super::load_paneling;

pub fn execute(config: Option<&Path>, segment: &str, separator: Option<char>, json: bool) -> Result<()> {
    let separator = match separator {
        Some(sep) => {
            validate_separator(sep)?;
            sep
        }
        None => load_paneling(config)?.separator(),
    };

    let descriptor = parse_panel_path(segment, separator);

    if json {
        println!("{}", serde_json::to_string_pretty(&descriptor)?);
        return Ok(());
    }

    match descriptor {
        Some(desc) => {
            println!("Name: {}", desc.name.cyan());
            println!("Id: {}", desc.id.as_deref().unwrap_or("-"));
            for (key, value) in &desc.extras {
                println!("  {} = {}", key, value);
            }
        }
        None => println!("{}", "Empty segment".yellow()),
    }

    Ok(())
}
