//! Interactive lab menu.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::{debug, warn};

use bloom_core::LabConfig;
use bloom_patterns::Lab;

/// What the menu ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuOutcome {
    /// A lab was found and run to completion.
    Ran(Lab),
    /// The choice matched no lab; nothing was run.
    Unknown(String),
}

/// Print the banner and the list of labs.
pub fn print_banner(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "=== Labs Runner ===")?;
    writeln!(out, "Available labs:")?;
    for lab in Lab::all() {
        writeln!(out, "  {}", lab)?;
    }
    Ok(())
}

/// Prompt for a lab number and read one line.
///
/// A line that cannot be read counts as an empty answer.
pub fn prompt(input: &mut dyn BufRead, out: &mut dyn Write) -> Result<String> {
    write!(
        out,
        "Enter lab number to run (e.g., {}): ",
        Lab::DEFAULT_CHOICE
    )?;
    out.flush()?;

    let mut line = String::new();
    if let Err(e) = input.read_line(&mut line) {
        warn!("Could not read lab choice, using default: {}", e);
        line.clear();
    }
    Ok(line)
}

/// Trim a raw answer, falling back to the default lab when it is empty.
pub fn resolve_choice(raw: &str) -> &str {
    match raw.trim() {
        "" => Lab::DEFAULT_CHOICE,
        choice => choice,
    }
}

/// Run the menu end to end.
///
/// When `preset` is given the prompt is skipped and that choice is used.
pub fn run(
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    config: &LabConfig,
    preset: Option<&str>,
) -> Result<MenuOutcome> {
    print_banner(out)?;

    let raw = match preset {
        Some(choice) => choice.to_string(),
        None => prompt(input, out)?,
    };
    let choice = resolve_choice(&raw);
    debug!("Lab choice resolved to {:?}", choice);

    let outcome = match Lab::from_choice(choice) {
        Some(lab) => {
            writeln!(out, "\nRunning {}\n", lab.title())?;
            lab.run(config, out)?;
            MenuOutcome::Ran(lab)
        }
        None => {
            writeln!(out, "Unknown lab. Available: {}", Lab::available_labels())?;
            MenuOutcome::Unknown(choice.to_string())
        }
    };
    out.flush()?;
    Ok(outcome)
}
