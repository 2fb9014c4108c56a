//! Command line definition.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use bloom_core::LabConfig;

/// Bloomify Labs - design pattern lab runner
#[derive(Parser, Debug)]
#[command(name = "labs")]
#[command(version, about = "Bloomify Labs - design pattern lab runner")]
#[command(long_about = r#"
Runs one of the Bloomify design pattern labs. Without --lab the runner
prompts for a lab number on standard input; an empty answer picks lab 1.

LABS:
  1 → SOLID (SRP, OCP, DIP)
  2 → Creational patterns (configuration, builder, factory)
  3 → Structural patterns (adapter, decorator, facade)
  4 → Behavioral patterns (observer, strategy, command)

EXIT CODES:
  0 - Success (including an unknown lab number)
  1 - Output error
  2 - Invalid configuration
"#)]
pub struct Cli {
    /// Enable verbose logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Lab number to run without prompting
    #[arg(short, long, value_name = "NUMBER")]
    pub lab: Option<String>,

    /// YAML file with lab configuration
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Build the lab configuration from the command line.
    pub fn load_config(&self) -> Result<LabConfig> {
        match &self.config {
            Some(path) => LabConfig::from_file(path)
                .with_context(|| format!("Invalid configuration file {}", path.display())),
            None => Ok(LabConfig::default()),
        }
    }
}
