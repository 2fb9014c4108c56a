//! # bloom_core
//!
//! Core building blocks for Bloomify Labs.
//!
//! This crate holds the pieces that the pattern labs share:
//!
//! - **Bouquets**: the flower-shop domain types
//! - **Configuration**: an explicitly constructed [`LabConfig`] value
//! - **Command history**: reversible actions and the undo stack that runs them
//!
//! # Example
//!
//! ```rust
//! use bloom_core::{Action, Bouquet, CommandManager};
//!
//! let mut bouquet = Bouquet::new("Roses");
//! let mut manager = CommandManager::new();
//!
//! manager.run(&mut bouquet, Action::add_flower("Rose"));
//! assert_eq!(bouquet.flowers, vec!["Rose"]);
//!
//! manager.undo(&mut bouquet);
//! assert!(bouquet.flowers.is_empty());
//! ```

pub mod bouquet;
pub mod command;
pub mod config;
pub mod error;

// Re-export main types for convenience
pub use bouquet::{BasicBouquet, Bouquet};
pub use command::{Action, CommandManager};
pub use config::LabConfig;
pub use error::{CoreError, CoreResult};
