//! Reversible actions and the history that runs them.
//!
//! An [`Action`] is executed immediately by [`CommandManager::run`] and then
//! pushed onto the history. [`CommandManager::undo`] pops the most recent
//! action and reverses it, so undoing every action in turn restores the
//! bouquet to the state it had before the first run.

use std::fmt;

use tracing::{debug, warn};

use crate::bouquet::Bouquet;

/// A reversible unit of work on a bouquet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Append a flower to the end of the bouquet.
    AddFlower { flower: String },
}

impl Action {
    pub fn add_flower(flower: impl Into<String>) -> Self {
        Self::AddFlower {
            flower: flower.into(),
        }
    }

    /// Apply the action to the bouquet.
    pub fn execute(&self, target: &mut Bouquet) {
        match self {
            Self::AddFlower { flower } => target.flowers.push(flower.clone()),
        }
    }

    /// Reverse a previous [`execute`](Self::execute) of this action.
    ///
    /// Assumes nothing else touched the tail of the flower list since the
    /// action ran. An empty list is left alone.
    pub fn undo(&self, target: &mut Bouquet) {
        match self {
            Self::AddFlower { flower } => match target.flowers.pop() {
                Some(removed) if removed != *flower => {
                    warn!(
                        "Undo of {} removed {:?} from {:?}",
                        self, removed, target.name
                    );
                }
                Some(_) => {}
                None => {
                    warn!("Undo of {} found {:?} already empty", self, target.name);
                }
            },
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AddFlower { flower } => write!(f, "add-flower({})", flower),
        }
    }
}

/// Runs actions and keeps them on an undo stack.
#[derive(Debug, Default)]
pub struct CommandManager {
    history: Vec<Action>,
}

impl CommandManager {
    pub fn new() -> Self {
        Self {
            history: Vec::new(),
        }
    }

    /// Execute the action on the bouquet and record it.
    pub fn run(&mut self, target: &mut Bouquet, action: Action) {
        debug!("Running {} on {:?}", action, target.name);
        action.execute(target);
        self.history.push(action);
    }

    /// Undo the most recent action.
    ///
    /// Returns the undone action, or `None` when there is nothing to undo.
    pub fn undo(&mut self, target: &mut Bouquet) -> Option<Action> {
        let action = self.history.pop()?;
        debug!("Undoing {} on {:?}", action, target.name);
        action.undo(target);
        Some(action)
    }

    /// Actions in the order they were run.
    pub fn history(&self) -> &[Action] {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}
