//! Command types for the Elm-style architecture
//!
//! Commands represent side effects the host binding performs after an
//! update. The field itself never touches the host.

use crate::model::FieldState;

/// Side effects requested by [`update`](crate::update::update)
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Replace the host's displayed text
    SetText(String),
    /// Move the host's caret to a character offset
    SetCursor(usize),
    /// Hand a copy of the field state to the embedder
    Emit(FieldState),
    /// Show a message on the user-notification surface
    Notify(String),
    /// Suppress the host's default action for the current key (form submit)
    PreventDefault,
    /// Execute multiple commands in order
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Flatten nested batches into execution order
    pub fn into_vec(self) -> Vec<Cmd> {
        match self {
            Cmd::None => Vec::new(),
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::into_vec).collect(),
            other => vec![other],
        }
    }

    /// The state carried by the first emission, if any
    pub fn emitted(&self) -> Option<&FieldState> {
        match self {
            Cmd::Emit(state) => Some(state),
            Cmd::Batch(cmds) => cmds.iter().find_map(Cmd::emitted),
            _ => None,
        }
    }

    /// Whether this command asks the host to cancel its default action
    pub fn prevents_default(&self) -> bool {
        match self {
            Cmd::PreventDefault => true,
            Cmd::Batch(cmds) => cmds.iter().any(Cmd::prevents_default),
            _ => false,
        }
    }
}
