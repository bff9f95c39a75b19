//! Field model - the state a formatted input owns
//!
//! Each field instance owns its own state exclusively; nothing is shared
//! between fields.

mod field;
mod state;

pub use field::FormattedField;
pub use state::FieldState;
