//! Form state management
//!
//! [`FormState`] owns the current values and errors of one form. Field
//! components receive explicit [`FieldBinding`]s from it and report edits
//! back through [`FormState::handle_change`] or a [`ChangeEvent`].

mod event;
mod field;
mod state;

pub use event::ChangeEvent;
pub use field::{FieldBinding, FieldStatus};
pub use state::FormState;
