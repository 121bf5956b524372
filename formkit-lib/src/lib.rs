//! Form state and declarative field validation
//!
//! A rule-table validator over flat records of field values, plus a
//! synchronous form-state controller that owns values and errors and
//! re-validates on change.

pub mod config;
pub mod error;
pub mod form;
pub mod rule;

mod mapping;
mod record;
mod validator;
mod value;

pub use config::FormConfig;
pub use mapping::ErrorMapping;
pub use record::Record;
pub use validator::*;
pub use value::FieldValue;
