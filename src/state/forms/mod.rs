//! Form domain layer
//!
//! Type-safe state for the intake form: the collected values, the step
//! sequence and the controller that owns both.

mod intake_form;
mod step;
mod values;

pub use intake_form::{Focus, IntakeForm, NavAction, NavButton};
pub use step::{Step, STEP_COUNT};
pub use values::{FieldId, FormValues, VENDORS};
