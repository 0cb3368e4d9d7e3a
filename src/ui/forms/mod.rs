//! Form rendering module
//!
//! - `labeled_text_field`: reusable text input with an optional action button
//! - `vendor_select`: single-select option row
//! - `intake_form`: the step-by-step intake form

mod intake_form;
mod labeled_text_field;
mod vendor_select;

pub use intake_form::draw as draw_intake_form;
pub use labeled_text_field::{FieldEvent, LabeledTextField};
