//! Declarative description of what the form shows
//!
//! [`build_view`] is a pure function of the form state. The renderer draws
//! whatever it returns, so everything visible can be checked without a
//! terminal.

use crate::state::{
    FieldId, Focus, IntakeForm, NavAction, NavButton, Step, STEP_COUNT, VENDORS,
};

/// Title shown on the outer form block
pub const FORM_TITLE: &str = "My Zip Intake Form";

/// Everything drawn for one frame of the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub title: &'static str,
    pub step: Step,
    pub heading: &'static str,
    pub progress: String,
    pub fields: Vec<FieldView>,
    pub nav: NavView,
}

/// A single question on the current step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldView {
    Text {
        id: FieldId,
        question: &'static str,
        value: String,
        placeholder: Option<&'static str>,
        focused: bool,
    },
    Select {
        id: FieldId,
        question: &'static str,
        options: Vec<&'static str>,
        selected: usize,
        focused: bool,
    },
}

#[cfg(test)]
impl FieldView {
    pub fn id(&self) -> FieldId {
        match self {
            FieldView::Text { id, .. } | FieldView::Select { id, .. } => *id,
        }
    }
}

/// The navigation row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavView {
    pub back_enabled: bool,
    /// Next on intermediate steps, Submit on the last one
    pub primary: NavAction,
    pub focused: bool,
    pub selected: NavButton,
}

impl NavView {
    /// Whether a button for `action` is on screen
    pub fn shows(&self, action: NavAction) -> bool {
        action == NavAction::Back || action == self.primary
    }
}

/// Describe the current step of `form`
pub fn build_view(form: &IntakeForm) -> FormView {
    let step = form.step();
    let focus = form.focus();
    let values = form.values();

    let fields = step
        .fields()
        .iter()
        .map(|&id| {
            let focused = focus == Focus::Field(id);
            if id.is_text() {
                FieldView::Text {
                    id,
                    question: id.question(),
                    value: values.get(id).to_string(),
                    placeholder: id.placeholder(),
                    focused,
                }
            } else {
                FieldView::Select {
                    id,
                    question: id.question(),
                    options: VENDORS.to_vec(),
                    selected: values.vendor_index(),
                    focused,
                }
            }
        })
        .collect();

    FormView {
        title: FORM_TITLE,
        step,
        heading: step.heading(),
        progress: format!("{} of {}", step.index() + 1, STEP_COUNT),
        fields,
        nav: NavView {
            back_enabled: form.back_enabled(),
            primary: form.primary_action(),
            focused: focus == Focus::Nav,
            selected: form.selected_nav(),
        },
    }
}
