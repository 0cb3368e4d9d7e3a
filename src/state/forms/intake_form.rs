//! Intake form controller
//!
//! Owns the form values and the current step. Every operation here is total:
//! step changes clamp, field updates replace exactly one field, and the vendor
//! can only ever hold an entry of [`VENDORS`].

use super::step::Step;
use super::values::{FieldId, FormValues, VENDORS};

/// Something that can hold keyboard focus on a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(FieldId),
    /// The Back / Next / Submit button row
    Nav,
}

/// Buttons in the navigation row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavButton {
    Back,
    /// Next, or Submit on the last step
    #[default]
    Primary,
}

/// Action triggered from the navigation row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Back,
    Next,
    Submit,
}

impl NavAction {
    pub fn label(self) -> &'static str {
        match self {
            NavAction::Back => "Back",
            NavAction::Next => "Next",
            NavAction::Submit => "Submit",
        }
    }
}

/// State of one intake form session
#[derive(Debug, Clone, Default)]
pub struct IntakeForm {
    values: FormValues,
    step: Step,
    active_focus: usize,
    selected_nav: NavButton,
}

impl IntakeForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn step(&self) -> Step {
        self.step
    }

    /// Advance one step. Returns false if already on the last step.
    pub fn handle_next(&mut self) -> bool {
        self.go_to(self.step.next())
    }

    /// Go back one step. Returns false if already on the first step.
    pub fn handle_back(&mut self) -> bool {
        self.go_to(self.step.back())
    }

    fn go_to(&mut self, step: Step) -> bool {
        if step == self.step {
            return false;
        }
        tracing::debug!(from = self.step.name(), to = step.name(), "step changed");
        self.step = step;
        self.active_focus = 0;
        self.selected_nav = NavButton::Primary;
        true
    }

    /// Replace the value of a single field.
    ///
    /// Vendor updates go through [`IntakeForm::select_vendor`] so unknown
    /// vendor names are ignored.
    pub fn update_field(&mut self, field: FieldId, value: String) {
        if field == FieldId::Vendor {
            self.select_vendor(&value);
            return;
        }
        *self.values.slot_mut(field) = value;
    }

    /// Select a vendor by name. Returns false if the name is not offered.
    pub fn select_vendor(&mut self, vendor: &str) -> bool {
        if !VENDORS.contains(&vendor) {
            tracing::warn!(vendor, "ignoring unknown vendor");
            return false;
        }
        self.values.vendor = vendor.to_string();
        true
    }

    /// Move the vendor selection to the next or previous entry, wrapping
    pub fn cycle_vendor(&mut self, forward: bool) {
        let current = self.values.vendor_index();
        let next = if forward {
            (current + 1) % VENDORS.len()
        } else if current == 0 {
            VENDORS.len() - 1
        } else {
            current - 1
        };
        self.values.vendor = VENDORS[next].to_string();
    }

    /// Snapshot of the values to submit, only available on the last step
    pub fn submission(&self) -> Option<FormValues> {
        self.step.is_last().then(|| self.values.clone())
    }

    /// Discard the session and start over
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Action of the primary navigation button for the current step
    pub fn primary_action(&self) -> NavAction {
        if self.step.is_last() {
            NavAction::Submit
        } else {
            NavAction::Next
        }
    }

    pub fn back_enabled(&self) -> bool {
        !self.step.is_first()
    }

    /// Number of focus targets on the current step
    pub fn focus_count(&self) -> usize {
        self.step.fields().len() + 1
    }

    /// Currently focused target
    pub fn focus(&self) -> Focus {
        self.step
            .fields()
            .get(self.active_focus)
            .map(|f| Focus::Field(*f))
            .unwrap_or(Focus::Nav)
    }

    pub fn next_focus(&mut self) {
        self.active_focus = (self.active_focus + 1) % self.focus_count();
    }

    pub fn prev_focus(&mut self) {
        if self.active_focus == 0 {
            self.active_focus = self.focus_count() - 1;
        } else {
            self.active_focus -= 1;
        }
    }

    pub fn selected_nav(&self) -> NavButton {
        self.selected_nav
    }

    pub fn select_nav(&mut self, button: NavButton) {
        self.selected_nav = button;
    }

    /// Action bound to the selected navigation button, if it is enabled
    pub fn selected_nav_action(&self) -> Option<NavAction> {
        match self.selected_nav {
            NavButton::Back if self.back_enabled() => Some(NavAction::Back),
            NavButton::Back => None,
            NavButton::Primary => Some(self.primary_action()),
        }
    }
}
