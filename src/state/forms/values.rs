//! Form field value objects

use serde::{Deserialize, Serialize};

/// Vendors offered by the vendor select, in display order
pub const VENDORS: [&str; 3] = ["Asana", "Asana2", "Asana3"];

/// Prompts shown above each field, in field order
pub const QUESTIONS: [&str; 4] = [
    "What are you purchasing?",
    "Why is this purchase needed?",
    "Please select a vendor from the following list:",
    "What are the terms of the contract?",
];

/// Identifies one field of [`FormValues`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    RequestName,
    Justification,
    Vendor,
    Terms,
}

impl FieldId {
    #[cfg(test)]
    pub const ALL: [FieldId; 4] = [
        FieldId::RequestName,
        FieldId::Justification,
        FieldId::Vendor,
        FieldId::Terms,
    ];

    /// Prompt shown above the field
    pub fn question(self) -> &'static str {
        match self {
            FieldId::RequestName => QUESTIONS[0],
            FieldId::Justification => QUESTIONS[1],
            FieldId::Vendor => QUESTIONS[2],
            FieldId::Terms => QUESTIONS[3],
        }
    }

    /// Placeholder shown while the field is empty
    pub fn placeholder(self) -> Option<&'static str> {
        match self {
            FieldId::RequestName => Some("Enter the name of your request"),
            FieldId::Justification => {
                Some("Please make sure to include which teams will be involved")
            }
            FieldId::Vendor => None,
            FieldId::Terms => Some("E.g. 3 year contract"),
        }
    }

    /// Whether the field is edited as free text
    pub fn is_text(self) -> bool {
        !matches!(self, FieldId::Vendor)
    }
}

/// Values collected by the intake form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValues {
    pub request_name: String,
    pub justification: String,
    pub vendor: String,
    pub terms: String,
}

impl Default for FormValues {
    fn default() -> Self {
        Self {
            request_name: String::new(),
            justification: String::new(),
            vendor: VENDORS[0].to_string(),
            terms: String::new(),
        }
    }
}

impl FormValues {
    /// Get the value of a field
    pub fn get(&self, field: FieldId) -> &str {
        match field {
            FieldId::RequestName => &self.request_name,
            FieldId::Justification => &self.justification,
            FieldId::Vendor => &self.vendor,
            FieldId::Terms => &self.terms,
        }
    }

    /// Position of the selected vendor in [`VENDORS`]
    pub fn vendor_index(&self) -> usize {
        VENDORS
            .iter()
            .position(|v| *v == self.vendor)
            .unwrap_or(0)
    }

    pub(super) fn slot_mut(&mut self, field: FieldId) -> &mut String {
        match field {
            FieldId::RequestName => &mut self.request_name,
            FieldId::Justification => &mut self.justification,
            FieldId::Vendor => &mut self.vendor,
            FieldId::Terms => &mut self.terms,
        }
    }
}
