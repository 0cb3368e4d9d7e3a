//! Form steps

use super::values::FieldId;

/// Number of steps in the intake form
pub const STEP_COUNT: usize = 2;

/// A step of the intake form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Step {
    /// Request details and vendor
    #[default]
    Details,
    /// Contract terms (last step)
    Terms,
}

impl Step {
    pub const ALL: [Step; STEP_COUNT] = [Step::Details, Step::Terms];

    /// Position of the step, always in `0..STEP_COUNT`
    pub fn index(self) -> usize {
        match self {
            Step::Details => 0,
            Step::Terms => 1,
        }
    }

    /// Step at `index`, clamped to the last step
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index.min(STEP_COUNT - 1)]
    }

    /// Following step, or the same step if this is the last one
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Preceding step, or the same step if this is the first one
    pub fn back(self) -> Self {
        Self::from_index(self.index().saturating_sub(1))
    }

    pub fn is_first(self) -> bool {
        self.index() == 0
    }

    pub fn is_last(self) -> bool {
        self.index() == STEP_COUNT - 1
    }

    /// Short name of the step
    pub fn name(self) -> &'static str {
        match self {
            Step::Details => "details",
            Step::Terms => "terms",
        }
    }

    /// Heading shown above the step's questions
    pub fn heading(self) -> &'static str {
        match self {
            Step::Details => "Step 1: Request details",
            Step::Terms => "Step 2: Contract details",
        }
    }

    /// Fields shown on this step, in display order
    pub fn fields(self) -> &'static [FieldId] {
        match self {
            Step::Details => &[
                FieldId::RequestName,
                FieldId::Justification,
                FieldId::Vendor,
            ],
            Step::Terms => &[FieldId::Terms],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_first_step() {
        assert_eq!(Step::default(), Step::Details);
        assert!(Step::default().is_first());
    }

    #[test]
    fn test_next_clamps_at_last() {
        assert_eq!(Step::Details.next(), Step::Terms);
        assert_eq!(Step::Terms.next(), Step::Terms);
    }

    #[test]
    fn test_back_clamps_at_first() {
        assert_eq!(Step::Terms.back(), Step::Details);
        assert_eq!(Step::Details.back(), Step::Details);
    }

    #[test]
    fn test_from_index_clamps() {
        assert_eq!(Step::from_index(0), Step::Details);
        assert_eq!(Step::from_index(1), Step::Terms);
        assert_eq!(Step::from_index(7), Step::Terms);
    }

    #[test]
    fn test_every_field_belongs_to_one_step() {
        for field in FieldId::ALL {
            let owners = Step::ALL
                .iter()
                .filter(|s| s.fields().contains(&field))
                .count();
            assert_eq!(owners, 1, "{field:?}");
        }
    }

    #[test]
    fn test_names_and_headings() {
        assert_eq!(Step::Details.name(), "details");
        assert_eq!(Step::Terms.name(), "terms");
        assert_eq!(Step::Terms.heading(), "Step 2: Contract details");
    }
}
