/// Three-position checkbox state.
///
/// The indeterminate position cannot be derived from a checked flag, so
/// renderers must query [`TriState::is_indeterminate`] and draw it
/// explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TriState {
    Checked,
    #[default]
    Indeterminate,
    Unchecked,
}

impl TriState {
    /// Next position when the control is clicked:
    /// checked, indeterminate, unchecked, then back to checked.
    pub fn cycle(self) -> Self {
        match self {
            TriState::Checked => TriState::Indeterminate,
            TriState::Indeterminate => TriState::Unchecked,
            TriState::Unchecked => TriState::Checked,
        }
    }

    pub fn is_indeterminate(self) -> bool {
        self == TriState::Indeterminate
    }

    pub fn is_checked(self) -> bool {
        self == TriState::Checked
    }

    pub fn as_option(self) -> Option<bool> {
        match self {
            TriState::Checked => Some(true),
            TriState::Indeterminate => None,
            TriState::Unchecked => Some(false),
        }
    }
}

impl From<Option<bool>> for TriState {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => TriState::Checked,
            Some(false) => TriState::Unchecked,
            None => TriState::Indeterminate,
        }
    }
}

impl From<TriState> for Option<bool> {
    fn from(value: TriState) -> Self {
        value.as_option()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_order() {
        assert_eq!(TriState::Checked.cycle(), TriState::Indeterminate);
        assert_eq!(TriState::Indeterminate.cycle(), TriState::Unchecked);
        assert_eq!(TriState::Unchecked.cycle(), TriState::Checked);
    }

    #[test]
    fn three_clicks_return_to_start() {
        for start in [TriState::Checked, TriState::Indeterminate, TriState::Unchecked] {
            assert_eq!(start.cycle().cycle().cycle(), start);
        }
    }

    #[test]
    fn option_conversion() {
        assert_eq!(TriState::from(Some(true)), TriState::Checked);
        assert_eq!(TriState::from(None), TriState::Indeterminate);
        assert_eq!(Option::<bool>::from(TriState::Unchecked), Some(false));
    }
}
