// SPDX-License-Identifier: MPL-2.0
//! Selection of the visible subtree from the caller's flags.

/// Caller-owned flags controlling what the component shows.
///
/// The component never sets these itself; it only reports swipe outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Props {
    pub is_loading: bool,
    pub is_finished: bool,
}

/// The three mutually exclusive render branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    /// Built-in spinner.
    Loading,
    /// Caller-supplied finished view.
    Finished,
    /// Caller-supplied element wrapped in the gesture and animation machinery.
    Interactive,
}

impl Branch {
    /// Loading wins over finished, which wins over the interactive element.
    #[must_use]
    pub fn select(is_loading: bool, is_finished: bool) -> Self {
        if is_loading {
            Branch::Loading
        } else if is_finished {
            Branch::Finished
        } else {
            Branch::Interactive
        }
    }

    #[must_use]
    pub fn is_interactive(self) -> bool {
        self == Branch::Interactive
    }
}

impl From<Props> for Branch {
    fn from(props: Props) -> Self {
        Self::select(props.is_loading, props.is_finished)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_wins_regardless_of_finished() {
        assert_eq!(Branch::select(true, false), Branch::Loading);
        assert_eq!(Branch::select(true, true), Branch::Loading);
    }

    #[test]
    fn finished_suppresses_element() {
        let branch = Branch::select(false, true);
        assert_eq!(branch, Branch::Finished);
        assert!(!branch.is_interactive());
    }

    #[test]
    fn default_props_show_element() {
        assert_eq!(Branch::from(Props::default()), Branch::Interactive);
    }
}
