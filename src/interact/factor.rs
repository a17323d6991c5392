use crate::report::severity::expanded_by_default;
use crate::report::types::TokenRiskFactor;

/// Expand/collapse state of one rendered risk factor.
///
/// Seeded from severity. A factor without evidence or impact has no expand
/// control and stays collapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskFactorItem {
    expandable: bool,
    expanded: bool,
}

impl RiskFactorItem {
    pub fn new(factor: &TokenRiskFactor) -> Self {
        Self {
            expandable: factor.has_details(),
            expanded: expanded_by_default(&factor.severity),
        }
    }

    #[cfg(test)]
    pub fn is_expandable(&self) -> bool {
        self.expandable
    }

    pub fn is_expanded(&self) -> bool {
        self.expandable && self.expanded
    }

    /// Flip the flag. Returns the new state, or `None` when there is no control.
    pub fn toggle(&mut self) -> Option<bool> {
        if !self.expandable {
            return None;
        }
        self.expanded = !self.expanded;
        Some(self.expanded)
    }
}
