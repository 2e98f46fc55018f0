//! Page budgets for collection runs.

/// How much of a collection the caller wants.
///
/// A budget is either a finite item target or unbounded ("everything"),
/// optionally capped by a hard page-count ceiling that applies regardless
/// of the item target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageBudget {
    /// Target item count; `None` means fetch until the collection is
    /// exhausted.
    pub target: Option<usize>,
    /// Hard ceiling on the number of pages fetched.
    pub max_pages: Option<usize>,
}

impl PageBudget {
    /// Creates a bounded budget for up to `n` items.
    pub fn count(n: usize) -> Self {
        Self {
            target: Some(n),
            max_pages: None,
        }
    }

    /// Creates an unbounded budget (fetch the whole collection).
    pub fn unbounded() -> Self {
        Self {
            target: None,
            max_pages: None,
        }
    }

    /// Caps the number of pages fetched.
    #[must_use]
    pub fn with_max_pages(mut self, pages: usize) -> Self {
        self.max_pages = Some(pages);
        self
    }

    /// Returns true if `collected` items already satisfy the target.
    pub fn is_met(&self, collected: usize) -> bool {
        self.target.is_some_and(|t| collected >= t)
    }

    /// Returns the number of items still wanted, if bounded.
    pub fn remaining(&self, collected: usize) -> Option<usize> {
        self.target.map(|t| t.saturating_sub(collected))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_budget() {
        let budget = PageBudget::count(25);
        assert!(!budget.is_met(24));
        assert!(budget.is_met(25));
        assert_eq!(budget.remaining(20), Some(5));
    }

    #[test]
    fn test_unbounded_budget() {
        let budget = PageBudget::unbounded();
        assert!(!budget.is_met(1_000_000));
        assert_eq!(budget.remaining(5), None);
    }

    #[test]
    fn test_max_pages() {
        let budget = PageBudget::unbounded().with_max_pages(3);
        assert_eq!(budget.max_pages, Some(3));
        assert_eq!(budget.target, None);
    }
}
