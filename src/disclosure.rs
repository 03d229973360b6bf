//! Project disclosure state
//!
//! At most one project card is expanded at a time. Clicking the toggle of
//! the open card closes it; clicking another card moves the selection.

/// Which project card, if any, is expanded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Disclosure {
    expanded: Option<usize>,
    /// Number of projects; indices at or past this are not selectable
    count: usize,
}

impl Disclosure {
    /// All cards closed
    pub fn new(count: usize) -> Self {
        Self {
            expanded: None,
            count,
        }
    }

    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }

    /// Toggle the card at `index`. Returns false if the index is out of range.
    pub fn toggle(&mut self, index: usize) -> bool {
        if index >= self.count {
            log::warn!(
                "Ignoring toggle for project {} (only {} projects)",
                index,
                self.count
            );
            return false;
        }
        self.expanded = if self.expanded == Some(index) {
            None
        } else {
            Some(index)
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_starts_closed() {
        let d = Disclosure::new(3);
        assert_eq!(d.expanded(), None);
        assert!(!d.is_expanded(0));
    }

    #[test]
    fn test_toggle_twice_closes() {
        let mut d = Disclosure::new(3);
        assert!(d.toggle(1));
        assert!(d.is_expanded(1));
        assert!(d.toggle(1));
        assert_eq!(d.expanded(), None);
    }

    #[test]
    fn test_toggle_moves_selection() {
        let mut d = Disclosure::new(3);
        d.toggle(0);
        d.toggle(2);
        assert_eq!(d.expanded(), Some(2));
        assert!(!d.is_expanded(0));
    }

    #[test]
    fn test_out_of_range_ignored() {
        let mut d = Disclosure::new(2);
        d.toggle(1);
        assert!(!d.toggle(2));
        assert_eq!(d.expanded(), Some(1));

        let mut empty = Disclosure::new(0);
        assert!(!empty.toggle(0));
        assert_eq!(empty.expanded(), None);
    }

    proptest! {
        #[test]
        fn prop_at_most_one_valid_selection(
            count in 0usize..8,
            clicks in proptest::collection::vec(0usize..10, 0..40),
        ) {
            let mut d = Disclosure::new(count);
            for i in clicks {
                d.toggle(i);
                let open = (0..count).filter(|&j| d.is_expanded(j)).count();
                prop_assert!(open <= 1);
                if let Some(e) = d.expanded() {
                    prop_assert!(e < count);
                }
            }
        }

        #[test]
        fn prop_double_toggle_restores(count in 1usize..8, start in proptest::option::of(0usize..8), i in 0usize..8) {
            let mut d = Disclosure::new(count);
            if let Some(s) = start {
                d.toggle(s);
            }
            let before = d;
            d.toggle(i);
            d.toggle(i);
            if i < count && before.expanded() != Some(i) && before.expanded().is_some() {
                // moved away then closed
                prop_assert_eq!(d.expanded(), None);
            } else {
                prop_assert_eq!(d, before);
            }
        }
    }
}
