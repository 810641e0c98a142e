use std::collections::BTreeSet;
use std::rc::Rc;

use yew::prelude::*;

/// Base delay between neighbouring cards fading in.
pub const STAGGER_MS: u32 = 100;

/// Card indices that have been in view at least once.
///
/// The set only grows: there is deliberately no way to remove an index, so a
/// card that has been revealed stays revealed whatever the scroll position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RevealSet {
    seen: BTreeSet<usize>,
}

impl RevealSet {
    pub fn contains(&self, index: usize) -> bool {
        self.seen.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn card_class(&self, index: usize) -> &'static str {
        if self.contains(index) {
            "reveal-card revealed"
        } else {
            "reveal-card"
        }
    }
}

impl Reducible for RevealSet {
    type Action = usize;

    fn reduce(self: Rc<Self>, index: usize) -> Rc<Self> {
        if self.contains(index) {
            // same Rc back, so yew skips the re-render
            return self;
        }
        let mut next = (*self).clone();
        next.seen.insert(index);
        log::trace!("card {} revealed, {} so far", index, next.len());
        Rc::new(next)
    }
}

pub fn stagger_delay_ms(index: usize) -> u32 {
    STAGGER_MS.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX))
}

pub fn stagger_style(index: usize) -> String {
    format!("transition-delay: {}ms;", stagger_delay_ms(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn revealing_is_permanent() {
        let set = Rc::new(RevealSet::default());
        let set = set.reduce(2);
        let set = set.reduce(0);
        assert!(set.contains(0));
        assert!(set.contains(2));
        assert!(!set.contains(1));
        assert_eq!(set.len(), 2);
        assert_eq!(set.card_class(2), "reveal-card revealed");
        assert_eq!(set.card_class(1), "reveal-card");
    }

    #[test]
    fn repeat_reveal_keeps_the_same_state() {
        let set = Rc::new(RevealSet::default()).reduce(3);
        let again = Rc::clone(&set).reduce(3);
        assert!(Rc::ptr_eq(&set, &again));
        assert_eq!(again.len(), 1);
    }

    #[test]
    fn reveal_set_never_shrinks() {
        let mut set = Rc::new(RevealSet::default());
        let mut previous = 0;
        for index in [4, 1, 4, 0, 1, 5, 0] {
            set = set.reduce(index);
            assert!(set.len() >= previous);
            assert!(set.contains(index));
            previous = set.len();
        }
        assert_eq!(previous, 4);
    }

    #[test]
    fn stagger_grows_with_index() {
        assert_eq!(stagger_delay_ms(0), 0);
        assert_eq!(stagger_delay_ms(3), 300);
        assert_eq!(stagger_style(5), "transition-delay: 500ms;");
    }

    #[test]
    fn huge_index_saturates_instead_of_wrapping() {
        assert_eq!(stagger_delay_ms(usize::MAX), u32::MAX);
    }
}
