//! Sequential composition.

use crate::animator::{fire, AnimationCallback, Animator, BoxedAnimator};
use log::{debug, trace};
use std::fmt::{self, Debug, Formatter};
use std::time::Duration;

/// Runs child animators one at a time, in order, against a single stream of elapsed time.
///
/// Each update feeds the whole tick to the current child. When that child finishes, whatever time
/// it did not need is fed to the next child within the same update, and so on until the tick is
/// used up. This means a chain advanced in many small ticks ends up in exactly the same state as
/// one advanced in a single large tick.
///
/// A non-looping chain is done when its last child is done. Completing the last child fires the
/// chain's callback and returns the leftover time; after that the chain is exhausted and returns
/// every tick untouched until it is reset.
///
/// A looping chain resets each child as soon as it finishes and wraps back to the first child
/// after the last one. It is never done and always consumes the whole tick.
///
/// Children are owned exclusively by the chain.
pub struct ChainedAnimation<'a> {
    children: Vec<BoxedAnimator<'a>>,
    looping: bool,
    current: usize,
    exhausted: bool,
    callback: Option<AnimationCallback<'a>>,
}

impl<'a> ChainedAnimation<'a> {
    /// Creates a chain that plays `children` in order.
    pub fn new(children: Vec<BoxedAnimator<'a>>, looping: bool) -> Self {
        Self {
            children,
            looping,
            current: 0,
            exhausted: false,
            callback: None,
        }
    }

    /// Appends a child to the end of the chain, builder-style.
    pub fn with(mut self, child: impl Animator<'a> + 'a) -> Self {
        self.push(child);
        self
    }

    /// Appends a child to the end of the chain.
    pub fn push(&mut self, child: impl Animator<'a> + 'a) {
        self.children.push(Box::new(child));
    }

    /// Position of the child that the next update will feed.
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<'a> Animator<'a> for ChainedAnimation<'a> {
    fn update(&mut self, elapsed: Duration) -> Duration {
        let count = self.children.len();
        let mut budget = elapsed;
        if count == 0 || self.exhausted {
            return budget;
        }
        // Children that complete without consuming anything; a full round of these means the tick
        // can make no further progress.
        let mut idle = 0;
        while !budget.is_zero() {
            let child = &mut self.children[self.current];
            if child.is_done() {
                idle += 1;
            } else {
                let offered = budget;
                budget = child.update(budget);
                if !child.is_done() {
                    break;
                }
                idle = if budget == offered { idle + 1 } else { 0 };
            }
            trace!("Chain advancing past child {} of {}.", self.current + 1, count);
            if self.looping {
                child.reset();
            }
            self.current = (self.current + 1) % count;
            if self.current == 0 && !self.looping {
                debug!("Chain of {count} animations finished with {budget:?} left over.");
                self.exhausted = true;
                fire(&mut self.callback);
                break;
            }
            if idle >= count {
                break;
            }
        }
        budget
    }

    /// A chain with no children is trivially done. Otherwise, a chain is done when it does not
    /// loop and its last child is done.
    fn is_done(&self) -> bool {
        match self.children.last() {
            Some(last) => !self.looping && last.is_done(),
            None => true,
        }
    }

    fn reset(&mut self) {
        self.current = 0;
        self.exhausted = false;
        for child in self.children.iter_mut() {
            child.reset();
        }
    }

    fn delete(&mut self) {
        trace!("Deleting chain of {} animations.", self.children.len());
        for child in self.children.iter_mut() {
            child.delete();
        }
        self.children.clear();
        self.current = 0;
        self.exhausted = false;
    }

    fn set_callback(&mut self, callback: Option<AnimationCallback<'a>>) {
        self.callback = callback;
    }

    fn has_callback(&self) -> bool {
        self.callback.is_some()
    }
}

impl Debug for ChainedAnimation<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainedAnimation")
            .field("len", &self.children.len())
            .field("looping", &self.looping)
            .field("current", &self.current)
            .field("exhausted", &self.exhausted)
            .field("has_callback", &self.callback.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounded::BoundedAnimation;
    use crate::test_support::Probe;
    use std::cell::Cell;

    fn millis(ms: u64) -> Duration {
        Duration::from_millis(ms)
    }

    fn secs(s: u64) -> Duration {
        Duration::from_secs(s)
    }

    mod non_looping {
        use super::*;

        #[test]
        fn callback_fires_after_last_child() {
            let done = Cell::new(0);
            let mut chain = ChainedAnimation::new(Vec::new(), false)
                .with(BoundedAnimation::new(secs(1)))
                .with(BoundedAnimation::new(secs(2)))
                .with_callback(|| done.set(done.get() + 1));

            chain.update(secs(1));
            assert_eq!(done.get(), 0);
            chain.update(secs(2));
            assert_eq!(done.get(), 1);
            chain.update(secs(2));
            assert_eq!(done.get(), 1);
        }

        #[test]
        fn is_done_after_last_child() {
            let mut chain = ChainedAnimation::new(Vec::new(), false)
                .with(BoundedAnimation::new(secs(1)))
                .with(BoundedAnimation::new(secs(2)));

            assert!(!chain.is_done());
            chain.update(secs(1));
            assert!(!chain.is_done());
            chain.update(secs(1));
            assert!(!chain.is_done());
            chain.update(secs(1));
            assert!(chain.is_done());
        }

        #[test]
        fn carries_overflow_into_next_child() {
            let first = Cell::new(Duration::ZERO);
            let second = Cell::new(Duration::ZERO);
            let mut chain = ChainedAnimation::new(Vec::new(), false)
                .with(Probe::new(secs(1), &first))
                .with(Probe::new(secs(2), &second));

            assert_eq!(chain.update(millis(500)), Duration::ZERO);
            assert_eq!(first.get(), millis(500));

            assert_eq!(chain.update(millis(600)), Duration::ZERO);
            assert_eq!(first.get(), millis(1100));
            assert_eq!(second.get(), millis(100));

            assert_eq!(chain.update(millis(500)), Duration::ZERO);
            assert_eq!(first.get(), millis(1100));
            assert_eq!(second.get(), millis(600));

            assert_eq!(chain.update(millis(1500)), millis(100));
            assert_eq!(first.get(), millis(1100));
            assert_eq!(second.get(), millis(2100));
        }

        #[test]
        fn single_tick_can_span_every_child() {
            let mut chain = ChainedAnimation::new(Vec::new(), false)
                .with(BoundedAnimation::new(millis(100)))
                .with(BoundedAnimation::new(millis(200)))
                .with(BoundedAnimation::new(millis(300)));

            assert_eq!(chain.update(millis(650)), millis(50));
            assert!(chain.is_done());
        }

        #[test]
        fn when_exhausted_then_returns_tick_untouched() {
            let last = Cell::new(Duration::ZERO);
            let mut chain = ChainedAnimation::new(Vec::new(), false)
                .with(BoundedAnimation::new(secs(1)))
                .with(Probe::new(secs(1), &last));
            chain.update(secs(2));

            assert_eq!(chain.update(millis(300)), millis(300));
            assert_eq!(last.get(), secs(1));
        }

        #[test]
        fn exact_completion_returns_zero_and_fires() {
            let done = Cell::new(false);
            let mut chain = ChainedAnimation::new(Vec::new(), false)
                .with(BoundedAnimation::new(secs(1)))
                .with_callback(|| done.set(true));

            assert_eq!(chain.update(secs(1)), Duration::ZERO);
            assert!(done.get());
            assert!(chain.is_done());
        }

        #[test]
        fn children_already_done_are_skipped() {
            let mut chain = ChainedAnimation::new(Vec::new(), false)
                .with(BoundedAnimation::new(Duration::ZERO))
                .with(BoundedAnimation::new(secs(1)));

            assert_eq!(chain.update(millis(1200)), millis(200));
            assert!(chain.is_done());
        }
    }

    mod looping {
        use super::*;

        #[test]
        fn never_done() {
            let mut chain = ChainedAnimation::new(Vec::new(), true)
                .with(BoundedAnimation::new(secs(1)))
                .with(BoundedAnimation::new(secs(2)));

            for _ in 0..5 {
                assert_eq!(chain.update(secs(1)), Duration::ZERO);
                assert!(!chain.is_done());
            }
        }

        #[test]
        fn resets_finished_children_and_wraps() {
            let first = Cell::new(Duration::ZERO);
            let second = Cell::new(Duration::ZERO);
            let mut chain = ChainedAnimation::new(Vec::new(), true)
                .with(Probe::new(secs(1), &first))
                .with(Probe::new(secs(2), &second));

            assert_eq!(chain.update(millis(500)), Duration::ZERO);
            assert_eq!(first.get(), millis(500));

            assert_eq!(chain.update(millis(600)), Duration::ZERO);
            assert_eq!(first.get(), Duration::ZERO);
            assert_eq!(second.get(), millis(100));

            assert_eq!(chain.update(millis(500)), Duration::ZERO);
            assert_eq!(first.get(), Duration::ZERO);
            assert_eq!(second.get(), millis(600));

            assert_eq!(chain.update(millis(1400)), Duration::ZERO);
            assert_eq!(first.get(), Duration::ZERO);
            assert_eq!(second.get(), Duration::ZERO);
            assert_eq!(chain.current(), 0);

            assert_eq!(chain.update(millis(300)), Duration::ZERO);
            assert_eq!(first.get(), millis(300));
            assert_eq!(second.get(), Duration::ZERO);
        }

        #[test]
        fn callback_never_fires() {
            let fired = Cell::new(false);
            let mut chain = ChainedAnimation::new(Vec::new(), true)
                .with(BoundedAnimation::new(millis(10)))
                .with_callback(|| fired.set(true));

            chain.update(secs(1));

            assert!(!fired.get());
        }

        #[test]
        fn zero_length_children_do_not_spin() {
            let mut chain = ChainedAnimation::new(Vec::new(), true)
                .with(BoundedAnimation::new(Duration::ZERO))
                .with(BoundedAnimation::new(Duration::ZERO));

            assert_eq!(chain.update(millis(16)), millis(16));
            assert!(!chain.is_done());
        }
    }

    mod lifecycle {
        use super::*;

        #[test]
        fn reset_rewinds_every_child() {
            let first = Cell::new(Duration::ZERO);
            let second = Cell::new(Duration::ZERO);
            let mut chain = ChainedAnimation::new(Vec::new(), false)
                .with(Probe::new(secs(1), &first))
                .with(Probe::new(secs(2), &second))
                .with_callback(|| {});
            chain.update(millis(3500));

            chain.reset();
            chain.reset();

            assert_eq!(first.get(), Duration::ZERO);
            assert_eq!(second.get(), Duration::ZERO);
            assert_eq!(chain.current(), 0);
            assert!(!chain.is_done());
            assert!(chain.has_callback());
            assert_eq!(chain.update(millis(200)), Duration::ZERO);
            assert_eq!(first.get(), millis(200));
        }

        #[test]
        fn delete_releases_children() {
            let first = Cell::new(Duration::ZERO);
            let mut chain = ChainedAnimation::new(Vec::new(), true)
                .with(Probe::new(secs(1), &first))
                .with(BoundedAnimation::new(secs(2)));

            chain.delete();

            assert_eq!(chain.update(millis(100)), millis(100));
            assert_eq!(first.get(), Duration::ZERO);
            assert!(chain.is_empty());
            assert!(chain.is_done());
        }

        #[test]
        fn accepts_boxed_children() {
            let children: Vec<BoxedAnimator> = vec![
                Box::new(BoundedAnimation::new(secs(1))),
                Box::new(BoundedAnimation::new(secs(1))),
            ];
            let mut chain = ChainedAnimation::new(children, false);

            assert_eq!(chain.len(), 2);
            assert_eq!(chain.update(millis(2500)), millis(500));
        }
    }
}
