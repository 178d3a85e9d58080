//! Parallel composition.

use crate::animator::{fire, AnimationCallback, Animator, BoxedAnimator};
use log::{debug, trace};
use std::fmt::{self, Debug, Formatter};
use std::time::Duration;

/// Runs child animators side by side, feeding every one of them the same full tick.
///
/// The group is done once all of its children are done; an empty group is done from the start.
///
/// While any child is still running the group returns no remainder. Once all children are done,
/// the group returns the _smallest_ non-zero remainder reported by its children on that update.
/// Children of different lengths overflow by different amounts, and the smallest overflow is the
/// amount of time that every finished child agrees is left over, so that is what gets handed on to
/// whatever follows the group.
///
/// Children are owned exclusively by the group.
pub struct GroupedAnimation<'a> {
    children: Vec<BoxedAnimator<'a>>,
    completed: bool,
    callback: Option<AnimationCallback<'a>>,
}

impl<'a> GroupedAnimation<'a> {
    /// Creates a group that plays all `children` at once.
    pub fn new(children: Vec<BoxedAnimator<'a>>) -> Self {
        Self {
            children,
            completed: false,
            callback: None,
        }
    }

    /// Adds a child to the group, builder-style.
    pub fn with(mut self, child: impl Animator<'a> + 'a) -> Self {
        self.push(child);
        self
    }

    /// Adds a child to the group.
    pub fn push(&mut self, child: impl Animator<'a> + 'a) {
        self.children.push(Box::new(child));
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<'a> Animator<'a> for GroupedAnimation<'a> {
    fn update(&mut self, elapsed: Duration) -> Duration {
        let mut all_done = true;
        let mut smallest: Option<Duration> = None;
        for child in self.children.iter_mut() {
            let remainder = child.update(elapsed);
            all_done &= child.is_done();
            if !remainder.is_zero() {
                smallest = Some(smallest.map_or(remainder, |s| s.min(remainder)));
            }
        }
        if !all_done {
            return Duration::ZERO;
        }
        let remainder = smallest.unwrap_or_default();
        if !self.completed {
            self.completed = true;
            debug!(
                "Group of {} animations finished with {:?} left over.",
                self.children.len(),
                remainder
            );
            fire(&mut self.callback);
        }
        remainder
    }

    fn is_done(&self) -> bool {
        self.children.iter().all(|child| child.is_done())
    }

    fn reset(&mut self) {
        self.completed = false;
        for child in self.children.iter_mut() {
            child.reset();
        }
    }

    fn delete(&mut self) {
        trace!("Deleting group of {} animations.", self.children.len());
        for child in self.children.iter_mut() {
            child.delete();
        }
        self.children.clear();
    }

    fn set_callback(&mut self, callback: Option<AnimationCallback<'a>>) {
        self.callback = callback;
    }

    fn has_callback(&self) -> bool {
        self.callback.is_some()
    }
}

impl Debug for GroupedAnimation<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupedAnimation")
            .field("len", &self.children.len())
            .field("completed", &self.completed)
            .field("has_callback", &self.callback.is_some())
            .finish_non_exhaustive()
    }
}
