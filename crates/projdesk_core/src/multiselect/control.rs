//! Binds a selection state to a change listener.

use super::state::MultiSelect;
use std::fmt::{Debug, Formatter};

type SelectionListener<T> = Box<dyn FnMut(&[T])>;

/// [`MultiSelect`] plus a callback that receives the selection whenever it
/// is (re)published.
///
/// The listener is invoked once on construction, after each toggle that
/// changed the selection, and after every `force_set`.
pub struct SelectionControl<T> {
    state: MultiSelect<T>,
    listener: SelectionListener<T>,
}

impl<T: Clone> SelectionControl<T> {
    pub fn new<F>(state: MultiSelect<T>, listener: F) -> Self
    where
        F: FnMut(&[T]) + 'static,
    {
        let mut control = Self {
            state,
            listener: Box::new(listener),
        };
        control.publish();
        control
    }

    pub fn state(&self) -> &MultiSelect<T> {
        &self.state
    }

    pub fn toggle(&mut self, item: &T) -> bool {
        let changed = self.state.toggle(item);
        if changed {
            self.publish();
        }
        changed
    }

    pub fn force_set(&mut self, selection: Vec<T>) {
        self.state.force_set(selection);
        self.publish();
    }

    pub fn set_candidates(&mut self, candidates: Vec<T>) {
        self.state.set_candidates(candidates);
    }

    fn publish(&mut self) {
        (self.listener)(self.state.selected());
    }
}

impl<T: Debug> Debug for SelectionControl<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionControl")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
