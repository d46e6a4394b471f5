//! Selection state machine and its configuration.

/// Construction parameters for [`MultiSelect`].
#[derive(Debug, Clone, PartialEq)]
pub struct MultiSelectConfig<T> {
    /// Every selectable item, sentinel included.
    pub candidates: Vec<T>,
    /// Selection the group starts with.
    pub initial_selection: Vec<T>,
    /// Item meaning "select everything".
    pub all_item: T,
    /// Whether a toggle may leave nothing selected.
    pub allow_empty_selection: bool,
    /// Exact selection held when everything counts as selected.
    pub all_selected: Vec<T>,
}

impl<T: Clone> MultiSelectConfig<T> {
    /// Creates a config with empty selection disallowed and
    /// `all_selected = [all_item]`.
    pub fn new(candidates: Vec<T>, initial_selection: Vec<T>, all_item: T) -> Self {
        let all_selected = vec![all_item.clone()];
        Self {
            candidates,
            initial_selection,
            all_item,
            allow_empty_selection: false,
            all_selected,
        }
    }

    pub fn with_empty_selection(mut self, allow: bool) -> Self {
        self.allow_empty_selection = allow;
        self
    }

    pub fn with_all_selected(mut self, all_selected: Vec<T>) -> Self {
        self.all_selected = all_selected;
        self
    }
}

/// Selection held by a checkbox group with an "ALL" sentinel.
///
/// Items are compared with an explicit equality function, so record-like
/// candidates are matched field by field rather than by identity.
#[derive(Debug, Clone)]
pub struct MultiSelect<T> {
    candidates: Vec<T>,
    all_item: T,
    allow_empty_selection: bool,
    all_selected: Vec<T>,
    selected: Vec<T>,
    eq: fn(&T, &T) -> bool,
}

impl<T: Clone + PartialEq> MultiSelect<T> {
    /// Creates the state using `PartialEq` for item comparison.
    pub fn new(config: MultiSelectConfig<T>) -> Self {
        Self::with_eq(config, <T as PartialEq>::eq)
    }
}

impl<T: Clone> MultiSelect<T> {
    /// Creates the state with a caller-supplied item equality.
    pub fn with_eq(config: MultiSelectConfig<T>, eq: fn(&T, &T) -> bool) -> Self {
        Self {
            candidates: config.candidates,
            all_item: config.all_item,
            allow_empty_selection: config.allow_empty_selection,
            all_selected: config.all_selected,
            selected: config.initial_selection,
            eq,
        }
    }

    pub fn selected(&self) -> &[T] {
        &self.selected
    }

    pub fn candidates(&self) -> &[T] {
        &self.candidates
    }

    pub fn all_item(&self) -> &T {
        &self.all_item
    }

    pub fn allows_empty_selection(&self) -> bool {
        self.allow_empty_selection
    }

    pub fn is_selected(&self, item: &T) -> bool {
        self.contains(&self.selected, item)
    }

    /// Whether the selection is exactly the "all selected" representation,
    /// element by element and in order.
    pub fn is_all_selected(&self) -> bool {
        self.same_sequence(&self.selected, &self.all_selected)
    }

    /// Toggles one item and returns whether the selection changed.
    ///
    /// - The sentinel selects everything, or clears the group when empty
    ///   selection is allowed and everything is already selected.
    /// - A concrete item drops the sentinel; adding the last missing item
    ///   collapses to the "all selected" representation.
    /// - Removing the only selected item is refused unless empty selection
    ///   is allowed.
    pub fn toggle(&mut self, item: &T) -> bool {
        let next = if (self.eq)(item, &self.all_item) {
            if self.allow_empty_selection && self.is_all_selected() {
                Vec::new()
            } else {
                self.all_selected.clone()
            }
        } else {
            self.toggle_concrete(item)
        };

        let changed = !self.same_sequence(&next, &self.selected);
        self.selected = next;
        changed
    }

    /// Replaces the selection without applying any policy.
    pub fn force_set(&mut self, selection: Vec<T>) {
        self.selected = selection;
    }

    /// Replaces the candidate list, e.g. after a refresh from the backend.
    ///
    /// The held selection is left untouched; pair with
    /// [`MultiSelect::force_set`] to resynchronize it.
    pub fn set_candidates(&mut self, candidates: Vec<T>) {
        self.candidates = candidates;
    }

    /// Joins the selected item names with `", "`, dropping the leading
    /// `"<ALL name>, "` when the sentinel is listed first.
    pub fn selection_label<F>(&self, name_of: F) -> String
    where
        F: Fn(&T) -> String,
    {
        let joined = self
            .selected
            .iter()
            .map(&name_of)
            .collect::<Vec<_>>()
            .join(", ");
        let all_prefix = format!("{}, ", name_of(&self.all_item));
        joined.replacen(&all_prefix, "", 1)
    }

    fn toggle_concrete(&self, item: &T) -> Vec<T> {
        let mut next: Vec<T> = self
            .selected
            .iter()
            .filter(|selected| !(self.eq)(selected, &self.all_item))
            .cloned()
            .collect();

        if !self.contains(&self.selected, item) {
            next.push(item.clone());
            // Assumes the sentinel occupies one candidate slot. Callers that
            // leave it out of `candidates` collapse one item early.
            if next.len() >= self.candidates.len().saturating_sub(1) {
                next = self.all_selected.clone();
            }
        } else if self.allow_empty_selection || next.len() > 1 {
            next.retain(|selected| !(self.eq)(selected, item));
        }
        next
    }

    fn contains(&self, items: &[T], item: &T) -> bool {
        items.iter().any(|candidate| (self.eq)(candidate, item))
    }

    fn same_sequence(&self, left: &[T], right: &[T]) -> bool {
        left.len() == right.len()
            && left
                .iter()
                .zip(right)
                .all(|(left, right)| (self.eq)(left, right))
    }
}
