//! Candidate wrapper that gives any item type an "ALL" sentinel.

use super::state::{MultiSelect, MultiSelectConfig};
use serde::{Deserialize, Serialize};

/// Either the select-everything sentinel or one concrete item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Choice<T> {
    All,
    Item(T),
}

impl<T> Choice<T> {
    pub fn item(&self) -> Option<&T> {
        match self {
            Self::All => None,
            Self::Item(item) => Some(item),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl<T: Clone> MultiSelectConfig<Choice<T>> {
    /// Builds a config over `items` followed by the sentinel, starting with
    /// everything selected.
    pub fn over_choices(items: impl IntoIterator<Item = T>) -> Self {
        let candidates = items
            .into_iter()
            .map(Choice::Item)
            .chain(std::iter::once(Choice::All))
            .collect();
        Self::new(candidates, vec![Choice::All], Choice::All)
    }
}

impl<T: Clone> MultiSelect<Choice<T>> {
    /// Whether the current selection lets an item matching `predicate`
    /// through: always when the sentinel or the full selection is held,
    /// otherwise when a selected concrete item matches.
    pub fn admits<F>(&self, predicate: F) -> bool
    where
        F: Fn(&T) -> bool,
    {
        if self.is_all_selected() || self.selected().iter().any(Choice::is_all) {
            return true;
        }
        self.selected()
            .iter()
            .filter_map(Choice::item)
            .any(predicate)
    }

    /// Concrete items currently selected, sentinel excluded.
    pub fn selected_items(&self) -> Vec<T> {
        self.selected()
            .iter()
            .filter_map(Choice::item)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::Choice;
    use crate::multiselect::{MultiSelect, MultiSelectConfig};

    #[test]
    fn over_choices_appends_sentinel_and_selects_all() {
        let config = MultiSelectConfig::over_choices(vec![1, 2]);
        assert_eq!(
            config.candidates,
            vec![Choice::Item(1), Choice::Item(2), Choice::All]
        );
        assert_eq!(config.initial_selection, vec![Choice::All]);
    }

    #[test]
    fn admits_follows_concrete_selection() {
        let mut select = MultiSelect::new(MultiSelectConfig::over_choices(vec![1, 2, 3]));
        assert!(select.admits(|value| *value == 3));

        select.toggle(&Choice::Item(1));
        assert!(select.admits(|value| *value == 1));
        assert!(!select.admits(|value| *value == 3));
        assert_eq!(select.selected_items(), vec![1]);
    }

    #[test]
    fn empty_selection_admits_nothing() {
        let mut select = MultiSelect::new(
            MultiSelectConfig::over_choices(vec!["x"]).with_empty_selection(true),
        );
        select.toggle(&Choice::All);
        assert!(select.selected().is_empty());
        assert!(!select.admits(|_| true));
    }
}
