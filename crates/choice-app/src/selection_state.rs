//! Positional checked/unchecked state for a dialog's options.

use tracing::debug;

/// One flag per question option, index `i` mirroring `question.option(i)`.
///
/// The length is fixed at construction. Rendering code reads the flags and
/// requests changes through [`SelectionState::toggle`]; it never writes the
/// flags directly.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionState {
    selected: Vec<bool>,
}

impl SelectionState {
    /// All-unchecked state for `len` options
    pub fn new(len: usize) -> Self {
        Self {
            selected: vec![false; len],
        }
    }

    /// Build a state by asking `f` whether each index starts checked.
    pub fn from_fn(len: usize, f: impl FnMut(usize) -> bool) -> Self {
        Self {
            selected: (0..len).map(f).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Whether `index` is checked. Out-of-range indices read as unchecked.
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.get(index).copied().unwrap_or(false)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.iter().filter(|&&s| s).count()
    }

    /// Checked indices in ascending order
    pub fn selected_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.selected
            .iter()
            .enumerate()
            .filter_map(|(i, &s)| s.then_some(i))
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.selected
    }

    /// Flip the flag at `index`, returning its new value.
    ///
    /// Returns `None` and leaves the state untouched when `index` is out of
    /// range.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        match self.selected.get_mut(index) {
            Some(flag) => {
                *flag = !*flag;
                Some(*flag)
            }
            None => {
                debug!(
                    "Ignoring toggle of index {} (only {} options)",
                    index,
                    self.selected.len()
                );
                None
            }
        }
    }

    /// Uncheck every index other than `keep`.
    pub fn clear_except(&mut self, keep: usize) {
        for (i, flag) in self.selected.iter_mut().enumerate() {
            if i != keep {
                *flag = false;
            }
        }
    }
}
