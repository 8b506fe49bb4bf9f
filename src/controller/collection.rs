//! Host tab collection seam.
//!
//! The controller never owns tab pages. It asks a [`TabCollection`] for
//! descriptors, issues `select`/`remove` intents, and afterwards pulls the
//! change notifications the collection queued meanwhile.

use crate::layout::TabDescriptor;

/// Change notification queued by a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabEvent {
    /// The selected tab is about to lose selection.
    Deselected,
    SelectedIndexChanged(Option<usize>),
    TabAdded(usize),
    TabRemoved(usize),
}

pub trait TabCollection {
    fn tab_count(&self) -> usize;

    fn tab_at(&self, index: usize) -> Option<TabDescriptor>;

    fn selected_index(&self) -> Option<usize>;

    /// Returns `false` when `index` is out of range.
    fn select(&mut self, index: usize) -> bool;

    fn remove(&mut self, index: usize) -> Option<TabDescriptor>;

    /// Takes every event queued since the last drain, oldest first.
    fn drain_events(&mut self) -> Vec<TabEvent>;

    fn descriptors(&self) -> Vec<TabDescriptor> {
        (0..self.tab_count())
            .filter_map(|i| self.tab_at(i))
            .collect()
    }
}

/// Selected index after removing `removed_index` from a collection of
/// `len_before` tabs whose selection was `active`.
pub fn normalized_active_index_after_remove(
    active: usize,
    len_before: usize,
    removed_index: usize,
) -> Option<usize> {
    if len_before == 0 || removed_index >= len_before {
        return None;
    }

    let len_after = len_before - 1;
    if len_after == 0 {
        return None;
    }

    let next_active = if active > removed_index {
        active.saturating_sub(1)
    } else {
        active
    };

    Some(next_active.min(len_after - 1))
}

/// In-memory collection. The first tab added becomes selected.
#[derive(Debug, Clone, Default)]
pub struct VecTabCollection {
    tabs: Vec<TabDescriptor>,
    selected: Option<usize>,
    events: Vec<TabEvent>,
}

impl VecTabCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tabs(tabs: impl IntoIterator<Item = TabDescriptor>) -> Self {
        let mut collection = Self::new();
        for tab in tabs {
            collection.push(tab);
        }
        collection.events.clear();
        collection
    }

    pub fn push(&mut self, tab: TabDescriptor) {
        self.insert(self.tabs.len(), tab);
    }

    /// Inserts at `index`, clamped to the end.
    pub fn insert(&mut self, index: usize, tab: TabDescriptor) {
        let index = index.min(self.tabs.len());
        self.tabs.insert(index, tab);
        self.events.push(TabEvent::TabAdded(index));
        match self.selected {
            None => self.set_selected(Some(index)),
            Some(sel) if sel >= index => self.selected = Some(sel + 1),
            Some(_) => {}
        }
    }

    pub fn tabs(&self) -> &[TabDescriptor] {
        &self.tabs
    }

    fn set_selected(&mut self, selected: Option<usize>) {
        if self.selected == selected {
            return;
        }
        if self.selected.is_some() {
            self.events.push(TabEvent::Deselected);
        }
        self.selected = selected;
        self.events.push(TabEvent::SelectedIndexChanged(selected));
    }
}

impl TabCollection for VecTabCollection {
    fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    fn tab_at(&self, index: usize) -> Option<TabDescriptor> {
        self.tabs.get(index).cloned()
    }

    fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    fn select(&mut self, index: usize) -> bool {
        if index >= self.tabs.len() {
            return false;
        }
        self.set_selected(Some(index));
        true
    }

    fn remove(&mut self, index: usize) -> Option<TabDescriptor> {
        if index >= self.tabs.len() {
            return None;
        }
        let len_before = self.tabs.len();
        let removed = self.tabs.remove(index);
        self.events.push(TabEvent::TabRemoved(index));

        match self.selected {
            Some(active) if active == index => {
                let next = normalized_active_index_after_remove(active, len_before, index);
                self.events.push(TabEvent::Deselected);
                self.selected = next;
                self.events.push(TabEvent::SelectedIndexChanged(next));
            }
            Some(active) => {
                // Same tab stays selected, only its index moves.
                self.selected = normalized_active_index_after_remove(active, len_before, index);
            }
            None => {}
        }
        Some(removed)
    }

    fn drain_events(&mut self) -> Vec<TabEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/collection.rs"]
mod tests;
