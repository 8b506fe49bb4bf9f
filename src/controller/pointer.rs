use crate::core::Point;
use crate::hit_test::{self, HitContext, HitUpdate};
use crate::layout::TextMeasure;

use super::TabSelectorController;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Middle,
    Secondary,
}

/// What a pointer gesture asks the collection to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabIntent {
    Select(usize),
    Remove(usize),
}

impl<M: TextMeasure> TabSelectorController<M> {
    fn hit_context<'a>(&'a self, locked: &'a [bool]) -> HitContext<'a> {
        HitContext {
            rects: &self.layout.rects,
            locked,
            remove_button: self.config.remove_button,
            bottom_radius: self.config.layout.bottom_radius,
        }
    }

    /// Resolves a button release into intents without applying them.
    ///
    /// Removing the selected last tab selects its left neighbour first so the
    /// selection never points past the end.
    pub fn on_pointer_up(&mut self, point: Point, button: PointerButton) -> Vec<TabIntent> {
        self.ensure_layout();
        if button == PointerButton::Secondary {
            return Vec::new();
        }
        let Some(count) = self.collection.as_ref().map(|c| c.tab_count()) else {
            return Vec::new();
        };
        let selected = self.selected_index();
        let locked = self.locked_flags();
        let ctx = self.hit_context(&locked);

        let Some(index) = hit_test::locate_tab(point, ctx.rects) else {
            return Vec::new();
        };
        let remove = !locked[index]
            && (button == PointerButton::Middle
                || hit_test::is_in_remove_zone(point, index, &ctx));

        if remove {
            let mut intents = Vec::with_capacity(2);
            if index > 0 && index + 1 == count && selected == Some(index) {
                intents.push(TabIntent::Select(index - 1));
            }
            intents.push(TabIntent::Remove(index));
            intents
        } else if button == PointerButton::Primary {
            self.ripple_origin = point;
            vec![TabIntent::Select(index)]
        } else {
            Vec::new()
        }
    }

    /// Applies `intents` to the attached collection, then handles the
    /// events they raised.
    pub fn dispatch(&mut self, intents: &[TabIntent]) {
        let Some(collection) = self.collection.as_mut() else {
            return;
        };
        for intent in intents {
            log::debug!("dispatch {intent:?}");
            match *intent {
                TabIntent::Select(index) => {
                    if !collection.select(index) {
                        log::warn!("select out of range: {index}");
                    }
                }
                TabIntent::Remove(index) => {
                    if collection.remove(index).is_none() {
                        log::warn!("remove out of range: {index}");
                    }
                }
            }
        }
        self.sync();
    }

    pub fn handle_pointer_up(&mut self, point: Point, button: PointerButton) -> Vec<TabIntent> {
        let intents = self.on_pointer_up(point, button);
        self.dispatch(&intents);
        intents
    }

    /// Records the right-clicked tab. Other buttons act on release.
    pub fn on_pointer_down(&mut self, point: Point, button: PointerButton) -> Option<usize> {
        if button != PointerButton::Secondary {
            return None;
        }
        self.ensure_layout();
        self.tracker.on_right_button_down(point, &self.layout.rects)
    }

    pub fn on_pointer_move(&mut self, point: Point) -> HitUpdate {
        self.ensure_layout();
        let locked = self.locked_flags();
        let ctx = HitContext {
            rects: &self.layout.rects,
            locked: &locked,
            remove_button: self.config.remove_button,
            bottom_radius: self.config.layout.bottom_radius,
        };
        self.tracker.on_pointer_move(point, &ctx)
    }

    pub fn on_pointer_leave(&mut self) -> HitUpdate {
        self.ensure_layout();
        self.tracker.on_pointer_leave()
    }
}
