//! Tab selector controller.
//!
//! Owns the rectangle list and wires layout, hit-testing and the selection
//! animator to an attached [`TabCollection`]. Collection notifications are
//! queued by the collection and handled here only after an intent dispatch
//! (or an explicit [`TabSelectorController::sync`]); the relayout they cause
//! runs once per drain.

mod collection;
mod frame;
mod pointer;

pub use collection::{
    TabCollection, TabEvent, VecTabCollection, normalized_active_index_after_remove,
};
pub use frame::{
    Frame, LabelVisual, TabVisual, hover_rect, icon_rect, is_multi_line, label_area,
};
pub use pointer::{PointerButton, TabIntent};

use crate::animation::{AnimationClock, Easing};
use crate::config::{CharacterCasing, LabelStyle, StripColors, StripConfig, ThemeProvider};
use crate::core::{Color, Point, Size, TabRect};
use crate::error::StripError;
use crate::hit_test::{self, CursorHint, HitState, HitTestTracker};
use crate::layout::{FontRef, TabDescriptor, TabLayout, TextMeasure, compute_layout};
use crate::selection::{
    EmphasisAlphas, FrameParams, Ripple, SelectionAnimator, SelectionMemory,
};

/// Control width before the host reports a size.
pub const DEFAULT_CONTROL_WIDTH: i32 = 480;

pub struct TabSelectorController<M: TextMeasure> {
    measure: M,
    config: StripConfig,
    theme: Box<dyn ThemeProvider>,
    control: Size,
    collection: Option<Box<dyn TabCollection>>,
    descriptors: Vec<TabDescriptor>,
    layout: TabLayout,
    layout_dirty: bool,
    tracker: HitTestTracker,
    animator: SelectionAnimator,
    ripple_origin: Point,
}

impl<M: TextMeasure> TabSelectorController<M> {
    pub fn new(measure: M) -> Self {
        Self::with_config(measure, StripConfig::default())
    }

    pub fn with_config(measure: M, config: StripConfig) -> Self {
        let control = Size::new(
            DEFAULT_CONTROL_WIDTH,
            config.layout.label_style.preferred_height(),
        );
        let clock = AnimationClock::new(config.animation.increment, config.animation.easing);
        Self {
            measure,
            theme: Box::new(config.theme.resolve()),
            control,
            collection: None,
            descriptors: Vec::new(),
            layout: TabLayout::default(),
            layout_dirty: false,
            tracker: HitTestTracker::new(),
            animator: SelectionAnimator::new(clock),
            ripple_origin: Point::default(),
            config,
        }
    }

    pub fn config(&self) -> &StripConfig {
        &self.config
    }

    pub fn control_size(&self) -> Size {
        self.control
    }

    // ── lifecycle ────────────────────────────────────────────────────

    /// Attaches `collection`, returning the one it replaces.
    pub fn attach(
        &mut self,
        mut collection: Box<dyn TabCollection>,
    ) -> Option<Box<dyn TabCollection>> {
        let previous = self.detach();
        // Events raised before attach describe a state we never saw.
        collection.drain_events();
        self.animator.reset(collection.selected_index());
        log::debug!(
            "attach: {} tabs, selected {:?}",
            collection.tab_count(),
            collection.selected_index()
        );
        self.collection = Some(collection);
        self.relayout();
        previous
    }

    pub fn detach(&mut self) -> Option<Box<dyn TabCollection>> {
        let collection = self.collection.take()?;
        self.descriptors.clear();
        self.layout = TabLayout::default();
        self.layout_dirty = false;
        self.tracker = HitTestTracker::new();
        self.animator.reset(None);
        log::debug!("detach");
        Some(collection)
    }

    pub fn is_attached(&self) -> bool {
        self.collection.is_some()
    }

    pub fn collection(&self) -> Option<&dyn TabCollection> {
        self.collection.as_deref()
    }

    /// Direct access to the attached collection. Call [`Self::sync`] after
    /// mutating it.
    pub fn collection_mut(&mut self) -> Option<&mut (dyn TabCollection + 'static)> {
        self.collection.as_deref_mut()
    }

    /// Handles queued collection events, then relayouts once if needed.
    pub fn sync(&mut self) {
        let Some(collection) = self.collection.as_mut() else {
            return;
        };
        for event in collection.drain_events() {
            log::trace!("collection event {event:?}");
            match event {
                TabEvent::Deselected => self.animator.on_selection_will_change(),
                TabEvent::SelectedIndexChanged(selected) => {
                    self.animator.on_selection_changed(selected)
                }
                TabEvent::TabAdded(index) => {
                    self.animator.on_tab_added(index);
                    self.layout_dirty = true;
                }
                TabEvent::TabRemoved(index) => {
                    self.animator.on_tab_removed(index);
                    self.layout_dirty = true;
                }
            }
        }
        if self.layout_dirty {
            self.relayout();
        }
    }

    // ── layout ───────────────────────────────────────────────────────

    fn font(&self) -> FontRef {
        FontRef::body(self.config.font.size)
    }

    fn relayout(&mut self) {
        self.descriptors = self
            .collection
            .as_ref()
            .map(|c| c.descriptors())
            .unwrap_or_default();
        self.layout = compute_layout(
            &self.descriptors,
            self.control,
            &self.config.layout,
            &self.measure,
            &self.font(),
        );
        self.layout_dirty = false;
        self.tracker.clamp_to(self.layout.rects.len());
        log::debug!(
            "relayout: {} tabs, required width {}",
            self.layout.rects.len(),
            self.layout.required_width
        );
    }

    /// Relayouts when a setter or event invalidated the rects, or when the
    /// collection was changed behind our back.
    fn ensure_layout(&mut self) {
        let Some(count) = self.collection.as_ref().map(|c| c.tab_count()) else {
            return;
        };
        if self.layout_dirty || hit_test::needs_layout(self.layout.rects.len(), count) {
            self.relayout();
        }
    }

    fn invalidate_layout(&mut self) {
        self.layout_dirty = true;
        if self.is_attached() {
            self.relayout();
        }
    }

    fn locked_flags(&self) -> Vec<bool> {
        self.descriptors
            .iter()
            .map(|t| self.config.layout.is_locked(t.name.as_deref()))
            .collect()
    }

    fn selected_index(&self) -> Option<usize> {
        self.collection.as_ref().and_then(|c| c.selected_index())
    }

    // ── queries ──────────────────────────────────────────────────────

    pub fn current_layout(&self) -> &[TabRect] {
        if !self.is_attached() {
            log::debug!("layout queried before attach");
            return &[];
        }
        &self.layout.rects
    }

    pub fn required_width(&self) -> i32 {
        if self.is_attached() {
            self.layout.required_width
        } else {
            self.control.width
        }
    }

    pub fn hit_state(&self) -> HitState {
        self.tracker.state()
    }

    pub fn right_clicked_index(&self) -> Option<usize> {
        self.tracker.state().right_clicked
    }

    pub fn cursor(&self) -> CursorHint {
        self.tracker.cursor()
    }

    pub fn selection_memory(&self) -> SelectionMemory {
        self.animator.memory()
    }

    pub fn animation_progress(&self) -> f64 {
        self.animator.clock().progress()
    }

    // ── animation ────────────────────────────────────────────────────

    /// One clock step. Returns `true` when the host should repaint.
    pub fn tick(&mut self) -> bool {
        if !self.animator.is_animating() {
            return false;
        }
        self.animator.clock_mut().step();
        true
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    // ── frame ────────────────────────────────────────────────────────

    pub fn frame(&mut self) -> Frame {
        self.ensure_layout();
        let colors = self.config.colors.resolve(&*self.theme);
        if !self.is_attached() {
            return Frame::empty(colors);
        }

        let rects = &self.layout.rects;
        let params = FrameParams {
            draw_indicator: self.config.indicator.draw,
            indicator_height: self.config.indicator.height,
            strip_right: self.required_width(),
            alphas: EmphasisAlphas {
                high: self.theme.high_emphasis_alpha(),
                medium: self.theme.medium_emphasis_alpha(),
            },
        };
        let selection = self.animator.frame(rects, &params);
        let selected = self.selected_index();
        let locked = self.locked_flags();

        let tabs = self
            .descriptors
            .iter()
            .zip(rects)
            .enumerate()
            .map(|(index, (tab, rect))| {
                let alpha = selection
                    .alphas
                    .get(index)
                    .copied()
                    .unwrap_or(params.alphas.medium);
                let color = colors.text.with_alpha(alpha);
                self.tab_visual(index, tab, rect, selected == Some(index), locked[index], color)
            })
            .collect();

        let state = self.tracker.state();
        let hovered = state.hovered.and_then(|i| rects.get(i));
        let remove_highlight = match (state.in_remove_zone, hovered, self.config.remove_button) {
            (true, Some(rect), Some(image)) => Some(hit_test::remove_zone(
                rect,
                image,
                self.config.layout.bottom_radius,
            )),
            _ => None,
        };

        Frame {
            tabs,
            indicator: selection.indicator,
            boundary: selection.boundary,
            hover: hovered.map(|r| hover_rect(r, params.indicator_height)),
            remove_highlight,
            ripple: self.visible_ripple(rects),
            colors,
        }
    }

    /// The ripple never paints outside the control, even over an
    /// overflowing tab.
    fn visible_ripple(&self, rects: &[TabRect]) -> Option<Ripple> {
        let ripple = self.animator.ripple(self.ripple_origin, rects)?;
        let bounds = TabRect::new(0, 0, self.control.width, self.control.height);
        let clip = ripple.clip.intersect(&bounds)?;
        Some(Ripple { clip, ..ripple })
    }

    fn tab_visual(
        &self,
        index: usize,
        tab: &TabDescriptor,
        rect: &TabRect,
        selected: bool,
        locked: bool,
        color: Color,
    ) -> TabVisual {
        let layout = &self.config.layout;
        let label = layout.label_style.shows_text().then(|| {
            let font = self.font();
            let measured = self.measure.measure(&tab.label, &font).width;
            let multi_line = is_multi_line(measured, layout);
            LabelVisual {
                text: self.config.casing.apply(&tab.label),
                area: label_area(rect, layout, multi_line),
                alpha: color.a,
                color,
                multi_line,
                font: if multi_line {
                    FontRef::body_medium(self.config.font.size)
                } else {
                    font
                },
            }
        });
        let icon = (layout.label_style.shows_icon() && tab.has_icon)
            .then(|| icon_rect(rect, layout));
        let remove_button = self
            .config
            .remove_button
            .filter(|_| !locked)
            .map(|image| hit_test::remove_image_rect(rect, image, layout.bottom_radius));

        TabVisual {
            index,
            rect: *rect,
            selected,
            locked,
            label,
            icon,
            remove_button,
        }
    }

    // ── setters ──────────────────────────────────────────────────────

    pub fn set_control_size(&mut self, size: Size) {
        if self.control != size {
            self.control = size;
            self.invalidate_layout();
        }
    }

    pub fn set_left_padding(&mut self, padding: i32) {
        self.config.layout.left_padding = padding;
        self.invalidate_layout();
    }

    pub fn set_min_width(&mut self, width: i32) {
        self.config.layout.min_width = width;
        self.invalidate_layout();
    }

    pub fn set_max_width(&mut self, width: i32) {
        self.config.layout.max_width = width;
        self.invalidate_layout();
    }

    pub fn set_locked_tab_width(&mut self, width: Option<i32>) {
        self.config.layout.locked_tab_width = width;
        self.invalidate_layout();
    }

    pub fn set_locked_names<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.layout.locked_names = names.into_iter().map(Into::into).collect();
        self.invalidate_layout();
    }

    pub fn set_shrink_enabled(&mut self, enabled: bool) {
        self.config.layout.shrink_enabled = enabled;
        self.invalidate_layout();
    }

    /// Also resizes the control to the style's preferred height.
    pub fn set_label_style(&mut self, style: LabelStyle) {
        self.config.layout.label_style = style;
        self.control.height = style.preferred_height();
        self.invalidate_layout();
    }

    pub fn set_label_multi_line(&mut self, multi_line: bool) {
        self.config.layout.label_multi_line = multi_line;
    }

    /// Radii are clamped to `[0, control height / 2]`.
    pub fn set_corner_radii(&mut self, upper: i32, bottom: i32) {
        let limit = (self.control.height / 2).max(0);
        self.config.layout.upper_radius = upper.clamp(0, limit);
        self.config.layout.bottom_radius = bottom.clamp(0, limit);
        self.invalidate_layout();
    }

    pub fn set_indicator_height(&mut self, height: i32) -> Result<(), StripError> {
        if height <= 0 {
            return Err(StripError::InvalidIndicatorHeight(height));
        }
        self.config.indicator.height = height;
        Ok(())
    }

    /// Takes effect from the next tick, including a transition in flight.
    pub fn set_animation(&mut self, increment: f64, easing: Easing) {
        self.config.animation.increment = increment;
        self.config.animation.easing = easing;
        let clock = self.animator.clock_mut();
        clock.set_increment(increment);
        clock.set_easing(easing);
    }

    pub fn set_draw_indicator(&mut self, draw: bool) {
        self.config.indicator.draw = draw;
    }

    /// `None` removes the remove button from every tab.
    pub fn set_remove_button(&mut self, image: Option<Size>) {
        self.config.remove_button = image;
    }

    pub fn set_character_casing(&mut self, casing: CharacterCasing) {
        self.config.casing = casing;
    }

    pub fn set_colors(&mut self, colors: StripColors) {
        self.config.colors = colors;
    }

    pub fn set_theme(&mut self, theme: impl ThemeProvider + 'static) {
        self.theme = Box::new(theme);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/controller.rs"]
mod tests;
