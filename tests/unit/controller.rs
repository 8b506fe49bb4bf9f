use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::config::{LabelStyle, ThemeChoice};
use crate::core::{Point, Size, TabRect};
use crate::error::StripError;
use crate::hit_test::CursorHint;
use crate::layout::{FontRef, TabDescriptor};

fn ten_px(text: &str, _font: &FontRef) -> Size {
    Size::new(text.len() as i32 * 10, 16)
}

type Controller = TabSelectorController<fn(&str, &FontRef) -> Size>;

fn controller() -> Controller {
    TabSelectorController::new(ten_px as fn(&str, &FontRef) -> Size)
}

fn collection(labels: &[&str]) -> Box<VecTabCollection> {
    Box::new(VecTabCollection::from_tabs(
        labels.iter().map(|l| TabDescriptor::new(*l)),
    ))
}

fn attached(labels: &[&str]) -> Controller {
    let mut ctl = controller();
    ctl.attach(collection(labels));
    ctl
}

fn selected(ctl: &Controller) -> Option<usize> {
    ctl.collection().and_then(|c| c.selected_index())
}

fn count(ctl: &Controller) -> usize {
    ctl.collection().map_or(0, |c| c.tab_count())
}

/// Collection the test keeps a handle to, for host-side inserts.
struct Shared(Rc<RefCell<VecTabCollection>>);

impl TabCollection for Shared {
    fn tab_count(&self) -> usize {
        self.0.borrow().tab_count()
    }

    fn tab_at(&self, index: usize) -> Option<TabDescriptor> {
        self.0.borrow().tab_at(index)
    }

    fn selected_index(&self) -> Option<usize> {
        self.0.borrow().selected_index()
    }

    fn select(&mut self, index: usize) -> bool {
        self.0.borrow_mut().select(index)
    }

    fn remove(&mut self, index: usize) -> Option<TabDescriptor> {
        self.0.borrow_mut().remove(index)
    }

    fn drain_events(&mut self) -> Vec<TabEvent> {
        self.0.borrow_mut().drain_events()
    }
}

fn attached_shared(labels: &[&str]) -> (Controller, Rc<RefCell<VecTabCollection>>) {
    let handle = Rc::new(RefCell::new(*collection(labels)));
    let mut ctl = controller();
    ctl.attach(Box::new(Shared(Rc::clone(&handle))));
    (ctl, handle)
}

/// Inside the remove zone of a 160 px tab starting at `x` with a 24 px image.
fn remove_point(x: i32) -> Point {
    Point::new(x + 160 - 18 - 10 + 2, 14)
}

// ── lifecycle ────────────────────────────────────────────────────────

#[test]
fn layout_is_empty_before_attach() {
    let mut ctl = controller();
    assert!(ctl.current_layout().is_empty());
    assert_eq!(ctl.required_width(), DEFAULT_CONTROL_WIDTH);
    assert!(ctl.on_pointer_up(Point::new(30, 10), PointerButton::Primary).is_empty());
    assert!(ctl.frame().tabs.is_empty());
}

#[test]
fn attach_lays_out_tabs() {
    let ctl = attached(&["Home", "Files", "Settings"]);
    assert_eq!(
        ctl.current_layout(),
        &[
            TabRect::new(26, 0, 160, 48),
            TabRect::new(186, 0, 160, 48),
            TabRect::new(346, 0, 160, 48),
        ]
    );
    assert_eq!(ctl.required_width(), 506);
    assert!(!ctl.is_animating());
    assert_eq!(ctl.selection_memory().current, Some(0));
    assert_eq!(ctl.selection_memory().previous, Some(0));
}

#[test]
fn attach_replaces_and_detach_returns_collection() {
    let mut ctl = attached(&["a"]);
    let previous = ctl.attach(collection(&["x", "y"]));
    assert_eq!(previous.map(|c| c.tab_count()), Some(1));
    assert_eq!(ctl.current_layout().len(), 2);

    let detached = ctl.detach();
    assert_eq!(detached.map(|c| c.tab_count()), Some(2));
    assert!(!ctl.is_attached());
    assert!(ctl.current_layout().is_empty());
    assert!(ctl.detach().is_none());
}

// ── pointer intents ──────────────────────────────────────────────────

#[test]
fn primary_click_selects_and_starts_animation() {
    let mut ctl = attached(&["a", "b", "c"]);
    let intents = ctl.handle_pointer_up(Point::new(200, 10), PointerButton::Primary);
    assert_eq!(intents, vec![TabIntent::Select(1)]);
    assert_eq!(selected(&ctl), Some(1));
    assert!(ctl.is_animating());
    assert_eq!(ctl.animation_progress(), 0.0);
    assert_eq!(
        ctl.selection_memory(),
        SelectionMemory {
            previous: Some(0),
            current: Some(1)
        }
    );
}

#[test]
fn click_outside_tabs_does_nothing() {
    let mut ctl = attached(&["a", "b"]);
    assert!(ctl.handle_pointer_up(Point::new(5, 10), PointerButton::Primary).is_empty());
    assert!(ctl.handle_pointer_up(Point::new(400, 10), PointerButton::Primary).is_empty());
    assert_eq!(selected(&ctl), Some(0));
}

#[test]
fn removing_selected_last_tab_selects_neighbour_first() {
    let mut ctl = attached(&["a", "b", "c"]);
    ctl.set_remove_button(Some(Size::new(24, 24)));
    ctl.handle_pointer_up(Point::new(400, 10), PointerButton::Primary);

    let intents = ctl.handle_pointer_up(remove_point(346), PointerButton::Primary);
    assert_eq!(intents, vec![TabIntent::Select(1), TabIntent::Remove(2)]);
    assert_eq!(count(&ctl), 2);
    assert_eq!(selected(&ctl), Some(1));
    assert_eq!(ctl.current_layout().len(), 2);
    assert_eq!(ctl.selection_memory().current, Some(1));
}

#[test]
fn removing_unselected_tab_only_removes() {
    let mut ctl = attached(&["a", "b", "c"]);
    ctl.set_remove_button(Some(Size::new(24, 24)));

    let intents = ctl.handle_pointer_up(remove_point(186), PointerButton::Primary);
    assert_eq!(intents, vec![TabIntent::Remove(1)]);
    assert_eq!(count(&ctl), 2);
    assert_eq!(selected(&ctl), Some(0));
    assert!(!ctl.is_animating());
}

#[test]
fn removing_only_tab_does_not_select() {
    let mut ctl = attached(&["solo"]);
    ctl.set_remove_button(Some(Size::new(24, 24)));
    let intents = ctl.handle_pointer_up(remove_point(26), PointerButton::Primary);
    assert_eq!(intents, vec![TabIntent::Remove(0)]);
    assert_eq!(count(&ctl), 0);
    assert_eq!(selected(&ctl), None);
    assert!(ctl.current_layout().is_empty());
}

#[test]
fn remove_zone_needs_remove_button() {
    let mut ctl = attached(&["a", "b"]);
    let intents = ctl.on_pointer_up(remove_point(186), PointerButton::Primary);
    assert_eq!(intents, vec![TabIntent::Select(1)]);
}

#[test]
fn middle_click_removes_but_never_selects() {
    let mut ctl = attached(&["a", "b", "c"]);
    let intents = ctl.handle_pointer_up(Point::new(200, 10), PointerButton::Middle);
    assert_eq!(intents, vec![TabIntent::Remove(1)]);
    assert_eq!(selected(&ctl), Some(0));
}

#[test]
fn locked_tabs_cannot_be_removed() {
    let mut ctl = controller();
    ctl.set_locked_names(["pinned"]);
    ctl.set_remove_button(Some(Size::new(24, 24)));
    ctl.attach(Box::new(VecTabCollection::from_tabs([
        TabDescriptor::new("a"),
        TabDescriptor::new("p").named("pinned"),
    ])));

    assert!(ctl.on_pointer_up(Point::new(200, 10), PointerButton::Middle).is_empty());
    let intents = ctl.on_pointer_up(remove_point(186), PointerButton::Primary);
    assert_eq!(intents, vec![TabIntent::Select(1)]);
}

#[test]
fn secondary_button_records_right_click_only() {
    let mut ctl = attached(&["a", "b"]);
    assert_eq!(ctl.on_pointer_down(Point::new(200, 10), PointerButton::Secondary), Some(1));
    assert_eq!(ctl.right_clicked_index(), Some(1));
    assert!(ctl.handle_pointer_up(Point::new(200, 10), PointerButton::Secondary).is_empty());
    assert_eq!(selected(&ctl), Some(0));
    assert_eq!(ctl.on_pointer_down(Point::new(200, 10), PointerButton::Primary), None);
}

#[test]
fn hover_tracks_pointer() {
    let mut ctl = attached(&["a", "b"]);
    let update = ctl.on_pointer_move(Point::new(200, 10));
    assert_eq!(update.state.hovered, Some(1));
    assert_eq!(ctl.cursor(), CursorHint::Hand);
    assert_eq!(ctl.frame().hover, Some(TabRect::new(186, 0, 160, 46)));

    ctl.on_pointer_leave();
    assert_eq!(ctl.hit_state().hovered, None);
    assert_eq!(ctl.cursor(), CursorHint::Default);
    assert!(ctl.frame().hover.is_none());
}

// ── event handling ───────────────────────────────────────────────────

#[test]
fn host_changes_apply_on_sync() {
    let mut ctl = attached(&["a", "b"]);
    if let Some(c) = ctl.collection_mut() {
        assert!(c.select(1));
    }
    assert!(!ctl.is_animating());
    ctl.sync();
    assert!(ctl.is_animating());
    assert_eq!(ctl.selection_memory().previous, Some(0));
}

#[test]
fn stale_layout_is_rebuilt_before_hit_testing() {
    let mut ctl = attached(&["a", "b"]);
    if let Some(c) = ctl.collection_mut() {
        c.remove(1);
    }
    // Without a sync the rect list still has two entries.
    assert_eq!(ctl.current_layout().len(), 2);
    let update = ctl.on_pointer_move(Point::new(200, 10));
    assert_eq!(update.state.hovered, None);
    assert_eq!(ctl.current_layout().len(), 1);
}

#[test]
fn insert_before_selection_keeps_indicator_on_selected_tab() {
    let (mut ctl, handle) = attached_shared(&["a", "b", "c"]);
    ctl.handle_pointer_up(Point::new(400, 10), PointerButton::Primary);
    while ctl.tick() {}

    handle.borrow_mut().insert(0, TabDescriptor::new("z"));
    ctl.sync();

    assert_eq!(selected(&ctl), Some(3));
    assert_eq!(ctl.selection_memory().current, Some(3));
    let selected_rect = ctl.current_layout()[3];
    assert_eq!(selected_rect, TabRect::new(506, 0, 160, 48));

    let frame = ctl.frame();
    assert_eq!(frame.indicator, Some(TabRect::new(506, 46, 160, 2)));
    assert!(frame.tabs[3].selected);
    let palette = ThemeChoice::MaterialLight.resolve();
    let alphas: Vec<u8> = frame
        .tabs
        .iter()
        .filter_map(|t| t.label.as_ref().map(|l| l.alpha))
        .collect();
    let medium = palette.medium_emphasis_alpha;
    assert_eq!(
        alphas,
        vec![medium, medium, medium, palette.high_emphasis_alpha]
    );
    let label = frame.tabs[3].label.as_ref().expect("label");
    assert_eq!(label.color, frame.colors.text.with_alpha(palette.high_emphasis_alpha));
}

#[test]
fn insert_during_transition_retargets_both_ends() {
    let (mut ctl, handle) = attached_shared(&["a", "b", "c"]);
    ctl.handle_pointer_up(Point::new(200, 10), PointerButton::Primary);

    handle.borrow_mut().insert(1, TabDescriptor::new("z"));
    ctl.sync();
    assert_eq!(
        ctl.selection_memory(),
        SelectionMemory {
            previous: Some(0),
            current: Some(2)
        }
    );
    assert!(ctl.is_animating());
    assert_eq!(ctl.frame().indicator, Some(TabRect::new(26, 46, 160, 2)));

    while ctl.tick() {}
    let frame = ctl.frame();
    assert_eq!(frame.indicator, Some(TabRect::new(346, 46, 160, 2)));
    assert!(frame.tabs[2].selected);
}

// ── animation ────────────────────────────────────────────────────────

#[test]
fn ticks_run_the_transition_to_completion() {
    let mut ctl = attached(&["a", "b"]);
    assert!(!ctl.tick());
    ctl.handle_pointer_up(Point::new(200, 10), PointerButton::Primary);

    let mut ticks = 0;
    while ctl.tick() {
        ticks += 1;
        assert!(ticks <= 100);
    }
    assert_eq!(ticks, 25);
    assert_eq!(ctl.animation_progress(), 1.0);
    assert!(!ctl.is_animating());
}

#[test]
fn animation_setter_changes_speed_and_curve() {
    let mut ctl = attached(&["a", "b"]);
    ctl.set_animation(0.5, Easing::Linear);
    ctl.handle_pointer_up(Point::new(200, 10), PointerButton::Primary);

    assert!(ctl.tick());
    assert_eq!(ctl.animation_progress(), 0.5);
    assert!(ctl.tick());
    assert!(!ctl.is_animating());
    assert_eq!(ctl.config().animation.increment, 0.5);
    assert_eq!(ctl.config().animation.easing, Easing::Linear);
}

#[test]
fn frame_follows_the_transition() {
    let mut ctl = attached(&["a", "b"]);
    ctl.handle_pointer_up(Point::new(200, 10), PointerButton::Primary);

    let start = ctl.frame();
    assert_eq!(start.indicator, Some(TabRect::new(26, 46, 160, 2)));
    let ripple = start.ripple.expect("ripple while animating");
    assert_eq!(ripple.center, Point::new(200, 10));
    assert_eq!(ripple.clip, TabRect::new(186, 0, 160, 48));
    assert!(start.tabs[1].selected);

    while ctl.tick() {}
    let end = ctl.frame();
    assert_eq!(end.indicator, Some(TabRect::new(186, 46, 160, 2)));
    assert!(end.ripple.is_none());
    let palette = ThemeChoice::MaterialLight.resolve();
    let alphas: Vec<u8> = end
        .tabs
        .iter()
        .filter_map(|t| t.label.as_ref().map(|l| l.alpha))
        .collect();
    assert_eq!(
        alphas,
        vec![palette.medium_emphasis_alpha, palette.high_emphasis_alpha]
    );
}

#[test]
fn only_selecting_clicks_move_the_ripple() {
    let mut ctl = attached(&["a", "b", "c"]);
    ctl.handle_pointer_up(Point::new(200, 10), PointerButton::Primary);

    ctl.on_pointer_down(Point::new(400, 20), PointerButton::Secondary);
    ctl.handle_pointer_up(Point::new(400, 20), PointerButton::Secondary);
    ctl.handle_pointer_up(Point::new(5, 5), PointerButton::Primary);
    ctl.handle_pointer_up(Point::new(400, 30), PointerButton::Middle);

    let ripple = ctl.frame().ripple.expect("ripple while animating");
    assert_eq!(ripple.center, Point::new(200, 10));
    assert_eq!(ripple.clip, TabRect::new(186, 0, 160, 48));
}

#[test]
fn ripple_is_clipped_to_the_control() {
    let mut ctl = attached(&["a", "b", "c"]);
    ctl.set_control_size(Size::new(400, 48));
    ctl.handle_pointer_up(Point::new(380, 10), PointerButton::Primary);

    let ripple = ctl.frame().ripple.expect("ripple while animating");
    assert_eq!(ripple.clip, TabRect::new(346, 0, 54, 48));
}

#[test]
fn frame_describes_labels_and_buttons() {
    let mut ctl = controller();
    ctl.set_character_casing(CharacterCasing::Upper);
    ctl.set_remove_button(Some(Size::new(24, 24)));
    ctl.set_locked_names(["pinned"]);
    ctl.attach(Box::new(VecTabCollection::from_tabs([
        TabDescriptor::new("home"),
        TabDescriptor::new("a label long enough to wrap").named("pinned"),
    ])));

    let frame = ctl.frame();
    let first = frame.tabs[0].label.as_ref().expect("label");
    assert_eq!(first.text, "HOME");
    assert!(!first.multi_line);
    assert_eq!(first.area, TabRect::new(38, 0, 136, 48));
    assert_eq!(frame.tabs[0].remove_button, Some(TabRect::new(164, 18, 12, 12)));
    assert!(frame.tabs[0].icon.is_none());

    let second = frame.tabs[1].label.as_ref().expect("label");
    assert!(second.multi_line);
    assert_eq!(second.font, FontRef::body_medium(14.0));
    assert!(frame.tabs[1].locked);
    assert!(frame.tabs[1].remove_button.is_none());
}

#[test]
fn remove_zone_is_highlighted_under_pointer() {
    let mut ctl = attached(&["a", "b"]);
    ctl.set_remove_button(Some(Size::new(24, 24)));
    let update = ctl.on_pointer_move(remove_point(26));
    assert!(update.state.in_remove_zone);
    assert_eq!(ctl.frame().remove_highlight, Some(TabRect::new(158, 12, 24, 24)));
}

#[test]
fn boundary_replaces_indicator_when_disabled() {
    let mut ctl = attached(&["a", "b"]);
    ctl.set_draw_indicator(false);
    let frame = ctl.frame();
    assert!(frame.indicator.is_none());
    let [left, right] = frame.boundary.expect("boundary");
    assert_eq!((left.x_end, right.x_start, right.x_end), (29, 183, 480));
}

// ── setters ──────────────────────────────────────────────────────────

#[test]
fn invalid_indicator_height_is_rejected() {
    let mut ctl = attached(&["a"]);
    assert!(matches!(
        ctl.set_indicator_height(0),
        Err(StripError::InvalidIndicatorHeight(0))
    ));
    assert!(ctl.set_indicator_height(-3).is_err());
    assert_eq!(ctl.config().indicator.height, 2);
    assert!(ctl.set_indicator_height(4).is_ok());
    assert_eq!(ctl.frame().indicator.map(|r| r.height), Some(4));
}

#[test]
fn label_style_sets_preferred_height() {
    let mut ctl = attached(&["a"]);
    ctl.set_label_style(LabelStyle::IconAndText);
    assert_eq!(ctl.control_size().height, 72);
    assert_eq!(ctl.current_layout()[0].height, 72);
    ctl.set_label_style(LabelStyle::Text);
    assert_eq!(ctl.control_size().height, 48);
}

#[test]
fn corner_radii_are_clamped_to_half_height() {
    let mut ctl = attached(&["a"]);
    ctl.set_corner_radii(100, -5);
    assert_eq!(ctl.config().layout.upper_radius, 24);
    assert_eq!(ctl.config().layout.bottom_radius, 0);
}

#[test]
fn width_setters_relayout() {
    let mut ctl = attached(&["a", "b"]);
    ctl.set_min_width(100);
    assert_eq!(ctl.current_layout()[0].width, 100);
    ctl.set_max_width(90);
    assert_eq!(ctl.current_layout()[0].width, 100);
    ctl.set_left_padding(24);
    assert_eq!(ctl.current_layout()[0].x, 0);
    ctl.set_locked_names(["b"]);
    ctl.set_locked_tab_width(Some(30));
    // Tab names are unset, so the lock does not apply.
    assert_eq!(ctl.current_layout()[1].width, 100);
}

#[test]
fn shrink_mode_fills_resized_control() {
    let mut ctl = attached(&["a", "b", "c"]);
    ctl.set_min_width(40);
    ctl.set_shrink_enabled(true);
    ctl.set_control_size(Size::new(350, 48));
    let total: i32 = ctl.current_layout().iter().map(|r| r.width).sum();
    assert_eq!(total, 300);
    assert_eq!(ctl.required_width(), 350);
}
