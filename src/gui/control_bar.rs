use three_d::Camera;
use three_d::egui::{Button, Context, RichText, TopBottomPanel, Ui};

use super::{MIN_TOUCH_TARGET_VEC, declare_id};
use crate::control::{CameraControl, ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR};
use crate::sim::SimState;

declare_id!(CONTROL_BAR, b"SolOrbit");

pub(super) fn draw(
    ctx: &Context,
    state: &mut SimState,
    control: &mut CameraControl,
    camera: &mut Camera,
) {
    TopBottomPanel::top(*CONTROL_BAR_ID)
        .show_separator_line(false)
        .show(ctx, |ui| {
            ui.horizontal(|ui| bar_contents(ui, state, control, camera))
        });
}

fn bar_contents(ui: &mut Ui, state: &mut SimState, control: &mut CameraControl, camera: &mut Camera) {
    if bar_button(ui, pause_glyph(state.paused), pause_hover(state.paused)) {
        state.toggle_pause();
    }

    ui.separator();

    if bar_button(ui, "+", "Zoom in") {
        control.zoom_by_factor(ZOOM_IN_FACTOR);
    }
    if bar_button(ui, "\u{2212}", "Zoom out") {
        control.zoom_by_factor(ZOOM_OUT_FACTOR);
    }
    if bar_button(ui, "\u{2302}", "Reset the camera to the starting view") {
        control.reset(camera);
    }

    ui.separator();

    if bar_button(ui, theme_glyph(state.light_theme), "Toggle light/dark theme") {
        state.toggle_theme();
    }
}

fn bar_button(ui: &mut Ui, glyph: &str, hover: &str) -> bool {
    let button = Button::new(RichText::new(glyph).size(20.0)).min_size(MIN_TOUCH_TARGET_VEC);
    ui.add(button).on_hover_text(hover).clicked()
}

fn pause_glyph(paused: bool) -> &'static str {
    if paused { "\u{25B6}" } else { "\u{23F8}" }
}

fn pause_hover(paused: bool) -> &'static str {
    if paused {
        "Currently paused\nClick/tap to resume"
    } else {
        "Currently running\nClick/tap to pause"
    }
}

fn theme_glyph(light_theme: bool) -> &'static str {
    if light_theme { "\u{1F319}" } else { "\u{2600}" }
}
