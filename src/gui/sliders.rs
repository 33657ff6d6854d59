use std::ops::RangeInclusive;

use float_pretty_print::PrettyPrintFloat;
use strum::IntoEnumIterator;
use three_d::egui::{Context, RichText, ScrollArea, Slider, Ui, Window};

use super::declare_id;
use crate::registry::BodyId;
use crate::sim::SimState;

declare_id!(SPEED_WINDOW, b"OrbSpeed");

/// Slider range for the per-planet speed multipliers. Zero parks a
/// planet; the top end is a few times the fastest default.
pub(super) const SPEED_RANGE: RangeInclusive<f64> = 0.0..=5.0;

fn format_speed(speed: f64, _: RangeInclusive<usize>) -> String {
    format!("{:5.5}", PrettyPrintFloat(speed))
}

pub(super) fn draw(ctx: &Context, state: &mut SimState) {
    Window::new("Orbit speeds")
        .id(*SPEED_WINDOW_ID)
        .default_open(false)
        .resizable(false)
        .show(ctx, |ui| {
            ScrollArea::vertical().show(ui, |ui| window_contents(ui, state))
        });
}

fn window_contents(ui: &mut Ui, state: &mut SimState) {
    for id in BodyId::iter().filter(|id| !id.is_sun()) {
        let label = RichText::new(id.info().display_name).monospace();
        let slider = Slider::new(state.speed_override_mut(id), SPEED_RANGE)
            .text(label)
            .custom_formatter(format_speed);
        ui.add(slider)
            .on_hover_text("Drag to change this planet's orbital speed");
    }
}
