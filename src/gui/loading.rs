use three_d::egui::{Align2, Context, ProgressBar, RichText, Vec2, Window};

use super::declare_id;
use crate::registry::{BODY_COUNT, SKYBOX_FACE_PATHS};

declare_id!(LOADING_WINDOW, b"TexBusyW");

const TEXTURE_TOTAL: usize = BODY_COUNT + SKYBOX_FACE_PATHS.len();

/// Centered overlay shown while textures are still in flight.
pub(super) fn draw(ctx: &Context, outstanding: usize) {
    let done = TEXTURE_TOTAL.saturating_sub(outstanding);
    Window::new("Loading")
        .id(*LOADING_WINDOW_ID)
        .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
        .title_bar(false)
        .resizable(false)
        .collapsible(false)
        .show(ctx, |ui| {
            ui.label(RichText::new("Loading textures\u{2026}").size(18.0));
            ui.add(ProgressBar::new(done as f32 / TEXTURE_TOTAL as f32).show_percentage());
        });
}
