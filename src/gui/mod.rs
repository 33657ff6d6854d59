use three_d::{
    Camera, Context as ThreeDContext, Event as ThreeDEvent, GUI, Viewport,
    egui::{Context as EguiContext, Vec2, Visuals},
};

use crate::control::CameraControl;
use crate::loader::TextureLatch;
use crate::sim::SimState;

mod control_bar;
pub(crate) mod info;
mod loading;
mod sliders;

macro_rules! declare_id {
    (salt_only, $name:ident, $val:expr) => {
        ::pastey::paste! {
            const [<$name _SALT>]: ::core::num::NonZeroU64 =
                ::core::num::NonZeroU64::new(u64::from_be_bytes(*$val)).unwrap();
        }
    };
    ($name:ident, $val:expr) => {
        ::pastey::paste! {
            const [<$name _SALT>]: ::core::num::NonZeroU64 =
                ::core::num::NonZeroU64::new(u64::from_be_bytes(*$val)).unwrap();
            const [<$name _ID>]: ::std::sync::LazyLock<::three_d::egui::Id> =
                ::std::sync::LazyLock::new(|| ::three_d::egui::Id::new([<$name _SALT>]));
        }
    };
}
use declare_id;

const MIN_TOUCH_TARGET_LEN: f32 = 48.0;
const MIN_TOUCH_TARGET_VEC: Vec2 = Vec2::splat(MIN_TOUCH_TARGET_LEN);

pub(crate) fn create(context: &ThreeDContext) -> GUI {
    GUI::new(context)
}

/// Runs the whole ui for one frame. Returns whether egui wants a redraw,
/// straight from [`GUI::update`].
pub(crate) fn update(
    gui: &mut GUI,
    state: &mut SimState,
    control: &mut CameraControl,
    camera: &mut Camera,
    latch: &TextureLatch,
    events: &mut Vec<ThreeDEvent>,
    accumulated_time_ms: f64,
    viewport: Viewport,
    device_pixel_ratio: f32,
) -> bool {
    gui.update(
        events,
        accumulated_time_ms,
        viewport,
        device_pixel_ratio,
        |ctx| handle_ui(ctx, state, control, camera, latch),
    )
}

fn handle_ui(
    ctx: &EguiContext,
    state: &mut SimState,
    control: &mut CameraControl,
    camera: &mut Camera,
    latch: &TextureLatch,
) {
    apply_theme(ctx, state.light_theme);

    if !latch.is_ready() {
        loading::draw(ctx, latch.outstanding());
        return;
    }

    control_bar::draw(ctx, state, control, camera);
    sliders::draw(ctx, state);
    info::draw(ctx, state);
}

fn apply_theme(ctx: &EguiContext, light_theme: bool) {
    ctx.set_visuals(if light_theme {
        Visuals::light()
    } else {
        Visuals::dark()
    });
}
