// Modified from three-d's OrbitControl struct.

#[cfg(target_family = "wasm")]
use std::sync::LazyLock;

use three_d::renderer::*;

/// Home view the camera starts in and returns to on reset.
pub const HOME_CAMERA_POSITION: Vec3 = Vec3::new(0.0, 0.0, 100.0);

pub const MIN_CAMERA_DISTANCE: f64 = 12.0;
pub const MAX_CAMERA_DISTANCE: f64 = 300.0;

/// Multiplier applied to the desired distance by the zoom-in button.
pub const ZOOM_IN_FACTOR: f64 = 0.9;
/// Multiplier applied to the desired distance by the zoom-out button.
pub const ZOOM_OUT_FACTOR: f64 = 1.1;

const ZOOM_APPROACH_SPEED: f64 = 0.03;

///
/// A control that makes the camera orbit around the system origin.
///
#[derive(Clone, Copy, Debug)]
pub struct CameraControl {
    /// The minimum distance to the target point.
    pub min_distance: f64,
    /// The maximum distance to the target point.
    pub max_distance: f64,
    /// The desired distance to the target point.
    pub desired_distance: f64,
    /// The current distance to the target point.
    pub current_distance: f64,
}

impl CameraControl {
    pub fn new() -> Self {
        Self {
            min_distance: MIN_CAMERA_DISTANCE,
            max_distance: MAX_CAMERA_DISTANCE,
            desired_distance: HOME_CAMERA_POSITION.magnitude() as f64,
            current_distance: HOME_CAMERA_POSITION.magnitude() as f64,
        }
    }

    /// Handles the events. Must be called each frame.
    pub fn handle_events(&mut self, camera: &mut Camera, events: &mut [Event], elapsed_time: f64) {
        for event in events.iter_mut() {
            self.handle_event(camera, event);
        }
        self.reclamp();
        self.update_zoom(elapsed_time);
        self.apply_distance(camera);
    }

    fn handle_event(&mut self, camera: &mut Camera, event: &mut Event) {
        match event {
            Event::MouseMotion {
                delta,
                button,
                handled,
                ..
            } => {
                if *handled {
                    return;
                }
                if Some(MouseButton::Left) == *button {
                    let speed = 0.01;
                    camera.rotate_around_with_fixed_up(
                        Vec3::zero(),
                        speed * delta.0,
                        speed * delta.1,
                    );
                    let pos = camera.position().normalize();
                    let pos = if is_nan(pos) { Vec3::unit_x() } else { pos };
                    let up = camera.up();
                    camera.set_view(pos, Vec3::zero(), up);
                    *handled = true;
                }
            }
            Event::MouseWheel { delta, handled, .. } => {
                if *handled {
                    return;
                }

                let delta = delta.1 as f64 * -0.02;

                #[cfg(target_family = "wasm")]
                let delta = if *IS_WEB_MOBILE {
                    delta * 1.2
                } else {
                    delta * 0.1
                };

                self.zoom(delta);
                *handled = true;
            }
            Event::PinchGesture { delta, handled, .. } => {
                if *handled {
                    return;
                }
                self.zoom(*delta as f64);
                *handled = true;
            }
            _ => {}
        }
    }

    /// Scales the desired distance, for the zoom buttons in the control
    /// bar. The result is clamped like every other zoom path.
    pub fn zoom_by_factor(&mut self, factor: f64) {
        self.desired_distance =
            (self.desired_distance * factor).clamp(self.min_distance, self.max_distance);
    }

    /// Puts the camera back in the home view and forgets any zoom in
    /// flight.
    pub fn reset(&mut self, camera: &mut Camera) {
        self.desired_distance = HOME_CAMERA_POSITION.magnitude() as f64;
        self.current_distance = self.desired_distance;
        camera.set_view(HOME_CAMERA_POSITION, Vec3::zero(), Vec3::unit_y());
    }

    fn zoom(&mut self, delta: f64) {
        self.desired_distance =
            (self.current_distance * delta.exp()).clamp(self.min_distance, self.max_distance);
    }
    fn reclamp(&mut self) {
        self.desired_distance = self
            .desired_distance
            .clamp(self.min_distance, self.max_distance);
    }
    fn update_zoom(&mut self, elapsed_time: f64) {
        let old_distance = self.current_distance;
        let factor = (-ZOOM_APPROACH_SPEED * elapsed_time).exp().min(1.0);
        let old_diff = self.desired_distance - old_distance;
        let new_diff = old_diff * factor.min(1.0);
        let new_distance = self.desired_distance - new_diff;
        self.current_distance = new_distance;
    }
    fn apply_distance(&self, camera: &mut Camera) {
        let pos = camera.position().normalize();
        let pos = if is_nan(pos) { Vec3::unit_x() } else { pos };
        let up = camera.up();
        camera.set_view(pos * self.current_distance as f32, Vec3::zero(), up);
    }
}

impl Default for CameraControl {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_family = "wasm")]
static IS_WEB_MOBILE: LazyLock<bool> = LazyLock::new(|| {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return false,
    };
    let ua = match window.navigator().user_agent().ok() {
        Some(ua) => ua.to_lowercase(),
        None => return false,
    };
    ua.contains("mobi") || ua.contains("android") || ua.contains("iphone") || ua.contains("ios")
});

fn is_nan(vec: Vec3) -> bool {
    vec.x.is_nan() || vec.y.is_nan() || vec.z.is_nan()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_buttons_scale_desired_distance() {
        let mut control = CameraControl::new();
        control.zoom_by_factor(ZOOM_IN_FACTOR);
        assert!((control.desired_distance - 90.0).abs() < 1e-9);
        control.zoom_by_factor(ZOOM_OUT_FACTOR);
        assert!((control.desired_distance - 99.0).abs() < 1e-9);
    }

    #[test]
    fn zoom_clamps_to_limits() {
        let mut control = CameraControl::new();
        for _ in 0..100 {
            control.zoom_by_factor(ZOOM_IN_FACTOR);
        }
        assert_eq!(control.desired_distance, MIN_CAMERA_DISTANCE);

        for _ in 0..100 {
            control.zoom_by_factor(ZOOM_OUT_FACTOR);
        }
        assert_eq!(control.desired_distance, MAX_CAMERA_DISTANCE);
    }

    #[test]
    fn zoom_approaches_desired_distance_smoothly() {
        let mut control = CameraControl::new();
        control.desired_distance = 50.0;
        let start = control.current_distance;

        control.update_zoom(16.0);
        assert!(control.current_distance < start);
        assert!(control.current_distance > control.desired_distance);

        // A long enough frame lands almost exactly on the target.
        control.update_zoom(100_000.0);
        assert!((control.current_distance - 50.0).abs() < 1e-6);
    }

    #[test]
    fn reset_restores_the_home_view() {
        let mut camera = Camera::new_perspective(
            Viewport::new_at_origo(800, 600),
            Vec3::new(30.0, 40.0, 0.0),
            Vec3::zero(),
            Vec3::unit_y(),
            Degrees { 0: 60.0 },
            0.1,
            1000.0,
        );
        let mut control = CameraControl::new();
        control.desired_distance = 42.0;
        control.current_distance = 42.0;

        control.reset(&mut camera);

        assert_eq!(control.desired_distance, 100.0);
        assert_eq!(control.current_distance, 100.0);
        let pos = camera.position();
        assert!((pos - HOME_CAMERA_POSITION).magnitude() < 1e-4);
    }
}
