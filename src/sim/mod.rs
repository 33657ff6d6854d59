pub mod clock;
pub mod motion;

use glam::DVec3;

use crate::registry::{BODY_COUNT, BodyId, REGISTRY};
use clock::SimClock;
use motion::{SPIN_STEP, orbit_angle, orbit_position};

/// Process-wide mutable simulation state, created once at startup and
/// owned by the frame loop. The control surface mutates it; the updater
/// and picker read it.
#[derive(Clone, Debug)]
pub struct SimState {
    clock: SimClock,
    pub paused: bool,
    /// Per-body angular-speed multipliers, indexed by `BodyId::index()`.
    /// Initialized from the registry's base speeds, mutated by the sliders.
    speed_overrides: [f64; BODY_COUNT],
    /// Per-body self-rotation angles in radians, advanced every frame.
    spin_angles: [f32; BODY_COUNT],
    /// Live render-space positions, indexed by `BodyId::index()`.
    positions: [DVec3; BODY_COUNT],
    /// Currently inspected body. Replaced by picks, never auto-cleared.
    pub selected: Option<BodyId>,
    pub light_theme: bool,
}

impl SimState {
    pub fn new() -> Self {
        let mut state = Self {
            clock: SimClock::new(),
            paused: false,
            speed_overrides: core::array::from_fn(|i| REGISTRY[i].base_angular_speed),
            spin_angles: [0.0; BODY_COUNT],
            positions: [DVec3::ZERO; BODY_COUNT],
            selected: None,
            light_theme: false,
        };
        // Place every body at its time-zero spot before the first frame.
        state.write_positions();
        state
    }

    /// Feeds one frame timestamp in: advances the clock and the spin
    /// angles, then recomputes orbit positions unless paused. Returns the
    /// measured frame delta in milliseconds.
    pub fn advance_frame(&mut self, timestamp_ms: f64) -> f64 {
        let delta = self.clock.advance(timestamp_ms, self.paused);

        // Spin is tied to frame cadence and keeps going while paused.
        for spin in &mut self.spin_angles {
            *spin += SPIN_STEP;
        }

        if !self.paused {
            self.write_positions();
        }

        delta
    }

    fn write_positions(&mut self) {
        let sun_position = self.positions[BodyId::Sun.index()];
        for body in &REGISTRY {
            if body.id.is_sun() {
                continue;
            }
            let angle = orbit_angle(
                self.clock.sim_time_ms(),
                self.speed_overrides[body.id.index()],
            );
            self.positions[body.id.index()] =
                orbit_position(sun_position, body.orbit_radius, angle);
        }
    }

    #[inline]
    pub fn sim_time_ms(&self) -> f64 {
        self.clock.sim_time_ms()
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn toggle_theme(&mut self) {
        self.light_theme = !self.light_theme;
    }

    #[inline]
    pub fn speed_override(&self, id: BodyId) -> f64 {
        self.speed_overrides[id.index()]
    }

    pub fn set_speed_override(&mut self, id: BodyId, multiplier: f64) {
        self.speed_overrides[id.index()] = multiplier;
    }

    /// Applies a pick result. A hit replaces the selection; a miss
    /// leaves it alone, so the info panel never vanishes on a stray
    /// click.
    pub fn apply_pick(&mut self, hit: Option<BodyId>) {
        if let Some(id) = hit {
            self.selected = Some(id);
        }
    }

    /// Mutable slider binding for one body's speed multiplier.
    pub fn speed_override_mut(&mut self, id: BodyId) -> &mut f64 {
        &mut self.speed_overrides[id.index()]
    }

    #[inline]
    pub fn position(&self, id: BodyId) -> DVec3 {
        self.positions[id.index()]
    }

    #[inline]
    pub fn spin_angle(&self, id: BodyId) -> f32 {
        self.spin_angles[id.index()]
    }
}

impl Default for SimState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bodies_start_on_positive_x() {
        let state = SimState::new();
        for body in &REGISTRY {
            let pos = state.position(body.id);
            assert_eq!(pos.x, body.orbit_radius);
            assert_eq!(pos.y, 0.0);
            assert_eq!(pos.z, 0.0);
        }
    }

    #[test]
    fn pause_freezes_orbits_but_not_spin() {
        let mut state = SimState::new();
        state.advance_frame(0.0);
        state.advance_frame(500.0);
        let earth_before = state.position(BodyId::Earth);
        let spin_before = state.spin_angle(BodyId::Earth);

        state.paused = true;
        state.advance_frame(1000.0);
        state.advance_frame(1500.0);

        // Orbit frozen exactly where pause caught it.
        assert_eq!(state.position(BodyId::Earth), earth_before);
        // Spin kept advancing by the per-frame constant.
        let expected_spin = spin_before + 2.0 * SPIN_STEP;
        assert!((state.spin_angle(BodyId::Earth) - expected_spin).abs() < 1e-6);
    }

    #[test]
    fn sim_time_is_frozen_under_pause() {
        let mut state = SimState::new();
        state.advance_frame(0.0);
        state.advance_frame(250.0);
        assert_eq!(state.sim_time_ms(), 250.0);

        state.paused = true;
        state.advance_frame(2000.0);
        assert_eq!(state.sim_time_ms(), 250.0);

        state.paused = false;
        state.advance_frame(2016.0);
        assert_eq!(state.sim_time_ms(), 266.0);
    }

    #[test]
    fn speed_override_only_affects_its_body() {
        let mut state = SimState::new();
        state.advance_frame(0.0);
        state.set_speed_override(BodyId::Mercury, 4.0);
        state.advance_frame(1000.0);

        // Mercury follows the override...
        let angle = 1000.0 * motion::ORBIT_TIME_SCALE * 4.0;
        let expected = motion::orbit_position(DVec3::ZERO, 50.0, angle);
        let mercury = state.position(BodyId::Mercury);
        assert!((mercury.x - expected.x).abs() < 1e-9);
        assert!((mercury.z - expected.z).abs() < 1e-9);

        // ...while Earth still uses its base speed.
        let earth_angle = 1000.0 * motion::ORBIT_TIME_SCALE * 1.0;
        let earth_expected = motion::orbit_position(DVec3::ZERO, 70.0, earth_angle);
        let earth = state.position(BodyId::Earth);
        assert!((earth.x - earth_expected.x).abs() < 1e-9);
        assert!((earth.z - earth_expected.z).abs() < 1e-9);
    }

    #[test]
    fn sun_never_moves() {
        let mut state = SimState::new();
        state.advance_frame(0.0);
        state.advance_frame(12345.0);
        assert_eq!(state.position(BodyId::Sun), DVec3::ZERO);
    }

    #[test]
    fn selection_is_sticky() {
        let mut state = SimState::new();
        state.selected = Some(BodyId::Venus);
        state.advance_frame(0.0);
        state.toggle_pause();
        state.advance_frame(100.0);
        assert_eq!(state.selected, Some(BodyId::Venus));
    }

    #[test]
    fn missed_pick_leaves_selection_alone() {
        let mut state = SimState::new();
        state.apply_pick(None);
        assert_eq!(state.selected, None);

        state.apply_pick(Some(BodyId::Venus));
        state.apply_pick(None);
        assert_eq!(state.selected, Some(BodyId::Venus));
    }

    #[test]
    fn pick_replaces_selection() {
        let mut state = SimState::new();
        state.apply_pick(Some(BodyId::Venus));
        state.apply_pick(Some(BodyId::Mars));
        assert_eq!(state.selected, Some(BodyId::Mars));
    }
}
