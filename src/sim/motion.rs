use glam::DVec3;

/// Converts accumulated simulated milliseconds into an orbit-angle rate.
/// The single tunable for how fast the whole system appears to move.
pub const ORBIT_TIME_SCALE: f64 = 0.001;

/// Self-rotation increment per rendered frame, in radians.
///
/// Tied to frame cadence rather than elapsed time, and not gated on
/// pause: bodies keep spinning in place while the orbits are frozen.
pub const SPIN_STEP: f32 = 0.008;

/// Orbit angle in radians for a body at the given simulated time.
#[inline]
pub fn orbit_angle(sim_time_ms: f64, angular_speed: f64) -> f64 {
    sim_time_ms * ORBIT_TIME_SCALE * angular_speed
}

/// Position on a circular orbit around `sun_position`.
///
/// Only x and z move; every orbit lies in the xz plane.
#[inline]
pub fn orbit_position(sun_position: DVec3, orbit_radius: f64, angle: f64) -> DVec3 {
    DVec3 {
        x: sun_position.x + orbit_radius * angle.cos(),
        y: sun_position.y,
        z: sun_position.z + orbit_radius * angle.sin(),
    }
}
