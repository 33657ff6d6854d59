use ordered_float::NotNan;
use strum::IntoEnumIterator;
use three_d::renderer::*;

use crate::registry::BodyId;
use crate::sim::SimState;

/// A picking ray in world space.
#[derive(Clone, Copy, Debug)]
pub struct PickRay {
    pub origin: Vec3,
    pub direction: Vec3,
}

/// Converts a cursor position in physical pixels, origin at the bottom
/// left, into normalized device coordinates in [-1, 1] on both axes.
pub fn normalized_cursor(position: (f32, f32), viewport: Viewport) -> Vec2 {
    Vec2 {
        x: 2.0 * (position.0 - viewport.x as f32) / viewport.width as f32 - 1.0,
        y: 2.0 * (position.1 - viewport.y as f32) / viewport.height as f32 - 1.0,
    }
}

/// The world-space ray from the camera through the given normalized
/// device coordinates.
///
/// Returns `None` if the combined camera matrix is singular, which only
/// happens with a degenerate viewport.
pub fn ray_through(camera: &Camera, ndc: Vec2) -> Option<PickRay> {
    let inverse = (camera.projection() * camera.view()).invert()?;

    let near = inverse * Vec4::new(ndc.x, ndc.y, -1.0, 1.0);
    let far = inverse * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
    if near.w == 0.0 || far.w == 0.0 {
        return None;
    }
    let near = near.truncate() / near.w;
    let far = far.truncate() / far.w;

    let direction = far - near;
    if direction.magnitude2() == 0.0 {
        return None;
    }
    Some(PickRay {
        origin: near,
        direction: direction.normalize(),
    })
}

/// The distance along `ray` to the closest intersection with the sphere,
/// or `None` if the ray misses. Intersections behind the origin do not
/// count; a ray starting inside the sphere hits the far surface.
pub fn intersect_sphere(ray: PickRay, center: Vec3, radius: f32) -> Option<f32> {
    let to_center = ray.origin - center;
    let b = 2.0 * ray.direction.dot(to_center);
    let c = to_center.magnitude2() - radius * radius;
    let discriminant = b * b - 4.0 * c;
    if discriminant < 0.0 {
        return None;
    }

    let root = discriminant.sqrt();
    let near = (-b - root) / 2.0;
    let far = (-b + root) / 2.0;
    if near >= 0.0 {
        Some(near)
    } else if far >= 0.0 {
        Some(far)
    } else {
        None
    }
}

/// Tests every body against the cursor ray and returns the one whose
/// surface is closest to the camera, or `None` on a miss.
///
/// Spheres are tested at their simulated positions and visual radii, so
/// this stays consistent with what is drawn even while paused.
pub fn pick_body(camera: &Camera, ndc: Vec2, state: &SimState) -> Option<BodyId> {
    let ray = ray_through(camera, ndc)?;

    BodyId::iter()
        .filter_map(|id| {
            let center = state.position(id);
            let center = Vec3::new(center.x as f32, center.y as f32, center.z as f32);
            let radius = id.info().visual_radius as f32;
            let distance = intersect_sphere(ray, center, radius)?;
            let distance = NotNan::new(distance).ok()?;
            Some((id, distance))
        })
        .min_by_key(|(_, distance)| *distance)
        .map(|(id, _)| id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_camera(position: Vec3, target: Vec3) -> Camera {
        Camera::new_perspective(
            Viewport::new_at_origo(800, 600),
            position,
            target,
            Vec3::unit_y(),
            Degrees { 0: 60.0 },
            0.1,
            1000.0,
        )
    }

    #[test]
    fn cursor_center_maps_to_ndc_origin() {
        let viewport = Viewport::new_at_origo(800, 600);
        let ndc = normalized_cursor((400.0, 300.0), viewport);
        assert!(ndc.x.abs() < 1e-6);
        assert!(ndc.y.abs() < 1e-6);
    }

    #[test]
    fn cursor_corners_map_to_ndc_extremes() {
        let viewport = Viewport::new_at_origo(800, 600);
        let bottom_left = normalized_cursor((0.0, 0.0), viewport);
        assert!((bottom_left.x + 1.0).abs() < 1e-6);
        assert!((bottom_left.y + 1.0).abs() < 1e-6);

        let top_right = normalized_cursor((800.0, 600.0), viewport);
        assert!((top_right.x - 1.0).abs() < 1e-6);
        assert!((top_right.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn center_ray_points_at_target() {
        let camera = test_camera(Vec3::new(0.0, 0.0, 100.0), Vec3::new(0.0, 0.0, 0.0));
        let ray = ray_through(&camera, Vec2::new(0.0, 0.0)).unwrap();
        assert!(ray.direction.x.abs() < 1e-4);
        assert!(ray.direction.y.abs() < 1e-4);
        assert!((ray.direction.z + 1.0).abs() < 1e-4);
    }

    #[test]
    fn sphere_hit_distance_is_to_near_surface() {
        let ray = PickRay {
            origin: Vec3::new(0.0, 0.0, 100.0),
            direction: -Vec3::unit_z(),
        };
        let distance = intersect_sphere(ray, Vec3::new(0.0, 0.0, 0.0), 20.0).unwrap();
        assert!((distance - 80.0).abs() < 1e-4);
    }

    #[test]
    fn sphere_behind_ray_is_not_a_hit() {
        let ray = PickRay {
            origin: Vec3::new(0.0, 0.0, 100.0),
            direction: Vec3::unit_z(),
        };
        assert!(intersect_sphere(ray, Vec3::new(0.0, 0.0, 0.0), 20.0).is_none());
    }

    #[test]
    fn offset_sphere_is_missed() {
        let ray = PickRay {
            origin: Vec3::new(0.0, 0.0, 100.0),
            direction: -Vec3::unit_z(),
        };
        assert!(intersect_sphere(ray, Vec3::new(50.0, 0.0, 0.0), 2.0).is_none());
    }

    #[test]
    fn center_click_picks_the_sun() {
        let state = SimState::new();
        let camera = test_camera(Vec3::new(0.0, 0.0, 100.0), Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(
            pick_body(&camera, Vec2::new(0.0, 0.0), &state),
            Some(BodyId::Sun)
        );
    }

    #[test]
    fn nearest_body_wins_when_several_line_up() {
        // Looking down the positive x axis from beyond Neptune: every
        // body sits on that axis at simulation start, so the ray passes
        // through all of them and the closest surface must win.
        let state = SimState::new();
        let camera = test_camera(Vec3::new(300.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(
            pick_body(&camera, Vec2::new(0.0, 0.0), &state),
            Some(BodyId::Neptune)
        );
    }

    #[test]
    fn empty_sky_picks_nothing() {
        let state = SimState::new();
        // Facing away from the whole system.
        let camera = test_camera(Vec3::new(0.0, 0.0, 1000.0), Vec3::new(0.0, 0.0, 2000.0));
        assert_eq!(pick_body(&camera, Vec2::new(0.0, 0.0), &state), None);
    }
}
