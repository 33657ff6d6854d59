use strum_macros::{Display, EnumIter};

/// Stable identifier for a celestial body.
///
/// The discriminant doubles as the index into [`REGISTRY`] and into every
/// per-body array in the simulation state, so the ordering here is the
/// heliocentric ordering and must not be shuffled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum BodyId {
    Sun,
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

pub const BODY_COUNT: usize = 9;

impl BodyId {
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn is_sun(self) -> bool {
        self == BodyId::Sun
    }

    /// The registry entry for this body. Infallible: the registry is closed
    /// and covers every variant by construction.
    #[inline]
    pub fn info(self) -> &'static CelestialBody {
        &REGISTRY[self.index()]
    }
}

/// Immutable display metadata and render-space parameters for one body.
#[derive(Debug)]
pub struct CelestialBody {
    pub id: BodyId,
    pub display_name: &'static str,
    pub description: &'static str,
    /// Display string, not a number; shown verbatim in the info panel.
    pub diameter: &'static str,
    /// Display string, not a number; shown verbatim in the info panel.
    pub distance_from_sun: &'static str,
    /// Render-space sphere radius.
    pub visual_radius: f64,
    /// Render-space distance from the origin. 0 for the Sun, which never orbits.
    pub orbit_radius: f64,
    /// Default revolution-rate multiplier. 0 for the Sun.
    pub base_angular_speed: f64,
    /// Equirectangular texture, relative to the served asset root.
    pub texture_path: &'static str,
}

pub static REGISTRY: [CelestialBody; BODY_COUNT] = [
    CelestialBody {
        id: BodyId::Sun,
        display_name: "Sun",
        description: "The Sun is the star at the center of the Solar System. \
            It is a nearly perfect sphere of hot plasma.",
        diameter: "1,392,700 km",
        distance_from_sun: "0 AU",
        visual_radius: 20.0,
        orbit_radius: 0.0,
        base_angular_speed: 0.0,
        texture_path: "assets/img/sun_hd.jpg",
    },
    CelestialBody {
        id: BodyId::Mercury,
        display_name: "Mercury",
        description: "Mercury is the smallest and innermost planet in the Solar System. \
            Its orbital period around the Sun is 87.97 days.",
        diameter: "4,879 km",
        distance_from_sun: "0.39 AU",
        visual_radius: 2.0,
        orbit_radius: 50.0,
        base_angular_speed: 2.0,
        texture_path: "assets/img/mercury_hd.jpg",
    },
    CelestialBody {
        id: BodyId::Venus,
        display_name: "Venus",
        description: "Venus is the second planet from the Sun and is Earth's \
            closest planetary neighbor.",
        diameter: "12,104 km",
        distance_from_sun: "0.72 AU",
        visual_radius: 3.0,
        orbit_radius: 60.0,
        base_angular_speed: 1.5,
        texture_path: "assets/img/venus_hd.jpg",
    },
    CelestialBody {
        id: BodyId::Earth,
        display_name: "Earth",
        description: "Earth is the third planet from the Sun and the only \
            astronomical object known to harbor life.",
        diameter: "12,742 km",
        distance_from_sun: "1 AU",
        visual_radius: 4.0,
        orbit_radius: 70.0,
        base_angular_speed: 1.0,
        texture_path: "assets/img/earth_hd.jpg",
    },
    CelestialBody {
        id: BodyId::Mars,
        display_name: "Mars",
        description: "Mars is the fourth planet from the Sun and the \
            second-smallest planet in the Solar System.",
        diameter: "6,779 km",
        distance_from_sun: "1.52 AU",
        visual_radius: 3.5,
        orbit_radius: 80.0,
        base_angular_speed: 0.8,
        texture_path: "assets/img/mars_hd.jpg",
    },
    CelestialBody {
        id: BodyId::Jupiter,
        display_name: "Jupiter",
        description: "Jupiter is the fifth planet from the Sun and the largest \
            in the Solar System.",
        diameter: "139,820 km",
        distance_from_sun: "5.20 AU",
        visual_radius: 10.0,
        orbit_radius: 100.0,
        base_angular_speed: 0.7,
        texture_path: "assets/img/jupiter_hd.jpg",
    },
    CelestialBody {
        id: BodyId::Saturn,
        display_name: "Saturn",
        description: "Saturn is the sixth planet from the Sun and the \
            second-largest in the Solar System, after Jupiter.",
        diameter: "116,460 km",
        distance_from_sun: "9.58 AU",
        visual_radius: 8.0,
        orbit_radius: 120.0,
        base_angular_speed: 0.6,
        texture_path: "assets/img/saturn_hd.jpg",
    },
    CelestialBody {
        id: BodyId::Uranus,
        display_name: "Uranus",
        description: "Uranus is the seventh planet from the Sun. Its name is a \
            reference to the Greek god of the sky.",
        diameter: "50,724 km",
        distance_from_sun: "19.18 AU",
        visual_radius: 6.0,
        orbit_radius: 140.0,
        base_angular_speed: 0.5,
        texture_path: "assets/img/uranus_hd.jpg",
    },
    CelestialBody {
        id: BodyId::Neptune,
        display_name: "Neptune",
        description: "Neptune is the eighth and farthest-known Solar planet \
            from the Sun.",
        diameter: "49,244 km",
        distance_from_sun: "30.07 AU",
        visual_radius: 5.0,
        orbit_radius: 160.0,
        base_angular_speed: 0.4,
        texture_path: "assets/img/neptune_hd.jpg",
    },
];

/// Saturn's ring annulus, render-space radii.
pub const SATURN_RING_INNER_RADIUS: f64 = 9.5;
pub const SATURN_RING_OUTER_RADIUS: f64 = 14.0;

/// The six skybox face images, in three-d order:
/// right, left, up, down, front, back.
pub const SKYBOX_FACE_PATHS: [&str; 6] = [
    "assets/img/skybox/space_rt.png",
    "assets/img/skybox/space_lf.png",
    "assets/img/skybox/space_up.png",
    "assets/img/skybox/space_dn.png",
    "assets/img/skybox/space_ft.png",
    "assets/img/skybox/space_bk.png",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    #[test]
    fn ids_match_registry_slots() {
        assert_eq!(BodyId::iter().count(), BODY_COUNT);
        for (index, body) in REGISTRY.iter().enumerate() {
            assert_eq!(body.id.index(), index);
            assert_eq!(body.id.info().id, body.id);
        }
    }

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<BodyId> = BodyId::iter().collect();
        assert_eq!(ids.len(), BODY_COUNT);
    }

    #[test]
    fn sun_does_not_revolve() {
        let sun = BodyId::Sun.info();
        assert_eq!(sun.orbit_radius, 0.0);
        assert_eq!(sun.base_angular_speed, 0.0);
    }

    #[test]
    fn orbit_radii_strictly_increase_heliocentrically() {
        // Mercury..Neptune must not produce overlapping orbit rings.
        let mut prev = 0.0;
        for body in REGISTRY.iter().skip(1) {
            assert!(
                body.orbit_radius > prev,
                "{} orbit radius {} not greater than {}",
                body.display_name,
                body.orbit_radius,
                prev
            );
            prev = body.orbit_radius;
        }
    }

    #[test]
    fn visual_parameters_are_sane() {
        for body in &REGISTRY {
            assert!(body.visual_radius > 0.0);
            assert!(body.orbit_radius >= 0.0);
            if !body.id.is_sun() {
                assert!(body.base_angular_speed > 0.0);
            }
            assert!(!body.texture_path.is_empty());
        }
    }
}
