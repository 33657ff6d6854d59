use glam::DVec3;
use three_d::renderer::*;

use crate::gfx::geometry;
use crate::registry::{
    BodyId, REGISTRY, SATURN_RING_INNER_RADIUS, SATURN_RING_OUTER_RADIUS,
};
use crate::sim::SimState;

const SPHERE_SLICES: u32 = 48;
const SPHERE_STACKS: u32 = 32;
const RING_SEGMENTS: u32 = 128;

/// Untextured fill color shown until a body's texture arrives, or
/// forever if its fetch failed.
const FALLBACK_SUN_COLOR: Srgba = Srgba {
    r: 253,
    g: 184,
    b: 19,
    a: 255,
};
const FALLBACK_PLANET_COLOR: Srgba = Srgba {
    r: 128,
    g: 128,
    b: 128,
    a: 255,
};

const ORBIT_RING_COLOR: Srgba = Srgba {
    r: 255,
    g: 255,
    b: 255,
    a: 77,
};
const SATURN_RING_COLOR: Srgba = Srgba {
    r: 210,
    g: 180,
    b: 140,
    a: 179,
};

/// Everything that gets drawn, owned for the lifetime of the program.
/// Geometry is uploaded once; per-frame work is only transformation
/// updates driven by [`apply`](Self::apply).
pub struct SceneObjects {
    context: Context,
    sun: Gm<Mesh, ColorMaterial>,
    /// Indexed by `BodyId::index() - 1`; the sun is not in here.
    planets: Vec<Gm<Mesh, PhysicalMaterial>>,
    orbit_rings: Vec<Gm<Mesh, ColorMaterial>>,
    saturn_ring: Gm<Mesh, ColorMaterial>,
    skybox: Option<Skybox>,
}

impl SceneObjects {
    pub fn new(context: &Context) -> Self {
        let sphere = geometry::uv_sphere(SPHERE_SLICES, SPHERE_STACKS);

        // The sun is self-lit, so it renders unlit while the planets
        // pick up the point light sitting inside it.
        let sun = Gm::new(
            Mesh::new(context, &sphere),
            ColorMaterial {
                color: FALLBACK_SUN_COLOR,
                ..Default::default()
            },
        );

        let planets = REGISTRY
            .iter()
            .filter(|body| !body.id.is_sun())
            .map(|_| {
                Gm::new(
                    Mesh::new(context, &sphere),
                    PhysicalMaterial::new_opaque(
                        context,
                        &CpuMaterial {
                            albedo: FALLBACK_PLANET_COLOR,
                            ..Default::default()
                        },
                    ),
                )
            })
            .collect();

        let orbit_rings = REGISTRY
            .iter()
            .filter(|body| !body.id.is_sun())
            .map(|body| {
                Gm::new(
                    Mesh::new(
                        context,
                        &geometry::orbit_ring(body.orbit_radius as f32, RING_SEGMENTS),
                    ),
                    translucent_material(ORBIT_RING_COLOR),
                )
            })
            .collect();

        let saturn_ring = Gm::new(
            Mesh::new(
                context,
                &geometry::annulus(
                    SATURN_RING_INNER_RADIUS as f32,
                    SATURN_RING_OUTER_RADIUS as f32,
                    RING_SEGMENTS,
                ),
            ),
            translucent_material(SATURN_RING_COLOR),
        );

        Self {
            context: context.clone(),
            sun,
            planets,
            orbit_rings,
            saturn_ring,
            skybox: None,
        }
    }

    /// Moves every drawn object to where the simulation says it is.
    pub fn apply(&mut self, state: &SimState) {
        for body in &REGISTRY {
            let transformation = body_transformation(
                state.position(body.id),
                state.spin_angle(body.id),
                body.visual_radius,
            );
            match body.id.index().checked_sub(1) {
                None => self.sun.set_transformation(transformation),
                Some(slot) => self.planets[slot].set_transformation(transformation),
            }
        }

        // The ring mesh is built at its real radii in Saturn's orbital
        // plane, so it follows the planet's translation and spin but
        // not its scale.
        self.saturn_ring.set_transformation(body_transformation(
            state.position(BodyId::Saturn),
            state.spin_angle(BodyId::Saturn),
            1.0,
        ));
    }

    /// Installs a fetched texture on a body, replacing its fallback
    /// color.
    pub fn set_body_texture(&mut self, id: BodyId, texture: &CpuTexture) {
        let texture = Texture2DRef::from_cpu_texture(&self.context, texture);
        match id.index().checked_sub(1) {
            None => {
                self.sun.material.color = Srgba::WHITE;
                self.sun.material.texture = Some(texture);
            }
            Some(slot) => {
                let material = &mut self.planets[slot].material;
                material.albedo = Srgba::WHITE;
                material.albedo_texture = Some(texture);
            }
        }
    }

    /// Swaps in the starfield. Only called once all six faces have
    /// arrived; until then the background stays the clear color.
    pub fn set_skybox(&mut self, faces: &[CpuTexture; 6]) {
        self.skybox = Some(Skybox::new(
            &self.context,
            &faces[0],
            &faces[1],
            &faces[2],
            &faces[3],
            &faces[4],
            &faces[5],
        ));
    }

    /// Render list, back to front: skybox, opaque bodies, then the
    /// translucent rings.
    pub fn objects(&self) -> Vec<&dyn Object> {
        let mut objects: Vec<&dyn Object> = Vec::with_capacity(self.planets.len() * 2 + 3);
        if let Some(skybox) = &self.skybox {
            objects.push(skybox);
        }
        objects.push(&self.sun);
        for planet in &self.planets {
            objects.push(planet);
        }
        for ring in &self.orbit_rings {
            objects.push(ring);
        }
        objects.push(&self.saturn_ring);
        objects
    }
}

fn translucent_material(color: Srgba) -> ColorMaterial {
    ColorMaterial {
        color,
        is_transparent: true,
        render_states: RenderStates {
            blend: Blend::TRANSPARENCY,
            ..Default::default()
        },
        ..Default::default()
    }
}

fn to_render_space(position: DVec3) -> Vec3 {
    Vec3::new(position.x as f32, position.y as f32, position.z as f32)
}

/// World transform for a body: place it, spin it about its own axis,
/// then blow the unit sphere up to the body's visual radius.
fn body_transformation(position: DVec3, spin_angle: f32, visual_radius: f64) -> Mat4 {
    Mat4::from_translation(to_render_space(position))
        * Mat4::from_angle_y(Rad(spin_angle))
        * Mat4::from_scale(visual_radius as f32)
}
