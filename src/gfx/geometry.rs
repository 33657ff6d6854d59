//! CPU-side mesh construction.
//!
//! The stock sphere primitive has no texture coordinates, so planets use
//! a latitude/longitude sphere built here with an equirectangular
//! mapping. The ring shapes have no stock counterpart at all.

use std::f32::consts::{PI, TAU};

use three_d::renderer::*;

/// A unit sphere made of `slices` longitude bands and `stacks` latitude
/// bands, with equirectangular uvs. The seam column is duplicated so
/// the texture wraps cleanly.
pub fn uv_sphere(slices: u32, stacks: u32) -> CpuMesh {
    let mut positions = Vec::with_capacity(((slices + 1) * (stacks + 1)) as usize);
    let mut uvs = Vec::with_capacity(positions.capacity());

    for stack in 0..=stacks {
        let v = stack as f32 / stacks as f32;
        let theta = v * PI;
        let (sin_theta, cos_theta) = theta.sin_cos();

        for slice in 0..=slices {
            let u = slice as f32 / slices as f32;
            let phi = u * TAU;
            positions.push(Vec3::new(
                sin_theta * phi.cos(),
                cos_theta,
                sin_theta * phi.sin(),
            ));
            uvs.push(Vec2::new(u, v));
        }
    }

    let mut indices = Vec::with_capacity((slices * stacks * 6) as usize);
    let columns = slices + 1;
    for stack in 0..stacks {
        for slice in 0..slices {
            let a = stack * columns + slice;
            let b = a + columns;
            indices.extend_from_slice(&[a, b, a + 1, a + 1, b, b + 1]);
        }
    }

    // On a unit sphere the position doubles as the outward normal.
    let normals = positions.clone();

    CpuMesh {
        positions: Positions::F32(positions),
        indices: Indices::U32(indices),
        normals: Some(normals),
        uvs: Some(uvs),
        ..Default::default()
    }
}

/// A flat ring in the xz plane between the two radii, facing up.
pub fn annulus(inner_radius: f32, outer_radius: f32, segments: u32) -> CpuMesh {
    let mut positions = Vec::with_capacity(((segments + 1) * 2) as usize);
    let mut uvs = Vec::with_capacity(positions.capacity());

    for segment in 0..=segments {
        let u = segment as f32 / segments as f32;
        let (sin, cos) = (u * TAU).sin_cos();
        positions.push(Vec3::new(inner_radius * cos, 0.0, inner_radius * sin));
        positions.push(Vec3::new(outer_radius * cos, 0.0, outer_radius * sin));
        uvs.push(Vec2::new(u, 0.0));
        uvs.push(Vec2::new(u, 1.0));
    }

    let mut indices = Vec::with_capacity((segments * 6) as usize);
    for segment in 0..segments {
        let a = segment * 2;
        indices.extend_from_slice(&[a, a + 1, a + 2, a + 2, a + 1, a + 3]);
    }

    let normals = vec![Vec3::unit_y(); positions.len()];

    CpuMesh {
        positions: Positions::F32(positions),
        indices: Indices::U32(indices),
        normals: Some(normals),
        uvs: Some(uvs),
        ..Default::default()
    }
}

/// A thin orbit ring centered on the given radius. Wide enough to stay
/// visible at a distance without reading as a disc.
pub fn orbit_ring(radius: f32, segments: u32) -> CpuMesh {
    let half_width = (radius * 0.004).max(0.15);
    annulus(radius - half_width, radius + half_width, segments)
}
