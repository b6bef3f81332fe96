//! Sphere mesh generation.
//!
//! Generates an indexed UV sphere of radius 1 centered at the origin. The
//! grid has `resolution` samples along each parametric axis:
//!
//! - `U` drives the azimuth `theta` over `[0, 2π]`,
//! - `V` drives the polar angle `phi` over `[0, π]`,
//!
//! so the poles sit on the Z axis (`V = 0` is `+Z`, `V = 1` is `-Z`) and the
//! texture seam runs along `theta = 0`. Vertex `(u, v)` lives at index
//! `u + v * resolution`.

use marble_common::MeshError;
use tracing::debug;

use super::types::{SphereVertex, Triangle};

/// An indexed sphere mesh ready for upload.
#[derive(Debug, Clone, PartialEq)]
pub struct SphereMesh {
    resolution: u32,
    vertices: Vec<SphereVertex>,
    triangles: Vec<Triangle>,
}

impl SphereMesh {
    /// Generate a sphere with `resolution` samples per axis.
    ///
    /// Produces `resolution²` vertices and `2 * (resolution - 1)²` triangles.
    pub fn generate(resolution: u32) -> Result<Self, MeshError> {
        let mut vertices = Vec::new();
        let mut triangles = Vec::new();
        generate_sphere(resolution, &mut vertices, &mut triangles)?;
        Ok(Self {
            resolution,
            vertices,
            triangles,
        })
    }

    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    pub fn vertices(&self) -> &[SphereVertex] {
        &self.vertices
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// The index buffer as a flat `u32` slice (three per triangle).
    pub fn indices(&self) -> &[u32] {
        bytemuck::cast_slice(&self.triangles)
    }

    /// Number of indices to draw.
    pub fn index_count(&self) -> usize {
        self.triangles.len() * 3
    }

    /// Hand the buffers over to the renderer.
    pub fn into_parts(self) -> (Vec<SphereVertex>, Vec<Triangle>) {
        (self.vertices, self.triangles)
    }
}

/// Largest resolution whose grid indices all fit in a `u32`.
pub const MAX_RESOLUTION: u32 = 1 << 16;

/// Generate the sphere into caller-owned buffers.
///
/// Both buffers are cleared first. Fails without touching them when
/// `resolution` is outside `2..=MAX_RESOLUTION`.
pub fn generate_sphere(
    resolution: u32,
    vertices: &mut Vec<SphereVertex>,
    triangles: &mut Vec<Triangle>,
) -> Result<(), MeshError> {
    if resolution < 2 {
        return Err(MeshError::InvalidResolution(resolution));
    }
    if resolution > MAX_RESOLUTION {
        return Err(MeshError::ResolutionTooLarge(resolution));
    }

    vertices.clear();
    triangles.clear();

    let n = resolution as usize;
    vertices.reserve(n * n);
    triangles.reserve(2 * (n - 1) * (n - 1));

    for v in 0..resolution {
        for u in 0..resolution {
            vertices.push(sphere_vertex(u, v, resolution));
        }
    }

    // Quad corners: P0=(u,v) P1=(u+1,v) P2=(u+1,v+1) P3=(u,v+1).
    // Both triangles wind counter-clockwise seen from outside.
    for v in 0..resolution - 1 {
        for u in 0..resolution - 1 {
            let p0 = grid_index(u, v, resolution);
            let p1 = grid_index(u + 1, v, resolution);
            let p2 = grid_index(u + 1, v + 1, resolution);
            let p3 = grid_index(u, v + 1, resolution);

            triangles.push(Triangle::new(p0, p3, p1));
            triangles.push(Triangle::new(p3, p2, p1));
        }
    }

    debug!(
        resolution,
        vertices = vertices.len(),
        triangles = triangles.len(),
        "generated sphere mesh"
    );
    Ok(())
}

/// Flat index of grid sample `(u, v)`. Fits in `u32` for any
/// `resolution <= MAX_RESOLUTION`.
pub const fn grid_index(u: u32, v: u32, resolution: u32) -> u32 {
    u + v * resolution
}

fn sphere_vertex(u_index: u32, v_index: u32, resolution: u32) -> SphereVertex {
    let last = (resolution - 1) as f32;
    let u = u_index as f32 / last;
    let v = v_index as f32 / last;

    let theta = std::f32::consts::TAU * u;
    let phi = std::f32::consts::PI * v;

    let (sin_theta, cos_theta) = theta.sin_cos();
    let (sin_phi, cos_phi) = phi.sin_cos();

    let position = glam::Vec3::new(cos_theta * sin_phi, sin_theta * sin_phi, cos_phi);

    SphereVertex {
        position: position.to_array(),
        normal: position.normalize().to_array(),
        color: [1.0, 1.0, 1.0],
        // Flipped on both axes so the texture reads upright from outside.
        uv: [1.0 - u, 1.0 - v],
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    const EPS: f32 = 1e-5;

    fn approx_vec(a: [f32; 3], b: [f32; 3]) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < EPS)
    }

    #[test]
    fn counts_match_resolution() {
        for resolution in [2u32, 3, 4, 7, 16, 33] {
            let mesh = SphereMesh::generate(resolution).unwrap();
            let n = resolution as usize;
            assert_eq!(mesh.vertices().len(), n * n, "resolution {resolution}");
            assert_eq!(
                mesh.triangles().len(),
                2 * (n - 1) * (n - 1),
                "resolution {resolution}"
            );
            assert_eq!(mesh.index_count(), mesh.indices().len());
        }
    }

    #[test]
    fn resolution_below_two_is_rejected() {
        assert_eq!(
            SphereMesh::generate(0).unwrap_err(),
            MeshError::InvalidResolution(0)
        );
        assert_eq!(
            SphereMesh::generate(1).unwrap_err(),
            MeshError::InvalidResolution(1)
        );
    }

    #[test]
    fn resolution_above_index_range_is_rejected() {
        assert_eq!(
            SphereMesh::generate(MAX_RESOLUTION + 1).unwrap_err(),
            MeshError::ResolutionTooLarge(MAX_RESOLUTION + 1)
        );
        assert_eq!(
            SphereMesh::generate(u32::MAX).unwrap_err(),
            MeshError::ResolutionTooLarge(u32::MAX)
        );

        let mut vertices = Vec::new();
        let mut triangles = vec![Triangle::new(0, 1, 2)];
        assert!(generate_sphere(MAX_RESOLUTION + 1, &mut vertices, &mut triangles).is_err());
        assert_eq!(triangles, vec![Triangle::new(0, 1, 2)]);
    }

    #[test]
    fn last_grid_index_at_max_resolution_fits() {
        let last = MAX_RESOLUTION - 1;
        assert_eq!(grid_index(last, last, MAX_RESOLUTION), u32::MAX);
    }

    #[test]
    fn rejected_resolution_leaves_buffers_untouched() {
        let mut vertices = SphereMesh::generate(3).unwrap().vertices().to_vec();
        let mut triangles = Vec::new();
        let before = vertices.clone();
        assert!(generate_sphere(1, &mut vertices, &mut triangles).is_err());
        assert_eq!(vertices, before);
    }

    #[test]
    fn vertices_lie_on_unit_sphere() {
        let mesh = SphereMesh::generate(24).unwrap();
        for (i, v) in mesh.vertices().iter().enumerate() {
            let len = Vec3::from_array(v.position).length();
            assert!((len - 1.0).abs() < EPS, "vertex {i}: length {len}");
        }
    }

    #[test]
    fn normals_are_normalized_positions() {
        let mesh = SphereMesh::generate(24).unwrap();
        for v in mesh.vertices() {
            let expected = Vec3::from_array(v.position).normalize().to_array();
            assert!(approx_vec(v.normal, expected));
            assert!((Vec3::from_array(v.normal).length() - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn uvs_stay_in_unit_square() {
        let mesh = SphereMesh::generate(9).unwrap();
        for v in mesh.vertices() {
            assert!((0.0..=1.0).contains(&v.uv[0]));
            assert!((0.0..=1.0).contains(&v.uv[1]));
            assert_eq!(v.color, [1.0, 1.0, 1.0]);
        }
    }

    #[test]
    fn indices_are_in_bounds() {
        for resolution in [2u32, 5, 20] {
            let mesh = SphereMesh::generate(resolution).unwrap();
            let count = mesh.vertices().len() as u32;
            assert!(mesh.indices().iter().all(|&i| i < count));
        }
    }

    #[test]
    fn generation_is_deterministic() {
        let a = SphereMesh::generate(17).unwrap();
        let b = SphereMesh::generate(17).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn regenerating_into_buffers_clears_previous_contents() {
        let mut vertices = Vec::new();
        let mut triangles = Vec::new();
        generate_sphere(10, &mut vertices, &mut triangles).unwrap();
        generate_sphere(4, &mut vertices, &mut triangles).unwrap();

        let fresh = SphereMesh::generate(4).unwrap();
        assert_eq!(vertices.as_slice(), fresh.vertices());
        assert_eq!(triangles.as_slice(), fresh.triangles());
    }

    #[test]
    fn resolution_four_scenario() {
        let mesh = SphereMesh::generate(4).unwrap();
        assert_eq!(mesh.vertices().len(), 16);
        assert_eq!(mesh.triangles().len(), 18);

        // First sample: U = V = 0 -> north pole.
        let first = mesh.vertices()[0];
        assert!(approx_vec(first.position, [0.0, 0.0, 1.0]));
        assert_eq!(first.uv, [1.0, 1.0]);

        // Last sample: U = V = 1 -> south pole.
        let last = mesh.vertices()[15];
        assert!(approx_vec(last.position, [0.0, 0.0, -1.0]));
        assert_eq!(last.uv, [0.0, 0.0]);
    }

    #[test]
    fn vertex_order_follows_grid_index() {
        let resolution = 5;
        let mesh = SphereMesh::generate(resolution).unwrap();
        // (u=2, v=0) is still on the north pole; (u=0, v=2) is on the equator.
        let pole = mesh.vertices()[grid_index(2, 0, resolution) as usize];
        assert!(approx_vec(pole.position, [0.0, 0.0, 1.0]));
        let equator = mesh.vertices()[grid_index(0, 2, resolution) as usize];
        assert!(approx_vec(equator.position, [1.0, 0.0, 0.0]));
    }

    #[test]
    fn faces_point_outward() {
        let mesh = SphereMesh::generate(16).unwrap();
        let verts = mesh.vertices();
        let mut checked = 0;
        for tri in mesh.triangles() {
            let [a, b, c] = tri.indices().map(|i| Vec3::from_array(verts[i as usize].position));
            let normal = (b - a).cross(c - a);
            // Pole rows collapse to zero-area triangles.
            if normal.length() < 1e-6 {
                continue;
            }
            let centroid = (a + b + c) / 3.0;
            assert!(normal.dot(centroid) > 0.0, "inward face {tri:?}");
            checked += 1;
        }
        assert!(checked > 0);
    }

    #[test]
    fn seam_columns_coincide() {
        let resolution = 8;
        let mesh = SphereMesh::generate(resolution).unwrap();
        for v in 0..resolution {
            let first = mesh.vertices()[grid_index(0, v, resolution) as usize];
            let last = mesh.vertices()[grid_index(resolution - 1, v, resolution) as usize];
            assert!(approx_vec(first.position, last.position));
            assert_eq!(first.uv[0], 1.0);
            assert_eq!(last.uv[0], 0.0);
        }
    }
}
