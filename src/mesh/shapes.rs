//! Box geometry for wall placements

use glam::{Vec2, Vec3};

use super::vertex::Vertex;
use crate::layout::{ArenaLayout, WallPlacement};

/// Vertices per wall box (6 faces, 2 triangles each)
pub const WALL_BOX_VERTICES: usize = 36;

/// Ground-plane corners of a wall slab of the given thickness,
/// outer edge first
pub fn footprint(wall: &WallPlacement, thickness: f32) -> [Vec2; 4] {
    let (a, b) = wall.endpoints();
    let inset = wall.inward_normal() * (thickness * 0.5);
    [a - inset, b - inset, b + inset, a + inset]
}

/// Triangle list for one wall, base at y = 0
pub fn wall_box(wall: &WallPlacement, height: f32, thickness: f32) -> Vec<Vertex> {
    let dir = wall.direction();
    let inward = wall.inward_normal();

    let along = Vec3::new(dir.x, 0.0, dir.y) * (wall.length * 0.5);
    let across = Vec3::new(inward.x, 0.0, inward.y) * (thickness * 0.5);
    let up = Vec3::Y * (height * 0.5);
    let center = Vec3::new(wall.center_x, height * 0.5, wall.center_z);

    // (offset to face center, the face's two half-extent spans)
    let faces = [
        (along, across, up),
        (-along, across, up),
        (across, along, up),
        (-across, along, up),
        (up, along, across),
        (-up, along, across),
    ];

    let mut vertices = Vec::with_capacity(WALL_BOX_VERTICES);
    for (offset, s, t) in faces {
        let normal = offset.normalize_or_zero();
        // Counter-clockwise about the outward normal
        let (s, t) = if s.cross(t).dot(normal) < 0.0 {
            (t, s)
        } else {
            (s, t)
        };
        let c = center + offset;
        let corners = [c - s - t, c + s - t, c + s + t, c - s + t];

        // Two triangles
        for i in [0, 1, 2, 0, 2, 3] {
            vertices.push(Vertex::from_vec3(corners[i], normal));
        }
    }

    vertices
}

/// All walls of a layout in one buffer
pub fn layout_vertices(layout: &ArenaLayout, height: f32, thickness: f32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(layout.len() * WALL_BOX_VERTICES);
    for wall in layout {
        vertices.extend(wall_box(wall, height, thickness));
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{ShapeSpec, compute_layout};

    #[test]
    fn test_footprint_of_axis_aligned_wall() {
        // -Z wall, long axis along +X, inward is +Z
        let wall = WallPlacement::new(0.0, -10.0, 0.0, 20.0);
        let corners = footprint(&wall, 2.0);
        let expected = [
            Vec2::new(-10.0, -11.0),
            Vec2::new(10.0, -11.0),
            Vec2::new(10.0, -9.0),
            Vec2::new(-10.0, -9.0),
        ];
        for (c, e) in corners.iter().zip(expected) {
            assert!((*c - e).length() < 1e-4, "{c} != {e}");
        }
    }

    #[test]
    fn test_wall_box_stays_inside_footprint() {
        let layout = compute_layout(&ShapeSpec::octagon(50.0)).unwrap();
        let wall = layout.placements()[3];
        let verts = wall_box(&wall, 5.0, 1.0);
        assert_eq!(verts.len(), WALL_BOX_VERTICES);

        let dir = wall.direction();
        let inward = wall.inward_normal();
        for v in &verts {
            let p = v.position();
            assert!(p.y >= -1e-4 && p.y <= 5.0 + 1e-4);
            let rel = Vec2::new(p.x, p.z) - wall.center();
            assert!(rel.dot(dir).abs() <= wall.length * 0.5 + 1e-3);
            assert!(rel.dot(inward).abs() <= 0.5 + 1e-3);
            assert!((v.normal().length() - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_normals_point_away_from_box_center() {
        let wall = WallPlacement::new(3.0, 4.0, 0.7, 6.0);
        let center = Vec3::new(3.0, 1.0, 4.0);
        for v in wall_box(&wall, 2.0, 0.5) {
            assert!((v.position() - center).dot(v.normal()) > 0.0);
        }
    }

    #[test]
    fn test_triangles_wind_counter_clockwise() {
        let walls = [
            WallPlacement::new(0.0, -10.0, 0.0, 20.0),
            WallPlacement::new(3.0, 4.0, 0.7, 6.0),
            WallPlacement::new(-75.0, 0.0, std::f32::consts::FRAC_PI_2, 200.0),
        ];
        for wall in &walls {
            let verts = wall_box(wall, 5.0, 1.0);
            for tri in verts.chunks_exact(3) {
                let (a, b, c) = (tri[0].position(), tri[1].position(), tri[2].position());
                let facing = (b - a).cross(c - a).dot(tri[0].normal());
                assert!(facing > 0.0, "clockwise triangle on {wall:?}");
            }
        }
    }

    #[test]
    fn test_layout_vertices_covers_every_wall() {
        let layout = compute_layout(&ShapeSpec::rectangle(150.0, 200.0)).unwrap();
        let verts = layout_vertices(&layout, 5.0, 1.0);
        assert_eq!(verts.len(), 4 * WALL_BOX_VERTICES);
    }
}
