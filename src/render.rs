use crate::geometry::{
    depth_shade, point_in_triangle, shade_color, signed_triangle_area, triangle_depth,
    vertex_to_screen, viewport_transform,
};
use crate::obj::Mesh;
use crate::point2d::Point2D;
use crate::screen::ScreenSpace;
use crate::triangle::ProjectedTriangle;

pub const BACKGROUND: (u8, u8, u8) = (0, 0, 0);
/// Base color for flat shading. Texture sampling never feeds into this even
/// though a texture may be loaded alongside the mesh.
const BASE_COLOR: (u8, u8, u8) = (255, 255, 255);

/// Project every mesh triangle into screen space, one `ProjectedTriangle`
/// per index triple. A triple that references a vertex outside `positions`
/// is logged and dropped; the rest of the frame is unaffected.
pub fn project_mesh(mesh: &Mesh, width: u32, height: u32) -> Vec<ProjectedTriangle> {
    let (model_size, offset) = viewport_transform(width, height);
    let mut triangles = Vec::with_capacity(mesh.indices.len() / 3);

    for (tri_no, corners) in mesh.indices.chunks_exact(3).enumerate() {
        let (Some(&v0), Some(&v1), Some(&v2)) = (
            mesh.positions.get(corners[0]),
            mesh.positions.get(corners[1]),
            mesh.positions.get(corners[2]),
        ) else {
            log::error!(
                "triangle {tri_no}: vertex index out of range ({:?} vs {} positions), skipping",
                corners,
                mesh.positions.len()
            );
            continue;
        };

        let depth = triangle_depth(v0, v1, v2);
        let color = shade_color(BASE_COLOR, depth_shade(depth));
        let base = tri_no * 3;
        triangles.push(ProjectedTriangle {
            a: vertex_to_screen(v0, model_size, offset),
            b: vertex_to_screen(v1, model_size, offset),
            c: vertex_to_screen(v2, model_size, offset),
            ta: mesh.uvs[base],
            tb: mesh.uvs[base + 1],
            tc: mesh.uvs[base + 2],
            depth,
            color,
        });
    }

    triangles
}

/// Render one frame: clear, project, then paint back-to-front.
///
/// Visibility comes entirely from the painter's algorithm: a stable sort on
/// the depth key, farthest first, with later triangles overwriting earlier
/// ones where they overlap. Equal-depth triangles keep their mesh order, so
/// the same mesh and viewport always produce the same bytes.
pub fn render(mesh: &Mesh, width: u32, height: u32) -> ScreenSpace {
    let mut screen = ScreenSpace::new(width, height);
    screen.clear(BACKGROUND.0, BACKGROUND.1, BACKGROUND.2, 255);

    let mut triangles = project_mesh(mesh, width, height);
    triangles.sort_by(|p, q| p.depth.total_cmp(&q.depth));

    for triangle in &triangles {
        fill_triangle(&mut screen, triangle);
    }
    screen
}

/// Flat fill over the triangle's bounding box, testing pixel centers. No
/// blending or coverage weighting: a covered pixel takes the triangle's
/// color outright.
fn fill_triangle(screen: &mut ScreenSpace, tri: &ProjectedTriangle) {
    let area = signed_triangle_area(tri.a, tri.b, tri.c);
    if area == 0.0 {
        return;
    }

    let min_x = (tri.a.x.min(tri.b.x).min(tri.c.x).floor() as u32).clamp(0, screen.width - 1);
    let min_y = (tri.a.y.min(tri.b.y).min(tri.c.y).floor() as u32).clamp(0, screen.height - 1);
    let max_x = (tri.a.x.max(tri.b.x).max(tri.c.x).ceil() as u32).clamp(0, screen.width - 1);
    let max_y = (tri.a.y.max(tri.b.y).max(tri.c.y).ceil() as u32).clamp(0, screen.height - 1);

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let p = Point2D {
                x: x as f32 + 0.5,
                y: y as f32 + 0.5,
            };
            if point_in_triangle(tri.a, tri.b, tri.c, p, area) {
                screen.set_pixel(x, y, tri.color.0, tri.color.1, tri.color.2, 255);
            }
        }
    }
}
