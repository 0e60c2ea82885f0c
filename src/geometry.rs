use crate::point2d::{Point2D, dot2, perp};
use crate::point3d::Point3D;

/// Fixed orthographic mapping for a viewport: scale in pixels per model unit
/// plus the screen anchor (centered horizontally, three-quarters down).
pub fn viewport_transform(width: u32, height: u32) -> (f32, Point2D) {
    let model_size = height as f32 * 0.1;
    let offset = Point2D { x: width as f32 * 0.5, y: height as f32 * 0.75 };
    (model_size, offset)
}

/// Map a model-space vertex to screen space. The model's up axis points the
/// opposite way from screen y, hence the flip.
#[inline(always)]
pub fn vertex_to_screen(vertex: Point3D, model_size: f32, offset: Point2D) -> Point2D {
    Point2D {
        x: vertex.x * model_size + offset.x,
        y: -vertex.y * model_size + offset.y,
    }
}

/// Sort/shade key for a triangle: mean camera-space z, larger = nearer.
#[inline(always)]
pub fn triangle_depth(v0: Point3D, v1: Point3D, v2: Point3D) -> f32 {
    ((v0 + v1 + v2) * 0.3333).z
}

/// Flat-shade intensity from the depth key alone. Normals are carried by the
/// mesh but take no part in shading.
#[inline(always)]
pub fn depth_shade(depth: f32) -> f32 {
    (1.0 + depth) * 0.5
}

/// Scale a base color by a shade intensity. The float-to-u8 cast truncates
/// and saturates, which gives the floor-and-clamp the color model needs.
pub fn shade_color(base: (u8, u8, u8), brightness: f32) -> (u8, u8, u8) {
    (
        (base.0 as f32 * brightness) as u8,
        (base.1 as f32 * brightness) as u8,
        (base.2 as f32 * brightness) as u8,
    )
}

pub fn signed_triangle_area(t1: Point2D, t2: Point2D, p: Point2D) -> f32 {
    let ap = p - t1;
    let t1t2perp: Point2D = perp(t2 - t1);
    dot2(ap, t1t2perp) / 2.0
}

/// Coverage test for polygon fill: p is inside when the three edge areas all
/// carry the triangle's own sign, so both windings fill instead of one being
/// culled. `area` is the precomputed signed area of (a, b, c).
#[inline(always)]
pub fn point_in_triangle(a: Point2D, b: Point2D, c: Point2D, p: Point2D, area: f32) -> bool {
    let area_ab = signed_triangle_area(a, b, p);
    let area_bc = signed_triangle_area(b, c, p);
    let area_ca = signed_triangle_area(c, a, p);
    if area > 0.0 {
        area_ab >= 0.0 && area_bc >= 0.0 && area_ca >= 0.0
    } else {
        area_ab <= 0.0 && area_bc <= 0.0 && area_ca <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_lands_on_the_screen_anchor() {
        let (model_size, offset) = viewport_transform(200, 400);
        assert_eq!(model_size, 40.0);
        let p = vertex_to_screen(Point3D { x: 0.0, y: 0.0, z: 0.0 }, model_size, offset);
        assert_eq!(p, Point2D { x: 100.0, y: 300.0 });
    }

    #[test]
    fn up_in_model_space_is_up_on_screen() {
        let (model_size, offset) = viewport_transform(200, 400);
        let p = vertex_to_screen(Point3D { x: 0.0, y: 1.0, z: 0.0 }, model_size, offset);
        assert_eq!(p, Point2D { x: 100.0, y: 260.0 });
    }

    #[test]
    fn depth_is_the_mean_z() {
        let v = |z| Point3D { x: 0.0, y: 0.0, z };
        let depth = triangle_depth(v(1.0), v(2.0), v(3.0));
        assert!((depth - 1.9998).abs() < 1e-4);
    }

    #[test]
    fn shade_is_half_at_zero_depth() {
        assert_eq!(depth_shade(0.0), 0.5);
        assert_eq!(depth_shade(1.0), 1.0);
    }

    #[test]
    fn shade_color_floors_and_clamps() {
        assert_eq!(shade_color((255, 255, 255), 0.5), (127, 127, 127));
        assert_eq!(shade_color((200, 100, 50), 2.0), (255, 200, 100));
        assert_eq!(shade_color((255, 255, 255), -1.0), (0, 0, 0));
    }

    #[test]
    fn coverage_is_winding_independent() {
        let a = Point2D { x: 0.0, y: 0.0 };
        let b = Point2D { x: 10.0, y: 0.0 };
        let c = Point2D { x: 0.0, y: 10.0 };
        let inside = Point2D { x: 2.0, y: 2.0 };
        let outside = Point2D { x: 20.0, y: 20.0 };

        let area = signed_triangle_area(a, b, c);
        assert!(point_in_triangle(a, b, c, inside, area));
        assert!(!point_in_triangle(a, b, c, outside, area));

        let flipped = signed_triangle_area(a, c, b);
        assert!(point_in_triangle(a, c, b, inside, flipped));
        assert!(!point_in_triangle(a, c, b, outside, flipped));
    }
}
