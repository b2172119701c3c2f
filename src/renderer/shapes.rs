//! Rasterization of 2D primitives into cell coordinates

use glam::IVec2;

/// DDA line: step along the major axis in equal increments
pub fn line_dda(from: IVec2, to: IVec2) -> Vec<IVec2> {
    let delta = (to - from).as_vec2();
    let steps = delta.x.abs().max(delta.y.abs());
    if steps == 0.0 {
        return vec![from];
    }

    let inc = delta / steps;
    let mut p = from.as_vec2();
    let mut points = Vec::with_capacity(steps as usize + 1);
    for _ in 0..=steps as usize {
        points.push(p.round().as_ivec2());
        p += inc;
    }
    points
}

/// Bresenham line, both endpoints included
pub fn line_bresenham(from: IVec2, to: IVec2) -> Vec<IVec2> {
    let dx = (to.x - from.x).abs();
    let dy = (to.y - from.y).abs();
    let sx = if from.x < to.x { 1 } else { -1 };
    let sy = if from.y < to.y { 1 } else { -1 };
    let mut err = dx - dy;

    let mut p = from;
    let mut points = Vec::with_capacity(dx.max(dy) as usize + 1);
    loop {
        points.push(p);
        if p == to {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            p.x += sx;
        }
        if e2 < dx {
            err += dx;
            p.y += sy;
        }
    }
    points
}

/// Midpoint circle outline (eight-way symmetric)
pub fn circle_midpoint(center: IVec2, radius: i32) -> Vec<IVec2> {
    if radius <= 0 {
        return vec![center];
    }

    let mut points = Vec::new();
    let mut x = 0;
    let mut y = radius;
    let mut d = 1 - radius;
    while x <= y {
        for (a, b) in [(x, y), (y, x)] {
            points.push(center + IVec2::new(a, b));
            points.push(center + IVec2::new(-a, b));
            points.push(center + IVec2::new(a, -b));
            points.push(center + IVec2::new(-a, -b));
        }
        x += 1;
        if d < 0 {
            d += 2 * x + 1;
        } else {
            y -= 1;
            d += 2 * (x - y) + 1;
        }
    }
    points.sort_by_key(|p| (p.y, p.x));
    points.dedup();
    points
}

/// Every cell whose center lies within an ellipse of the given radii
pub fn filled_ellipse(center: IVec2, rx: f32, ry: f32) -> Vec<IVec2> {
    if rx <= 0.0 || ry <= 0.0 {
        return vec![center];
    }

    let (ix, iy) = (rx.ceil() as i32, ry.ceil() as i32);
    let mut points = Vec::new();
    for dy in -iy..=iy {
        for dx in -ix..=ix {
            let nx = dx as f32 / rx;
            let ny = dy as f32 / ry;
            if nx * nx + ny * ny <= 1.0 {
                points.push(center + IVec2::new(dx, dy));
            }
        }
    }
    if points.is_empty() {
        points.push(center);
    }
    points
}

/// Closed polygon outline through `vertices` using Bresenham edges
pub fn polygon_outline(vertices: &[IVec2]) -> Vec<IVec2> {
    let mut points = Vec::new();
    for (i, &a) in vertices.iter().enumerate() {
        let b = vertices[(i + 1) % vertices.len()];
        points.extend(line_bresenham(a, b));
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adjacent(a: IVec2, b: IVec2) -> bool {
        let d = (a - b).abs();
        d.x <= 1 && d.y <= 1
    }

    #[test]
    fn test_bresenham_endpoints_and_continuity() {
        let from = IVec2::new(2, 3);
        let to = IVec2::new(11, -4);
        let points = line_bresenham(from, to);
        assert_eq!(points.first(), Some(&from));
        assert_eq!(points.last(), Some(&to));
        assert_eq!(points.len(), 10);
        assert!(points.windows(2).all(|w| adjacent(w[0], w[1])));
    }

    #[test]
    fn test_dda_matches_axis_line() {
        let points = line_dda(IVec2::new(0, 0), IVec2::new(0, 4));
        let expected: Vec<IVec2> = (0..=4).map(|y| IVec2::new(0, y)).collect();
        assert_eq!(points, expected);
    }

    #[test]
    fn test_dda_single_point() {
        assert_eq!(line_dda(IVec2::ONE, IVec2::ONE), vec![IVec2::ONE]);
    }

    #[test]
    fn test_midpoint_circle_radius() {
        let center = IVec2::new(10, 10);
        let points = circle_midpoint(center, 6);
        assert!(points.contains(&IVec2::new(10, 16)));
        assert!(points.contains(&IVec2::new(4, 10)));
        for p in points {
            let d = (p - center).as_vec2().length();
            assert!((d - 6.0).abs() < 1.0, "{p:?} at {d}");
        }
    }

    #[test]
    fn test_filled_ellipse_contains_center_and_axes() {
        let points = filled_ellipse(IVec2::ZERO, 3.0, 1.0);
        assert!(points.contains(&IVec2::ZERO));
        assert!(points.contains(&IVec2::new(3, 0)));
        assert!(points.contains(&IVec2::new(0, 1)));
        assert!(!points.contains(&IVec2::new(3, 1)));
    }

    #[test]
    fn test_polygon_outline_closes() {
        let square = [
            IVec2::new(0, 0),
            IVec2::new(3, 0),
            IVec2::new(3, 3),
            IVec2::new(0, 3),
        ];
        let points = polygon_outline(&square);
        for v in square {
            assert!(points.contains(&v));
        }
        assert!(points.contains(&IVec2::new(0, 2)));
    }
}
