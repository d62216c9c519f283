pub mod handlers;
pub mod requests;
pub mod responses;

/// A point in planar coordinates: `x` is longitude, `y` is latitude.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlanarPoint {
    pub x: f64,
    pub y: f64,
}

impl PlanarPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn squared_distance_to(self, other: PlanarPoint) -> f64 {
        (self.x - other.x).powi(2) + (self.y - other.y).powi(2)
    }
}

/// Point of the polyline closest to `point`, treating coordinates as a flat plane. Ties go to the
/// point that comes first along the line. `None` if the line has fewer than two vertices.
pub fn nearest_point_on_line(point: PlanarPoint, line: &[PlanarPoint]) -> Option<PlanarPoint> {
    if line.len() < 2 {
        return None;
    }
    let mut nearest = line[0];
    let mut nearest_squared_distance = point.squared_distance_to(nearest);
    for segment in line.windows(2) {
        let candidate = project_onto_segment(point, segment[0], segment[1]);
        let squared_distance = point.squared_distance_to(candidate);
        if squared_distance < nearest_squared_distance {
            nearest = candidate;
            nearest_squared_distance = squared_distance;
        }
    }
    Some(nearest)
}

fn project_onto_segment(point: PlanarPoint, start: PlanarPoint, end: PlanarPoint) -> PlanarPoint {
    let (dx, dy) = (end.x - start.x, end.y - start.y);
    let length_squared = dx * dx + dy * dy;
    if length_squared == 0.0 {
        return start;
    }
    let t = ((point.x - start.x) * dx + (point.y - start.y) * dy) / length_squared;
    let t = t.clamp(0.0, 1.0);
    PlanarPoint::new(start.x + t * dx, start.y + t * dy)
}
