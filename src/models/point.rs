/// 2D point with floating point coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

impl Point {
    /// Create a new point
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Calculate distance to another point
    pub fn distance(&self, other: &Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Nearest integer pixel position
    pub fn round(&self) -> PointI {
        PointI::new(self.x.round() as i32, self.y.round() as i32)
    }
}

/// Integer point for pixel coordinates and offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct PointI {
    /// X coordinate
    pub x: i32,
    /// Y coordinate
    pub y: i32,
}

impl PointI {
    /// Create a new integer point
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate point by (dx, dy)
    pub fn translate(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Same point as floating coordinates
    pub fn to_f32(&self) -> Point {
        Point::new(self.x as f32, self.y as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let p1 = Point::new(0.0, 0.0);
        let p2 = Point::new(3.0, 4.0);
        assert!((p1.distance(&p2) - 5.0).abs() < 0.001);
    }

    #[test]
    fn test_round() {
        assert_eq!(Point::new(2.4, -1.6).round(), PointI::new(2, -2));
    }
}
