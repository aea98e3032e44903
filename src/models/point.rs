use std::ops::Add;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    pub fn from_polar(r: f64, angle: f64) -> Point {
        Point::new(r * angle.cos(), r * angle.sin())
    }

    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }
}

pub trait HasPoint {
    fn point(&self) -> Point;

    fn x(&self) -> f64 {
        self.point().x
    }

    fn y(&self) -> f64 {
        self.point().y
    }
}

impl HasPoint for Point {
    fn point(&self) -> Point {
        *self
    }
}

impl Point {
    pub fn dist<Other: HasPoint>(self, other: Other) -> f64 {
        (self.x - other.x()).hypot(self.y - other.y())
    }

    pub fn qdist<Other: HasPoint>(self, other: Other) -> f64 {
        (self.x - other.x()).powi(2) + (self.y - other.y()).powi(2)
    }
}

impl<Other: HasPoint> Add<Other> for Point {
    type Output = Point;
    fn add(self, other: Other) -> Point {
        Point::new(self.x + other.x(), self.y + other.y())
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use super::*;

    #[test]
    fn from_polar_is_unit_length() {
        for i in 0..8 {
            let v = Point::from_polar(1.0, PI / 4.0 * i as f64);
            assert!((v.length() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn dist_matches_qdist() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(4.0, 6.0);
        assert_eq!(a.dist(b), 5.0);
        assert_eq!(a.qdist(b), 25.0);
    }
}
