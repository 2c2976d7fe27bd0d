use super::core::{GeometricObject, display_for_geom};
use rand::Rng;

/// A single Point on the integer Plane (2D)
///
/// Points are ordered lexicographically: by `x`, then by `y`.
///
/// Examples
/// ```rust
/// use hulllib::Point;
/// let my_point = Point::new(2, -7);
/// let (x, y) = my_point.coords();
/// assert!(Point::new(1, 5) < Point::new(2, 0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    x: i32,
    y: i32,
}

/// A simple collection of points
#[derive(Debug, Default)]
pub struct MultiPoint {
    pub points: Vec<Point>,
}

/// Represents the direction of a turn defined by a sequence of 3 points on the plane
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum Turn {
    Right,
    Left,
    InLine,
}

impl Point {
    /// Instantiate a new point
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    /// Get coordinates as a tuple
    pub fn coords(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Polar angle of this point as seen from `center`, in `(-pi, pi]`
    pub fn angle_from(&self, center: &Point) -> f64 {
        let dy = (self.y as f64) - (center.y as f64);
        let dx = (self.x as f64) - (center.x as f64);
        dy.atan2(dx)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl GeometricObject for Point {
    /// WKT representation of the point
    fn wkt(&self) -> String {
        format!("POINT ({} {})", self.x, self.y)
    }
}

display_for_geom!(Point);

impl MultiPoint {
    /// Instantiate a multipoint collection
    ///
    /// Example
    /// ```rust
    /// use hulllib::{MultiPoint, Point};
    /// let my_points = MultiPoint::new(vec![Point::new(0, 0), Point::new(0, 1)]);
    /// ```
    pub fn new(pts: Vec<Point>) -> Self {
        Self { points: pts }
    }
}

impl GeometricObject for MultiPoint {
    /// WKT representation of the multipoint collection
    fn wkt(&self) -> String {
        if self.points.is_empty() {
            return String::from("MULTIPOINT EMPTY");
        }
        let coords: Vec<String> = self
            .points
            .iter()
            .map(|p| format!("{} {}", p.x, p.y))
            .collect();
        format!("MULTIPOINT({})", coords.join(", "))
    }
}

display_for_geom!(MultiPoint);

/// Signed orientation of the triple `a -> b -> c`.
///
/// This is the z-component of the cross product `(b - a) x (c - a)`, computed in
/// 128-bit arithmetic so it is exact for any `i32` coordinates.
/// Positive means a counter-clockwise (left) turn, negative a clockwise (right)
/// turn and zero means the three points are collinear.
///
/// ```rust
/// use hulllib::{orientation, Point};
/// let o = orientation(&Point::new(0, 0), &Point::new(1, 0), &Point::new(1, 1));
/// assert!(o > 0);
/// ```
pub fn orientation(a: &Point, b: &Point, c: &Point) -> i128 {
    let (ax, ay) = (a.x as i128, a.y as i128);
    (b.x as i128 - ax) * (c.y as i128 - ay) - (b.y as i128 - ay) * (c.x as i128 - ax)
}

/// Determine the turn direction defined by three successive points
pub fn direction(p1: &Point, p2: &Point, p3: &Point) -> Turn {
    match orientation(p1, p2, p3) {
        0 => Turn::InLine,
        det if det < 0 => Turn::Right,
        _ => Turn::Left,
    }
}

/// Generate `total` random points with both coordinates in `[0, extent)`
///
/// `extent` must be positive.
pub fn random_points<R: Rng>(total: usize, extent: i32, rng: &mut R) -> Vec<Point> {
    (0..total)
        .map(|_| Point::new(rng.random_range(0..extent), rng.random_range(0..extent)))
        .collect()
}

/// Sort a vector of points lexicographically
pub fn sort_lex(mut pts: Vec<Point>) -> Vec<Point> {
    pts.sort();
    pts
}
