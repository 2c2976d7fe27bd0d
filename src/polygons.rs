use std::iter::Zip;
use std::slice::Iter;

use super::core::{GeomResult, GeometricObject, GeometryError, display_for_geom};
use super::points::*;

/// Winding direction of a polygon ring
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Orientation {
    Clockwise,
    CounterClockwise,
}

/// Represents a polygon on the Plane as a closed ring (first point == last point)
#[derive(Debug, Clone)]
pub struct Polygon {
    pub outer: Vec<Point>,
}

impl Polygon {
    /// Instantiate a polygon from a closed ring of points
    pub fn new(pts: Vec<Point>) -> GeomResult<Self> {
        if pts.len() < 4 {
            return Err(GeometryError::ParameterError(format!(
                "Too few points to create a polygon: {}!",
                pts.len().saturating_sub(1)
            )));
        } else if pts[0] != pts[pts.len() - 1] {
            return Err(GeometryError::ParameterError(format!(
                "To make polygon, the first and last points must match! got {:?} and {:?}",
                pts[0].coords(),
                pts[pts.len() - 1].coords(),
            )));
        }
        Ok(Self { outer: pts })
    }

    /// Close a hull (open vertex sequence) into a polygon ring.
    ///
    /// Example
    /// ```rust
    /// use hulllib::{find_fast_convex_hull, Point, Polygon};
    /// let res = find_fast_convex_hull(&[Point::new(0, 0), Point::new(4, 0), Point::new(0, 4)]);
    /// let poly = Polygon::from_hull(&res.hull).unwrap();
    /// assert_eq!(poly.total_vertices(), 3);
    /// ```
    pub fn from_hull(hull: &[Point]) -> GeomResult<Self> {
        let mut ring = hull.to_vec();
        if let Some(first) = hull.first() {
            ring.push(*first);
        }
        Self::new(ring)
    }

    /// Iterator over the edges of the ring, including the closing one
    pub fn edges(&self) -> Zip<Iter<'_, Point>, Iter<'_, Point>> {
        self.outer.iter().zip(&self.outer[1..])
    }

    /// Number of distinct vertices (the closing point is not counted)
    pub fn total_vertices(&self) -> usize {
        self.outer.len() - 1
    }

    /// Twice the signed area of the ring (positive when counter-clockwise)
    pub fn signed_area2(&self) -> i128 {
        self.edges()
            .map(|(a, b)| (a.x() as i128) * (b.y() as i128) - (b.x() as i128) * (a.y() as i128))
            .sum()
    }

    pub fn orientation(&self) -> Orientation {
        if self.signed_area2() < 0 {
            Orientation::Clockwise
        } else {
            Orientation::CounterClockwise
        }
    }

    /// Whether every corner turns the same way (collinear corners are ignored)
    pub fn is_convex(&self) -> bool {
        let n = self.total_vertices();
        let mut turn: Option<Turn> = None;
        for i in 0..n {
            let t = direction(&self.outer[i], &self.outer[(i + 1) % n], &self.outer[(i + 2) % n]);
            match (t, turn) {
                (Turn::InLine, _) => continue,
                (_, None) => turn = Some(t),
                (_, Some(prev)) if prev != t => return false,
                _ => (),
            }
        }
        true
    }

    /// Use Ray Casting to determine if a point lies in the polygon. Points on the
    /// boundary count as inside.
    pub fn contains(&self, pt: &Point) -> bool {
        let mut total_intersects: u32 = 0;
        for (st, e) in self.edges() {
            let side = orientation(st, e, pt);
            if side == 0 && on_segment(st, e, pt) {
                // Edge case - point is on the boundary
                return true;
            }

            if st.y() <= pt.y() && e.y() > pt.y() && side > 0 {
                // Upward edge passing to the right of the point
                total_intersects += 1;
            } else if e.y() <= pt.y() && st.y() > pt.y() && side < 0 {
                // Downward edge passing to the right of the point
                total_intersects += 1;
            }
        }
        total_intersects % 2 != 0
    }
}

// Whether a point collinear with a segment lies between its end points
fn on_segment(st: &Point, e: &Point, pt: &Point) -> bool {
    st.x().min(e.x()) <= pt.x()
        && pt.x() <= st.x().max(e.x())
        && st.y().min(e.y()) <= pt.y()
        && pt.y() <= st.y().max(e.y())
}

impl GeometricObject for Polygon {
    /// WKT representation of the polygon
    fn wkt(&self) -> String {
        let ring: Vec<String> = self
            .outer
            .iter()
            .map(|p| format!("{} {}", p.x(), p.y()))
            .collect();
        format!("POLYGON(({}))", ring.join(", "))
    }
}

display_for_geom!(Polygon);
