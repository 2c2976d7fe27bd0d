use crate::core::{GeomResult, GeometryError};
use crate::points::{MultiPoint, Point};
use crate::polygons::Polygon;
pub mod wkt;

pub use wkt::parse_wkt;

/// Wrapper for geometry objects obtained from parsing serialized input
#[derive(Debug)]
pub enum GeomWrapper {
    Polygon(Polygon),
    Point(Point),
    MultiPoint(MultiPoint),
}

impl GeomWrapper {
    /// The point set a hull can be computed over.
    ///
    /// The closing point of a polygon ring is dropped. A single point is rejected.
    pub fn into_points(self) -> GeomResult<Vec<Point>> {
        match self {
            GeomWrapper::Point(_) => Err(GeometryError::ParameterError(String::from(
                "Cannot compute convex hull of a single point!",
            ))),
            GeomWrapper::MultiPoint(mp) => Ok(mp.points),
            GeomWrapper::Polygon(mut poly) => {
                poly.outer.pop();
                Ok(poly.outer)
            }
        }
    }
}

type ParserResult<'a, T> = GeomResult<(T, &'a str)>;
