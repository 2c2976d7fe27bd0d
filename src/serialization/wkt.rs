use super::{GeomWrapper, ParserResult};
use crate::core::{GeomResult, GeometryError};
use crate::points::{MultiPoint, Point};
use crate::polygons::Polygon;
use regex::Regex;
use std::sync::OnceLock;

const COORD_PAIR: &str = r"^\s*([-+]?\d+)\s+([-+]?\d+)";
const GEOM_TYPE: &str = r"^\s*[A-Z]+\s*";

static COORD_PAIR_RE: OnceLock<Regex> = OnceLock::new();
static GEOM_TYPE_RE: OnceLock<Regex> = OnceLock::new();

#[derive(Debug)]
enum GeomType {
    Polygon,
    Point,
    MultiPoint,
}

/// Get coordinate pair regex once to avoid recompilation (thread-safe)
fn coord_pair_re() -> &'static Regex {
    COORD_PAIR_RE.get_or_init(|| Regex::new(COORD_PAIR).expect("valid coordinate regex"))
}

// Get geometry type regex once to avoid recompilation (thread-safe)
fn geom_type_re() -> &'static Regex {
    GEOM_TYPE_RE.get_or_init(|| Regex::new(GEOM_TYPE).expect("valid geometry type regex"))
}

/// Parse a WKT string with integer coordinates and return the parsed geometry object
///
/// The function takes a Geometry in WKT format and returns a GeomWrapper
/// containing the actual geometry. Returns an error if parsing failed.
///
/// Examples
/// ```rust
/// use hulllib::serialization::{self, GeomWrapper};
///
/// if let Ok(GeomWrapper::Point(pt)) = serialization::parse_wkt("POINT (0 0)") {
///     println!("My point is: {pt:?}");
/// }
///
/// match serialization::parse_wkt("MULTIPOINT(0 0, 10 0, 3 3, 0 10)") {
///     Ok(GeomWrapper::MultiPoint(mp)) => assert_eq!(mp.points.len(), 4),
///     _ => panic!("Failed"),
/// }
/// ```
pub fn parse_wkt(raw_str: &str) -> GeomResult<GeomWrapper> {
    let (wrap, trailing) = match identify_type(raw_str)? {
        (GeomType::Point, rest) => {
            let (pt, tail) = parse_point(rest)?;
            (GeomWrapper::Point(pt), tail)
        }
        (GeomType::Polygon, rest) => {
            let (poly, tail) = parse_polygon(rest)?;
            (GeomWrapper::Polygon(poly), tail)
        }
        (GeomType::MultiPoint, rest) => {
            let (mp, tail) = parse_multipoint(rest)?;
            (GeomWrapper::MultiPoint(mp), tail)
        }
    };
    if !trailing.trim().is_empty() {
        Err(GeometryError::ParsingError(String::from(
            "Trailing characters after geometry!",
        )))
    } else {
        Ok(wrap)
    }
}

/// Identifies the type of geometry at the start of a WKT string
fn identify_type<'a>(raw_str: &'a str) -> ParserResult<'a, GeomType> {
    let re = geom_type_re();
    if let Some(m) = re.find(raw_str) {
        let trimmed = m.as_str().trim();
        let end = m.end();
        match trimmed {
            "POLYGON" => Ok((GeomType::Polygon, &raw_str[end..])),
            "POINT" => Ok((GeomType::Point, &raw_str[end..])),
            "MULTIPOINT" => Ok((GeomType::MultiPoint, &raw_str[end..])),
            _ => Err(GeometryError::ParsingError(format!(
                "Unsupported Geometry: {trimmed}"
            ))),
        }
    } else {
        Err(GeometryError::ParsingError(String::from(
            "Could not parse shape type",
        )))
    }
}

// Parse a single integer coordinate
fn parse_coord(raw: &str) -> GeomResult<i32> {
    raw.parse::<i32>()
        .map_err(|e| GeometryError::ParsingError(format!("Invalid coordinate '{raw}': {e}")))
}

/// Match one coordinate pair at the start of the string
fn parse_pair(raw: &str) -> GeomResult<Option<(Point, &str)>> {
    match coord_pair_re().captures(raw) {
        None => Ok(None),
        Some(cap) => {
            let x = parse_coord(&cap[1])?;
            let y = parse_coord(&cap[2])?;
            let end = cap.get_match().end();
            Ok(Some((Point::new(x, y), &raw[end..])))
        }
    }
}

/// Parse a point coordinates (after removing the type prefix from the string)
fn parse_point<'a>(raw: &'a str) -> ParserResult<'a, Point> {
    let trimmed = match raw.trim().strip_prefix("(") {
        Some(s) => s,
        None => {
            return Err(GeometryError::ParsingError(String::from(
                "Expected '(' to introduce coordinates",
            )));
        }
    };

    match parse_pair(trimmed)? {
        None => Err(GeometryError::ParsingError(String::from(
            "Could not parse coordinates",
        ))),
        Some((pt, rest)) => match rest.trim_start().strip_prefix(")") {
            None => Err(GeometryError::ParsingError(String::from(
                "Expected ')' to close coordinates",
            ))),
            Some(s) => Ok((pt, s)),
        },
    }
}

/// Parse a list of points from a string with type prefix removed
fn parse_multipoint<'a>(raw_str: &'a str) -> ParserResult<'a, MultiPoint> {
    let trimmed = raw_str.trim();
    if trimmed == "EMPTY" {
        return Ok((MultiPoint::default(), ""));
    }
    let (coords, rest) = parse_coordinate_list(trimmed)?;
    Ok((MultiPoint::new(coords), rest))
}

/// Parse a list of coordinate pairs (points) from the start of a string
fn parse_coordinate_list<'a>(raw_str: &'a str) -> ParserResult<'a, Vec<Point>> {
    let mut trimmed = match raw_str.trim().strip_prefix("(") {
        None => {
            return Err(GeometryError::ParsingError(String::from(
                "Expected '(' to start list of coordinates",
            )));
        }
        Some(s) => s,
    };
    let mut pts = Vec::new();
    while let Some((pt, rest)) = parse_pair(trimmed)? {
        pts.push(pt);

        trimmed = rest.trim_start();
        match trimmed.strip_prefix(",") {
            None => break,
            Some(s) if !coord_pair_re().is_match(s) => {
                return Err(GeometryError::ParsingError(String::from(
                    "Expected coordinates after ','",
                )));
            }
            Some(s) => {
                trimmed = s;
            }
        }
    }
    match trimmed.trim().strip_prefix(")") {
        None => Err(GeometryError::ParsingError(String::from(
            "Expected ')' to close coordinates",
        ))),
        Some(s) => Ok((pts, s)),
    }
}

// Parse a polygon from the given wkt string with type prefix removed
fn parse_polygon<'a>(raw_str: &'a str) -> ParserResult<'a, Polygon> {
    let trimmed = match raw_str.trim().strip_prefix("(") {
        None => {
            return Err(GeometryError::ParsingError(String::from(
                "Expected '(' to start polygon coordinates",
            )));
        }
        Some(s) => s,
    };
    let (outer_ring, rest) = parse_coordinate_list(trimmed)?;
    match rest.trim().strip_prefix(")") {
        None => Err(GeometryError::ParsingError(String::from(
            "Expected ')' to close polygon",
        ))),
        Some(s) => Ok((Polygon::new(outer_ring)?, s)),
    }
}
