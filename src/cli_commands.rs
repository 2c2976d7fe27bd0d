use super::core::{GeomResult, GeometricObject, GeometryError};
use super::serialization::*;
use super::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::File;
use std::io::{BufRead, Write};

/// WKT for a hull.
///
/// A monotone chain hull with at least three vertices is written as a closed
/// polygon. Brute force hulls are angle-sorted around their first vertex, which
/// need not trace a simple ring, so they are always written as bare vertices.
pub fn hull_wkt(hull: &[Point], algorithm: Algorithm) -> String {
    match algorithm {
        Algorithm::Fast => match Polygon::from_hull(hull) {
            Ok(poly) => poly.wkt(),
            Err(_) => MultiPoint::new(hull.to_vec()).wkt(),
        },
        Algorithm::Slow => MultiPoint::new(hull.to_vec()).wkt(),
    }
}

/// Parse the given input string, compute its convex hull, and optionally save the result
pub fn compute_convex_hull<W: Write>(
    input: &str,
    algorithm: Algorithm,
    output_path: Option<&str>,
    out: &mut W,
) -> GeomResult<HullResult> {
    let points = parse_wkt(input)?.into_points()?;
    let res = algorithm.run(&points);
    let wkt = hull_wkt(&res.hull, algorithm);

    match output_path {
        None => {
            writeln!(out, "Convex hull: {wkt}")?;
        }
        Some(fp) => {
            let mut file = File::create(fp)?;
            file.write_all(wkt.as_bytes())?;
            writeln!(out, "Hull saved to file: '{fp}'")?;
        }
    }
    writeln!(
        out,
        "{} Algorithm Iterations: {}",
        algorithm.label(),
        res.iterations
    )?;
    Ok(res)
}

/// Run both algorithms over the same points and report how they compare
pub fn compare_points<W: Write>(points: &[Point], out: &mut W) -> GeomResult<(HullResult, HullResult)> {
    let fast = find_fast_convex_hull(points);
    let slow = find_slow_convex_hull(points);

    writeln!(out, "Points: {}", points.len())?;
    writeln!(out, "Fast Algorithm Iterations: {}", fast.iterations)?;
    writeln!(out, "Slow Algorithm Iterations: {}", slow.iterations)?;
    writeln!(out, "Fast hull: {}", hull_wkt(&fast.hull, Algorithm::Fast))?;
    if fast.same_vertices(&slow) {
        writeln!(out, "Both algorithms found the same {} vertices", fast.hull.len())?;
    } else {
        log::info!("Hull vertex sets differ (collinear or repeated points in the input)");
        writeln!(out, "Slow hull: {}", hull_wkt(&slow.hull, Algorithm::Slow))?;
    }
    Ok((fast, slow))
}

/// Parse a geometry and compare both algorithms on its points
pub fn compare_wkt<W: Write>(input: &str, out: &mut W) -> GeomResult<(HullResult, HullResult)> {
    let points = parse_wkt(input)?.into_points()?;
    compare_points(&points, out)
}

/// Generate random points and compare both algorithms on them
pub fn compare_random<W: Write>(
    count: usize,
    extent: i32,
    seed: Option<u64>,
    out: &mut W,
) -> GeomResult<(HullResult, HullResult)> {
    if extent <= 0 {
        return Err(GeometryError::ParameterError(format!(
            "Extent must be positive, got {extent}"
        )));
    }
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };
    let points = random_points(count, extent, &mut rng);
    log::debug!("Generated {count} random points in [0, {extent})");
    writeln!(out, "Input: {}", MultiPoint::new(points.clone()).wkt())?;
    compare_points(&points, out)
}

/// Drive a [`Session`] from line commands.
///
/// Supported commands: `add X Y`, `fast`, `slow`, `clear`, `show`, `quit`.
/// Malformed lines are reported and skipped.
pub fn run_session<R: BufRead, W: Write>(input: R, out: &mut W) -> GeomResult<Session> {
    let mut session = Session::new();
    for line in input.lines() {
        let line = line?;
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            [] => continue,
            ["quit"] | ["exit"] => break,
            ["add", x, y] => match (x.parse::<i32>(), y.parse::<i32>()) {
                (Ok(x), Ok(y)) => session.add_point(Point::new(x, y)),
                _ => writeln!(out, "Invalid coordinates: '{line}'")?,
            },
            [cmd @ ("fast" | "slow")] => {
                let algorithm: Algorithm = cmd.parse()?;
                if session.run(algorithm).is_none() {
                    writeln!(out, "At least 3 points are needed")?;
                    continue;
                }
                writeln!(out, "{}", session.status())?;
            }
            ["clear"] => session.clear(),
            ["show"] => {
                writeln!(out, "Points: {}", MultiPoint::new(session.points().to_vec()).wkt())?;
                let hull = match session.algorithm() {
                    Some(algorithm) => hull_wkt(session.hull(), algorithm),
                    None => MultiPoint::default().wkt(),
                };
                writeln!(out, "Hull: {hull}")?;
                if !session.status().is_empty() {
                    writeln!(out, "{}", session.status())?;
                }
            }
            _ => writeln!(out, "Unknown command: '{line}'")?,
        }
    }
    Ok(session)
}
