//! Headless stand-in for the interactive front end.
//!
//! A [`Session`] accumulates points in click order, recomputes a hull from
//! scratch on request and keeps the last result for display.

use super::hull::{Algorithm, HullResult};
use super::points::Point;

/// Points collected so far plus the last computed hull
#[derive(Debug, Default)]
pub struct Session {
    points: Vec<Point>,
    last: Option<HullResult>,
    algorithm: Option<Algorithm>,
    status: String,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new point. The current hull is kept until the next run.
    pub fn add_point(&mut self, pt: Point) {
        self.points.push(pt);
    }

    /// Recompute the hull over all stored points.
    ///
    /// Nothing happens unless more than two points are stored; in that case
    /// `None` is returned and the previous hull and status are left untouched.
    pub fn run(&mut self, algorithm: Algorithm) -> Option<&HullResult> {
        if self.points.len() <= 2 {
            log::debug!(
                "Skipping {} run: only {} points",
                algorithm.label(),
                self.points.len()
            );
            return None;
        }
        let result = algorithm.run(&self.points);
        self.status = format!(
            "{} Algorithm Iterations: {}",
            algorithm.label(),
            result.iterations
        );
        self.last = Some(result);
        self.algorithm = Some(algorithm);
        self.last.as_ref()
    }

    /// Forget every point, the hull and the status text
    pub fn clear(&mut self) {
        self.points.clear();
        self.last = None;
        self.algorithm = None;
        self.status.clear();
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn hull(&self) -> &[Point] {
        match &self.last {
            Some(res) => &res.hull,
            None => &[],
        }
    }

    /// Builder behind the current hull, if any run has happened
    pub fn algorithm(&self) -> Option<Algorithm> {
        self.algorithm
    }

    /// Status line describing the last run, empty before the first one
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Segments of the closed hull outline, the last point joined back to the first.
    ///
    /// Empty when the hull has fewer than two points.
    pub fn hull_edges(&self) -> Vec<(Point, Point)> {
        let hull = self.hull();
        let n = hull.len();
        if n < 2 {
            return Vec::new();
        }
        (0..n).map(|i| (hull[i], hull[(i + 1) % n])).collect()
    }
}
