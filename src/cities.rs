//! Point sets and tour lengths.
//!
//! The GA only needs two things from the problem instance: how many points
//! exist and how long a closed tour over them is. [`TourLength`] captures
//! that contract; [`Cities`] is the planar Euclidean implementation.

use crate::error::{GaError, Result};

/// Distance provider for closed tours.
///
/// Implementations must be deterministic: the same order always yields the
/// same length, and the point count never changes during a run.
pub trait TourLength {
    /// Number of points in the instance.
    fn point_count(&self) -> usize;

    /// Total length of the closed tour visiting `order` and returning to
    /// the first point. Never negative.
    fn tour_length(&self, order: &[usize]) -> f64;
}

impl<T: TourLength + ?Sized> TourLength for &T {
    fn point_count(&self) -> usize {
        (**self).point_count()
    }

    fn tour_length(&self, order: &[usize]) -> f64 {
        (**self).tour_length(order)
    }
}

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// A fixed set of planar points.
///
/// ```
/// use u_tour::{Cities, TourLength};
///
/// let square = Cities::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
/// assert_eq!(square.point_count(), 4);
/// assert!((square.tour_length(&[0, 1, 2, 3]) - 4.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cities {
    points: Vec<Point>,
}

impl Cities {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn from_coords(coords: &[(f64, f64)]) -> Self {
        Self::new(coords.iter().map(|&(x, y)| Point::new(x, y)).collect())
    }

    /// Parses one `x y` pair per line.
    ///
    /// Blank lines and lines starting with `#` are skipped.
    pub fn parse(text: &str) -> Result<Self> {
        let mut points = Vec::new();
        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() != 2 {
                return Err(GaError::Parse {
                    line: idx + 1,
                    message: format!("expected two coordinates, found {}", fields.len()),
                });
            }
            let x = parse_coord(fields[0], idx + 1)?;
            let y = parse_coord(fields[1], idx + 1)?;
            points.push(Point::new(x, y));
        }
        Ok(Self::new(points))
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

fn parse_coord(field: &str, line: usize) -> Result<f64> {
    let value: f64 = field.parse().map_err(|_| GaError::Parse {
        line,
        message: format!("invalid coordinate {field:?}"),
    })?;
    if !value.is_finite() {
        return Err(GaError::Parse {
            line,
            message: format!("coordinate {field:?} is not finite"),
        });
    }
    Ok(value)
}

impl TourLength for Cities {
    fn point_count(&self) -> usize {
        self.points.len()
    }

    fn tour_length(&self, order: &[usize]) -> f64 {
        if order.len() < 2 {
            return 0.0;
        }
        let open: f64 = order
            .windows(2)
            .map(|w| self.points[w[0]].distance(&self.points[w[1]]))
            .sum();
        let first = &self.points[order[0]];
        let last = &self.points[order[order.len() - 1]];
        open + last.distance(first)
    }
}
