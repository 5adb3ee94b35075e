use std::fmt;

use crate::grid::Point;

/// An ordered sequence of distinct grid points.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pattern(Vec<Point>);

impl Pattern {
    pub fn new(points: Vec<Point>) -> Self {
        Self(points)
    }

    pub fn points(&self) -> &[Point] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The pattern as a decimal number, e.g. 7 -> 3 -> 6 -> 5 is `7365`.
    pub fn as_number(&self) -> u64 {
        self.0.iter().fold(0, |acc, &p| acc * 10 + u64::from(p))
    }
}

impl From<Vec<Point>> for Pattern {
    fn from(points: Vec<Point>) -> Self {
        Self(points)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for point in &self.0 {
            write!(f, "{}", point)?;
        }
        Ok(())
    }
}
