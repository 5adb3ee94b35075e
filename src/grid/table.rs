// table.rs
// ──────────────────────────────────────────────────────────────────────────────
// Blocking rules of the 3x3 unlock grid.
//
//     1 2 3
//     4 5 6
//     7 8 9
//
// Moving between two dots draws through any dot that sits exactly halfway
// between them, so 1 -> 3 is only a legal move once 2 has been used. The
// table below records that halfway dot for every ordered pair. Row and column
// 0 belong to the virtual root, from which every first move is free.
// ──────────────────────────────────────────────────────────────────────────────
use super::error::GridError;
use super::{Point, POINT_COUNT, ROOT_POINT};

/// Rows and columns of the table: the root plus the 9 grid points.
const TABLE_SIZE: usize = POINT_COUNT + 1;

/// Halfway dot for each (parent, child) pair, 0 where nothing is in between.
const STANDARD_MATRIX: [[Point; TABLE_SIZE]; TABLE_SIZE] = [
    //0, 1, 2, 3, 4, 5, 6, 7, 8, 9
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0], // 0
    [0, 0, 0, 2, 0, 0, 0, 4, 0, 5], // 1
    [0, 0, 0, 0, 0, 0, 0, 0, 5, 0], // 2
    [0, 2, 0, 0, 0, 0, 0, 5, 0, 6], // 3
    [0, 0, 0, 0, 0, 0, 5, 0, 0, 0], // 4
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0], // 5
    [0, 0, 0, 0, 5, 0, 0, 0, 0, 0], // 6
    [0, 4, 0, 5, 0, 0, 0, 0, 0, 8], // 7
    [0, 0, 5, 0, 0, 0, 0, 0, 0, 0], // 8
    [0, 5, 0, 6, 0, 0, 0, 8, 0, 0], // 9
];

/// The rule for moving from one point straight to another.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Blocker {
    /// Nothing lies in between, the move is always legal.
    Free,
    /// The move is legal only once the given point has been used.
    Via(Point),
    /// The move is never legal (restricted or excluded).
    Disabled,
}

/// Full ordered lookup of `Blocker` values, indexed by (parent, child).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockTable {
    cells: [[Blocker; TABLE_SIZE]; TABLE_SIZE],
}

impl BlockTable {
    /// Returns the blocking rules of the standard unlock screen.
    pub fn standard() -> Self {
        let mut cells = [[Blocker::Free; TABLE_SIZE]; TABLE_SIZE];
        for (parent, row) in STANDARD_MATRIX.iter().enumerate() {
            for (child, &via) in row.iter().enumerate() {
                if via != 0 {
                    cells[parent][child] = Blocker::Via(via);
                }
            }
        }
        Self { cells }
    }

    /// Returns a table where every transition is disabled.
    fn disabled() -> Self {
        Self {
            cells: [[Blocker::Disabled; TABLE_SIZE]; TABLE_SIZE],
        }
    }

    /// Looks up the rule for `parent -> child`. Ids outside 0..=9 are disabled.
    pub fn blocker(&self, parent: Point, child: Point) -> Blocker {
        self.cells
            .get(parent as usize)
            .and_then(|row| row.get(child as usize))
            .copied()
            .unwrap_or(Blocker::Disabled)
    }

    /// Derives a table scoped to `allowed` points.
    ///
    /// A transition keeps its rule from `self` only when both endpoints are
    /// allowed; every other transition is disabled. The root is always
    /// allowed so that any allowed point can start a pattern. Ids outside
    /// 0..=9 are ignored.
    ///
    /// Because the root stays allowed, restricting to `{5}` leaves the root
    /// with the single child `5` rather than with no children at all. Only
    /// patterns of length 2 or more disappear.
    pub fn restricted(&self, allowed: &[Point]) -> Self {
        let mut member = [false; TABLE_SIZE];
        member[ROOT_POINT as usize] = true;
        for &point in allowed {
            if let Some(slot) = member.get_mut(point as usize) {
                *slot = true;
            }
        }

        let mut derived = Self::disabled();
        for parent in 0..TABLE_SIZE {
            for child in 0..TABLE_SIZE {
                if member[parent] && member[child] {
                    derived.cells[parent][child] = self.cells[parent][child];
                }
            }
        }
        derived
    }

    /// Returns a copy with the edge `a - b` disabled in both directions.
    pub fn without_edge(&self, a: Point, b: Point) -> Self {
        let mut derived = self.clone();
        for (from, to) in [(a, b), (b, a)] {
            if let Some(cell) = derived
                .cells
                .get_mut(from as usize)
                .and_then(|row| row.get_mut(to as usize))
            {
                *cell = Blocker::Disabled;
            }
        }
        derived
    }
}

impl Default for BlockTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Converts a single character into a grid point.
fn parse_point(c: char) -> Result<Point, GridError> {
    match c.to_digit(10) {
        Some(d @ 1..=9) => Ok(d as Point),
        _ => Err(GridError::InvalidPoint(c)),
    }
}

/// Parses a node list such as `73652` into its points, in first-seen order.
/// Repeated digits are kept once.
pub fn parse_points(text: &str) -> Result<Vec<Point>, GridError> {
    let mut points: Vec<Point> = Vec::with_capacity(POINT_COUNT);
    for c in text.trim().chars() {
        let point = parse_point(c)?;
        if !points.contains(&point) {
            points.push(point);
        }
    }
    if points.is_empty() {
        return Err(GridError::EmptyPointList);
    }
    Ok(points)
}

/// Parses an edge written as two distinct points, e.g. `13`.
pub fn parse_edge(text: &str) -> Result<(Point, Point), GridError> {
    let text = text.trim();
    let invalid = || GridError::InvalidEdge(text.to_string());
    let mut chars = text.chars();
    let (Some(a), Some(b), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(invalid());
    };
    let (a, b) = (parse_point(a)?, parse_point(b)?);
    if a == b {
        return Err(invalid());
    }
    Ok((a, b))
}
