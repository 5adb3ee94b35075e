// pattern_tree.rs
// ──────────────────────────────────────────────────────────────────────────────
// Tree of every legal unlock pattern.
//
// The virtual root (point 0) is the start of every pattern. Each node below it
// appends one point to the pattern of its parent, so every root-to-node path
// is a distinct legal pattern and every node has exactly the children that
// one more legal move can reach.
//
// Nodes live in a single arena and refer to each other by `NodeId`. Children
// are owned through the arena, the parent link is a plain index.
// ──────────────────────────────────────────────────────────────────────────────
use std::io::{self, Write};

use rand::seq::SliceRandom;
use rand::Rng;

use super::error::TreeError;
use super::pattern::Pattern;
use crate::grid::{BlockTable, Blocker, Point, MIN_PATTERN_LENGTH, POINT_COUNT, ROOT_POINT};

/// Index of a node inside a `PatternTree`.
pub type NodeId = usize;

/// The virtual root is always the first node of the arena.
pub const ROOT_NODE: NodeId = 0;

/// One partial pattern: the last point drawn and the moves that can follow it.
#[derive(Clone, Debug)]
pub struct PatternNode {
    point: Point,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    // Length of the longest extension below this node.
    height: u8,
}

impl PatternNode {
    fn new(point: Point, parent: Option<NodeId>) -> Self {
        Self {
            point,
            parent,
            children: Vec::new(),
            height: 0,
        }
    }

    pub fn point(&self) -> Point {
        self.point
    }

    /// `None` only for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in ascending point order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// How many more points the longest pattern through this node can add.
    pub fn height(&self) -> usize {
        self.height as usize
    }
}

/// Number of patterns of each length 1..=9.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PatternCounts {
    by_length: [u64; POINT_COUNT],
}

impl PatternCounts {
    /// Counts indexed by `length - 1`.
    pub fn by_length(&self) -> &[u64; POINT_COUNT] {
        &self.by_length
    }

    /// Number of patterns with exactly `length` points, 0 outside 1..=9.
    pub fn of_length(&self, length: usize) -> u64 {
        length
            .checked_sub(1)
            .and_then(|i| self.by_length.get(i))
            .copied()
            .unwrap_or(0)
    }

    /// `(length, count)` pairs in ascending length.
    pub fn iter(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.by_length
            .iter()
            .enumerate()
            .map(|(i, &count)| (i + 1, count))
    }

    /// Every pattern of any length.
    pub fn total(&self) -> u64 {
        self.by_length.iter().sum()
    }

    /// Patterns long enough for the lock screen to accept.
    pub fn valid(&self) -> u64 {
        self.by_length[MIN_PATTERN_LENGTH - 1..].iter().sum()
    }
}

/// Every legal pattern for one blocking table, built eagerly.
#[derive(Clone, Debug)]
pub struct PatternTree {
    nodes: Vec<PatternNode>,
}

impl PatternTree {
    /// Builds the complete tree for `table`, starting from the virtual root.
    pub fn build(table: &BlockTable) -> Self {
        let mut tree = Self {
            nodes: vec![PatternNode::new(ROOT_POINT, None)],
        };
        let mut used: Vec<Point> = Vec::with_capacity(POINT_COUNT);
        tree.add_children(ROOT_NODE, &mut used, table);
        tree
    }

    /// Whether `next` may be drawn after the points in `used`.
    ///
    /// The move starts from the last point of `used`, or from the root when
    /// `used` is empty. A blocked move becomes legal once its blocking point
    /// has been used.
    pub fn is_legal_move(table: &BlockTable, used: &[Point], next: Point) -> bool {
        if used.contains(&next) {
            return false;
        }
        let from = used.last().copied().unwrap_or(ROOT_POINT);
        match table.blocker(from, next) {
            Blocker::Free => true,
            Blocker::Via(blocker) => used.contains(&blocker),
            Blocker::Disabled => false,
        }
    }

    /// Adds every legal child of `parent`, recursively, and returns the
    /// height of `parent`.
    fn add_children(&mut self, parent: NodeId, used: &mut Vec<Point>, table: &BlockTable) -> u8 {
        let mut height = 0;
        for candidate in 1..=POINT_COUNT as Point {
            if !Self::is_legal_move(table, used, candidate) {
                continue;
            }

            let child = self.nodes.len();
            self.nodes.push(PatternNode::new(candidate, Some(parent)));

            used.push(candidate);
            let child_height = self.add_children(child, used, table);
            used.pop();

            self.nodes[parent].children.push(child);
            height = height.max(child_height + 1);
        }
        self.nodes[parent].height = height;
        height
    }

    pub fn root(&self) -> &PatternNode {
        &self.nodes[ROOT_NODE]
    }

    pub fn node(&self, id: NodeId) -> Option<&PatternNode> {
        self.nodes.get(id)
    }

    /// Number of nodes, the root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Length of the longest pattern in the tree.
    pub fn max_length(&self) -> usize {
        self.root().height()
    }

    /// Follows the children from the root along `points`.
    pub fn find(&self, points: &[Point]) -> Option<NodeId> {
        points.iter().try_fold(ROOT_NODE, |node, &point| {
            self.nodes[node]
                .children
                .iter()
                .copied()
                .find(|&child| self.nodes[child].point == point)
        })
    }

    /// Rebuilds the pattern ending at `id` by walking parent links.
    pub fn pattern_of(&self, id: NodeId) -> Option<Pattern> {
        let mut points = Vec::with_capacity(POINT_COUNT);
        let mut current = self.nodes.get(id)?;
        while let Some(parent) = current.parent {
            points.push(current.point);
            current = &self.nodes[parent];
        }
        points.reverse();
        Some(Pattern::new(points))
    }

    /// Counts the patterns of every length in a single depth-first walk.
    pub fn count_by_length(&self) -> PatternCounts {
        let mut counts = PatternCounts::default();
        self.count_from(ROOT_NODE, 0, &mut counts.by_length);
        counts
    }

    fn count_from(&self, node: NodeId, level: usize, counts: &mut [u64; POINT_COUNT]) {
        for &child in &self.nodes[node].children {
            counts[level] += 1;
            self.count_from(child, level + 1, counts);
        }
    }

    /// Writes every pattern to `sink` as a decimal number, one per line,
    /// depth-first with children in ascending order. Returns the number of
    /// lines written.
    pub fn serialize_patterns<W: Write + ?Sized>(&self, sink: &mut W) -> io::Result<u64> {
        let mut written = 0;
        let mut branch: u64 = 0;
        self.serialize_from(ROOT_NODE, &mut branch, sink, &mut written)?;
        Ok(written)
    }

    fn serialize_from<W: Write + ?Sized>(
        &self,
        node: NodeId,
        branch: &mut u64,
        sink: &mut W,
        written: &mut u64,
    ) -> io::Result<()> {
        for &child in &self.nodes[node].children {
            *branch = *branch * 10 + u64::from(self.nodes[child].point);
            writeln!(sink, "{}", branch)?;
            *written += 1;
            self.serialize_from(child, branch, sink, written)?;
            *branch /= 10;
        }
        Ok(())
    }

    /// Calls `f` with every pattern, in the same order as `serialize_patterns`.
    pub fn for_each_pattern<F: FnMut(&[Point])>(&self, mut f: F) {
        let mut path: Vec<Point> = Vec::with_capacity(POINT_COUNT);
        self.visit_from(ROOT_NODE, &mut path, &mut f);
    }

    fn visit_from<F: FnMut(&[Point])>(&self, node: NodeId, path: &mut Vec<Point>, f: &mut F) {
        for &child in &self.nodes[node].children {
            path.push(self.nodes[child].point);
            f(path.as_slice());
            self.visit_from(child, path, f);
            path.pop();
        }
    }

    /// Draws `count` random patterns of exactly `target_length` points.
    ///
    /// Each pattern is a walk from the root that picks uniformly among the
    /// children still able to reach `target_length`. On the standard table
    /// every child qualifies. Restricted tables can contain shorter dead
    /// ends, which the walk never enters.
    ///
    /// # Errors
    /// `TreeError::InvalidLength` unless `target_length` is in 4..=9.
    /// `TreeError::NoPatternOfLength` if the tree has no pattern that long.
    pub fn sample_random<R: Rng + ?Sized>(
        &self,
        target_length: usize,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<Pattern>, TreeError> {
        if !(MIN_PATTERN_LENGTH..=POINT_COUNT).contains(&target_length) {
            return Err(TreeError::InvalidLength(target_length));
        }
        if self.max_length() < target_length {
            return Err(TreeError::NoPatternOfLength(target_length));
        }

        (0..count)
            .map(|_| self.random_walk(target_length, &mut *rng))
            .collect()
    }

    fn random_walk<R: Rng + ?Sized>(
        &self,
        target_length: usize,
        rng: &mut R,
    ) -> Result<Pattern, TreeError> {
        let mut node = ROOT_NODE;
        let mut viable: Vec<NodeId> = Vec::with_capacity(POINT_COUNT);
        for depth in 0..target_length {
            // Points still to draw, the next one included.
            let remaining = target_length - depth;
            viable.clear();
            viable.extend(
                self.nodes[node]
                    .children
                    .iter()
                    .copied()
                    .filter(|&child| self.nodes[child].height() + 1 >= remaining),
            );
            node = *viable
                .choose(&mut *rng)
                .ok_or(TreeError::NoPatternOfLength(target_length))?;
        }
        self.pattern_of(node)
            .ok_or(TreeError::NoPatternOfLength(target_length))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    const STANDARD_COUNTS: [u64; POINT_COUNT] =
        [9, 56, 320, 1624, 7152, 26016, 72912, 140704, 140704];

    fn standard_tree() -> PatternTree {
        PatternTree::build(&BlockTable::standard())
    }

    #[test]
    fn counts_standard_patterns_by_length() {
        let counts = standard_tree().count_by_length();
        assert_eq!(counts.by_length(), &STANDARD_COUNTS);
        assert_eq!(counts.total(), 389_497);
        assert_eq!(counts.valid(), 389_112);
        assert_eq!(counts.of_length(4), 1624);
        assert_eq!(counts.of_length(0), 0);
        assert_eq!(counts.of_length(10), 0);
    }

    #[test]
    fn node_count_matches_pattern_total() {
        let tree = standard_tree();
        let counts = tree.count_by_length();
        assert_eq!(tree.node_count() as u64, counts.total() + 1);
        assert_eq!(tree.max_length(), POINT_COUNT);
    }

    #[test]
    fn every_path_is_a_legal_pattern() {
        let table = BlockTable::standard();
        let tree = PatternTree::build(&table);
        let mut visited = 0u64;
        tree.for_each_pattern(|points| {
            visited += 1;
            assert!((1..=POINT_COUNT).contains(&points.len()));
            let distinct: HashSet<Point> = points.iter().copied().collect();
            assert_eq!(distinct.len(), points.len(), "{points:?}");
            let (last, prefix) = points.split_last().unwrap();
            assert!(PatternTree::is_legal_move(&table, prefix, *last), "{points:?}");
        });
        assert_eq!(visited, 389_497);
    }

    #[test]
    fn children_are_in_ascending_order() {
        let tree = standard_tree();
        let firsts: Vec<Point> = tree
            .root()
            .children()
            .iter()
            .map(|&c| tree.node(c).unwrap().point())
            .collect();
        assert_eq!(firsts, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);

        let one = tree.find(&[1]).unwrap();
        let after_one: Vec<Point> = tree
            .node(one)
            .unwrap()
            .children()
            .iter()
            .map(|&c| tree.node(c).unwrap().point())
            .collect();
        assert_eq!(after_one, vec![2, 4, 5, 6, 8]);
    }

    #[test]
    fn jumping_over_unused_point_is_illegal() {
        let tree = standard_tree();
        assert!(tree.find(&[1, 3]).is_none());
        assert!(tree.find(&[1, 3, 7]).is_none());
        assert!(tree.find(&[2, 1, 3]).is_some());
        assert!(tree.find(&[5, 1, 9]).is_some());
    }

    #[test]
    fn pattern_of_follows_parent_links() {
        let tree = standard_tree();
        let id = tree.find(&[7, 5, 3, 6]).unwrap();
        let pattern = tree.pattern_of(id).unwrap();
        assert_eq!(pattern.points(), &[7, 5, 3, 6]);
        assert_eq!(pattern.as_number(), 7536);
        assert_eq!(pattern.to_string(), "7536");
        assert!(tree.pattern_of(ROOT_NODE).unwrap().is_empty());
        assert!(tree.pattern_of(usize::MAX).is_none());
    }

    #[test]
    fn serializes_patterns_as_decimal_numbers() {
        let tree = standard_tree();
        let mut out: Vec<u8> = Vec::new();
        let written = tree.serialize_patterns(&mut out).unwrap();
        assert_eq!(written, 389_497);

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len() as u64, written);
        assert_eq!(&lines[..3], &["1", "12", "123"]);
        assert!(lines.contains(&"213"));
        assert!(lines.contains(&"7536"));
        assert!(!lines.contains(&"137"));
        assert_eq!(lines.last(), Some(&"987654321"));
    }

    #[test]
    fn serialization_visits_in_pattern_order() {
        let tree = standard_tree();
        let mut out: Vec<u8> = Vec::new();
        tree.serialize_patterns(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let mut expected = Vec::new();
        tree.for_each_pattern(|points| expected.push(Pattern::new(points.to_vec()).to_string()));
        assert!(text.lines().eq(expected.iter().map(String::as_str)));
    }

    #[test]
    fn building_twice_gives_identical_counts() {
        let table = BlockTable::standard();
        let first = PatternTree::build(&table).count_by_length();
        let second = PatternTree::build(&table).count_by_length();
        assert_eq!(first, second);
    }

    #[test]
    fn single_point_restriction_has_no_longer_patterns() {
        let table = BlockTable::standard().restricted(&[5]);
        let tree = PatternTree::build(&table);
        let counts = tree.count_by_length();
        assert_eq!(counts.of_length(1), 1);
        assert_eq!(counts.total(), 1);
        assert_eq!(tree.max_length(), 1);
        let five = tree.find(&[5]).unwrap();
        assert!(tree.node(five).unwrap().children().is_empty());
    }

    #[test]
    fn restricted_tree_stays_inside_allowed_points() {
        let allowed = [7, 3, 6, 5, 2];
        let tree = PatternTree::build(&BlockTable::standard().restricted(&allowed));
        tree.for_each_pattern(|points| {
            assert!(points.iter().all(|p| allowed.contains(p)), "{points:?}");
        });
        assert!(tree.find(&[7, 3, 6, 5]).is_none());
        assert!(tree.find(&[5, 7, 3, 6, 2]).is_some());
    }

    #[test]
    fn blocked_pair_without_middle_point_never_connects() {
        let tree = PatternTree::build(&BlockTable::standard().restricted(&[1, 3]));
        assert_eq!(tree.count_by_length().by_length(), &[2, 0, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn excluded_edge_removes_transitions() {
        let table = BlockTable::standard().without_edge(1, 2);
        let tree = PatternTree::build(&table);
        assert!(tree.find(&[1, 2]).is_none());
        assert!(tree.find(&[2, 1]).is_none());
        assert!(tree.find(&[1, 5, 2]).is_some());
        assert!(tree.count_by_length().total() < 389_497);
    }

    #[test]
    fn samples_legal_patterns_of_requested_length() {
        let table = BlockTable::standard();
        let tree = PatternTree::build(&table);
        let mut rng = StdRng::seed_from_u64(7);
        for length in 4..=9 {
            let patterns = tree.sample_random(length, 10, &mut rng).unwrap();
            assert_eq!(patterns.len(), 10);
            for pattern in patterns {
                let points = pattern.points();
                assert_eq!(points.len(), length);
                for i in 0..points.len() {
                    assert!(
                        PatternTree::is_legal_move(&table, &points[..i], points[i]),
                        "{pattern}"
                    );
                }
            }
        }
    }

    #[test]
    fn sampling_zero_patterns_is_empty() {
        let tree = standard_tree();
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(tree.sample_random(6, 0, &mut rng), Ok(Vec::new()));
    }

    #[test]
    fn sampling_validates_before_drawing() {
        // Neither call may reserve room for the requested count.
        let tree = PatternTree::build(&BlockTable::standard().restricted(&[4, 5, 6]));
        let mut rng = StdRng::seed_from_u64(9);
        assert_eq!(
            tree.sample_random(4, usize::MAX, &mut rng),
            Err(TreeError::NoPatternOfLength(4))
        );
        assert_eq!(
            tree.sample_random(11, usize::MAX, &mut rng),
            Err(TreeError::InvalidLength(11))
        );
    }

    #[test]
    fn sampling_rejects_invalid_lengths() {
        let tree = standard_tree();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            tree.sample_random(3, 10, &mut rng),
            Err(TreeError::InvalidLength(3))
        );
        assert_eq!(
            tree.sample_random(10, 10, &mut rng),
            Err(TreeError::InvalidLength(10))
        );
    }

    #[test]
    fn sampling_reports_missing_length() {
        let tree = PatternTree::build(&BlockTable::standard().restricted(&[1, 2, 3]));
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            tree.sample_random(4, 10, &mut rng),
            Err(TreeError::NoPatternOfLength(4))
        );
    }

    #[test]
    fn sampling_avoids_dead_ends() {
        // 5 -> 1 cannot continue: 3 and 7 need 2 and 4, which are excluded.
        let table = BlockTable::standard().restricted(&[1, 3, 5, 7]);
        let tree = PatternTree::build(&table);
        let five_one = tree.find(&[5, 1]).unwrap();
        assert!(tree.node(five_one).unwrap().children().is_empty());

        let mut rng = StdRng::seed_from_u64(42);
        let patterns = tree.sample_random(4, 200, &mut rng).unwrap();
        for pattern in patterns {
            assert_eq!(pattern.len(), 4);
            assert!(tree.find(pattern.points()).is_some(), "{pattern}");
        }
    }
}
