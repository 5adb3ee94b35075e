// error module
mod error;
// pattern module
mod pattern;
// tree module
mod pattern_tree;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the tree module.
//─────────────────────────────────────────────────────────────────────────────
pub use error::TreeError;
pub use pattern::Pattern;
pub use pattern_tree::{NodeId, PatternCounts, PatternNode, PatternTree, ROOT_NODE};
