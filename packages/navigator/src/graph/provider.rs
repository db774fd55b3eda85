use crate::common::config::EdgeAttribute;
use crate::common::coords::Coordinate;
use crate::common::error::Result;

/// An ordered sequence of node IDs, starting at the origin node and ending
/// at the destination node
pub type NodePath = Vec<i64>;

/// Lazy, single pass sequence of paths
pub type PathIter<'a> = Box<dyn Iterator<Item = NodePath> + 'a>;

/// Read-only access to a weighted street network. Node IDs are the
/// identifiers from the source dataset rather than internal graph indexes.
pub trait GraphProvider {
    /// Find the node which sits closest to the provided coordinate
    fn nearest_node(&self, coords: &Coordinate) -> Result<i64>;

    /// Find a single path from `from` to `to` which minimises the sum of
    /// the provided edge attribute
    fn shortest_path(
        &self,
        from: i64,
        to: i64,
        weight: EdgeAttribute,
    ) -> Result<NodePath>;

    /// Find every path from `from` to `to` which ties for the minimum sum of
    /// the provided edge attribute
    fn all_shortest_paths<'a>(
        &'a self,
        from: i64,
        to: i64,
        weight: EdgeAttribute,
    ) -> Result<PathIter<'a>>;

    /// Fetch the value of an attribute for each edge traversed by the path,
    /// in order. A path of N nodes yields N - 1 values.
    fn edge_attribute(
        &self,
        path: &[i64],
        attribute: EdgeAttribute,
    ) -> Result<Vec<f64>>;
}
