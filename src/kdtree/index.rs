use crate::error::{Result, RevGeoError};
use crate::kdtree::collect::{NearestSet, RadialBucket};
use crate::kdtree::{sq_dist, Coordinate, Neighbor};
use crate::r#type::IndexScalar;

#[derive(Debug, Clone)]
struct TreeNode<N: IndexScalar, T> {
    point: Coordinate<N>,
    item: T,
    left: Option<Box<TreeNode<N, T>>>,
    right: Option<Box<TreeNode<N, T>>>,
}

impl<N: IndexScalar, T> TreeNode<N, T> {
    fn new(point: Coordinate<N>, item: T) -> Self {
        Self {
            point,
            item,
            left: None,
            right: None,
        }
    }
}

/// A k-d tree over fixed-dimensionality coordinates, storing one item per
/// point.
///
/// The split axis cycles with depth (`depth mod dimensions`). For a node
/// splitting on axis `a`, every coordinate in its left subtree has component
/// `a` less than or equal to the node's, and every coordinate in the right
/// subtree has component `a` greater than or equal to it.
///
/// [`add`][KDTree::add] appends leaves without rebalancing, so height can
/// degrade toward O(n) for adversarial insertion orders;
/// [`balance`][KDTree::balance] rebuilds to O(log n) height. Queries stay
/// correct either way. Queries take `&self` and never mutate nodes, so
/// concurrent reads are safe; mutation requires `&mut self` and therefore
/// exclusivity.
#[derive(Debug, Clone)]
pub struct KDTree<N: IndexScalar, T> {
    root: Option<Box<TreeNode<N, T>>>,
    dimensions: usize,
    len: usize,
}

impl<N: IndexScalar, T> KDTree<N, T> {
    /// Create an empty tree over coordinates of the given dimensionality.
    pub fn new(dimensions: usize) -> Self {
        assert!(dimensions >= 1);
        Self {
            root: None,
            dimensions,
            len: 0,
        }
    }

    /// The dimensionality this tree was configured with.
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// The number of indexed points. Unaffected by
    /// [`balance`][KDTree::balance].
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no points.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn check_dimensions(&self, point: &Coordinate<N>) -> Result<()> {
        if point.len() != self.dimensions {
            return Err(RevGeoError::Configuration(format!(
                "Got a {}-dimensional coordinate in a {}-dimensional index.",
                point.len(),
                self.dimensions
            )));
        }
        Ok(())
    }

    /// Insert a point as a new leaf, descending by the cycling split axis.
    ///
    /// O(height) and does not rebalance. Fails with a configuration error,
    /// before any mutation, when the coordinate's dimensionality does not
    /// match the tree's.
    pub fn add(&mut self, point: Coordinate<N>, item: T) -> Result<()> {
        self.check_dimensions(&point)?;
        let dimensions = self.dimensions;
        Self::insert(&mut self.root, point, item, 0, dimensions);
        self.len += 1;
        Ok(())
    }

    /// Insert every entry, equivalent to repeated [`add`][KDTree::add].
    ///
    /// All coordinates are validated up front: on a dimensionality mismatch
    /// anywhere in the input, nothing is inserted.
    pub fn add_range(
        &mut self,
        entries: impl IntoIterator<Item = (Coordinate<N>, T)>,
    ) -> Result<()> {
        let entries: Vec<_> = entries.into_iter().collect();
        for (point, _) in &entries {
            self.check_dimensions(point)?;
        }
        let dimensions = self.dimensions;
        for (point, item) in entries {
            Self::insert(&mut self.root, point, item, 0, dimensions);
            self.len += 1;
        }
        Ok(())
    }

    fn insert(
        slot: &mut Option<Box<TreeNode<N, T>>>,
        point: Coordinate<N>,
        item: T,
        depth: usize,
        dimensions: usize,
    ) {
        match slot {
            None => *slot = Some(Box::new(TreeNode::new(point, item))),
            Some(node) => {
                let axis = depth % dimensions;
                let child = if point[axis] <= node.point[axis] {
                    &mut node.left
                } else {
                    &mut node.right
                };
                Self::insert(child, point, item, depth + 1, dimensions);
            }
        }
    }

    /// Rebuild the tree from the full current point set by recursive median
    /// partition along the cycling axis, restoring O(log n) height.
    ///
    /// Deterministic, and a no-op on an empty tree. Must be invoked after
    /// bulk loading for guaranteed query performance; queries remain correct
    /// without it.
    pub fn balance(&mut self) {
        if self.root.is_none() {
            return;
        }
        let mut entries = Vec::with_capacity(self.len);
        Self::drain(self.root.take(), &mut entries);
        self.root = Self::build(entries, 0, self.dimensions);
    }

    fn drain(root: Option<Box<TreeNode<N, T>>>, out: &mut Vec<(Coordinate<N>, T)>) {
        let mut stack: Vec<Box<TreeNode<N, T>>> = Vec::new();
        if let Some(node) = root {
            stack.push(node);
        }
        while let Some(node) = stack.pop() {
            let mut node = *node;
            if let Some(left) = node.left.take() {
                stack.push(left);
            }
            if let Some(right) = node.right.take() {
                stack.push(right);
            }
            out.push((node.point, node.item));
        }
    }

    fn build(
        mut entries: Vec<(Coordinate<N>, T)>,
        depth: usize,
        dimensions: usize,
    ) -> Option<Box<TreeNode<N, T>>> {
        if entries.is_empty() {
            return None;
        }
        let axis = depth % dimensions;
        let median = entries.len() / 2;
        // We don't allow NaN. This should only panic on NaN
        entries.select_nth_unstable_by(median, |a, b| a.0[axis].partial_cmp(&b.0[axis]).unwrap());
        let right = entries.split_off(median + 1);
        let Some((point, item)) = entries.pop() else {
            return None;
        };
        Some(Box::new(TreeNode {
            point,
            item,
            left: Self::build(entries, depth + 1, dimensions),
            right: Self::build(right, depth + 1, dimensions),
        }))
    }

    /// Search the tree for points within a given radius of `center`, in the
    /// projected metric. Subtrees whose splitting plane lies farther than
    /// `radius` from the center are pruned.
    ///
    /// Results carry no ordering guarantee beyond "within radius". When more
    /// points qualify than `max_results`, the subset returned is whichever
    /// the traversal encountered first, not the closest subset. Callers that
    /// need the closest points use [`neighbors`][KDTree::neighbors].
    pub fn within(
        &self,
        center: &Coordinate<N>,
        radius: N,
        max_results: usize,
    ) -> Result<Vec<Neighbor<'_, N, T>>> {
        self.check_dimensions(center)?;
        if radius < N::zero() {
            return Err(RevGeoError::InvalidArgument(format!(
                "Got negative search radius {:?}.",
                radius
            )));
        }
        if max_results == 0 {
            return Err(RevGeoError::InvalidArgument(
                "Got zero max_results.".to_string(),
            ));
        }

        // An unbounded radius is the saturated "infinity" in an integer
        // domain; squaring it would overflow.
        let radius_sq = if radius == N::positive_infinity() {
            N::positive_infinity()
        } else {
            radius * radius
        };

        let mut bucket = RadialBucket::new(max_results);
        if let Some(root) = &self.root {
            Self::collect_within(root, center, radius_sq, 0, self.dimensions, &mut bucket);
        }
        Ok(bucket.into_vec())
    }

    fn collect_within<'a>(
        node: &'a TreeNode<N, T>,
        center: &Coordinate<N>,
        radius_sq: N,
        depth: usize,
        dimensions: usize,
        bucket: &mut RadialBucket<'a, N, T>,
    ) {
        if bucket.is_full() {
            return;
        }

        let distance_sq = sq_dist(&node.point, center);
        if distance_sq <= radius_sq {
            bucket.push(Neighbor {
                point: &node.point,
                item: &node.item,
                distance_sq,
            });
            if bucket.is_full() {
                return;
            }
        }

        let axis = depth % dimensions;
        let diff = center[axis] - node.point[axis];
        let (near, far) = if diff <= N::zero() {
            (&node.left, &node.right)
        } else {
            (&node.right, &node.left)
        };

        if let Some(child) = near {
            Self::collect_within(child, center, radius_sq, depth + 1, dimensions, bucket);
        }
        if let Some(child) = far {
            // The far side can only qualify if the splitting plane itself is
            // within the radius.
            if diff * diff <= radius_sq {
                Self::collect_within(child, center, radius_sq, depth + 1, dimensions, bucket);
            }
        }
    }

    /// Search the tree for the `max_results` points nearest to `center`,
    /// ascending by distance in the projected metric.
    ///
    /// `max_distance` optionally caps how far a result may be; `None` means
    /// unbounded. When `max_results` is at least [`len`][KDTree::len], every
    /// indexed point is returned in ascending-distance order.
    pub fn neighbors(
        &self,
        center: &Coordinate<N>,
        max_results: usize,
        max_distance: Option<N>,
    ) -> Result<Vec<Neighbor<'_, N, T>>> {
        self.check_dimensions(center)?;
        if max_results == 0 {
            return Err(RevGeoError::InvalidArgument(
                "Got zero max_results.".to_string(),
            ));
        }
        if let Some(max_distance) = max_distance {
            if max_distance < N::zero() {
                return Err(RevGeoError::InvalidArgument(format!(
                    "Got negative max_distance {:?}.",
                    max_distance
                )));
            }
        }
        // Square only a caller-provided cutoff: squaring the saturated
        // "infinity" of an integer domain would overflow.
        let cutoff_sq = max_distance.map_or_else(N::positive_infinity, |d| d * d);

        let mut set = NearestSet::new(max_results, cutoff_sq);
        if let Some(root) = &self.root {
            Self::collect_nearest(root, center, 0, self.dimensions, &mut set);
        }
        Ok(set.into_sorted_vec())
    }

    fn collect_nearest<'a>(
        node: &'a TreeNode<N, T>,
        center: &Coordinate<N>,
        depth: usize,
        dimensions: usize,
        set: &mut NearestSet<'a, N, T>,
    ) {
        set.consider(Neighbor {
            point: &node.point,
            item: &node.item,
            distance_sq: sq_dist(&node.point, center),
        });

        let axis = depth % dimensions;
        let diff = center[axis] - node.point[axis];
        let (near, far) = if diff <= N::zero() {
            (&node.left, &node.right)
        } else {
            (&node.right, &node.left)
        };

        if let Some(child) = near {
            Self::collect_nearest(child, center, depth + 1, dimensions, set);
        }
        if let Some(child) = far {
            // The far side can only hold an improvement while its splitting
            // plane is closer than the worst retained candidate.
            if set.admits(diff * diff) {
                Self::collect_nearest(child, center, depth + 1, dimensions, set);
            }
        }
    }
}
