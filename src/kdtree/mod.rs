//! A mutable, balanced k-d tree over projected coordinates.

#![warn(missing_docs)]

mod collect;
mod index;

pub use collect::Neighbor;
pub use index::KDTree;

use tinyvec::TinyVec;

use crate::r#type::IndexScalar;

/// A point in the projected metric space.
///
/// Inline storage covers the usual three-dimensional embedding; larger
/// dimensionalities spill to the heap.
pub type Coordinate<N> = TinyVec<[N; 3]>;

/// Squared Euclidean distance between two coordinates of equal
/// dimensionality.
#[inline]
pub(crate) fn sq_dist<N: IndexScalar>(a: &Coordinate<N>, b: &Coordinate<N>) -> N {
    let mut acc = N::zero();
    for (&ac, &bc) in a.iter().zip(b.iter()) {
        let d = ac - bc;
        acc = acc + d * d;
    }
    acc
}
