//! Immutable, cost-accumulating node paths.

use core::fmt;
use core::hash::{Hash, Hasher};
use std::sync::Arc;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::WeightedNode;

struct Link {
    node: WeightedNode,
    prev: Option<Arc<Link>>,
}

impl Drop for Link {
    // Unlink iteratively so dropping a long, unshared chain cannot blow the
    // stack through nested `Arc` drops.
    fn drop(&mut self) {
        let mut prev = self.prev.take();
        while let Some(link) = prev {
            match Arc::try_unwrap(link) {
                Ok(mut inner) => prev = inner.prev.take(),
                Err(_) => break,
            }
        }
    }
}

/// A non-empty ordered sequence of nodes together with its total cost.
///
/// The cost is the sum of the weights of every node on the path, counted per
/// node rather than per edge, so a single-node path costs that node's weight.
///
/// Paths are persistent: [`extend`](Self::extend) returns a new path that
/// shares the existing prefix, leaving `self` untouched. Adjacency is not
/// checked; whoever extends the path is responsible for walking real edges.
#[derive(Clone)]
pub struct NodeCountingPath {
    tail: Arc<Link>,
    len: usize,
    cost: i64,
}

impl NodeCountingPath {
    /// Creates a path holding only `start`.
    pub fn new(start: WeightedNode) -> Self {
        let cost = start.weight();
        Self {
            tail: Arc::new(Link {
                node: start,
                prev: None,
            }),
            len: 1,
            cost,
        }
    }

    /// Returns a new path with `node` appended.
    ///
    /// Costs saturate at the `i64` bounds instead of overflowing.
    #[must_use]
    pub fn extend(&self, node: WeightedNode) -> Self {
        let cost = self.cost.saturating_add(node.weight());
        Self {
            tail: Arc::new(Link {
                node,
                prev: Some(Arc::clone(&self.tail)),
            }),
            len: self.len + 1,
            cost,
        }
    }

    /// Total weight of the nodes on the path.
    #[inline]
    pub fn cost(&self) -> i64 {
        self.cost
    }

    /// Number of nodes on the path. Never zero.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// The last node on the path.
    #[inline]
    pub fn last(&self) -> &WeightedNode {
        &self.tail.node
    }

    /// The first node on the path.
    pub fn first(&self) -> &WeightedNode {
        let mut link = &*self.tail;
        while let Some(prev) = &link.prev {
            link = prev;
        }
        &link.node
    }

    /// Iterates over the nodes from first to last.
    ///
    /// Each call walks the shared chain afresh, so the iteration can be
    /// restarted any number of times.
    pub fn iter(&self) -> Iter<'_> {
        let mut nodes = Vec::with_capacity(self.len);
        let mut link = Some(&*self.tail);
        while let Some(l) = link {
            nodes.push(&l.node);
            link = l.prev.as_deref();
        }
        nodes.reverse();
        Iter {
            inner: nodes.into_iter(),
        }
    }

    /// Node names from first to last.
    pub fn names(&self) -> Vec<&str> {
        self.iter().map(WeightedNode::name).collect()
    }

    /// Returns `true` if `node` appears anywhere on the path.
    pub fn contains(&self, node: &WeightedNode) -> bool {
        let mut link = Some(&*self.tail);
        while let Some(l) = link {
            if &l.node == node {
                return true;
            }
            link = l.prev.as_deref();
        }
        false
    }
}

/// Iterator over the nodes of a [`NodeCountingPath`], first to last.
pub struct Iter<'a> {
    inner: std::vec::IntoIter<&'a WeightedNode>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a WeightedNode;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a NodeCountingPath {
    type Item = &'a WeightedNode;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl PartialEq for NodeCountingPath {
    fn eq(&self, other: &Self) -> bool {
        if Arc::ptr_eq(&self.tail, &other.tail) {
            return true;
        }
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for NodeCountingPath {}

impl Hash for NodeCountingPath {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for node in self {
            node.hash(state);
        }
    }
}

impl fmt::Debug for NodeCountingPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeCountingPath")
            .field("nodes", &self.iter().collect::<Vec<_>>())
            .field("cost", &self.cost)
            .finish()
    }
}

impl fmt::Display for NodeCountingPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            f.write_str(node.name())?;
        }
        write!(f, " (cost {})", self.cost)
    }
}

impl Serialize for NodeCountingPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("NodeCountingPath", 2)?;
        s.serialize_field("nodes", &self.names())?;
        s.serialize_field("cost", &self.cost)?;
        s.end()
    }
}
