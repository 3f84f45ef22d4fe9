//! Quadtree facade owning the object arena and the root node.
//!
//! Objects are stored once in an arena; nodes hold [`ObjectId`] handles, so
//! an object straddling several quadrants is referenced from several node
//! lists without being copied.

use tracing::debug;

use crate::node::{NodeEntry, QuadNode};
use crate::{BoundingRect, QuadTreeConfig, QuadTreeError, Result};

/// Handle to an object stored in a [`QuadTree`].
///
/// Handles are issued in insertion order and become invalid after
/// [`QuadTree::clear`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId(usize);

impl ObjectId {
    #[inline]
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the object in insertion order.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A payload paired with its rectangle.
#[derive(Clone, Debug, PartialEq)]
pub struct IndexedObject<T> {
    /// Caller data, never interpreted by the tree
    pub payload: T,
    /// Extent the object was inserted with
    pub rect: BoundingRect,
}

/// Region quadtree over axis-aligned rectangles.
///
/// # Example
/// ```
/// use quadindex::prelude::*;
///
/// let mut tree = QuadTree::new(8, BoundingRect::new(0.0, 0.0, 800.0, 800.0)).unwrap();
/// let id = tree.insert("crate", BoundingRect::new(600.0, 600.0, 10.0, 10.0)).unwrap();
///
/// let mut results = Vec::new();
/// tree.retrieve(&BoundingRect::new(550.0, 550.0, 100.0, 100.0), &mut results);
/// assert!(results.contains(&id));
/// ```
#[derive(Clone, Debug)]
pub struct QuadTree<T> {
    /// Every inserted object, indexed by `ObjectId`
    objects: Vec<IndexedObject<T>>,
    /// Root node covering the domain
    root: QuadNode,
    config: QuadTreeConfig,
}

impl<T> QuadTree<T> {
    /// Creates an empty tree covering `domain` with the default split threshold.
    ///
    /// # Errors
    /// Returns [`QuadTreeError::InvalidBounds`] when `domain` is not well
    /// formed or has no area.
    pub fn new(max_levels: u32, domain: BoundingRect) -> Result<Self> {
        Self::with_config(QuadTreeConfig::default().with_max_levels(max_levels), domain)
    }

    /// Creates an empty tree covering `domain`.
    ///
    /// # Errors
    /// Returns [`QuadTreeError::InvalidBounds`] when `domain` is not well
    /// formed or has zero width or height.
    pub fn with_config(config: QuadTreeConfig, domain: BoundingRect) -> Result<Self> {
        if !domain.has_area() {
            return Err(QuadTreeError::InvalidBounds(domain));
        }
        Ok(Self {
            objects: Vec::new(),
            root: QuadNode::new(domain, config.max_levels, config.max_objects),
            config,
        })
    }

    /// Inserts an object and returns its handle.
    ///
    /// Zero-size objects are accepted.
    ///
    /// # Errors
    /// Returns [`QuadTreeError::InvalidBounds`] when `rect` has a negative
    /// size or a non-finite component; the tree is left unchanged.
    pub fn insert(&mut self, payload: T, rect: BoundingRect) -> Result<ObjectId> {
        let rect = rect.validate().inspect_err(|err| {
            debug!(%err, "rejected quadtree insert");
        })?;
        let id = ObjectId::new(self.objects.len());
        self.objects.push(IndexedObject { payload, rect });
        self.root.insert(NodeEntry { id, rect });
        Ok(id)
    }

    /// Appends handles of the objects stored along the query's path.
    ///
    /// The results form a multiset: an object referenced from several
    /// visited nodes appears once per node. Existing contents of `results`
    /// are kept.
    pub fn retrieve(&self, query: &BoundingRect, results: &mut Vec<ObjectId>) {
        self.root.retrieve(query, results);
    }

    /// Like [`retrieve`](Self::retrieve), resolving handles to objects.
    pub fn retrieve_objects(&self, query: &BoundingRect) -> Vec<&IndexedObject<T>> {
        let mut ids = Vec::new();
        self.retrieve(query, &mut ids);
        ids.into_iter().filter_map(|id| self.get(id)).collect()
    }

    /// Retrieve with duplicates removed, sorted by handle.
    pub fn retrieve_unique(&self, query: &BoundingRect) -> Vec<ObjectId> {
        let mut ids = Vec::new();
        self.retrieve(query, &mut ids);
        ids.sort_unstable();
        ids.dedup();
        ids
    }

    /// Removes every object and collapses the tree back to a single leaf.
    pub fn clear(&mut self) {
        debug!(objects = self.objects.len(), "clearing quadtree");
        self.objects.clear();
        self.root.clear();
    }

    /// Object behind a handle, `None` for handles not issued by this tree.
    #[inline]
    pub fn get(&self, id: ObjectId) -> Option<&IndexedObject<T>> {
        self.objects.get(id.index())
    }

    /// Iterates over stored objects in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &IndexedObject<T>)> {
        self.objects
            .iter()
            .enumerate()
            .map(|(index, object)| (ObjectId::new(index), object))
    }

    /// Number of inserted objects, counting each once.
    #[inline]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// True when no object has been inserted since construction or the last clear.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Root node, for inspecting the partition.
    #[inline]
    pub fn root(&self) -> &QuadNode {
        &self.root
    }

    /// Rectangle covered by the root.
    #[inline]
    pub fn domain(&self) -> BoundingRect {
        self.root.rect()
    }

    /// Depth limit and split threshold of this tree.
    #[inline]
    pub fn config(&self) -> QuadTreeConfig {
        self.config
    }

    /// Deepest node level currently present.
    pub fn depth(&self) -> u32 {
        self.root.nodes().map(QuadNode::level).max().unwrap_or(0)
    }

    /// Total number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.root.nodes().count()
    }
}
