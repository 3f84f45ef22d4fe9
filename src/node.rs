//! Recursive quadtree node: classification, splitting, insertion, retrieval.
//!
//! A node keeps object handles directly until its list grows past
//! `max_objects`, then splits once into four children and pushes every
//! object it can classify down into them. Objects that straddle quadrants
//! are referenced from every child they touch.

use tracing::trace;

use crate::{BoundingRect, ObjectId, Quadrants};

/// Object handle stored at a node, together with the object's rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeEntry {
    /// Handle of the stored object
    pub id: ObjectId,
    /// Rectangle the object was inserted with
    pub rect: BoundingRect,
}

/// One node of the quadtree.
///
/// Nodes are built and mutated through [`QuadTree`](crate::QuadTree); this
/// type exposes the read side for callers that inspect or draw the partition.
#[derive(Clone, Debug, PartialEq)]
pub struct QuadNode {
    /// Depth of this node; the root is at level 0
    level: u32,
    /// Nodes at this level never split
    max_levels: u32,
    /// Direct object count that triggers a split
    max_objects: usize,
    /// Region covered by this node
    rect: BoundingRect,
    /// Objects stored directly at this node
    objects: Vec<NodeEntry>,
    /// Either no children or one per quadrant, in quadrant index order
    children: Option<Box<[Self; 4]>>,
}

impl QuadNode {
    /// Creates an empty root node at level 0.
    pub(crate) fn new(rect: BoundingRect, max_levels: u32, max_objects: usize) -> Self {
        Self::with_level(0, rect, max_levels, max_objects)
    }

    fn with_level(level: u32, rect: BoundingRect, max_levels: u32, max_objects: usize) -> Self {
        Self {
            level,
            max_levels,
            max_objects,
            rect,
            objects: Vec::new(),
            children: None,
        }
    }

    /// Region covered by this node.
    #[inline]
    pub fn rect(&self) -> BoundingRect {
        self.rect
    }

    /// Depth of this node; the root is at level 0.
    #[inline]
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Depth limit shared by the whole tree.
    #[inline]
    pub fn max_levels(&self) -> u32 {
        self.max_levels
    }

    /// Split threshold shared by the whole tree.
    #[inline]
    pub fn max_objects(&self) -> usize {
        self.max_objects
    }

    /// Objects stored directly at this node.
    #[inline]
    pub fn objects(&self) -> &[NodeEntry] {
        &self.objects
    }

    /// The four children, or `None` if this node has not split.
    #[inline]
    pub fn children(&self) -> Option<&[Self; 4]> {
        self.children.as_deref()
    }

    /// True when this node has not split.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Quadrants of this node that `rect` overlaps.
    #[inline]
    pub fn quadrants(&self, rect: &BoundingRect) -> Quadrants {
        Quadrants::classify(&self.rect, rect)
    }

    /// Depth-first iterator over this node and all of its descendants.
    pub fn nodes(&self) -> Nodes<'_> {
        Nodes { stack: vec![self] }
    }

    /// Inserts an object handle into the subtree rooted here.
    pub(crate) fn insert(&mut self, entry: NodeEntry) {
        if let Some(children) = self.children.as_deref_mut() {
            let quadrants = Quadrants::classify(&self.rect, &entry.rect);
            if !quadrants.is_empty() {
                for index in quadrants.indices() {
                    children[index].insert(entry);
                }
                return;
            }
        }

        self.objects.push(entry);
        if self.objects.len() > self.max_objects && self.level < self.max_levels {
            if self.children.is_none() {
                self.split();
            }
            self.redistribute();
        }
    }

    /// Creates the four children. Does not move any objects.
    fn split(&mut self) {
        let level = self.level + 1;
        let [q0, q1, q2, q3] = self.rect.quarters();
        let child = |rect| Self::with_level(level, rect, self.max_levels, self.max_objects);
        self.children = Some(Box::new([child(q0), child(q1), child(q2), child(q3)]));
        trace!(level = self.level, rect = ?self.rect, "split quadtree node");
    }

    /// Pushes every classifiable direct object into the children.
    fn redistribute(&mut self) {
        let Some(children) = self.children.as_deref_mut() else {
            return;
        };
        let rect = self.rect;
        let before = self.objects.len();
        self.objects.retain(|entry| {
            let quadrants = Quadrants::classify(&rect, &entry.rect);
            for index in quadrants.indices() {
                children[index].insert(*entry);
            }
            quadrants.is_empty()
        });
        trace!(
            level = self.level,
            moved = before - self.objects.len(),
            kept = self.objects.len(),
            "redistributed objects"
        );
    }

    /// Appends handles of objects stored along the query's path.
    ///
    /// Direct objects are always included. Children are visited per the
    /// query's quadrants, or all four when the query can not be classified.
    /// The same handle can be appended more than once.
    pub(crate) fn retrieve(&self, query: &BoundingRect, results: &mut Vec<ObjectId>) {
        results.extend(self.objects.iter().map(|entry| entry.id));

        let Some(children) = self.children.as_deref() else {
            return;
        };
        let quadrants = Quadrants::classify(&self.rect, query);
        if quadrants.is_empty() {
            for child in children {
                child.retrieve(query, results);
            }
        } else {
            for index in quadrants.indices() {
                children[index].retrieve(query, results);
            }
        }
    }

    /// Drops all objects and children and resets the level to 0.
    pub(crate) fn clear(&mut self) {
        self.objects.clear();
        if let Some(mut children) = self.children.take() {
            for child in children.iter_mut() {
                child.clear();
            }
        }
        self.level = 0;
    }
}

/// Depth-first node iterator returned by [`QuadNode::nodes`].
#[derive(Debug)]
pub struct Nodes<'a> {
    stack: Vec<&'a QuadNode>,
}

impl<'a> Iterator for Nodes<'a> {
    type Item = &'a QuadNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Some(children) = node.children() {
            self.stack.extend(children.iter().rev());
        }
        Some(node)
    }
}
