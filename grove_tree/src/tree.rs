// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: arena storage, population, accessors.

use alloc::string::String;
use alloc::vec::Vec;
use glam::DVec3;
use grove_space::Aabb3;

use crate::types::{FileMeta, Link, NodeFlags, NodeId};

/// Per-directory payload: child ordering plus the lateral span computed by
/// the bounds pass.
#[derive(Clone, Debug, Default)]
pub(crate) struct DirData {
    pub(crate) subdirs: Vec<NodeId>,
    pub(crate) files: Vec<NodeId>,
    pub(crate) links: Vec<Link>,
    /// Lateral footprint bounds relative to the (as yet unplaced) platform
    /// center. Written by the bounds pass, consumed by the parent during
    /// placement; not meaningful outside layout.
    pub(crate) min_x: f64,
    pub(crate) max_x: f64,
}

#[derive(Clone, Debug)]
pub(crate) enum NodeKind {
    File(FileMeta),
    Dir(DirData),
}

#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub(crate) name: String,
    pub(crate) size: u64,
    pub(crate) position: DVec3,
    pub(crate) extent: DVec3,
    pub(crate) parent: Option<NodeId>,
    pub(crate) flags: NodeFlags,
    pub(crate) kind: NodeKind,
}

impl Node {
    fn new(name: String, parent: Option<NodeId>, kind: NodeKind) -> Self {
        Self {
            name,
            size: 0,
            position: DVec3::ZERO,
            extent: DVec3::ZERO,
            parent,
            flags: NodeFlags::default(),
            kind,
        }
    }
}

/// A directory snapshot as an arena of nodes, rooted at a single directory.
///
/// Populate with [`Tree::add_dir`] / [`Tree::add_file`], then call
/// [`Tree::layout`](Tree::layout) once. Positions and extents are undefined
/// before the first layout pass.
#[derive(Clone)]
pub struct Tree {
    nodes: Vec<Node>, // slot 0 is the root directory
}

impl core::fmt::Debug for Tree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let dirs = self
            .nodes
            .iter()
            .filter(|n| matches!(n.kind, NodeKind::Dir(_)))
            .count();
        f.debug_struct("Tree")
            .field("nodes", &self.nodes.len())
            .field("dirs", &dirs)
            .field("files", &(self.nodes.len() - dirs))
            .finish_non_exhaustive()
    }
}

impl Tree {
    /// Create a tree holding only its root directory.
    pub fn new(root_name: impl Into<String>) -> Self {
        let root = Node::new(root_name.into(), None, NodeKind::Dir(DirData::default()));
        Self {
            nodes: alloc::vec![root],
        }
    }

    /// The root directory's id.
    pub fn root(&self) -> NodeId {
        NodeId::new(0)
    }

    /// Attach a new subdirectory under `parent` and return its id.
    ///
    /// Also creates the [`Link`] edge from `parent` to the new directory, so
    /// links and subdirectories stay index-aligned.
    ///
    /// # Panics
    ///
    /// Panics if `parent` is a file node.
    pub fn add_dir(&mut self, parent: NodeId, name: impl Into<String>) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes
            .push(Node::new(name.into(), Some(parent), NodeKind::Dir(DirData::default())));
        let dir = self.dir_mut(parent);
        dir.subdirs.push(id);
        dir.links.push(Link {
            from: parent,
            to: id,
            selected: false,
        });
        debug_assert_eq!(dir.links.len(), dir.subdirs.len());
        id
    }

    /// Attach a new file under `parent` and return its id.
    ///
    /// # Panics
    ///
    /// Panics if `parent` is a file node.
    pub fn add_file(
        &mut self,
        parent: NodeId,
        name: impl Into<String>,
        size: u64,
        meta: FileMeta,
    ) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        let mut node = Node::new(name.into(), Some(parent), NodeKind::File(meta));
        node.size = size;
        self.nodes.push(node);
        self.dir_mut(parent).files.push(id);
        id
    }

    /// Total number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Iterate over every node id, in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId::new)
    }

    /// The node's display name (also its path segment).
    pub fn name(&self, id: NodeId) -> &str {
        &self.node(id).name
    }

    /// The node's byte size (meaningfully nonzero for files only).
    pub fn size(&self, id: NodeId) -> u64 {
        self.node(id).size
    }

    /// The node's world-space center, as assigned by the last layout pass.
    pub fn position(&self, id: NodeId) -> DVec3 {
        self.node(id).position
    }

    /// The node's world-space half-extents, as assigned by the last layout pass.
    pub fn extent(&self, id: NodeId) -> DVec3 {
        self.node(id).extent
    }

    /// The node's bounding box (`position ± extent`).
    pub fn aabb(&self, id: NodeId) -> Aabb3 {
        let n = self.node(id);
        Aabb3::from_center_half(n.position, n.extent)
    }

    /// The owning directory, or `None` for the root.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// The node's flags.
    pub fn flags(&self, id: NodeId) -> NodeFlags {
        self.node(id).flags
    }

    /// Replace the node's flags.
    pub fn set_flags(&mut self, id: NodeId, flags: NodeFlags) {
        self.node_mut(id).flags = flags;
    }

    /// Whether the node is the current selection.
    pub fn is_selected(&self, id: NodeId) -> bool {
        self.node(id).flags.contains(NodeFlags::SELECTED)
    }

    /// Set or clear the node's selected bit.
    ///
    /// The single-selection invariant (at most one node selected per tree) is
    /// maintained by the picking layer, not enforced here.
    pub fn set_selected(&mut self, id: NodeId, selected: bool) {
        self.node_mut(id).flags.set(NodeFlags::SELECTED, selected);
    }

    /// Whether the node is a directory.
    pub fn is_dir(&self, id: NodeId) -> bool {
        matches!(self.node(id).kind, NodeKind::Dir(_))
    }

    /// The file's scan metadata, or `None` for directories.
    pub fn file_meta(&self, id: NodeId) -> Option<&FileMeta> {
        match &self.node(id).kind {
            NodeKind::File(meta) => Some(meta),
            NodeKind::Dir(_) => None,
        }
    }

    /// The directory's subdirectories, in attach order. Empty for files.
    pub fn subdirs(&self, id: NodeId) -> &[NodeId] {
        match &self.node(id).kind {
            NodeKind::Dir(d) => &d.subdirs,
            NodeKind::File(_) => &[],
        }
    }

    /// The directory's files, in attach order. Empty for files.
    pub fn files(&self, id: NodeId) -> &[NodeId] {
        match &self.node(id).kind {
            NodeKind::Dir(d) => &d.files,
            NodeKind::File(_) => &[],
        }
    }

    /// The directory's link edges, index-aligned with [`Tree::subdirs`].
    /// Empty for files.
    pub fn links(&self, id: NodeId) -> &[Link] {
        match &self.node(id).kind {
            NodeKind::Dir(d) => &d.links,
            NodeKind::File(_) => &[],
        }
    }

    // --- internals ---

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.idx()]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.idx()]
    }

    pub(crate) fn dir(&self, id: NodeId) -> &DirData {
        match &self.node(id).kind {
            NodeKind::Dir(d) => d,
            NodeKind::File(_) => panic!("node is not a directory"),
        }
    }

    pub(crate) fn dir_mut(&mut self, id: NodeId) -> &mut DirData {
        match &mut self.node_mut(id).kind {
            NodeKind::Dir(d) => d,
            NodeKind::File(_) => panic!("node is not a directory"),
        }
    }
}
