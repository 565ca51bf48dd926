// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the tree: node identifiers, flags, metadata, layout knobs.

/// Identifier for a node in the tree.
///
/// This is a small, copyable index handle into the tree's arena. Nodes are
/// never removed from a snapshot, so a `NodeId` obtained from
/// [`Tree::add_dir`](crate::Tree::add_dir) or
/// [`Tree::add_file`](crate::Tree::add_file) stays valid for the lifetime of
/// the [`Tree`](crate::Tree) that produced it. Handles are not meaningful
/// across trees.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: usize) -> Self {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "NodeId uses 32-bit indices by design."
        )]
        let idx = idx as u32;
        Self(idx)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

bitflags::bitflags! {
    /// Node flags controlling picking and selection.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u8 {
        /// Node participates in ray picking.
        const PICKABLE = 0b0000_0001;
        /// Node is the current selection. At most one node in a tree carries
        /// this bit; it is maintained by the picking layer.
        const SELECTED = 0b0000_0010;
    }
}

impl Default for NodeFlags {
    fn default() -> Self {
        Self::PICKABLE
    }
}

/// Per-file metadata captured from a filesystem scan.
///
/// Stored opaquely for display layers; the core never interprets these
/// beyond holding them.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FileMeta {
    /// Permission bits, as reported by the scanner.
    pub mode: u32,
    /// Numeric owner id.
    pub uid: u32,
    /// Numeric group id.
    pub gid: u32,
    /// Hard-link count.
    pub nlink: u32,
    /// Last access time, seconds since the epoch.
    pub atime: i64,
    /// Last modification time, seconds since the epoch.
    pub mtime: i64,
    /// Creation / status-change time, seconds since the epoch.
    pub ctime: i64,
}

/// An edge between a directory and one of its subdirectories.
///
/// Links are created atomically when a subdirectory is attached and stay
/// index-aligned with [`Tree::subdirs`](crate::Tree::subdirs). Renderers draw
/// them as connecting lines; they do not participate in picking, so
/// `selected` is never set by this workspace.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Link {
    /// The parent directory.
    pub from: NodeId,
    /// The child directory.
    pub to: NodeId,
    /// Selection flag, kept for renderer parity. Currently always false.
    pub selected: bool,
}

/// Scalar knobs read by [`Tree::layout`](crate::Tree::layout).
///
/// Set before the first layout call; later changes require laying out again
/// to take effect. The defaults match the visual tuning of the original
/// desktop application.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutParams {
    /// Edge length of a file cube (lateral and depth axes).
    pub file_size: f64,
    /// Gap between adjacent file cubes, and between cubes and the platform rim.
    pub file_spacing: f64,
    /// Height of a file cube.
    pub file_height: f64,
    /// Minimum platform footprint of a directory, per axis.
    pub dir_size: f64,
    /// Lateral gap reserved around each directory subtree.
    pub dir_spacing: f64,
    /// Height of a directory platform.
    pub dir_height: f64,
    /// Distance along the descent axis between consecutive tree levels.
    pub level_distance: f64,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            file_size: 0.5,
            file_spacing: 0.1,
            file_height: 0.1,
            dir_size: 0.7,
            dir_spacing: 0.5,
            dir_height: 0.1,
            level_distance: 5.0,
        }
    }
}
