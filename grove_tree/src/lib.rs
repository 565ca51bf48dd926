// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grove Tree: an arena-backed filesystem tree with a two-pass 3D layout.
//!
//! Grove Tree is the entity model at the center of the Grove workspace.
//!
//! - Represents a directory snapshot as an arena of nodes: directories own
//!   ordered lists of subdirectories and files, plus one [`Link`] edge per
//!   subdirectory.
//! - Assigns every node a world-space position and half-extent via
//!   [`Tree::layout`]: directories become platforms spread along the lateral
//!   X axis, files become cubes arranged in a near-square grid on top of
//!   their platform, and each tree level steps a fixed distance along −Z.
//! - Exposes read-only accessors for renderers and picking layers; the only
//!   post-layout mutation is the per-node selected flag.
//!
//! The tree is populated once from a scan, laid out once, and then queried.
//! There are no removal operations: a snapshot that goes stale is rebuilt.
//!
//! ## API overview
//!
//! - [`Tree`]: the arena; construction via [`Tree::new`], [`Tree::add_dir`],
//!   [`Tree::add_file`].
//! - [`NodeId`]: copyable index handle of a node.
//! - [`FileMeta`]: opaque per-file metadata (permissions, owner, timestamps).
//! - [`LayoutParams`]: the seven scalar knobs read by [`Tree::layout`].
//! - [`NodeFlags`]: picking and selection bits.
//!
//! # Example
//!
//! ```rust
//! use grove_tree::{FileMeta, LayoutParams, Tree};
//!
//! let mut tree = Tree::new("root");
//! let root = tree.root();
//! let src = tree.add_dir(root, "src");
//! tree.add_file(src, "main.rs", 1024, FileMeta::default());
//! tree.add_file(root, "Cargo.toml", 300, FileMeta::default());
//!
//! tree.layout(&LayoutParams::default());
//!
//! // Children descend along -Z, one level per depth step.
//! assert!(tree.position(src).z < tree.position(root).z);
//! // One link edge per subdirectory, always.
//! assert_eq!(tree.links(root).len(), tree.subdirs(root).len());
//! ```
//!
//! Positions and extents are meaningless before the first [`Tree::layout`]
//! call; parameter changes take effect on the next call (there is no
//! incremental re-layout).
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod layout;
mod tree;
mod types;

pub use tree::Tree;
pub use types::{FileMeta, LayoutParams, Link, NodeFlags, NodeId};
