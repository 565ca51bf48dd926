// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grove Pick: nearest-hit ray picking with explicit selection state.
//!
//! Grove Pick sits on top of [`grove_tree`]: given a world-space [`Ray`]
//! (typically unprojected from the mouse cursor by the camera layer), it
//! finds the single nearest node whose box the ray enters and maintains the
//! tree's single-selection invariant.
//!
//! - [`find_nearest`]: walk the whole tree and return the closest hit.
//! - [`SelectionState`]: the current selection as an explicit value; call
//!   [`SelectionState::pick`] once per pointer query and redraw when it
//!   reports a change.
//!
//! Nothing here is global: callers own the `SelectionState` and thread it
//! through, which keeps picking testable and keeps "who is selected" out of
//! process-wide storage.
//!
//! # Example
//!
//! ```rust
//! use glam::DVec3;
//! use grove_pick::SelectionState;
//! use grove_space::Ray;
//! use grove_tree::{FileMeta, LayoutParams, Tree};
//!
//! let mut tree = Tree::new("root");
//! let root = tree.root();
//! let file = tree.add_file(root, "main.rs", 1024, FileMeta::default());
//! tree.layout(&LayoutParams::default());
//!
//! // Fire straight down at the file cube from above.
//! let ray = Ray::new(
//!     tree.position(file) + DVec3::new(0.0, 10.0, 0.0),
//!     DVec3::new(0.0, -1.0, 0.0),
//! );
//!
//! let mut selection = SelectionState::new();
//! assert!(selection.pick(&mut tree, &ray), "first hit changes the selection");
//! assert_eq!(selection.current(), Some(file));
//! assert!(tree.is_selected(file));
//! assert!(!selection.pick(&mut tree, &ray), "same hit again is not a change");
//! ```
//!
//! A ray that hits nothing is the normal "empty space under the cursor"
//! outcome, not an error: the selection is cleared and the previous node's
//! flag is reset.
//!
//! This crate is `no_std`.

#![no_std]

use grove_space::Ray;
use grove_tree::{NodeFlags, NodeId, Tree};

/// Find the node nearest along `ray`, across the whole tree.
///
/// Tests every directory platform and every file cube, skipping nodes
/// without [`NodeFlags::PICKABLE`], and returns the smallest parametric
/// distance together with its node. On an exact distance tie the node
/// encountered first wins; traversal order is fixed (directory, then its
/// subdirectory subtrees in attach order, then its files), so the result is
/// deterministic.
pub fn find_nearest(tree: &Tree, ray: &Ray) -> Option<(NodeId, f64)> {
    find_in_dir(tree, tree.root(), ray)
}

fn find_in_dir(tree: &Tree, dir: NodeId, ray: &Ray) -> Option<(NodeId, f64)> {
    let mut nearest: Option<(NodeId, f64)> = None;

    let consider = |id: NodeId, t: f64, nearest: &mut Option<(NodeId, f64)>| {
        if nearest.is_none_or(|(_, best)| t < best) {
            *nearest = Some((id, t));
        }
    };

    if tree.flags(dir).contains(NodeFlags::PICKABLE)
        && let Some(t) = tree.aabb(dir).hit(ray)
    {
        consider(dir, t, &mut nearest);
    }
    for &sub in tree.subdirs(dir) {
        if let Some((id, t)) = find_in_dir(tree, sub, ray) {
            consider(id, t, &mut nearest);
        }
    }
    for &file in tree.files(dir) {
        if tree.flags(file).contains(NodeFlags::PICKABLE)
            && let Some(t) = tree.aabb(file).hit(ray)
        {
            consider(file, t, &mut nearest);
        }
    }
    nearest
}

/// The current selection, at most one node per tree.
///
/// Owns the toggle bookkeeping: picking a new node clears the old node's
/// [`NodeFlags::SELECTED`] bit before setting the new one, and picking empty
/// space clears the selection entirely.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    current: Option<NodeId>,
}

impl SelectionState {
    /// An empty selection.
    pub const fn new() -> Self {
        Self { current: None }
    }

    /// The currently selected node, if any.
    pub const fn current(&self) -> Option<NodeId> {
        self.current
    }

    /// Run a pick query and update the selection to its result.
    ///
    /// Returns whether the selection changed; callers use this to decide
    /// whether a redraw is needed.
    pub fn pick(&mut self, tree: &mut Tree, ray: &Ray) -> bool {
        let hit = find_nearest(tree, ray).map(|(id, _)| id);
        let changed = self.current != hit;

        if let Some(prev) = self.current {
            tree.set_selected(prev, false);
        }
        if let Some(id) = hit {
            tree.set_selected(id, true);
        }
        self.current = hit;
        changed
    }

    /// Drop the selection, clearing the selected node's flag.
    pub fn clear(&mut self, tree: &mut Tree) {
        if let Some(prev) = self.current.take() {
            tree.set_selected(prev, false);
        }
    }
}
