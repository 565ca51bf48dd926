// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout basics.
//!
//! Build a small synthetic directory tree, lay it out, and pick a node.
//!
//! Run:
//! - `cargo run -p grove_demos --example layout_basics`

use glam::DVec3;
use grove_pick::SelectionState;
use grove_space::Ray;
use grove_tree::{FileMeta, LayoutParams, Tree};

fn main() {
    // Build a small tree
    let mut tree = Tree::new("project");
    let root = tree.root();
    let src = tree.add_dir(root, "src");
    let docs = tree.add_dir(root, "docs");
    let main_rs = tree.add_file(src, "main.rs", 4_096, FileMeta::default());
    tree.add_file(src, "lib.rs", 9_812, FileMeta::default());
    tree.add_file(docs, "guide.md", 1_024, FileMeta::default());
    tree.add_file(root, "Cargo.toml", 300, FileMeta::default());

    // Lay out once; positions and extents are valid from here on
    tree.layout(&LayoutParams::default());

    for id in tree.ids() {
        let kind = if tree.is_dir(id) { "dir " } else { "file" };
        println!(
            "{kind} {:<12} pos {:?} extent {:?}",
            tree.name(id),
            tree.position(id),
            tree.extent(id)
        );
    }

    // Fire a ray straight down at main.rs, as a camera unproject would
    let ray = Ray::new(
        tree.position(main_rs) + DVec3::new(0.0, 10.0, 0.0),
        DVec3::new(0.0, -1.0, 0.0),
    );
    let mut selection = SelectionState::new();
    let changed = selection.pick(&mut tree, &ray);
    println!(
        "picked: {:?} (changed: {changed})",
        selection.current().map(|id| tree.name(id))
    );
    assert_eq!(selection.current(), Some(main_rs), "the cube above the platform wins");
}
