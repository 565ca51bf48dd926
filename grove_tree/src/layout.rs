// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-pass spatial layout: bottom-up bounds, top-down placement.
//!
//! Pass 1 walks the tree post-order and computes, for every directory, its
//! own platform footprint (sized to hold its files in a near-square grid,
//! floored at the configured minimum) and the lateral span needed to fit all
//! of its subdirectory subtrees side by side. Child spans are summed naively;
//! there is no bin packing, so very wide trees stay wide. That is intended
//! visual behavior, not an optimization target.
//!
//! Pass 2 walks pre-order: each directory records the position handed down by
//! its parent, deals out child positions left-to-right along X with the next
//! level pushed along −Z, and finally drops its files into the grid cells on
//! top of its platform.
//!
//! Both passes are pure functions of the tree structure and the parameters;
//! laying out twice with unchanged inputs produces identical placement.

use alloc::vec::Vec;
use glam::DVec3;
use kurbo::Size;

use crate::tree::Tree;
use crate::types::{LayoutParams, NodeId};

impl Tree {
    /// Assign a position and half-extent to every node in the tree.
    ///
    /// Runs the bounds pass and the placement pass from the root, which ends
    /// up centered laterally at the origin with its platform resting on the
    /// ground plane.
    pub fn layout(&mut self, params: &LayoutParams) {
        let root = self.root();
        self.compute_bounds(root, params);
        let origin = DVec3::new(0.0, params.dir_height / 2.0, 0.0);
        self.place(root, origin, params);
    }

    /// Pass 1, post-order: footprints and lateral spans, children first.
    fn compute_bounds(&mut self, id: NodeId, params: &LayoutParams) {
        let footprint = platform_footprint(self.files(id).len(), params);
        self.node_mut(id).extent = DVec3::new(
            footprint.width / 2.0,
            params.dir_height / 2.0,
            footprint.height / 2.0,
        );

        let subdirs: Vec<NodeId> = self.subdirs(id).to_vec();
        let mut child_width = 0.0;
        for sub in subdirs {
            self.compute_bounds(sub, params);
            child_width += self.span(sub);
        }

        let width = footprint.width.max(child_width);
        let dir = self.dir_mut(id);
        dir.min_x = -(width + params.dir_spacing) / 2.0;
        dir.max_x = (width + params.dir_spacing) / 2.0;
    }

    /// Pass 2, pre-order: place `id` at `pos`, then its subtrees and files.
    fn place(&mut self, id: NodeId, pos: DVec3, params: &LayoutParams) {
        self.node_mut(id).position = pos;
        let extent = self.node(id).extent;

        // Children go left-to-right along X, one level further down -Z.
        let child_z = pos.z - (extent.z + params.level_distance);
        let mut x = self.dir(id).min_x - params.dir_spacing / 2.0;
        let subdirs: Vec<NodeId> = self.subdirs(id).to_vec();
        for sub in subdirs {
            let width = self.span(sub);
            let child_pos = DVec3::new(pos.x + x + width / 2.0, pos.y, child_z);
            self.place(sub, child_pos, params);
            x += width + params.dir_spacing;
        }

        // Files fill a row-major grid on top of the platform.
        let files: Vec<NodeId> = self.files(id).to_vec();
        if files.is_empty() {
            return;
        }
        let (cols, _) = grid_dims(files.len());
        let fsize = params.file_size;
        let fspace = params.file_spacing;
        let fheight = params.file_height;
        let row_width = cols as f64 * fsize + (cols - 1) as f64 * fspace;
        let file_extent = DVec3::new(fsize / 2.0, fheight / 2.0, fsize / 2.0);

        let offs = fsize / 2.0 + fspace;
        let start = pos - extent + DVec3::new(offs, 2.0 * extent.y + fheight / 2.0, offs);
        let mut fpos = start;
        for file in files {
            let node = self.node_mut(file);
            node.position = fpos;
            node.extent = file_extent;

            fpos.x += fsize + fspace;
            if fpos.x - start.x > row_width {
                fpos.x = start.x;
                fpos.z += fsize + fspace;
            }
        }
    }

    /// Lateral span a directory subtree claims, per the last bounds pass.
    fn span(&self, id: NodeId) -> f64 {
        let dir = self.dir(id);
        dir.max_x - dir.min_x
    }
}

/// Near-square grid dimensions for `n` file cubes: columns then rows.
fn grid_dims(n: usize) -> (usize, usize) {
    if n == 0 {
        return (0, 0);
    }
    let mut cols = n.isqrt();
    if cols * cols < n {
        cols += 1;
    }
    (cols, n.div_ceil(cols))
}

/// A directory's own 2D footprint: the file grid with spacing on all sides,
/// floored at the configured minimum platform size in both axes.
fn platform_footprint(num_files: usize, params: &LayoutParams) -> Size {
    let (cols, rows) = grid_dims(num_files);
    let width = cols as f64 * params.file_size + (cols + 1) as f64 * params.file_spacing;
    let height = rows as f64 * params.file_size + (rows + 1) as f64 * params.file_spacing;
    Size::new(width.max(params.dir_size), height.max(params.dir_size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FileMeta;
    use alloc::vec::Vec;

    fn add_files(tree: &mut Tree, dir: NodeId, n: usize) -> Vec<NodeId> {
        (0..n)
            .map(|i| tree.add_file(dir, alloc::format!("f{i}"), 1, FileMeta::default()))
            .collect()
    }

    #[test]
    fn grid_dims_are_near_square() {
        assert_eq!(grid_dims(0), (0, 0));
        assert_eq!(grid_dims(1), (1, 1));
        assert_eq!(grid_dims(4), (2, 2));
        assert_eq!(grid_dims(5), (3, 2));
        assert_eq!(grid_dims(9), (3, 3));
        assert_eq!(grid_dims(10), (4, 3));
    }

    #[test]
    fn empty_dir_gets_minimum_footprint() {
        let params = LayoutParams::default();
        let mut tree = Tree::new("/");
        tree.layout(&params);
        let e = tree.extent(tree.root());
        assert_eq!(e.x, params.dir_size / 2.0);
        assert_eq!(e.z, params.dir_size / 2.0);
        assert_eq!(e.y, params.dir_height / 2.0);
    }

    #[test]
    fn single_file_footprint_floors_at_minimum() {
        let params = LayoutParams::default();
        let fp = platform_footprint(1, &params);
        // 1x1 grid: one cube plus spacing on both sides, floored at dir_size.
        let raw = params.file_size + 2.0 * params.file_spacing;
        assert_eq!(fp.width, raw.max(params.dir_size));
        assert_eq!(fp.height, raw.max(params.dir_size));
    }

    #[test]
    fn footprint_never_below_minimum() {
        let params = LayoutParams::default();
        for n in 0..30 {
            let fp = platform_footprint(n, &params);
            assert!(fp.width >= params.dir_size, "width too small for n={n}");
            assert!(fp.height >= params.dir_size, "height too small for n={n}");
        }
    }

    #[test]
    fn five_files_fill_three_by_two() {
        let params = LayoutParams::default();
        let mut tree = Tree::new("/");
        let root = tree.root();
        let files = add_files(&mut tree, root, 5);
        tree.layout(&params);

        let stride = params.file_size + params.file_spacing;
        let first = tree.position(files[0]);
        // Row 1: three cubes marching along +X at the same depth.
        for (i, &f) in files[..3].iter().enumerate() {
            let p = tree.position(f);
            assert!((p.x - (first.x + i as f64 * stride)).abs() < 1e-9);
            assert!((p.z - first.z).abs() < 1e-9);
        }
        // Row 2: two cubes, one stride deeper, starting back at the left edge.
        for (i, &f) in files[3..].iter().enumerate() {
            let p = tree.position(f);
            assert!((p.x - (first.x + i as f64 * stride)).abs() < 1e-9);
            assert!((p.z - (first.z + stride)).abs() < 1e-9);
        }
    }

    #[test]
    fn file_grid_placement_is_injective() {
        let params = LayoutParams::default();
        let mut tree = Tree::new("/");
        let root = tree.root();
        let files = add_files(&mut tree, root, 7);
        tree.layout(&params);

        for (i, &a) in files.iter().enumerate() {
            for &b in &files[i + 1..] {
                let pa = tree.position(a);
                let pb = tree.position(b);
                let apart = (pa.x - pb.x).abs() > 1e-9 || (pa.z - pb.z).abs() > 1e-9;
                assert!(apart, "two files share a grid cell");
            }
        }
    }

    #[test]
    fn files_rest_on_top_of_the_platform() {
        let params = LayoutParams::default();
        let mut tree = Tree::new("/");
        let root = tree.root();
        let files = add_files(&mut tree, root, 3);
        tree.layout(&params);

        let platform_top = tree.position(root).y + tree.extent(root).y;
        for f in files {
            let bottom = tree.position(f).y - tree.extent(f).y;
            assert!((bottom - platform_top).abs() < 1e-9);
        }
    }

    #[test]
    fn sibling_platforms_do_not_overlap_laterally() {
        let params = LayoutParams::default();
        let mut tree = Tree::new("/");
        let root = tree.root();
        let a = tree.add_dir(root, "a");
        let b = tree.add_dir(root, "b");
        let c = tree.add_dir(root, "c");
        add_files(&mut tree, a, 9);
        add_files(&mut tree, c, 2);
        // Give b a wide subtree of its own.
        let b1 = tree.add_dir(b, "b1");
        let b2 = tree.add_dir(b, "b2");
        add_files(&mut tree, b1, 16);
        add_files(&mut tree, b2, 4);
        tree.layout(&params);

        let sibs = [a, b, c];
        for (i, &s) in sibs.iter().enumerate() {
            for &t in &sibs[i + 1..] {
                let gap = (tree.position(s).x - tree.position(t).x).abs();
                let min_gap = tree.extent(s).x + tree.extent(t).x;
                assert!(gap > min_gap, "sibling platforms overlap on X");
            }
        }
    }

    #[test]
    fn children_descend_by_half_depth_plus_level_distance() {
        let params = LayoutParams::default();
        let mut tree = Tree::new("/");
        let root = tree.root();
        let sub = tree.add_dir(root, "sub");
        let subsub = tree.add_dir(sub, "subsub");
        tree.layout(&params);

        let expected = tree.position(root).z - (tree.extent(root).z + params.level_distance);
        assert!((tree.position(sub).z - expected).abs() < 1e-9);
        let expected2 = tree.position(sub).z - (tree.extent(sub).z + params.level_distance);
        assert!((tree.position(subsub).z - expected2).abs() < 1e-9);
        // Same height as the parent: levels step along -Z only.
        assert_eq!(tree.position(sub).y, tree.position(root).y);
    }

    #[test]
    fn parent_spans_cover_children() {
        // A parent with a lone wide child must widen its span to match.
        let params = LayoutParams::default();
        let mut tree = Tree::new("/");
        let root = tree.root();
        let narrow = tree.add_dir(root, "narrow");
        let wide = tree.add_dir(narrow, "wide");
        add_files(&mut tree, wide, 25);
        tree.layout(&params);

        // The narrow directory's own platform stays minimal...
        assert_eq!(tree.extent(narrow).x, params.dir_size / 2.0);
        // ...but the wide grandchild got its full footprint.
        assert!(tree.extent(wide).x > tree.extent(narrow).x);
    }

    #[test]
    fn layout_is_idempotent() {
        let params = LayoutParams::default();
        let mut tree = Tree::new("/");
        let root = tree.root();
        let a = tree.add_dir(root, "a");
        let b = tree.add_dir(root, "b");
        add_files(&mut tree, a, 5);
        add_files(&mut tree, b, 11);
        add_files(&mut tree, root, 2);

        tree.layout(&params);
        let first: Vec<_> = tree.ids().map(|id| (tree.position(id), tree.extent(id))).collect();
        tree.layout(&params);
        let second: Vec<_> = tree.ids().map(|id| (tree.position(id), tree.extent(id))).collect();
        assert_eq!(first, second, "re-layout with unchanged inputs must not move anything");
    }
}
