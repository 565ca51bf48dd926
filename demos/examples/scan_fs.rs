// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Filesystem scan.
//!
//! Populate a tree from a real directory snapshot, lay it out, and report
//! what the scene would contain. Per-entry failures (unreadable files,
//! permission errors) are skipped; only the root directory must be readable.
//!
//! Run:
//! - `cargo run -p grove_demos --example scan_fs [path]`

use std::path::Path;
use std::{env, fs, io};

use glam::DVec3;
use grove_pick::find_nearest;
use grove_space::Ray;
use grove_tree::{FileMeta, LayoutParams, NodeId, Tree};

fn main() -> io::Result<()> {
    let root_path = env::args().nth(1).unwrap_or_else(|| ".".to_owned());

    let mut tree = Tree::new(root_path.clone());
    let root = tree.root();
    scan_into(&mut tree, root, Path::new(&root_path))?;
    tree.layout(&LayoutParams::default());

    let dirs = tree.ids().filter(|&id| tree.is_dir(id)).count();
    let files = tree.node_count() - dirs;
    println!("{root_path}: {dirs} directories, {files} files");

    // Overall scene bounds, the way a camera-framing pass would compute them.
    let mut bounds = tree.aabb(root);
    for id in tree.ids() {
        bounds = bounds.union(&tree.aabb(id));
    }
    println!("scene bounds: {:?} .. {:?}", bounds.min, bounds.max);

    // Look straight down at the root platform's center.
    let ray = Ray::new(
        tree.position(root) + DVec3::new(0.0, 100.0, 0.0),
        DVec3::new(0.0, -1.0, 0.0),
    );
    match find_nearest(&tree, &ray) {
        Some((id, t)) => println!("under the cursor: {} (t = {t:.2})", tree.name(id)),
        None => println!("under the cursor: nothing"),
    }
    Ok(())
}

/// Recursively attach `path`'s entries under `dir`, skipping what can't be
/// read. Unreadable subdirectories stay in the tree as empty platforms.
fn scan_into(tree: &mut Tree, dir: NodeId, path: &Path) -> io::Result<()> {
    for entry in fs::read_dir(path)? {
        let Ok(entry) = entry else { continue };
        let Ok(meta) = entry.metadata() else { continue };
        let name = entry.file_name().to_string_lossy().into_owned();
        if meta.is_dir() {
            let sub = tree.add_dir(dir, name);
            let _ = scan_into(tree, sub, &entry.path());
        } else {
            tree.add_file(dir, name, meta.len(), file_meta(&meta));
        }
    }
    Ok(())
}

#[cfg(unix)]
fn file_meta(meta: &fs::Metadata) -> FileMeta {
    use std::os::unix::fs::MetadataExt;
    FileMeta {
        mode: meta.mode(),
        uid: meta.uid(),
        gid: meta.gid(),
        nlink: meta.nlink().min(u64::from(u32::MAX)) as u32,
        atime: meta.atime(),
        mtime: meta.mtime(),
        ctime: meta.ctime(),
    }
}

#[cfg(not(unix))]
fn file_meta(_meta: &fs::Metadata) -> FileMeta {
    FileMeta::default()
}
