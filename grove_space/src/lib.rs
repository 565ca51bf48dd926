// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grove Space: 3D axis-aligned boxes and picking rays.
//!
//! Grove Space is the geometry floor of the Grove workspace.
//!
//! - [`Aabb3`]: an axis-aligned box stored as min/max corners, with
//!   center/half-extent constructors and the usual set operations.
//! - [`Ray`]: an origin plus a direction, used transiently for picking.
//! - [`Aabb3::hit`]: a six-plane slab intersection test returning the
//!   parametric distance to the nearest face a ray enters through.
//!
//! It does not know anything about scenes or trees. Higher layers (like a
//! node tree with a layout pass) compute world-space boxes and feed them here.
//!
//! # Example
//!
//! ```rust
//! use glam::DVec3;
//! use grove_space::{Aabb3, Ray};
//!
//! // A 2x2x2 box centered at the origin.
//! let b = Aabb3::from_center_half(DVec3::ZERO, DVec3::splat(1.0));
//!
//! // Fire a ray at it from x = -5 along +X.
//! let ray = Ray::new(DVec3::new(-5.0, 0.0, 0.0), DVec3::X);
//! let t = b.hit(&ray).unwrap();
//! assert!((t - 4.0).abs() < 1e-9);
//!
//! // A ray pointed away misses.
//! let away = Ray::new(DVec3::new(-5.0, 0.0, 0.0), -DVec3::X);
//! assert!(b.hit(&away).is_none());
//! ```
//!
//! ## Float semantics
//!
//! Inputs are assumed to be finite (no NaNs). Near-parallel ray/plane pairs
//! and hits closer than [`EPSILON`] are rejected rather than resolved, which
//! is the boundary policy a picking caller wants: a degenerate ray is a
//! "no hit", not an error.
//!
//! This crate is `no_std`.

#![no_std]

use glam::DVec3;

/// Threshold below which a ray/plane pairing is treated as degenerate.
///
/// Used both for the parallel-ray rejection (direction nearly in the plane)
/// and for discarding intersections at or behind the ray origin.
pub const EPSILON: f64 = 1e-6;

/// A ray with an origin and a direction.
///
/// The direction does not need to be normalized; the parametric distance
/// returned by [`Aabb3::hit`] is in units of the direction's length.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    /// Ray origin in world space.
    pub origin: DVec3,
    /// Ray direction. Not required to be unit length.
    pub dir: DVec3,
}

impl Ray {
    /// Create a ray from an origin and a direction.
    pub const fn new(origin: DVec3, dir: DVec3) -> Self {
        Self { origin, dir }
    }

    /// The point at parametric distance `t` along the ray.
    pub fn at(&self, t: f64) -> DVec3 {
        self.origin + self.dir * t
    }
}

/// Axis-aligned bounding box in 3D, stored as min/max corners.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Aabb3 {
    /// Minimum corner.
    pub min: DVec3,
    /// Maximum corner.
    pub max: DVec3,
}

impl Aabb3 {
    /// Create a box from min/max corners.
    pub const fn new(min: DVec3, max: DVec3) -> Self {
        Self { min, max }
    }

    /// Create a box from a center point and half-extents.
    pub fn from_center_half(center: DVec3, half: DVec3) -> Self {
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// The center point of the box.
    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }

    /// Half-extents of the box along each axis.
    pub fn half_size(&self) -> DVec3 {
        (self.max - self.min) * 0.5
    }

    /// Whether the box contains the point (min-inclusive, max-exclusive,
    /// matching the face ownership used by [`hit`](Self::hit)).
    pub fn contains(&self, p: DVec3) -> bool {
        p.x >= self.min.x
            && p.x < self.max.x
            && p.y >= self.min.y
            && p.y < self.max.y
            && p.z >= self.min.z
            && p.z < self.max.z
    }

    /// The smallest box containing both boxes.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Return true if the box is empty or inverted (no volume). Assumes no NaN.
    pub fn is_empty(&self) -> bool {
        self.max.x < self.min.x || self.max.y < self.min.y || self.max.z < self.min.z
    }

    /// Intersect a ray with the box, returning the parametric distance to the
    /// nearest face hit, or `None` if the ray misses.
    ///
    /// Each of the six face planes is tested independently: the ray is
    /// rejected against a plane when it is near-parallel to it or when the
    /// intersection parameter falls below [`EPSILON`] (plane behind the
    /// origin, or the origin sitting on the plane). Surviving hit points are
    /// then bounds-checked on the two axes orthogonal to the plane normal,
    /// min-inclusive and max-exclusive. The smallest valid `t` wins.
    pub fn hit(&self, ray: &Ray) -> Option<f64> {
        // Outward face normals, paired with a corner each plane passes through.
        const NORMALS: [DVec3; 6] = [
            DVec3::new(0.0, 0.0, -1.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(0.0, 0.0, 1.0),
            DVec3::new(-1.0, 0.0, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
            DVec3::new(0.0, -1.0, 0.0),
        ];
        // Axis each plane is perpendicular to; the other two are bounds-checked.
        const PLANE_AXIS: [usize; 6] = [2, 0, 2, 0, 1, 1];
        let anchors = [self.min, self.max, self.max, self.min, self.max, self.min];

        let mut nearest: Option<f64> = None;
        for i in 0..6 {
            let denom = NORMALS[i].dot(ray.dir);
            if denom > -EPSILON && denom < EPSILON {
                // Ray parallel to this face.
                continue;
            }
            let t = -NORMALS[i].dot(ray.origin - anchors[i]) / denom;
            if t < EPSILON {
                // Plane behind the origin, or coplanar with it.
                continue;
            }
            let pos = ray.at(t);
            let mut inside = true;
            for axis in 0..3 {
                if axis == PLANE_AXIS[i] {
                    continue;
                }
                if pos[axis] < self.min[axis] || pos[axis] >= self.max[axis] {
                    inside = false;
                    break;
                }
            }
            if !inside {
                continue;
            }
            if nearest.is_none_or(|n| t < n) {
                nearest = Some(t);
            }
        }
        nearest
    }
}
