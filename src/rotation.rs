// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Homogeneous 4×4 transform builders.
//!
//! All frame matrices in the crate are `nalgebra::Matrix4<f64>`: a 3×3
//! rotation block plus an optional translation column. Rotations follow the
//! active right-handed convention, so `zrot(a) * x̂` turns the x axis towards
//! the y axis by `a` radians.

use nalgebra::{Matrix3, Matrix4, Point3, Vector3};

/// Rotation by `angle` radians about the x axis.
pub fn xrot(angle: f64) -> Matrix4<f64> {
    let (s, c) = angle.sin_cos();
    #[rustfmt::skip]
    let m = Matrix4::new(
        1.0, 0.0, 0.0, 0.0,
        0.0,   c,  -s, 0.0,
        0.0,   s,   c, 0.0,
        0.0, 0.0, 0.0, 1.0,
    );
    m
}

/// Rotation by `angle` radians about the y axis.
pub fn yrot(angle: f64) -> Matrix4<f64> {
    let (s, c) = angle.sin_cos();
    #[rustfmt::skip]
    let m = Matrix4::new(
          c, 0.0,   s, 0.0,
        0.0, 1.0, 0.0, 0.0,
         -s, 0.0,   c, 0.0,
        0.0, 0.0, 0.0, 1.0,
    );
    m
}

/// Rotation by `angle` radians about the z axis.
pub fn zrot(angle: f64) -> Matrix4<f64> {
    let (s, c) = angle.sin_cos();
    #[rustfmt::skip]
    let m = Matrix4::new(
          c,  -s, 0.0, 0.0,
          s,   c, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        0.0, 0.0, 0.0, 1.0,
    );
    m
}

/// Pure translation by `offset`.
pub fn translation(offset: &Vector3<f64>) -> Matrix4<f64> {
    Matrix4::new_translation(offset)
}

/// Embeds a 3×3 rotation into a homogeneous matrix.
pub fn from_rotation(rotation: &Matrix3<f64>) -> Matrix4<f64> {
    rotation.to_homogeneous()
}

/// Upper-left 3×3 block.
pub fn rotation_part(m: &Matrix4<f64>) -> Matrix3<f64> {
    m.fixed_view::<3, 3>(0, 0).into_owned()
}

/// Applies `m` to a direction or position, ignoring the projective row.
#[inline]
pub fn transform_vector(m: &Matrix4<f64>, v: &Vector3<f64>) -> Vector3<f64> {
    m.transform_point(&Point3::from(*v)).coords
}

/// Applies only the rotation block of `m` (no translation).
#[inline]
pub fn rotate_vector(m: &Matrix4<f64>, v: &Vector3<f64>) -> Vector3<f64> {
    m.transform_vector(v)
}

/// Inverse of a rigid transform (rotation + translation), exact up to
/// rounding: `[Rᵀ | -Rᵀt]`.
pub fn rigid_inverse(m: &Matrix4<f64>) -> Matrix4<f64> {
    let rt = rotation_part(m).transpose();
    let t = Vector3::new(m[(0, 3)], m[(1, 3)], m[(2, 3)]);
    let mut inv = rt.to_homogeneous();
    inv.fixed_view_mut::<3, 1>(0, 3).copy_from(&(-(rt * t)));
    inv
}

/// Unit vector from spherical longitude/latitude in radians.
pub fn sphe_to_rect(lng: f64, lat: f64) -> Vector3<f64> {
    let (sl, cl) = lng.sin_cos();
    let (sb, cb) = lat.sin_cos();
    Vector3::new(cl * cb, sl * cb, sb)
}

/// Longitude and latitude (radians) of a non-zero vector.
pub fn rect_to_sphe(v: &Vector3<f64>) -> (f64, f64) {
    let r = v.norm();
    (v.y.atan2(v.x), (v.z / r).clamp(-1.0, 1.0).asin())
}
