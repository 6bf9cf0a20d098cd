// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Projection surfaces and model-view transforms.
//!
//! A [`Projector`] maps a vector of some coordinate frame to window pixels
//! in two stages:
//!
//! 1. a [`ModelView`] brings the vector into the view frame (looking down
//!    `−z`), optionally passing through atmospheric refraction in AltAz;
//! 2. the [`ProjectionType`] surface maps the view-frame direction onto the
//!    plane, scaled so the field of view fills the viewport disk.
//!
//! | Projection | Max FOV (°) | `fov → scaling` |
//! |------------|-------------|-----------------|
//! | Perspective | 120 | `tan f` |
//! | EqualArea | 360 | `2 sin(f/2)` |
//! | Stereographic | 235 | `2 tan(f/2)` |
//! | Fisheye | 360 | `f` |
//! | Hammer | 185 | `f` |
//! | Cylinder | 233.3 | `f` |
//! | Mercator | 233.3 | `f` |
//! | Orthographic | 179.9999 | `sin f` |
//! | Sinusoidal | 233.3 | `f` |

use std::f64::consts::{FRAC_PI_2, PI, SQRT_2};

use nalgebra::{Matrix4, Vector3};

use crate::error::{Error, Result};
use crate::refraction::Refraction;
use crate::rotation::{rigid_inverse, transform_vector};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The projection surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ProjectionType {
    Perspective,
    EqualArea,
    #[default]
    Stereographic,
    Fisheye,
    Hammer,
    Cylinder,
    Mercator,
    Orthographic,
    Sinusoidal,
}

impl ProjectionType {
    pub const ALL: [ProjectionType; 9] = [
        Self::Perspective,
        Self::EqualArea,
        Self::Stereographic,
        Self::Fisheye,
        Self::Hammer,
        Self::Cylinder,
        Self::Mercator,
        Self::Orthographic,
        Self::Sinusoidal,
    ];

    /// Settings key, `Projection<Name>`.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Perspective => "ProjectionPerspective",
            Self::EqualArea => "ProjectionEqualArea",
            Self::Stereographic => "ProjectionStereographic",
            Self::Fisheye => "ProjectionFisheye",
            Self::Hammer => "ProjectionHammer",
            Self::Cylinder => "ProjectionCylinder",
            Self::Mercator => "ProjectionMercator",
            Self::Orthographic => "ProjectionOrthographic",
            Self::Sinusoidal => "ProjectionSinusoidal",
        }
    }

    pub fn from_key(key: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.key() == key.trim())
            .ok_or_else(|| Error::UnknownProjection(key.to_string()))
    }

    /// Largest usable field of view, degrees.
    pub fn max_fov(self) -> f64 {
        match self {
            Self::Perspective => 120.0,
            Self::EqualArea | Self::Fisheye => 360.0,
            Self::Stereographic => 235.0,
            Self::Hammer => 185.0,
            Self::Cylinder | Self::Mercator | Self::Sinusoidal => 175.0 * 4.0 / 3.0,
            Self::Orthographic => 179.9999,
        }
    }

    /// View scaling factor for a half field of view `fov` (radians).
    pub fn fov_to_view_scaling_factor(self, fov: f64) -> f64 {
        match self {
            Self::Perspective => fov.tan(),
            Self::EqualArea => 2.0 * (0.5 * fov).sin(),
            Self::Stereographic => 2.0 * (0.5 * fov).tan(),
            Self::Orthographic => fov.sin(),
            _ => fov,
        }
    }

    /// Inverse of [`fov_to_view_scaling_factor`](Self::fov_to_view_scaling_factor).
    pub fn view_scaling_factor_to_fov(self, vsf: f64) -> f64 {
        match self {
            Self::Perspective => vsf.atan(),
            Self::EqualArea => 2.0 * (0.5 * vsf).asin(),
            Self::Stereographic => 2.0 * (0.5 * vsf).atan(),
            Self::Orthographic => vsf.asin(),
            _ => vsf,
        }
    }

    /// Maps a view-frame vector onto the projection plane.
    ///
    /// The returned `z` is the length of the input. `false` flags a point
    /// outside the valid region; the coordinates are still usable for
    /// culling.
    pub fn forward(self, v: &Vector3<f64>, width_stretch: f64) -> (Vector3<f64>, bool) {
        let r = v.norm();
        match self {
            Self::Perspective => {
                if v.z < 0.0 {
                    (Vector3::new(v.x * width_stretch / -v.z, v.y / -v.z, r), true)
                } else if v.z > 0.0 {
                    (Vector3::new(v.x * width_stretch / v.z, v.y / v.z, -f64::MAX), false)
                } else {
                    (Vector3::new(f64::MAX, f64::MAX, -f64::MAX), false)
                }
            }
            Self::EqualArea => {
                let f = (2.0 / (r * (r - v.z))).sqrt();
                (Vector3::new(v.x * f * width_stretch, v.y * f, r), true)
            }
            Self::Stereographic => {
                let h = 0.5 * (r - v.z);
                if h <= 0.0 {
                    return (Vector3::new(f64::MAX, f64::MAX, -f64::MIN_POSITIVE), false);
                }
                let f = 1.0 / h;
                (Vector3::new(v.x * f * width_stretch, v.y * f, r), true)
            }
            Self::Fisheye => {
                let rq1 = v.x * v.x + v.y * v.y;
                if rq1 > 0.0 {
                    let h = rq1.sqrt();
                    let f = h.atan2(-v.z) / h;
                    (Vector3::new(v.x * f * width_stretch, v.y * f, r), true)
                } else if v.z < 0.0 {
                    (Vector3::new(0.0, 0.0, 1.0), true)
                } else {
                    (Vector3::new(f64::MAX, f64::MAX, f64::MIN_POSITIVE), false)
                }
            }
            Self::Hammer => {
                let alpha = v.x.atan2(-v.z);
                let cos_delta = (1.0 - v.y * v.y / (r * r)).max(0.0).sqrt();
                let z = (1.0 + cos_delta * (alpha / 2.0).cos()).sqrt();
                (
                    Vector3::new(
                        2.0 * SQRT_2 * cos_delta * (alpha * 0.5).sin() / z * width_stretch,
                        SQRT_2 * v.y / r / z,
                        r,
                    ),
                    true,
                )
            }
            Self::Cylinder => {
                let ok = -r < v.y && v.y < r;
                let alpha = v.x.atan2(-v.z);
                let delta = (v.y / r).asin();
                (Vector3::new(alpha * width_stretch, delta, r), ok)
            }
            Self::Mercator => {
                let ok = -r < v.y && v.y < r;
                let sin_delta = v.y / r;
                (
                    Vector3::new(
                        v.x.atan2(-v.z) * width_stretch,
                        0.5 * ((1.0 + sin_delta) / (1.0 - sin_delta)).ln(),
                        r,
                    ),
                    ok,
                )
            }
            Self::Orthographic => {
                let h = 1.0 / r;
                (Vector3::new(v.x * h * width_stretch, v.y * h, r), v.z <= 0.0)
            }
            Self::Sinusoidal => {
                let ok = -r < v.y && v.y < r;
                let alpha = v.x.atan2(-v.z);
                let delta = (v.y / r).asin();
                (Vector3::new(alpha * delta.cos() * width_stretch, delta, r), ok)
            }
        }
    }

    /// Maps a plane point back to a view-frame unit direction.
    pub fn backward(self, x: f64, y: f64, width_stretch: f64) -> (Vector3<f64>, bool) {
        let x = x / width_stretch;
        match self {
            Self::Perspective => {
                let z = (1.0 / (1.0 + x * x + y * y)).sqrt();
                (Vector3::new(x * z, y * z, -z), true)
            }
            Self::EqualArea => {
                let dq = x * x + y * y;
                let l = 1.0 - 0.25 * dq;
                if l < 0.0 {
                    (Vector3::new(0.0, 0.0, 1.0), true)
                } else {
                    let l = l.sqrt();
                    (Vector3::new(x * l, y * l, 0.5 * dq - 1.0), true)
                }
            }
            Self::Stereographic => {
                let lqq = 0.25 * (x * x + y * y);
                (Vector3::new(x, y, lqq - 1.0) * (1.0 / (lqq + 1.0)), true)
            }
            Self::Fisheye => {
                let a = x.hypot(y);
                let f = if a > 0.0 { a.sin() / a } else { 1.0 };
                (Vector3::new(x * f, y * f, -a.cos()), a < PI)
            }
            Self::Hammer => {
                let zsq = 1.0 - 0.25 * 0.25 * x * x - 0.5 * 0.5 * y * y;
                let z = if zsq < 0.0 { 0.0 } else { zsq.sqrt() };
                let ok = 0.25 * x * x + y * y < 2.0;
                let alpha = 2.0 * (z * x).atan2(2.0 * (2.0 * zsq - 1.0));
                let delta = (y * z).clamp(-1.0, 1.0).asin();
                let cd = delta.cos();
                (Vector3::new(cd * alpha.sin(), y * z, -cd * alpha.cos()), ok)
            }
            Self::Cylinder => {
                let ok = y < FRAC_PI_2 && y > -FRAC_PI_2 && x > -PI && x < PI;
                let cd = y.cos();
                (Vector3::new(cd * x.sin(), y.sin(), -cd * x.cos()), ok)
            }
            Self::Mercator => {
                let ok = x > -PI && x < PI;
                let e = y.exp();
                let h = e * e;
                let h1 = 1.0 / (1.0 + h);
                let sin_delta = (h - 1.0) * h1;
                let cos_delta = 2.0 * e * h1;
                (Vector3::new(cos_delta * x.sin(), sin_delta, -cos_delta * x.cos()), ok)
            }
            Self::Orthographic => {
                let dq = x * x + y * y;
                let h = 1.0 - dq;
                if h < 0.0 {
                    let h = 1.0 / dq.sqrt();
                    (Vector3::new(x * h, y * h, 0.0), false)
                } else {
                    (Vector3::new(x, y, -h.sqrt()), true)
                }
            }
            Self::Sinusoidal => {
                let ok = y < FRAC_PI_2 && y > -FRAC_PI_2 && x > -PI && x < PI;
                let cd = y.cos();
                if x < -PI * cd || x > PI * cd {
                    return (Vector3::new(-cd, 1.0, 0.0).normalize(), false);
                }
                let pcd = x / cd;
                (Vector3::new(cd * pcd.sin(), y.sin(), -cd * pcd.cos()), ok)
            }
        }
    }
}

impl std::fmt::Display for ProjectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for ProjectionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_key(s)
    }
}

/// Viewport mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MaskType {
    #[default]
    None,
    Disk,
}

impl MaskType {
    pub const fn key(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Disk => "disk",
        }
    }

    /// Unknown strings read as [`MaskType::None`].
    pub fn from_key(key: &str) -> Self {
        if key.trim().eq_ignore_ascii_case("disk") {
            Self::Disk
        } else {
            Self::None
        }
    }
}

/// Viewport and view configuration for a projector.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProjectorParams {
    /// `[x, y, width, height]` in pixels.
    pub viewport_xywh: [i32; 4],
    /// Field of view, degrees.
    pub fov: f64,
    pub gravity_labels: bool,
    /// Text rotation used when gravity labels are off, degrees.
    pub default_angle_for_gravity_text: f64,
    pub mask_type: MaskType,
    pub viewport_center: [f64; 2],
    /// Diameter of the FOV disk, pixels.
    pub viewport_fov_diameter: f64,
    pub flip_horz: bool,
    pub flip_vert: bool,
    pub device_pixel_ratio: f64,
    pub width_stretch: f64,
}

impl Default for ProjectorParams {
    fn default() -> Self {
        Self {
            viewport_xywh: [0, 0, 256, 256],
            fov: 60.0,
            gravity_labels: false,
            default_angle_for_gravity_text: 0.0,
            mask_type: MaskType::None,
            viewport_center: [128.0, 128.0],
            viewport_fov_diameter: 256.0,
            flip_horz: false,
            flip_vert: false,
            device_pixel_ratio: 1.0,
            width_stretch: 1.0,
        }
    }
}

impl ProjectorParams {
    /// Resizes the viewport and recentres the FOV disk on it.
    pub fn set_viewport(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.viewport_xywh = [x, y, width, height];
        self.viewport_center = [
            f64::from(x) + 0.5 * f64::from(width),
            f64::from(y) + 0.5 * f64::from(height),
        ];
        self.viewport_fov_diameter = f64::from(width.min(height));
    }
}

/// Transform from a coordinate frame into the view frame.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelView {
    Linear {
        matrix: Matrix4<f64>,
        inverse: Matrix4<f64>,
    },
    /// `post · refraction · pre`, with refraction acting in AltAz.
    Refracted {
        pre: Matrix4<f64>,
        refraction: Refraction,
        post: Matrix4<f64>,
    },
}

fn inverse_of(m: &Matrix4<f64>) -> Matrix4<f64> {
    m.try_inverse().unwrap_or_else(|| rigid_inverse(m))
}

impl ModelView {
    pub fn linear(matrix: Matrix4<f64>) -> Self {
        Self::Linear {
            inverse: inverse_of(&matrix),
            matrix,
        }
    }

    pub fn refracted(pre: Matrix4<f64>, refraction: Refraction, post: Matrix4<f64>) -> Self {
        Self::Refracted {
            pre,
            refraction,
            post,
        }
    }

    pub fn forward(&self, v: &Vector3<f64>) -> Vector3<f64> {
        match self {
            Self::Linear { matrix, .. } => transform_vector(matrix, v),
            Self::Refracted {
                pre,
                refraction,
                post,
            } => transform_vector(post, &refraction.forward(&transform_vector(pre, v))),
        }
    }

    pub fn backward(&self, v: &Vector3<f64>) -> Vector3<f64> {
        match self {
            Self::Linear { inverse, .. } => transform_vector(inverse, v),
            Self::Refracted {
                pre,
                refraction,
                post,
            } => {
                let altaz = refraction.backward(&transform_vector(&inverse_of(post), v));
                transform_vector(&inverse_of(pre), &altaz)
            }
        }
    }

    /// The linear part of the transform (`post · pre` when refracted).
    pub fn matrix(&self) -> Matrix4<f64> {
        match self {
            Self::Linear { matrix, .. } => *matrix,
            Self::Refracted { pre, post, .. } => post * pre,
        }
    }
}

/// A projection surface bound to a model-view and viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct Projector {
    projection: ProjectionType,
    model_view: ModelView,
    params: ProjectorParams,
    pixel_per_rad: f64,
    flip_horz: f64,
    flip_vert: f64,
}

impl Projector {
    pub fn new(projection: ProjectionType, model_view: ModelView, params: ProjectorParams) -> Self {
        let half_fov = (0.5 * params.fov).to_radians();
        let pixel_per_rad =
            0.5 * params.viewport_fov_diameter / projection.fov_to_view_scaling_factor(half_fov);
        Self {
            projection,
            model_view,
            params,
            pixel_per_rad,
            flip_horz: if params.flip_horz { -1.0 } else { 1.0 },
            flip_vert: if params.flip_vert { -1.0 } else { 1.0 },
        }
    }

    pub fn projection_type(&self) -> ProjectionType {
        self.projection
    }

    pub fn params(&self) -> &ProjectorParams {
        &self.params
    }

    pub fn model_view(&self) -> &ModelView {
        &self.model_view
    }

    pub fn pixel_per_rad(&self) -> f64 {
        self.pixel_per_rad
    }

    /// Window coordinates of `v`; `z` holds the distance. `None` when the
    /// point falls outside the projection's valid region.
    pub fn project(&self, v: &Vector3<f64>) -> Option<Vector3<f64>> {
        let (win, ok) = self.project_unchecked(v);
        ok.then_some(win)
    }

    /// Like [`project`](Self::project) but always returns coordinates,
    /// plus the validity flag.
    pub fn project_unchecked(&self, v: &Vector3<f64>) -> (Vector3<f64>, bool) {
        let view = self.model_view.forward(v);
        let (p, ok) = self.projection.forward(&view, self.params.width_stretch);
        let c = self.params.viewport_center;
        (
            Vector3::new(
                c[0] + self.flip_horz * self.pixel_per_rad * p.x,
                c[1] + self.flip_vert * self.pixel_per_rad * p.y,
                p.z,
            ),
            ok,
        )
    }

    /// Frame direction seen at window pixel `(x, y)`.
    pub fn unproject(&self, x: f64, y: f64) -> Option<Vector3<f64>> {
        let c = self.params.viewport_center;
        let px = (x - c[0]) / (self.flip_horz * self.pixel_per_rad);
        let py = (y - c[1]) / (self.flip_vert * self.pixel_per_rad);
        let (view, ok) = self.projection.backward(px, py, self.params.width_stretch);
        ok.then(|| self.model_view.backward(&view))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rotation::{sphe_to_rect, xrot};

    #[test]
    fn keys_roundtrip_and_unknown_fails() {
        for p in ProjectionType::ALL {
            assert_eq!(ProjectionType::from_key(p.key()).unwrap(), p);
        }
        assert!(matches!(
            ProjectionType::from_key("ProjectionBogus"),
            Err(Error::UnknownProjection(_))
        ));
        assert_eq!(ProjectionType::default(), ProjectionType::Stereographic);
    }

    #[test]
    fn scaling_factor_inverts() {
        for p in ProjectionType::ALL {
            let f = 0.4;
            let back = p.view_scaling_factor_to_fov(p.fov_to_view_scaling_factor(f));
            assert!((back - f).abs() < 1e-12, "{p}");
        }
    }

    #[test]
    fn view_axis_projects_to_centre() {
        let params = ProjectorParams::default();
        for p in ProjectionType::ALL {
            let proj = Projector::new(p, ModelView::linear(Matrix4::identity()), params);
            let win = proj.project(&-Vector3::z()).expect("visible");
            assert!((win.x - 128.0).abs() < 1e-9 && (win.y - 128.0).abs() < 1e-9, "{p}");
        }
    }

    #[test]
    fn fov_edge_lands_on_disk_rim() {
        let params = ProjectorParams::default();
        for p in ProjectionType::ALL {
            let proj = Projector::new(p, ModelView::linear(Matrix4::identity()), params);
            // Point half a FOV off-axis towards +y.
            let half = 30f64.to_radians();
            let v = Vector3::new(0.0, half.sin(), -half.cos());
            let win = proj.project(&v).expect("visible");
            let expected = match p {
                ProjectionType::Perspective
                | ProjectionType::EqualArea
                | ProjectionType::Stereographic
                | ProjectionType::Fisheye
                | ProjectionType::Orthographic
                | ProjectionType::Cylinder
                | ProjectionType::Sinusoidal => 256.0,
                _ => continue,
            };
            assert!((win.y - expected).abs() < 1e-6, "{p}: {}", win.y);
        }
    }

    #[test]
    fn unproject_inverts_project() {
        let params = ProjectorParams::default();
        let mv = ModelView::linear(xrot(0.3));
        for p in ProjectionType::ALL {
            let proj = Projector::new(p, mv.clone(), params);
            let v = sphe_to_rect(0.1, 0.2);
            let target = xrot(-0.3) * nalgebra::Vector4::new(0.0, 0.0, -1.0, 1.0);
            let v = (v * 0.1 + target.xyz()).normalize();
            let win = proj.project(&v).expect("visible");
            let back = proj.unproject(win.x, win.y).expect("valid");
            assert!((back - v).norm() < 1e-9, "{p}: {back:?} vs {v:?}");
        }
    }

    #[test]
    fn flip_mirrors_screen() {
        let mut params = ProjectorParams::default();
        let v = Vector3::new(0.1, 0.0, -1.0);
        let normal = Projector::new(ProjectionType::Stereographic, ModelView::linear(Matrix4::identity()), params);
        params.flip_horz = true;
        let flipped = Projector::new(ProjectionType::Stereographic, ModelView::linear(Matrix4::identity()), params);
        let a = normal.project(&v).unwrap();
        let b = flipped.project(&v).unwrap();
        assert!((a.x - 128.0 + (b.x - 128.0)).abs() < 1e-9);
    }

    #[test]
    fn perspective_rejects_points_behind() {
        let proj = Projector::new(
            ProjectionType::Perspective,
            ModelView::linear(Matrix4::identity()),
            ProjectorParams::default(),
        );
        assert!(proj.project(&Vector3::z()).is_none());
    }

    #[test]
    fn refracted_model_view_roundtrips() {
        let mv = ModelView::refracted(Matrix4::identity(), Refraction::default(), xrot(0.4));
        let v = sphe_to_rect(1.0, 0.9);
        let back = mv.backward(&mv.forward(&v));
        assert!((back - v).norm() < 1e-4);
        assert!((mv.forward(&v) - transform_vector(&xrot(0.4), &v)).norm() > 0.0);
    }

    #[test]
    fn mask_keys() {
        assert_eq!(MaskType::from_key("disk"), MaskType::Disk);
        assert_eq!(MaskType::from_key("whatever"), MaskType::None);
        assert_eq!(MaskType::Disk.key(), "disk");
    }

    #[test]
    fn set_viewport_recentres() {
        let mut p = ProjectorParams::default();
        p.set_viewport(10, 20, 800, 600);
        assert_eq!(p.viewport_center, [410.0, 320.0]);
        assert_eq!(p.viewport_fov_diameter, 600.0);
    }
}
