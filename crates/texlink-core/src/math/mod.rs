// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Provides the 2D math primitives used to place and correct external textures.
//!
//! Texture-space corrections are 2D projective transforms, so the workhorse is a
//! column-major [`Mat3`] operating on homogeneous [`Vec3`] points. [`Rect`] and
//! [`Extent2D`] describe paint bounds and texture allocation sizes.

// --- Fundamental Constants ---

/// A small constant for floating-point comparisons.
pub const EPSILON: f32 = 1e-5;

/// The determinant magnitude below which a matrix is treated as singular.
///
/// This is `(1 / 4096)^3`, so that tiny but well-formed crop scales still invert.
pub const DETERMINANT_EPSILON: f32 = 1.0 / (4096.0 * 4096.0 * 4096.0);

// --- Declare Sub-Modules ---

pub mod dimension;
pub mod geometry;
pub mod matrix;
pub mod vector;

// --- Re-export Principal Types ---

pub use self::dimension::Extent2D;
pub use self::geometry::Rect;
pub use self::matrix::Mat3;
pub use self::vector::{Vec2, Vec3};

// --- Utility Functions ---

/// Performs an approximate equality comparison between two floats with a custom tolerance.
///
/// # Examples
///
/// ```
/// use texlink_core::math::approx_eq_eps;
/// assert!(approx_eq_eps(0.001, 0.002, 1e-2));
/// assert!(!approx_eq_eps(0.001, 0.002, 1e-4));
/// ```
#[inline]
pub fn approx_eq_eps(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() < epsilon
}

/// Performs an approximate equality comparison using the module's default [`EPSILON`].
#[inline]
pub fn approx_eq(a: f32, b: f32) -> bool {
    approx_eq_eps(a, b, EPSILON)
}
