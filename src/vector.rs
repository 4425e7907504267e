//! Vectors.

use anyhow::{Result, bail};
use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use std::{
    fmt,
    ops::{Index, IndexMut},
};

/// A 3-dimensional vector with double precision components.
///
/// Each operation is implemented once as an in-place mutation (the `_mut`
/// methods and the compound assignment operators). The copy-returning
/// counterparts apply that mutation to a copy of the vector, so the vector
/// they are called on is never modified.
///
/// No invariant is enforced on the components. Normalizing a vector with
/// zero magnitude through [`Self::normalize_mut`] or [`Self::normalized`]
/// produces non-finite components rather than an error; use
/// [`Self::try_normalized`] or [`Self::normalized_if_above`] when that case
/// must be detected.
#[repr(C)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct Vector3 {
    x: f64,
    y: f64,
    z: f64,
}

impl Vector3 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: f64) -> Self {
        Self::new(value, value, value)
    }

    /// The x-axis unit vector.
    #[inline]
    pub const fn unit_x() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    /// The y-axis unit vector.
    #[inline]
    pub const fn unit_y() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    /// The z-axis unit vector.
    #[inline]
    pub const fn unit_z() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// The z-component.
    #[inline]
    pub const fn z(&self) -> f64 {
        self.z
    }

    /// A mutable reference to the x-component.
    #[inline]
    pub const fn x_mut(&mut self) -> &mut f64 {
        &mut self.x
    }

    /// A mutable reference to the y-component.
    #[inline]
    pub const fn y_mut(&mut self) -> &mut f64 {
        &mut self.y
    }

    /// A mutable reference to the z-component.
    #[inline]
    pub const fn z_mut(&mut self) -> &mut f64 {
        &mut self.z
    }

    /// The components as an array.
    #[inline]
    pub fn as_array(&self) -> &[f64; 3] {
        bytemuck::cast_ref(self)
    }

    /// The components as a mutable array.
    #[inline]
    pub fn as_array_mut(&mut self) -> &mut [f64; 3] {
        bytemuck::cast_mut(self)
    }

    /// Overwrites the components of this vector with those of `other`.
    #[inline]
    pub fn copy_from(&mut self, other: &Self) {
        self.set(other.x, other.y, other.z);
    }

    /// Overwrites the components of this vector.
    #[inline]
    pub fn set(&mut self, x: f64, y: f64, z: f64) {
        self.x = x;
        self.y = y;
        self.z = z;
    }

    /// Adds the given amounts to the respective components of this vector.
    #[inline]
    pub fn add_components_mut(&mut self, dx: f64, dy: f64, dz: f64) {
        self.x += dx;
        self.y += dy;
        self.z += dz;
    }

    /// Computes the vector obtained by adding the given amounts to the
    /// respective components of this vector.
    #[inline]
    pub fn add_components(&self, dx: f64, dy: f64, dz: f64) -> Self {
        self.modified_copy(|v| v.add_components_mut(dx, dy, dz))
    }

    /// Multiplies every component of this vector by `scaling`.
    #[inline]
    pub fn scale_mut(&mut self, scaling: f64) {
        self.x *= scaling;
        self.y *= scaling;
        self.z *= scaling;
    }

    /// Computes this vector with every component multiplied by `scaling`.
    #[inline]
    pub fn scale(&self, scaling: f64) -> Self {
        self.modified_copy(|v| v.scale_mut(scaling))
    }

    /// Scales this vector to unit magnitude.
    ///
    /// The components are multiplied by the reciprocal of the magnitude the
    /// vector has before the call. A zero vector thus ends up with NaN
    /// components.
    #[inline]
    pub fn normalize_mut(&mut self) {
        let inverse_magnitude = 1.0 / self.magnitude();
        self.scale_mut(inverse_magnitude);
    }

    /// Computes the normalized version of the vector.
    ///
    /// The result has NaN components if the vector has zero magnitude.
    #[inline]
    pub fn normalized(&self) -> Self {
        self.modified_copy(Self::normalize_mut)
    }

    /// Scales this vector to unit magnitude, or returns an error and leaves
    /// the vector untouched if the magnitude is zero or too extreme for the
    /// normalization to give finite components.
    pub fn try_normalize_mut(&mut self) -> Result<()> {
        let magnitude = self.magnitude();
        let inverse_magnitude = magnitude.recip();

        if !magnitude.is_finite() || !inverse_magnitude.is_finite() {
            log::debug!("Rejected normalization of {} with magnitude {}", self, magnitude);
            bail!("Cannot normalize vector {} with magnitude {}", self, magnitude);
        }

        self.scale_mut(inverse_magnitude);
        Ok(())
    }

    /// Computes the normalized version of the vector, or returns an error if
    /// the magnitude is zero or too extreme for the normalization to give
    /// finite components.
    pub fn try_normalized(&self) -> Result<Self> {
        let mut normalized = *self;
        normalized.try_normalize_mut()?;
        Ok(normalized)
    }

    /// Computes the normalized version of the vector if its magnitude
    /// exceeds `min_magnitude`.
    #[inline]
    pub fn normalized_if_above(&self, min_magnitude: f64) -> Option<Self> {
        let magnitude = self.magnitude();
        (magnitude > min_magnitude).then(|| self.scale(magnitude.recip()))
    }

    /// Replaces this vector with its cross product with `right`, in that
    /// order.
    #[inline]
    pub fn cross_mut(&mut self, right: &Self) {
        let Self { x, y, z } = *self;
        self.x = y * right.z - z * right.y;
        self.y = z * right.x - x * right.z;
        self.z = x * right.y - y * right.x;
    }

    /// Computes the cross product of this vector with `right`, in that order.
    #[inline]
    pub fn cross(&self, right: &Self) -> Self {
        self.modified_copy(|v| v.cross_mut(right))
    }

    /// Computes the dot product of this vector with another.
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Computes the magnitude (Euclidean length) of the vector.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Computes the square of the magnitude of the vector.
    #[inline]
    pub fn magnitude_squared(&self) -> f64 {
        self.dot(self)
    }

    #[inline]
    fn modified_copy(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut copy = *self;
        modify(&mut copy);
        copy
    }
}

impl From<[f64; 3]> for Vector3 {
    #[inline]
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector3> for [f64; 3] {
    #[inline]
    fn from(vector: Vector3) -> Self {
        [vector.x, vector.y, vector.z]
    }
}

impl From<nalgebra::Vector3<f64>> for Vector3 {
    #[inline]
    fn from(vector: nalgebra::Vector3<f64>) -> Self {
        Self::new(vector.x, vector.y, vector.z)
    }
}

impl From<Vector3> for nalgebra::Vector3<f64> {
    #[inline]
    fn from(vector: Vector3) -> Self {
        nalgebra::Vector3::new(vector.x, vector.y, vector.z)
    }
}

impl_binop_assign!(AddAssign, add_assign, Vector3, Vector3, |a, b| {
    a.add_components_mut(b.x, b.y, b.z);
});

impl_binop_assign!(SubAssign, sub_assign, Vector3, Vector3, |a, b| {
    a.x -= b.x;
    a.y -= b.y;
    a.z -= b.z;
});

impl_binop_assign!(MulAssign, mul_assign, Vector3, f64, |a, b| {
    a.scale_mut(*b);
});

impl_binop_assign!(DivAssign, div_assign, Vector3, f64, |a, b| {
    a.x /= *b;
    a.y /= *b;
    a.z /= *b;
});

impl_binop_via_assign!(Add, add, AddAssign, add_assign, Vector3, Vector3);

impl_binop_via_assign!(Sub, sub, SubAssign, sub_assign, Vector3, Vector3);

impl_binop_via_assign!(Mul, mul, MulAssign, mul_assign, Vector3, f64);

impl_binop_via_assign!(Div, div, DivAssign, div_assign, Vector3, f64);

impl_binop!(Mul, mul, f64, Vector3, Vector3, |a, b| { b.scale(*a) });

impl_unary_op!(Neg, neg, Vector3, Vector3, |val| {
    Vector3::new(-val.x, -val.y, -val.z)
});

impl Index<usize> for Vector3 {
    type Output = f64;

    #[inline]
    fn index(&self, idx: usize) -> &Self::Output {
        match idx {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("index out of bounds"),
        }
    }
}

impl IndexMut<usize> for Vector3 {
    #[inline]
    fn index_mut(&mut self, idx: usize) -> &mut Self::Output {
        match idx {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("index out of bounds"),
        }
    }
}

impl_abs_diff_eq!(Vector3, |a, b, epsilon| {
    a.x.abs_diff_eq(&b.x, epsilon)
        && a.y.abs_diff_eq(&b.y, epsilon)
        && a.z.abs_diff_eq(&b.z, epsilon)
});

impl_relative_eq!(Vector3, |a, b, epsilon, max_relative| {
    a.x.relative_eq(&b.x, epsilon, max_relative)
        && a.y.relative_eq(&b.y, epsilon, max_relative)
        && a.z.relative_eq(&b.z, epsilon, max_relative)
});

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
