use crate::error::{RenderError, Result};
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    pub const fn from_array(v: [f64; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }

    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn norm2(self) -> f64 {
        self.dot(self)
    }

    pub fn length(self) -> f64 {
        self.norm2().sqrt()
    }

    pub fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    pub fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    /// `self + b * c`
    pub fn add_scaled(self, b: Self, c: f64) -> Self {
        Self::new(self.x + b.x * c, self.y + b.y * c, self.z + b.z * c)
    }

    /// `self - b * c`
    pub fn sub_scaled(self, b: Self, c: f64) -> Self {
        Self::new(self.x - b.x * c, self.y - b.y * c, self.z - b.z * c)
    }

    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor, self.z * factor)
    }

    pub fn normalize(self) -> Result<Self> {
        self.normalize_to_length(1.0)
    }

    /// Rescales to the given length. Fails on the zero vector.
    pub fn normalize_to_length(self, length: f64) -> Result<Self> {
        let n2 = self.norm2();
        if n2 == 0.0 {
            return Err(RenderError::DivisionByZero("normalize"));
        }
        Ok(self.scale(length / n2.sqrt()))
    }

    /// Removes the component of `self` parallel to `b`.
    ///
    /// A vector parallel to `b` comes back as zero, which is not an error
    /// here; only a zero-length `b` is.
    pub fn orthogonalize(self, b: Self) -> Result<Self> {
        let n2 = b.norm2();
        if n2 == 0.0 {
            return Err(RenderError::DivisionByZero("orthogonalize"));
        }
        Ok(self.sub_scaled(b, self.dot(b) / n2))
    }

    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Vec3::add(self, rhs)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = Vec3::add(*self, rhs);
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Vec3::sub(self, rhs)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl Mul<Vec3> for f64 {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Self::Output {
        rhs.scale(self)
    }
}

impl Neg for Vec3 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z)
    }
}

/// Ray through two points: `at(0)` is `origin`, `at(1)` is `through`.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    pub through: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, through: Vec3) -> Self {
        Self { origin, through }
    }

    pub fn direction(&self) -> Vec3 {
        self.through - self.origin
    }

    pub fn at(&self, t: f64) -> Vec3 {
        self.origin.add_scaled(self.direction(), t)
    }
}
