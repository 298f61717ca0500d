use std::{
    fmt::Debug,
    ops::{Add, Div, Mul, Sub},
};

mod curve;
pub use curve::*;
mod num;
pub use num::*;

#[derive(Clone, Copy, Default, PartialEq)]
#[repr(C)]
pub struct Point2<N> {
    pub x: N,
    pub y: N,
}

pub type Point2f = Point2<f32>;

impl<N> Point2<N> {
    pub const fn new(x: N, y: N) -> Self {
        Self { x, y }
    }

    pub const fn to_vec(self) -> Vec2<N>
    where
        N: Copy,
    {
        Vec2::new(self.x, self.y)
    }
}

impl<N: Number> Point2<N> {
    pub fn distance(self, other: Self) -> N
    where
        N: Sqrt,
    {
        (self - other).length()
    }

    pub const ZERO: Self = Self::new(N::ZERO, N::ZERO);
}

impl Point2f {
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl<N: Debug> Debug for Point2<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:?}, {:?})", self.x, self.y)
    }
}

#[derive(Clone, Copy, Default, PartialEq)]
#[repr(C)]
pub struct Vec2<N> {
    pub x: N,
    pub y: N,
}

pub type Vec2f = Vec2<f32>;

impl<N> Vec2<N> {
    pub const fn new(x: N, y: N) -> Self {
        Self { x, y }
    }

    pub const fn to_point(self) -> Point2<N>
    where
        N: Copy,
    {
        Point2::new(self.x, self.y)
    }
}

impl<N: Number> Vec2<N> {
    pub fn length(self) -> N
    where
        N: Sqrt,
    {
        self.length_sq().sqrt()
    }

    pub fn length_sq(self) -> N {
        self.x * self.x + self.y * self.y
    }

    /// Calculates the dot product of two vectors.
    ///
    /// u⋅v = u.x * v.x + u.y * v.y = ||u|| * ||v|| * cos(θ)
    pub fn dot(self, other: Self) -> N {
        self.x * other.x + self.y * other.y
    }

    pub const ZERO: Self = Self::new(N::ZERO, N::ZERO);
}

impl<N: Debug> Debug for Vec2<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}, {:?}]", self.x, self.y)
    }
}

impl<N: Number> Mul<N> for Vec2<N> {
    type Output = Self;

    fn mul(self, rhs: N) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl<N: Number> Div<N> for Vec2<N> {
    type Output = Self;

    fn div(self, rhs: N) -> Self::Output {
        Self {
            x: self.x / rhs,
            y: self.y / rhs,
        }
    }
}

macro_rules! impl_binop {
    ($trait: ident, $fn: ident; $dst: ident $operator: tt $src: ident => $output: ident) => {
        impl<N: Number> $trait<$src<N>> for $dst<N> {
            type Output = $output<N>;

            fn $fn(self, rhs: $src<N>) -> Self::Output {
                $output::new(self.x $operator rhs.x, self.y $operator rhs.y)
            }
        }
    };
}

impl_binop!(Add, add; Vec2 + Vec2 => Vec2);
impl_binop!(Sub, sub; Vec2 - Vec2 => Vec2);
impl_binop!(Add, add; Point2 + Vec2 => Point2);
impl_binop!(Sub, sub; Point2 - Vec2 => Point2);
impl_binop!(Sub, sub; Point2 - Point2 => Vec2);
