use std::ops::{Add, Div, Mul, Sub};

pub trait Number:
    Sized
    + Add<Self, Output = Self>
    + Sub<Self, Output = Self>
    + Div<Self, Output = Self>
    + Mul<Self, Output = Self>
    + PartialOrd
    + Copy
{
    const ZERO: Self;
}

impl Number for f32 {
    const ZERO: Self = 0.0;
}

pub trait Sqrt: Number {
    fn sqrt(self) -> Self;
}

impl Sqrt for f32 {
    fn sqrt(self) -> Self {
        self.sqrt()
    }
}
