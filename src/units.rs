use derive_more::{Add, AddAssign, Display, Div, From, Into, Mul, MulAssign, Sub, SubAssign, Sum};

/// A length on the canvas, in pixels. Fractional values are allowed while laying
/// out; measured sizes are always whole pixels.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Mul,
    MulAssign,
    Div,
    Sum,
    From,
    Into,
    Display,
)]
#[display("{_0}px")]
pub struct Px(pub f32);

impl Px {
    pub const ZERO: Px = Px(0.0);

    /// Round up to the next whole pixel
    pub fn ceil(self) -> Px {
        Px(self.0.ceil())
    }

    /// Drop the fractional part, rounding towards zero
    pub fn trunc(self) -> Px {
        Px(self.0.trunc())
    }
}

impl From<u32> for Px {
    fn from(v: u32) -> Self {
        Px(v as f32)
    }
}

impl From<i32> for Px {
    fn from(v: i32) -> Self {
        Px(v as f32)
    }
}
