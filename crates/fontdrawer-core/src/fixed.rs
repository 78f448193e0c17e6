//! 26.6 fixed-point coordinates
//!
//! Glyph positions, advances and ink boxes all live on a 1/64 pixel grid.
//! Canvas pixels are whole units on the same grid, so layout math never
//! leaves integer arithmetic.
//!
//! Arithmetic saturates at [`F26Dot6::MIN`] and [`F26Dot6::MAX`]: a run
//! long enough to leave the grid piles up at the edge instead of wrapping.

use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A signed 26.6 fixed-point number: 26 integer bits, 6 fractional bits.
///
/// ```rust
/// use fontdrawer_core::fixed::F26Dot6;
///
/// let x = F26Dot6::from_int(5);
/// let y = F26Dot6::from_float(5.5);
/// assert_eq!((y - x).raw(), 32);
/// ```
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct F26Dot6(i32);

impl F26Dot6 {
    pub const FRAC_BITS: u32 = 6;

    pub const FRAC_MASK: i32 = (1 << Self::FRAC_BITS) - 1;

    pub const ONE: F26Dot6 = F26Dot6(1 << Self::FRAC_BITS);

    pub const ZERO: F26Dot6 = F26Dot6(0);

    pub const HALF: F26Dot6 = F26Dot6(1 << (Self::FRAC_BITS - 1));

    pub const MAX: F26Dot6 = F26Dot6(i32::MAX);

    pub const MIN: F26Dot6 = F26Dot6(i32::MIN);

    /// Whole pixels, the `fixed.I` of the canvas grid
    #[inline]
    pub const fn from_int(x: i32) -> Self {
        F26Dot6(x.saturating_mul(Self::ONE.0))
    }

    /// A canvas dimension in whole pixels
    #[inline]
    pub const fn from_pixels(x: u32) -> Self {
        if x > i32::MAX as u32 {
            Self::MAX
        } else {
            Self::from_int(x as i32)
        }
    }

    /// Nearest 1/64 of `x`
    #[inline]
    pub fn from_float(x: f32) -> Self {
        F26Dot6((x * 64.0).round() as i32)
    }

    #[inline]
    pub const fn from_raw(raw: i32) -> Self {
        F26Dot6(raw)
    }

    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Integer part, rounding toward negative infinity
    #[inline]
    pub const fn to_int(self) -> i32 {
        self.0 >> Self::FRAC_BITS
    }

    #[inline]
    pub const fn to_int_round(self) -> i32 {
        self.0.saturating_add(Self::HALF.0) >> Self::FRAC_BITS
    }

    #[inline]
    pub fn to_float(self) -> f32 {
        self.0 as f32 / 64.0
    }

    #[inline]
    pub const fn frac(self) -> i32 {
        self.0 & Self::FRAC_MASK
    }

    #[inline]
    pub const fn floor(self) -> F26Dot6 {
        F26Dot6(self.0 & !Self::FRAC_MASK)
    }

    #[inline]
    pub const fn ceil(self) -> F26Dot6 {
        if self.0 & Self::FRAC_MASK == 0 {
            self
        } else {
            F26Dot6((self.0 & !Self::FRAC_MASK).saturating_add(Self::ONE.0))
        }
    }

    /// Snap to the nearest whole pixel
    #[inline]
    pub const fn round(self) -> F26Dot6 {
        F26Dot6(self.0.saturating_add(Self::HALF.0) & !Self::FRAC_MASK)
    }

    /// `self / 2` on the 1/64 grid, truncating toward zero
    #[inline]
    pub const fn halve(self) -> F26Dot6 {
        F26Dot6(self.0 / 2)
    }

    #[inline]
    pub const fn abs(self) -> F26Dot6 {
        F26Dot6(self.0.saturating_abs())
    }
}

impl fmt::Debug for F26Dot6 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.0 >> Self::FRAC_BITS, self.0 & Self::FRAC_MASK)
    }
}

impl fmt::Display for F26Dot6 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_float())
    }
}

impl Add for F26Dot6 {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        F26Dot6(self.0.saturating_add(other.0))
    }
}

impl AddAssign for F26Dot6 {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for F26Dot6 {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        F26Dot6(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for F26Dot6 {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Neg for F26Dot6 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        F26Dot6(self.0.saturating_neg())
    }
}

impl From<i32> for F26Dot6 {
    #[inline]
    fn from(x: i32) -> Self {
        Self::from_int(x)
    }
}

impl From<F26Dot6> for f32 {
    #[inline]
    fn from(x: F26Dot6) -> f32 {
        x.to_float()
    }
}

/// A point on the 26.6 grid, y growing downward
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point26Dot6 {
    pub x: F26Dot6,
    pub y: F26Dot6,
}

impl Point26Dot6 {
    pub const ZERO: Point26Dot6 = Point26Dot6 {
        x: F26Dot6::ZERO,
        y: F26Dot6::ZERO,
    };

    pub const fn new(x: F26Dot6, y: F26Dot6) -> Self {
        Self { x, y }
    }

    /// Whole-pixel point
    pub const fn from_ints(x: i32, y: i32) -> Self {
        Self {
            x: F26Dot6::from_int(x),
            y: F26Dot6::from_int(y),
        }
    }
}

impl Add for Point26Dot6 {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Point26Dot6::new(self.x + other.x, self.y + other.y)
    }
}

/// Axis-aligned box on the 26.6 grid; `min` is inclusive, `max` exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect26Dot6 {
    pub min: Point26Dot6,
    pub max: Point26Dot6,
}

impl Rect26Dot6 {
    pub const ZERO: Rect26Dot6 = Rect26Dot6 {
        min: Point26Dot6::ZERO,
        max: Point26Dot6::ZERO,
    };

    pub const fn new(min: Point26Dot6, max: Point26Dot6) -> Self {
        Self { min, max }
    }

    pub fn width(&self) -> F26Dot6 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> F26Dot6 {
        self.max.y - self.min.y
    }

    /// True when the box encloses no area
    pub fn is_empty(&self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// Smallest box containing both; empty boxes do not contribute.
    pub fn union(&self, other: &Rect26Dot6) -> Rect26Dot6 {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        Rect26Dot6 {
            min: Point26Dot6::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Point26Dot6::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    /// Shift by `delta`
    pub fn translate(&self, delta: Point26Dot6) -> Rect26Dot6 {
        Rect26Dot6 {
            min: self.min + delta,
            max: self.max + delta,
        }
    }

    /// Expand outward to whole pixels
    pub fn pixel_aligned(&self) -> Rect26Dot6 {
        Rect26Dot6 {
            min: Point26Dot6::new(self.min.x.floor(), self.min.y.floor()),
            max: Point26Dot6::new(self.max.x.ceil(), self.max.y.ceil()),
        }
    }
}
