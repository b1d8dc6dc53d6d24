use core::cmp::{Ordering, PartialOrd};
use core::fmt::{self, Debug};
use core::ops::{Add, AddAssign, Sub};
use fixed::traits::{FixedSigned, ToFixed};

/// A trait that describes the operations the dynamic policy needs from its cost type.
pub trait Num
where
    Self: Default + Debug + Copy + PartialOrd<Self> + Add<Output = Self> + AddAssign + Sub<Output = Self>,
{
    /// Converts a count of code points to a cost value.
    fn from_width(width: usize) -> Self;

    /// Raises `self` to a real power.
    fn powf(self, exponent: f64) -> Self;
}

#[cfg(feature = "std")]
impl Num for f64 {
    fn from_width(width: usize) -> f64 {
        width as f64
    }

    fn powf(self, exponent: f64) -> f64 {
        f64::powf(self, exponent)
    }
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
impl Num for f64 {
    fn from_width(width: usize) -> f64 {
        width as f64
    }

    fn powf(self, exponent: f64) -> f64 {
        libm::pow(self, exponent)
    }
}

#[cfg(feature = "std")]
impl Num for f32 {
    fn from_width(width: usize) -> f32 {
        width as f32
    }

    fn powf(self, exponent: f64) -> f32 {
        f32::powf(self, exponent as f32)
    }
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
impl Num for f32 {
    fn from_width(width: usize) -> f32 {
        width as f32
    }

    fn powf(self, exponent: f64) -> f32 {
        libm::powf(self, exponent as f32)
    }
}

/// Wraps a signed fixed-point number. All operations are saturating, so an enormous cost pins at
/// the representation's maximum instead of wrapping around.
#[derive(Default, Clone, Copy)]
pub struct Fixed<F: FixedSigned>(F);

impl<F: FixedSigned> Debug for Fixed<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        Debug::fmt(&self.0, f)
    }
}

impl<F: FixedSigned> PartialEq for Fixed<F> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<F: FixedSigned> PartialOrd for Fixed<F> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl<F: FixedSigned> Add for Fixed<F> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Fixed(self.0.saturating_add(rhs.0))
    }
}

impl<F: FixedSigned> AddAssign for Fixed<F> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<F: FixedSigned> Sub for Fixed<F> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Fixed(self.0.saturating_sub(rhs.0))
    }
}

impl<F: FixedSigned> Fixed<F> {
    pub const MAX: Self = Self(F::MAX);

    /// Converts `src` to fixed point, saturating if it is out of range.
    pub fn from_num<Src: ToFixed>(src: Src) -> Self {
        Fixed(F::saturating_from_num(src))
    }

    /// Returns the underlying fixed-point value.
    pub fn get(self) -> F {
        self.0
    }
}

impl<F: FixedSigned> Num for Fixed<F> {
    fn from_width(width: usize) -> Self {
        Self::from_num(width)
    }

    fn powf(self, exponent: f64) -> Self {
        let base: f64 = self.0.to_num();
        #[cfg(feature = "std")]
        let value = base.powf(exponent);
        #[cfg(not(feature = "std"))]
        let value = libm::pow(base, exponent);
        if value.is_nan() {
            Self::MAX
        } else {
            Self::from_num(value)
        }
    }
}
