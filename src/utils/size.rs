//! Byte quantities tagged with a display unit.
//!
//! This module provides [`ByteSize`], the value type used for every size the
//! report shows: per-group totals, per-file averages and the run total. A
//! `ByteSize` stores an integer amount of one [`SizeUnit`]; folding bytes into
//! it truncates to that unit's granularity, which keeps group totals stable
//! regardless of how many files are accumulated.

use std::fmt;
use std::ops::{Add, Div, Sub};

/// Number of units in the next coarser unit.
const KIBI: u64 = 1024;

/// Binary size units, each exactly 1024 times the previous one.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Hash)]
pub enum SizeUnit {
    /// Single bytes
    Bytes,

    /// 1024 bytes
    #[default]
    KiB,

    /// 1024 KiB
    MiB,

    /// 1024 MiB
    GiB,

    /// 1024 GiB
    TiB,

    /// 1024 TiB
    PiB,
}

impl SizeUnit {
    /// Every unit, smallest first.
    pub const ALL: [Self; 6] = [
        Self::Bytes,
        Self::KiB,
        Self::MiB,
        Self::GiB,
        Self::TiB,
        Self::PiB,
    ];

    /// Number of bytes in one of this unit.
    #[must_use]
    pub const fn factor(self) -> u64 {
        match self {
            Self::Bytes => 1,
            Self::KiB => KIBI,
            Self::MiB => KIBI * KIBI,
            Self::GiB => KIBI * KIBI * KIBI,
            Self::TiB => KIBI * KIBI * KIBI * KIBI,
            Self::PiB => KIBI * KIBI * KIBI * KIBI * KIBI,
        }
    }

    /// The next coarser unit, or `None` for [`SizeUnit::PiB`].
    #[must_use]
    pub const fn larger(self) -> Option<Self> {
        match self {
            Self::Bytes => Some(Self::KiB),
            Self::KiB => Some(Self::MiB),
            Self::MiB => Some(Self::GiB),
            Self::GiB => Some(Self::TiB),
            Self::TiB => Some(Self::PiB),
            Self::PiB => None,
        }
    }

    /// The next finer unit, or `None` for [`SizeUnit::Bytes`].
    #[must_use]
    pub const fn smaller(self) -> Option<Self> {
        match self {
            Self::Bytes => None,
            Self::KiB => Some(Self::Bytes),
            Self::MiB => Some(Self::KiB),
            Self::GiB => Some(Self::MiB),
            Self::TiB => Some(Self::GiB),
            Self::PiB => Some(Self::TiB),
        }
    }

    /// Display label of the unit.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bytes => "Bytes",
            Self::KiB => "KiB",
            Self::MiB => "MiB",
            Self::GiB => "GiB",
            Self::TiB => "TiB",
            Self::PiB => "PiB",
        }
    }

    /// Pick the unit a byte count reads best in.
    ///
    /// This is the unit one step below the first unit whose factor exceeds
    /// `bytes`. Zero stays in [`SizeUnit::Bytes`] and anything at or above
    /// one PiB is reported in [`SizeUnit::PiB`].
    #[must_use]
    pub fn optimal_for(bytes: u64) -> Self {
        Self::ALL
            .iter()
            .position(|unit| unit.factor() > bytes)
            .map_or(Self::PiB, |index| Self::ALL[index.saturating_sub(1)])
    }
}

impl fmt::Display for SizeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An integer amount of a [`SizeUnit`].
///
/// The size in bytes is always `value * unit.factor()`. Bytes folded in
/// through [`ByteSize::from_bytes`] or [`ByteSize::add_bytes`] are divided by
/// the unit factor with truncation, so converting to a coarser unit and back
/// does not round-trip for byte counts that are not multiples of 1024.
///
/// `Display` renders the smart format, e.g. `"2.50 GiB"`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct ByteSize {
    value: u64,
    unit: SizeUnit,
}

impl ByteSize {
    /// An empty size in the given unit.
    #[must_use]
    pub const fn zero(unit: SizeUnit) -> Self {
        Self { value: 0, unit }
    }

    /// Fold a byte count into a new size measured in KiB.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fcc::utils::{ByteSize, SizeUnit};
    /// let size = ByteSize::from_bytes(1_073_741_824);
    /// assert_eq!(size.convert_to(SizeUnit::GiB), 1);
    /// assert_eq!(size.to_string(), "1.00 GiB");
    /// ```
    #[must_use]
    pub const fn from_bytes(bytes: u64) -> Self {
        Self::from_bytes_in(bytes, SizeUnit::KiB)
    }

    /// Fold a byte count into a new size measured in `unit`.
    #[must_use]
    pub const fn from_bytes_in(bytes: u64, unit: SizeUnit) -> Self {
        Self {
            value: bytes / unit.factor(),
            unit,
        }
    }

    /// The stored amount, in [`ByteSize::unit`].
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.value
    }

    /// The unit the amount is measured in.
    #[must_use]
    pub const fn unit(&self) -> SizeUnit {
        self.unit
    }

    /// Add `bytes` to this size, truncated to the unit's granularity.
    ///
    /// Additions smaller than one unit are lost.
    pub const fn add_bytes(&mut self, bytes: u64) -> &mut Self {
        self.value = self.value.saturating_add(bytes / self.unit.factor());
        self
    }

    /// Remove `bytes` from this size, truncated to the unit's granularity.
    ///
    /// The amount never drops below zero.
    pub const fn remove_bytes(&mut self, bytes: u64) -> &mut Self {
        self.value = self.value.saturating_sub(bytes / self.unit.factor());
        self
    }

    /// The size in bytes.
    #[must_use]
    pub const fn to_bytes(&self) -> u64 {
        self.value.saturating_mul(self.unit.factor())
    }

    /// The amount expressed in `target`.
    ///
    /// The conversion walks the unit ladder one step at a time, multiplying
    /// by 1024 on the way down and dividing (with truncation) on the way up,
    /// so every coarser step drops its remainder.
    #[must_use]
    pub fn convert_to(&self, target: SizeUnit) -> u64 {
        let mut unit = self.unit;
        let mut value = self.value;

        while unit != target {
            if target > unit {
                value /= KIBI;
                unit = unit.larger().unwrap_or(SizeUnit::PiB);
            } else {
                value = value.saturating_mul(KIBI);
                unit = unit.smaller().unwrap_or(SizeUnit::Bytes);
            }
        }

        value
    }

    /// Render the integer amount in a fixed unit, e.g. `"1024 MiB"`.
    #[must_use]
    pub fn to_string_in(&self, unit: SizeUnit) -> String {
        format!("{} {unit}", self.convert_to(unit))
    }

    /// Render the size in its optimal unit with two decimals.
    ///
    /// The amount is read in the unit one step below the optimal one and
    /// divided by 1024, which keeps the fractional part that an integer
    /// conversion would drop: `2.5 GiB` reads `"2.50 GiB"` instead of `"2 GiB"`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_smart_string(&self) -> String {
        let optimal = SizeUnit::optimal_for(self.to_bytes());
        let lower = optimal.smaller().unwrap_or(SizeUnit::Bytes);

        let mut value = self.convert_to(lower) as f64;
        if lower < optimal {
            value /= KIBI as f64;
        }

        format!("{value:.2} {optimal}")
    }
}

impl fmt::Display for ByteSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_smart_string())
    }
}

impl Add for ByteSize {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let mut sum = self;
        sum.add_bytes(rhs.to_bytes());
        sum
    }
}

impl Sub for ByteSize {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        let mut difference = self;
        difference.remove_bytes(rhs.to_bytes());
        difference
    }
}

impl Div<Option<u64>> for ByteSize {
    type Output = Self;

    /// Average size per item, measured in bytes; `None` or a zero count returns a copy.
    fn div(self, count: Option<u64>) -> Self::Output {
        match count {
            Some(count) if count > 0 => {
                Self::from_bytes_in(self.to_bytes() / count, SizeUnit::Bytes)
            }
            _ => self,
        }
    }
}
