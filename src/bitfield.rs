use core::fmt::{Display, Formatter};
use thiserror::Error;

/// Largest flag value an `f64` can hold as an exact integer.
///
/// Equals 2^53 - 1. [`flag_from_f64`] rejects candidates above it with
/// [`FlagError::TooLarge`]; the `u64` operations on [`Bitfield`] need no such
/// ceiling since every bit pattern of the word is exact.
pub const F64_SAFE_MAX: u64 = (1 << 53) - 1;

/// The reasons a candidate flag is rejected.
///
/// Checks run in the order the variants are declared and stop at the first
/// failure. A rejected call never modifies the bitfield it was made on.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagError {
    /// The candidate is not a number at all.
    #[error("that is not a number, flags must be integers")]
    NotANumber,
    /// The candidate has a fractional part or is not finite.
    #[error("flags must be whole integers, not fractions")]
    NotAnInteger,
    /// The candidate is less than 1, the smallest possible flag (2^0).
    #[error("flags must be at least 1")]
    OutOfRange,
    /// The candidate exceeds the largest exactly representable flag value.
    #[error("flag is too large to represent exactly")]
    TooLarge,
}

/// Rejects candidates no flag operation can act on.
///
/// A `u64` is always numeric and whole, so only the lower bound is left to
/// check at runtime; zero selects no bit position and can never be a flag.
fn validate(flag: u64) -> Result<(), FlagError> {
    if flag < 1 {
        return Err(FlagError::OutOfRange);
    }
    Ok(())
}

/// Converts a flag candidate held as an `f64` into a flag word.
///
/// The full check sequence applies, in order: not a number, not an integer,
/// below 1, above the [`F64_SAFE_MAX`] exact-integer ceiling. Meant for
/// callers whose flag values arrive through a double-width float rather than
/// an integer type.
///
/// # Examples
/// ```
/// use flag_field::{FlagError, flag_from_f64};
///
/// assert_eq!(flag_from_f64(52.0), Ok(52));
/// assert_eq!(flag_from_f64(0.5), Err(FlagError::NotAnInteger));
/// assert_eq!(flag_from_f64(0.0), Err(FlagError::OutOfRange));
/// ```
pub fn flag_from_f64(value: f64) -> Result<u64, FlagError> {
    if value.is_nan() {
        return Err(FlagError::NotANumber);
    }
    // `x % 1.0` works in core, `fract` does not; infinities land here too
    if !value.is_finite() || value % 1.0 != 0.0 {
        return Err(FlagError::NotAnInteger);
    }
    if value < 1.0 {
        return Err(FlagError::OutOfRange);
    }
    if value > F64_SAFE_MAX as f64 {
        return Err(FlagError::TooLarge);
    }
    Ok(value as u64)
}

/// The main type that stores the flag state.
///
/// Wraps a single `u64` word; each set bit position is one active flag.
/// Flags passed to [`get`], [`set`] and [`delete`] may be single bits
/// (powers of two) or pre-combined masks, and every candidate is validated
/// before it is applied. The stored word itself is never bounds-checked.
///
/// [`get`]: Bitfield::get
/// [`set`]: Bitfield::set
/// [`delete`]: Bitfield::delete
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct Bitfield(pub(crate) u64);

impl Bitfield {
    /// Creates a bitfield with no flags set.
    ///
    /// # Examples
    /// ```
    /// use flag_field::Bitfield;
    ///
    /// let field = Bitfield::new();
    /// assert!(field.is_empty());
    /// ```
    pub const fn new() -> Self {
        Self(0)
    }

    /// Creates a bitfield with `flag` already set.
    ///
    /// The initial value passes the same validation as every other entry
    /// point, with one exception: `0` is accepted and means the empty state.
    ///
    /// # Examples
    /// ```
    /// use flag_field::Bitfield;
    ///
    /// let field = Bitfield::with_flag(1024)?;
    /// assert!(field.get(1024)?);
    /// # Ok::<(), flag_field::FlagError>(())
    /// ```
    pub fn with_flag(flag: u64) -> Result<Self, FlagError> {
        if flag == 0 {
            return Ok(Self::new());
        }
        validate(flag)?;
        Ok(Self(flag))
    }

    /// Returns `true` if any bit set in `flag` is also set in the field.
    ///
    /// This is an any-overlap test, not an exact match: probing with a
    /// combined mask answers "is at least one of these flags active", never
    /// "are all of them active".
    ///
    /// # Examples
    /// ```
    /// use flag_field::Bitfield;
    ///
    /// let field = Bitfield::with_flag(0b110100)?;
    /// assert!(field.get(0b100)?);
    /// assert!(field.get(0b110)?); // one of the two bits overlaps
    /// assert!(!field.get(0b1)?);
    /// # Ok::<(), flag_field::FlagError>(())
    /// ```
    #[inline]
    pub fn get(&self, flag: u64) -> Result<bool, FlagError> {
        validate(flag)?;
        Ok(self.0 & flag != 0)
    }

    /// Sets every bit position present in `flag`.
    ///
    /// Idempotent: setting an already-set flag leaves the word unchanged.
    ///
    /// # Examples
    /// ```
    /// use flag_field::Bitfield;
    ///
    /// let mut field = Bitfield::new();
    /// field.set(8)?;
    /// assert!(field.get(8)?);
    /// # Ok::<(), flag_field::FlagError>(())
    /// ```
    #[inline]
    pub fn set(&mut self, flag: u64) -> Result<(), FlagError> {
        validate(flag)?;
        self.0 |= flag;
        Ok(())
    }

    /// Clears exactly the bit positions present in `flag`.
    ///
    /// Bits outside the mask are untouched regardless of where they sit
    /// relative to it, and deleting an already-clear flag is a no-op.
    ///
    /// # Examples
    /// ```
    /// use flag_field::Bitfield;
    ///
    /// let mut field = Bitfield::with_flag(2)?;
    /// field.delete(1)?;
    /// assert!(field.get(2)?);
    /// # Ok::<(), flag_field::FlagError>(())
    /// ```
    #[inline]
    pub fn delete(&mut self, flag: u64) -> Result<(), FlagError> {
        validate(flag)?;
        self.0 &= !flag;
        Ok(())
    }

    /// Returns the raw flag word.
    #[inline]
    pub const fn bits(&self) -> u64 {
        self.0
    }

    /// Returns `true` if no flag is set.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Returns the number of set bits in the field.
    ///
    /// # Examples
    /// ```
    /// use flag_field::Bitfield;
    ///
    /// let field = Bitfield::with_flag(0b110100)?;
    /// assert_eq!(field.popcount(), 3);
    /// # Ok::<(), flag_field::FlagError>(())
    /// ```
    #[inline]
    pub const fn popcount(&self) -> u32 {
        self.0.count_ones()
    }
}

impl Default for Bitfield {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the word in binary alongside its decimal value, e.g.
/// `110100 (decimal 52)`.
impl Display for Bitfield {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:b} (decimal {})", self.0, self.0)
    }
}
