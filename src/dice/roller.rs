//! Sources of randomness for rolling dice.
//!
//! Evaluation never touches process-global random state; everything that
//! rolls takes a [`Roller`], so a test (or a replay) can substitute a
//! deterministic source like [`Iter`].

use core::iter::Peekable;

#[cfg(feature = "fastrand")]
use fastrand::Rng;

/// Produces uniformly distributed integers for die rolls.
pub trait Roller {
	/// Picks a uniformly distributed integer from the inclusive range
	/// `low..=high`.
	#[must_use]
	fn pick(&mut self, low: i32, high: i32) -> i32;
}

/// Generates rolls with random values using [fastrand]. Requires the
/// `fastrand` feature (enabled by default).
///
/// # Examples
///
/// ## Default fastrand roller
/// ```
/// use lachesis::dice::{roller::FastRand, Die};
///
/// let mut roller = FastRand::default();
/// let outcome = Die::new(6).roll(&mut roller);
/// assert!((1..=6).contains(&outcome.value));
/// ```
///
/// ## Manually seeded fastrand roller
/// ```
/// use lachesis::dice::{roller::FastRand, Die};
///
/// let mut roller = FastRand::with_seed(0x750c38d574400);
/// let _ = Die::new(6).roll(&mut roller);
/// ```
#[cfg(feature = "fastrand")]
#[derive(Debug, Clone)]
#[cfg_attr(feature = "std", derive(Default))]
pub struct FastRand(Rng);

#[cfg(feature = "fastrand")]
impl FastRand {
	/// Creates a new fastrand roller that uses the given RNG instance.
	#[must_use]
	#[inline]
	pub const fn new(rng: Rng) -> Self {
		Self(rng)
	}

	/// Creates a new fastrand roller with a pre-seeded RNG instance.
	#[must_use]
	#[inline]
	pub fn with_seed(seed: u64) -> Self {
		Self(Rng::with_seed(seed))
	}
}

#[cfg(feature = "fastrand")]
impl Roller for FastRand {
	#[inline]
	fn pick(&mut self, low: i32, high: i32) -> i32 {
		self.0.i32(low..=high)
	}
}

/// Generates rolls that always land on the top face.
///
/// # Examples
/// ```
/// use lachesis::dice::{roller::Max, Die};
///
/// let outcome = Die::new(20).roll(&mut Max);
/// assert_eq!(outcome.value, 20);
/// assert!(outcome.at_max());
/// ```
#[derive(Debug, Default, Clone)]
#[expect(clippy::exhaustive_structs, reason = "Highly unlikely to change")]
pub struct Max;

impl Roller for Max {
	#[inline]
	fn pick(&mut self, _low: i32, high: i32) -> i32 {
		high
	}
}

/// Generates rolls that always land on the bottom face.
///
/// # Examples
/// ```
/// use lachesis::dice::{roller::Min, Die};
///
/// let outcome = Die::inverted(6).roll(&mut Min);
/// assert_eq!(outcome.value, -6);
/// assert!(outcome.at_min());
/// ```
#[derive(Debug, Default, Clone)]
#[expect(clippy::exhaustive_structs, reason = "Highly unlikely to change")]
pub struct Min;

impl Roller for Min {
	#[inline]
	fn pick(&mut self, low: i32, _high: i32) -> i32 {
		low
	}
}

/// Generates rolls from an iterator of values, ignoring the requested range.
/// Mainly useful for testing purposes.
///
/// # Examples
/// ```
/// use lachesis::dice::{roller::Iter, Die};
///
/// let mut roller = Iter::new([3, 1, 4]);
/// let die = Die::new(6);
/// assert_eq!(die.roll(&mut roller).value, 3);
/// assert_eq!(die.roll(&mut roller).value, 1);
/// assert_eq!(die.roll(&mut roller).value, 4);
/// ```
#[derive(Debug, Clone)]
pub struct Iter<I: Iterator<Item = i32>>(Peekable<I>);

impl<I: Iterator<Item = i32>> Iter<I> {
	/// Checks whether the iterator still has values available.
	#[inline]
	pub fn can_roll(&mut self) -> bool {
		self.0.peek().is_some()
	}

	/// Creates a new roller that uses the given iterator to provide roll
	/// values.
	#[must_use]
	#[inline]
	pub fn new(iter: impl IntoIterator<IntoIter = I>) -> Self {
		Self(iter.into_iter().peekable())
	}
}

impl<I: Iterator<Item = i32>> Roller for Iter<I> {
	/// Picks the value from the next iteration.
	///
	/// # Panics
	/// If the iterator has finished, this will panic.
	#[inline]
	#[expect(
		clippy::expect_used,
		reason = "Mostly for testing, otherwise manual checking of can_roll() is expected"
	)]
	fn pick(&mut self, _low: i32, _high: i32) -> i32 {
		self.0.next().expect("iterator is finished")
	}
}
