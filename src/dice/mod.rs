//! Dice primitives: single dice, dice groups, and the annotated outcomes
//! produced by rolling them.

pub mod roller;

use core::{cmp, fmt, ops};

pub use self::roller::Roller;

/// A single rollable die covering an inclusive range of faces.
///
/// An ordinary die runs `1..=sides`. A sign-inverted die (from a dice group
/// written with a leading `-`) has both bounds negated and swapped, so its
/// faces count against the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[expect(clippy::exhaustive_structs, reason = "A die is exactly its bounds")]
pub struct Die {
	/// Smallest face, inclusive
	pub min: i32,

	/// Largest face, inclusive
	pub max: i32,
}

impl Die {
	/// Creates an ordinary die with faces `1..=sides`. Callers are expected
	/// to hand in a positive side count; the request builder clamps before
	/// constructing.
	#[must_use]
	pub const fn new(sides: i32) -> Self {
		Self { min: 1, max: sides }
	}

	/// Creates a sign-inverted die with faces `-sides..=-1`.
	#[must_use]
	pub const fn inverted(sides: i32) -> Self {
		Self { min: -sides, max: -1 }
	}

	/// Magnitude of the largest face, regardless of inversion.
	#[must_use]
	pub const fn sides(self) -> i32 {
		if self.max > -self.min {
			self.max
		} else {
			-self.min
		}
	}

	/// Rolls the die once via the given roller, flagging the outcome when it
	/// lands on either bound.
	pub fn roll(self, roller: &mut impl Roller) -> Outcome {
		let value = roller.pick(self.min, self.max);
		let mut flags = Flags::empty();
		if value == self.max {
			flags |= Flags::AT_MAX;
		}
		if value == self.min {
			flags |= Flags::AT_MIN;
		}
		Outcome { value, flags }
	}
}

impl Default for Die {
	/// Creates the default die (a d20).
	#[inline]
	fn default() -> Self {
		Self::new(20)
	}
}

impl fmt::Display for Die {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.min == 1 {
			write!(f, "d{}", self.max)
		} else {
			write!(f, "d{{{}..{}}}", self.min, self.max)
		}
	}
}

/// A number of identical dice rolled together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[expect(clippy::exhaustive_structs, reason = "A group is its die and count")]
pub struct DiceGroup {
	/// The die every roll in the group uses
	pub die: Die,

	/// How many dice to roll before any explosions
	pub count: u32,
}

impl DiceGroup {
	/// Creates a new group of `count` dice.
	#[must_use]
	pub const fn new(die: Die, count: u32) -> Self {
		Self { die, count }
	}

	/// Smallest total the initial rolls can produce.
	#[must_use]
	pub const fn min_total(self) -> i64 {
		self.count as i64 * self.die.min as i64
	}

	/// Largest total the initial rolls can produce.
	#[must_use]
	pub const fn max_total(self) -> i64 {
		self.count as i64 * self.die.max as i64
	}
}

impl fmt::Display for DiceGroup {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.count != 1 {
			write!(f, "{}", self.count)?;
		}
		write!(f, "{}", self.die)
	}
}

/// Bit-set annotations attached to a single [`Outcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Flags(u8);

impl Flags {
	/// The value landed on its die's upper bound.
	pub const AT_MAX: Self = Self(1);

	/// The value landed on its die's lower bound.
	pub const AT_MIN: Self = Self(1 << 1);

	/// The outcome was added to the pool by another outcome's explosion
	/// chain rather than rolled as one of the group's initial dice.
	pub const EXPLOSION_CHILD: Self = Self(1 << 2);

	/// The outcome met its spec's explode threshold and started a chain.
	pub const TRIGGERED_EXPLOSION: Self = Self(1 << 3);

	/// The outcome is excluded from the kept sum.
	pub const DROPPED: Self = Self(1 << 4);

	/// The empty flag set.
	#[must_use]
	pub const fn empty() -> Self {
		Self(0)
	}

	/// Checks whether every flag in `other` is set in `self`.
	#[must_use]
	pub const fn contains(self, other: Self) -> bool {
		self.0 & other.0 == other.0
	}

	/// Combines two flag sets.
	#[must_use]
	pub const fn union(self, other: Self) -> Self {
		Self(self.0 | other.0)
	}

	/// Checks whether no flags are set.
	#[must_use]
	pub const fn is_empty(self) -> bool {
		self.0 == 0
	}
}

impl ops::BitOr for Flags {
	type Output = Self;

	fn bitor(self, rhs: Self) -> Self {
		self.union(rhs)
	}
}

impl ops::BitOrAssign for Flags {
	fn bitor_assign(&mut self, rhs: Self) {
		*self = self.union(rhs);
	}
}

/// A single die result produced during evaluation.
///
/// Outcomes are plain copyable values; the evaluator "mutates" one by
/// replacing the list entry with an updated copy (see [`Outcome::with()`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[expect(clippy::exhaustive_structs, reason = "An outcome is its value and flags")]
pub struct Outcome {
	/// The rolled value
	pub value: i32,

	/// Annotations accumulated during evaluation
	pub flags: Flags,
}

impl Outcome {
	/// Creates an unflagged outcome with the given value.
	#[must_use]
	pub const fn new(value: i32) -> Self {
		Self {
			value,
			flags: Flags::empty(),
		}
	}

	/// Returns a copy of the outcome with the given flags added.
	#[must_use]
	pub const fn with(self, flags: Flags) -> Self {
		Self {
			value: self.value,
			flags: self.flags.union(flags),
		}
	}

	/// Indicates whether the outcome is excluded from the kept sum.
	#[must_use]
	pub const fn is_dropped(self) -> bool {
		self.flags.contains(Flags::DROPPED)
	}

	/// Indicates whether the outcome still counts toward the kept sum.
	/// This is the direct inverse of [`Outcome::is_dropped()`].
	#[must_use]
	pub const fn is_kept(self) -> bool {
		!self.is_dropped()
	}

	/// Indicates whether the outcome was added by an explosion chain.
	#[must_use]
	pub const fn is_explosion_child(self) -> bool {
		self.flags.contains(Flags::EXPLOSION_CHILD)
	}

	/// Indicates whether the outcome started an explosion chain.
	#[must_use]
	pub const fn triggered_explosion(self) -> bool {
		self.flags.contains(Flags::TRIGGERED_EXPLOSION)
	}

	/// Indicates whether the value landed on its die's upper bound.
	#[must_use]
	pub const fn at_max(self) -> bool {
		self.flags.contains(Flags::AT_MAX)
	}

	/// Indicates whether the value landed on its die's lower bound.
	#[must_use]
	pub const fn at_min(self) -> bool {
		self.flags.contains(Flags::AT_MIN)
	}
}

impl PartialOrd for Outcome {
	fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for Outcome {
	fn cmp(&self, other: &Self) -> cmp::Ordering {
		self.value.cmp(&other.value)
	}
}

impl fmt::Display for Outcome {
	/// Formats the plain numeric value, appending ` (x)` for explosion
	/// children and ` (d)` for dropped outcomes.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{}{}{}",
			self.value,
			if self.is_explosion_child() { " (x)" } else { "" },
			if self.is_dropped() { " (d)" } else { "" }
		)
	}
}
