//! Text renderings of evaluated rolls.
//!
//! Each rendering style is an independent pure function over [`RollResult`];
//! evaluation never depends on any of them, and new styles can be added
//! without touching the rest of the crate.

use alloc::{
	format,
	string::{String, ToString},
	vec::Vec,
};

use crate::{dice::Outcome, eval::RollResult};

/// Renders a result as plain text: the total, one line per spec with its
/// kept sum and sorted outcomes, the modifier list when present, and one
/// line per shift target.
///
/// Explosion children are marked `(x)` and dropped outcomes `(d)`.
///
/// # Examples
/// ```
/// use lachesis::{dice::roller::Iter, display, roll};
///
/// let result = roll("2d6+3", &mut Iter::new([4, 6]))?;
/// assert_eq!(display::plain(&result), "13\n10 [4, 6]\n3 [+3]");
/// # Ok::<(), lachesis::Error>(())
/// ```
#[must_use]
pub fn plain(result: &RollResult) -> String {
	let mut lines = Vec::new();
	lines.push(result.total.to_string());

	for rolled in &result.rolls {
		lines.push(format!("{} [{}]", rolled.kept_sum, join(rolled.outcomes.iter().map(ToString::to_string))));
	}

	if !result.modifiers.is_empty() {
		lines.push(format!(
			"{} [{}]",
			result.modifier_sum,
			join(result.modifiers.iter().map(|&modifier| signed(modifier)))
		));
	}

	for shift in &result.shifts {
		lines.push(format!("Shift ({}): {}", shift.target, signed(shift.delta)));
	}

	lines.join("\n")
}

/// Renders a result as chat markdown with the same line layout as
/// [`plain()`]: sums are monospaced, at-bound values bold, dropped outcomes
/// struck through, and explosion children underlined.
///
/// # Examples
/// ```
/// use lachesis::{dice::roller::Iter, display, roll};
///
/// let result = roll("2d6+3", &mut Iter::new([4, 6]))?;
/// assert_eq!(display::markdown(&result), "` 13 `\n` 10 ` [4, **6**]\n` 3 ` [+3]");
/// # Ok::<(), lachesis::Error>(())
/// ```
#[must_use]
pub fn markdown(result: &RollResult) -> String {
	let mut lines = Vec::new();
	lines.push(format!("` {} `", result.total));

	for rolled in &result.rolls {
		lines.push(format!(
			"` {} ` [{}]",
			rolled.kept_sum,
			join(rolled.outcomes.iter().map(markdown_outcome))
		));
	}

	if !result.modifiers.is_empty() {
		lines.push(format!(
			"` {} ` [{}]",
			result.modifier_sum,
			join(result.modifiers.iter().map(|&modifier| signed(modifier)))
		));
	}

	for shift in &result.shifts {
		lines.push(format!("Shift ({}): {}", shift.target, signed(shift.delta)));
	}

	lines.join("\n")
}

/// Wraps one outcome's value in the markdown marks its flags call for, bold
/// innermost and underline outermost.
fn markdown_outcome(outcome: &Outcome) -> String {
	let mut text = outcome.value.to_string();
	if outcome.at_max() || outcome.at_min() {
		text = format!("**{text}**");
	}
	if outcome.is_dropped() {
		text = format!("~~{text}~~");
	}
	if outcome.is_explosion_child() {
		text = format!("__{text}__");
	}
	text
}

/// Formats an integer with an explicit `+` on positive values; zero stays
/// bare.
fn signed(value: i32) -> String {
	if value > 0 {
		format!("+{value}")
	} else {
		value.to_string()
	}
}

/// Joins already-rendered pieces with the list separator.
fn join(pieces: impl Iterator<Item = String>) -> String {
	pieces.collect::<Vec<_>>().join(", ")
}
