//! Building typed roll requests from notation tokens.

use alloc::{
	string::{String, ToString},
	vec::Vec,
};
use core::ops::{Deref, Range};

use crate::{
	dice::{DiceGroup, Die},
	notation::{self, Token, TokenKind},
};

/// Ceiling for dice amounts and sides; anything larger is clamped down.
pub const MAX_DICE: u32 = 100;

/// Ceiling for per-die explosion chains; `?` values are clamped to it.
pub const MAX_EXPLOSIONS: u32 = 99;

/// Ceiling for drop counts; `l` and `h` values are clamped to it.
pub const MAX_DROP: u32 = 99;

/// Explode threshold given to every new spec until a `!` token overrides it.
/// It is the d20 ceiling regardless of the group's own sides, so smaller
/// dice only explode once a `!` lowers the bar for them.
pub const DEFAULT_EXPLODE_AT: i32 = 20;

/// Number of explosion rolls allowed per die until a `?` token overrides it.
pub const DEFAULT_EXPLOSION_LIMIT: u32 = 1;

/// Full rolling configuration for one dice group: the dice themselves plus
/// the explode and drop settings that apply to them.
///
/// The request builder creates one spec per dice-group token, in encounter
/// order, and later `!`, `?`, `l` and `h` tokens reconfigure whichever spec
/// was introduced most recently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[expect(clippy::exhaustive_structs, reason = "The notation fixes the shape")]
pub struct RollSpec {
	/// The dice to roll
	pub group: DiceGroup,

	/// Rolled values at or above this threshold start an explosion chain
	pub explode_at: i32,

	/// Longest explosion chain a single die may produce; `None` disables
	/// explosion entirely
	pub explosion_limit: Option<u32>,

	/// How many of the lowest outcomes to drop from the kept sum
	pub drop_low: u32,

	/// How many of the highest outcomes to drop from the kept sum
	pub drop_high: u32,
}

impl RollSpec {
	/// Creates a spec for the given group with the default explode settings
	/// and no drops.
	#[must_use]
	pub const fn new(group: DiceGroup) -> Self {
		Self {
			group,
			explode_at: DEFAULT_EXPLODE_AT,
			explosion_limit: Some(DEFAULT_EXPLOSION_LIMIT),
			drop_low: 0,
			drop_high: 0,
		}
	}
}

/// Ordered list of flat modifiers, kept in insertion order for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModifierList(Vec<i32>);

impl ModifierList {
	/// Creates an empty modifier list.
	#[must_use]
	pub const fn new() -> Self {
		Self(Vec::new())
	}

	/// Appends a signed modifier.
	pub fn push(&mut self, value: i32) {
		self.0.push(value);
	}

	/// Sums every modifier in the list.
	#[must_use]
	pub fn sum(&self) -> i32 {
		self.0.iter().sum()
	}
}

impl Deref for ModifierList {
	type Target = [i32];

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

/// A fully built roll request: every dice-group spec in encounter order, the
/// flat modifiers, and the shift targets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[expect(clippy::exhaustive_structs, reason = "The notation fixes the shape")]
pub struct Request {
	/// One spec per dice-group token, in encounter order
	pub specs: Vec<RollSpec>,

	/// Flat modifiers applied to the final total
	pub modifiers: ModifierList,

	/// Comparison targets for the final total
	pub shifts: Vec<i32>,
}

impl Request {
	/// Sanitizes and tokenizes a raw command, then builds the request from
	/// its tokens.
	///
	/// # Errors
	/// See [`Request::build()`].
	pub fn from_notation(input: &str) -> Result<Self, Error> {
		let cleaned = notation::sanitize(input);
		Self::build(notation::tokens(&cleaned))
	}

	/// Folds a token stream into a request.
	///
	/// Per-spec modifier tokens (`!`, `?`, `l`, `h`) reconfigure the most
	/// recently introduced dice group, tracked by index rather than by a
	/// live reference.
	///
	/// # Errors
	/// Fails on the first token that cannot be applied: a dice-group token
	/// whose numeric parts do not parse, a per-spec modifier with no dice
	/// group before it, or (defensively) a token matching neither pattern.
	/// Nothing is partially evaluated; the command is simply rejected.
	pub fn build<'src>(tokens: impl Iterator<Item = Token<'src>>) -> Result<Self, Error> {
		let mut request = Self::default();
		let mut current: Option<usize> = None;

		for token in tokens {
			match token.kind {
				TokenKind::Dice => {
					request.specs.push(parse_group(&token)?);
					current = Some(request.specs.len().saturating_sub(1));
				}
				TokenKind::Tagged(tag) => request.apply_tagged(tag, &token, current)?,
			}
		}

		Ok(request)
	}

	/// Applies one tagged-modifier token to the request.
	fn apply_tagged(&mut self, tag: char, token: &Token<'_>, current: Option<usize>) -> Result<(), Error> {
		let value = saturating_parse(token.text.get(1..).unwrap_or(""));

		match tag {
			'+' => self.modifiers.push(value),
			'-' => self.modifiers.push(value.saturating_neg()),
			'&' => self.shifts.push(value),
			'!' => self.spec_mut(current, token)?.explode_at = value.saturating_abs().clamp(0, MAX_DICE as i32),
			'?' => self.spec_mut(current, token)?.explosion_limit = Some(value.unsigned_abs().min(MAX_EXPLOSIONS)),
			'l' => self.spec_mut(current, token)?.drop_low = value.unsigned_abs().min(MAX_DROP),
			'h' => self.spec_mut(current, token)?.drop_high = value.unsigned_abs().min(MAX_DROP),
			_ => return Err(Error::unrecognized(token)),
		}

		Ok(())
	}

	/// Looks up the spec a per-spec modifier should apply to.
	fn spec_mut(&mut self, current: Option<usize>, token: &Token<'_>) -> Result<&mut RollSpec, Error> {
		current
			.and_then(|index| self.specs.get_mut(index))
			.ok_or_else(|| Error::orphan(token))
	}
}

/// Parses a dice-group token into a spec with default explode/drop settings.
fn parse_group(token: &Token<'_>) -> Result<RollSpec, Error> {
	let (negative, body) = match token.text.strip_prefix('-') {
		Some(rest) => (true, rest),
		None => (false, token.text),
	};
	let (amount, sides) = body.split_once('d').ok_or_else(|| Error::malformed(token))?;

	let amount: u32 = if amount.is_empty() {
		1
	} else {
		amount.parse().ok().ok_or_else(|| Error::malformed(token))?
	};
	let sides: u32 = sides.parse().ok().ok_or_else(|| Error::malformed(token))?;

	let amount = amount.clamp(1, MAX_DICE);
	let sides = sides.clamp(1, MAX_DICE) as i32;

	let die = if negative { Die::inverted(sides) } else { Die::new(sides) };
	Ok(RollSpec::new(DiceGroup::new(die, amount)))
}

/// Parses a tagged token's digit run, saturating on overflow; the clamps
/// applied immediately downstream make the precise value irrelevant.
fn saturating_parse(digits: &str) -> i32 {
	digits.parse().unwrap_or(i32::MAX)
}

/// A failure scoped to a single notation command.
///
/// Every variant carries the offending token's text and its byte range in
/// the sanitized command, so callers can point at exactly what was rejected.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
	/// A token matched the dice-group pattern but its numeric parts do not
	/// parse as integers (absurdly long digit runs, mostly).
	#[error("malformed dice token: {text}")]
	MalformedDice {
		/// Offending token text
		text: String,
		/// Byte range of the token within the sanitized command
		span: Range<usize>,
	},

	/// An `!`, `?`, `l` or `h` token appeared before any dice group.
	#[error("modifier with no dice group to affect: {text}")]
	OrphanModifier {
		/// Offending token text
		text: String,
		/// Byte range of the token within the sanitized command
		span: Range<usize>,
	},

	/// A token matched neither lexical pattern. The scanner only produces
	/// tokens that match one of them, so this is a defensive check.
	#[error("unrecognized token: {text}")]
	UnrecognizedToken {
		/// Offending token text
		text: String,
		/// Byte range of the token within the sanitized command
		span: Range<usize>,
	},
}

impl Error {
	/// Creates a [`Error::MalformedDice`] from the offending token.
	fn malformed(token: &Token<'_>) -> Self {
		Self::MalformedDice {
			text: token.text.to_string(),
			span: token.span.clone(),
		}
	}

	/// Creates a [`Error::OrphanModifier`] from the offending token.
	fn orphan(token: &Token<'_>) -> Self {
		Self::OrphanModifier {
			text: token.text.to_string(),
			span: token.span.clone(),
		}
	}

	/// Creates a [`Error::UnrecognizedToken`] from the offending token.
	fn unrecognized(token: &Token<'_>) -> Self {
		Self::UnrecognizedToken {
			text: token.text.to_string(),
			span: token.span.clone(),
		}
	}

	/// The offending token's text.
	#[must_use]
	pub fn token_text(&self) -> &str {
		match self {
			Self::MalformedDice { text, .. } | Self::OrphanModifier { text, .. } | Self::UnrecognizedToken { text, .. } => {
				text
			}
		}
	}

	/// The offending token's byte range within the sanitized command.
	#[must_use]
	pub fn span(&self) -> Range<usize> {
		match self {
			Self::MalformedDice { span, .. } | Self::OrphanModifier { span, .. } | Self::UnrecognizedToken { span, .. } => {
				span.clone()
			}
		}
	}
}
