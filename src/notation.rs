//! Sanitizing raw command text and scanning it into notation tokens.
//!
//! Input handling is deliberately permissive: anything outside the notation
//! alphabet is discarded by [`sanitize()`], and any stretch of sanitized text
//! that matches neither token pattern is skipped by the scanner. A command
//! only ever fails later, in [`Request::build()`], when a token itself is
//! semantically invalid.
//!
//! [`Request::build()`]: crate::request::Request::build

use alloc::string::String;
use core::{iter::FusedIterator, ops::Range};

/// Every character that carries meaning in dice notation. [`sanitize()`]
/// drops the rest.
const ALPHABET: &[u8] = b"d0123456789+-!?&lh";

/// Characters that may introduce a tagged-modifier token.
const TAGS: &[u8] = b"+-!?&lh";

/// Strips a raw command down to the notation alphabet, folding uppercase
/// letters to lowercase along the way. Idempotent; never fails.
///
/// # Examples
/// ```
/// use lachesis::notation::sanitize;
///
/// assert_eq!(sanitize("2D6 + 3, please"), "2d6+3l");
/// assert_eq!(sanitize("2d6+3l"), "2d6+3l");
/// ```
#[must_use]
pub fn sanitize(input: &str) -> String {
	input
		.chars()
		.map(|c| c.to_ascii_lowercase())
		.filter(|c| c.is_ascii() && ALPHABET.contains(&(*c as u8)))
		.collect()
}

/// Lexical shape of a [`Token`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[expect(clippy::exhaustive_enums, reason = "The lexical grammar is fixed")]
pub enum TokenKind {
	/// A dice group: optional `-`, optional amount, `d`, sides
	Dice,

	/// A tag character followed by a digit run, e.g. `+3` or `l1`
	Tagged(char),
}

/// One lexical token scanned from sanitized notation text.
///
/// Numeric parts are kept as text; parsing them (and deciding what they mean)
/// is the request builder's job.
#[derive(Debug, Clone, PartialEq, Eq)]
#[expect(clippy::exhaustive_structs, reason = "A token is its three parts")]
pub struct Token<'src> {
	/// Which pattern the token matched
	pub kind: TokenKind,

	/// The matched text
	pub text: &'src str,

	/// Byte range of the match within the scanned string
	pub span: Range<usize>,
}

/// Creates a lazy token scanner over sanitized notation text.
///
/// The scanner is finite and restartable: it implements [`Clone`], and a
/// clone restarts from the position it was cloned at.
///
/// The input is expected to have passed through [`sanitize()`] already;
/// characters outside the alphabet are treated as (skipped) noise either way.
///
/// # Examples
/// ```
/// use lachesis::notation::{tokens, TokenKind};
///
/// let mut scanner = tokens("2d6+3");
/// assert_eq!(scanner.next().map(|t| t.text), Some("2d6"));
/// assert_eq!(scanner.next().map(|t| t.text), Some("+3"));
/// assert_eq!(scanner.next(), None);
/// ```
#[must_use]
pub fn tokens(input: &str) -> Tokens<'_> {
	Tokens { src: input, pos: 0 }
}

/// Lazy scanner produced by [`tokens()`]
#[derive(Debug, Clone)]
pub struct Tokens<'src> {
	/// Text being scanned
	src: &'src str,

	/// Byte offset the next scan starts from
	pos: usize,
}

impl<'src> Iterator for Tokens<'src> {
	type Item = Token<'src>;

	fn next(&mut self) -> Option<Self::Item> {
		let bytes = self.src.as_bytes();

		while self.pos < bytes.len() {
			let start = self.pos;

			if let Some(end) = match_dice(bytes, start) {
				self.pos = end;
				return Some(Token {
					kind: TokenKind::Dice,
					text: &self.src[start..end],
					span: start..end,
				});
			}

			if let Some((tag, end)) = match_tagged(bytes, start) {
				self.pos = end;
				return Some(Token {
					kind: TokenKind::Tagged(tag),
					text: &self.src[start..end],
					span: start..end,
				});
			}

			// Neither pattern starts here; skip one character and rescan
			self.pos = self.pos.saturating_add(1);
		}

		None
	}
}

impl FusedIterator for Tokens<'_> {}

/// Advances past a run of ASCII digits, returning the offset just after it.
const fn digit_run(bytes: &[u8], mut at: usize) -> usize {
	while at < bytes.len() && bytes[at].is_ascii_digit() {
		at += 1;
	}
	at
}

/// Matches a dice-group token (`-?\d*d\d+`) anchored at `at`, returning the
/// offset just past it. The amount digits are optional; the sides digits are
/// not.
fn match_dice(bytes: &[u8], at: usize) -> Option<usize> {
	let mut i = at;
	if bytes.get(i) == Some(&b'-') {
		i = i.saturating_add(1);
	}
	i = digit_run(bytes, i);
	if bytes.get(i) != Some(&b'd') {
		return None;
	}
	let after_d = i.saturating_add(1);
	let end = digit_run(bytes, after_d);
	(end > after_d).then_some(end)
}

/// Matches a tagged-modifier token (a tag character and a digit run) anchored
/// at `at`, returning the tag and the offset just past the match.
///
/// A digit run that is immediately followed by `d` and another digit belongs
/// to the next dice group as its amount, so the match is rejected and the
/// scanner falls through to rescanning from the digits: `+2d6` is noise
/// followed by the group `2d6`, not the modifier `+2`.
fn match_tagged(bytes: &[u8], at: usize) -> Option<(char, usize)> {
	let tag = *bytes.get(at)?;
	if !TAGS.contains(&tag) {
		return None;
	}
	let digits_at = at.saturating_add(1);
	let end = digit_run(bytes, digits_at);
	if end == digits_at {
		return None;
	}
	if bytes.get(end) == Some(&b'd') && bytes.get(end.saturating_add(1)).is_some_and(u8::is_ascii_digit) {
		return None;
	}
	Some((tag as char, end))
}
