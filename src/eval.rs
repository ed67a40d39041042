//! Evaluating roll requests: rolling each spec, marking drops, and
//! aggregating everything into a [`RollResult`].

use alloc::vec::Vec;

use crate::{
	dice::{roller::Roller, Flags, Outcome},
	request::{ModifierList, Request, RollSpec},
};

/// Evaluation of a single spec: its annotated outcomes in ascending value
/// order, and the sum of the ones that were kept.
#[derive(Debug, Clone, PartialEq, Eq)]
#[expect(clippy::exhaustive_structs, reason = "Presentation reads every field")]
pub struct Rolled {
	/// The spec that was rolled
	pub spec: RollSpec,

	/// Every outcome the spec produced, ascending by value. Equal values
	/// have no guaranteed relative order.
	pub outcomes: Vec<Outcome>,

	/// Sum of the values of every outcome not flagged dropped
	pub kept_sum: i32,
}

/// A shift target and how far the final total landed from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[expect(clippy::exhaustive_structs, reason = "Presentation reads every field")]
pub struct Shift {
	/// The user-supplied comparison value
	pub target: i32,

	/// `total - target`
	pub delta: i32,
}

/// Complete, immutable result of evaluating one command. The only artifact
/// handed to presentation code.
#[derive(Debug, Clone, PartialEq, Eq)]
#[expect(clippy::exhaustive_structs, reason = "Presentation reads every field")]
pub struct RollResult {
	/// One entry per spec, in the specs' encounter order
	pub rolls: Vec<Rolled>,

	/// The request's flat modifiers, in insertion order
	pub modifiers: ModifierList,

	/// Sum of every flat modifier
	pub modifier_sum: i32,

	/// Every spec's kept sum plus the modifier sum
	pub total: i32,

	/// One entry per shift target, in encounter order
	pub shifts: Vec<Shift>,
}

/// Evaluates a request against the given roller.
///
/// Evaluation cannot fail: every invalid configuration was already clamped
/// or rejected while the request was built, and the clamps bound the total
/// work regardless of what the roller returns.
#[must_use]
pub fn evaluate(request: &Request, roller: &mut impl Roller) -> RollResult {
	let rolls: Vec<Rolled> = request.specs.iter().map(|spec| roll_spec(spec, roller)).collect();

	let modifier_sum = request.modifiers.sum();
	let total = rolls.iter().map(|rolled| rolled.kept_sum).sum::<i32>() + modifier_sum;
	let shifts = request
		.shifts
		.iter()
		.map(|&target| Shift {
			target,
			delta: total - target,
		})
		.collect();

	RollResult {
		rolls,
		modifiers: request.modifiers.clone(),
		modifier_sum,
		total,
		shifts,
	}
}

/// Rolls one spec: initial dice with their explosion chains, then the
/// ascending sort, then drop marking.
fn roll_spec(spec: &RollSpec, roller: &mut impl Roller) -> Rolled {
	let die = spec.group.die;
	let mut outcomes = Vec::with_capacity(spec.group.count as usize);

	for _ in 0..spec.group.count {
		let first = die.roll(roller);

		match spec.explosion_limit {
			Some(limit) if first.value >= spec.explode_at => {
				outcomes.push(first.with(Flags::TRIGGERED_EXPLOSION));

				// The chain ends at the limit or at the first value below
				// the threshold, whichever comes first
				for _ in 0..limit {
					let child = die.roll(roller).with(Flags::EXPLOSION_CHILD);
					let ends_chain = child.value < spec.explode_at;
					outcomes.push(child);
					if ends_chain {
						break;
					}
				}
			}
			_ => outcomes.push(first),
		}
	}

	// Pre-drop ordering is meaningless from here on
	outcomes.sort_unstable();

	mark_drops(&mut outcomes, spec.drop_low, spec.drop_high);

	let kept_sum = outcomes
		.iter()
		.filter(|outcome| outcome.is_kept())
		.map(|outcome| outcome.value)
		.sum();

	Rolled {
		spec: *spec,
		outcomes,
		kept_sum,
	}
}

/// Marks the lowest `low` and highest `high` sorted positions as dropped,
/// clamped to the list length. Requests beyond the available count are
/// satisfied up to it; they are never an error.
fn mark_drops(outcomes: &mut [Outcome], low: u32, high: u32) {
	let len = outcomes.len();
	let low = (low as usize).min(len);
	let high = (high as usize).min(len);

	for index in 0..low {
		drop_at(outcomes, index);
	}
	for index in len - high..len {
		drop_at(outcomes, index);
	}
}

/// Drops the outcome at `index` unless it already is. A dropped explosion
/// origin takes the nearest still-kept explosion child down with it,
/// scanning from the end of the list.
///
/// The origin/child pairing is positional, not recorded at roll time; with
/// several dice exploding in one spec it can attribute a child to the wrong
/// origin. That matches the behavior this notation has always had, so it
/// stays.
fn drop_at(outcomes: &mut [Outcome], index: usize) {
	let outcome = outcomes[index];
	if outcome.is_dropped() {
		return;
	}
	outcomes[index] = outcome.with(Flags::DROPPED);

	if !outcome.triggered_explosion() {
		return;
	}
	if let Some(child) = outcomes
		.iter()
		.rposition(|other| other.is_kept() && other.is_explosion_child())
	{
		outcomes[child] = outcomes[child].with(Flags::DROPPED);
	}
}
