use crate::{
	notation::{tokens, Token, TokenKind},
	request::{Error, Request, DEFAULT_EXPLODE_AT, DEFAULT_EXPLOSION_LIMIT},
};

fn build(input: &str) -> Result<Request, Error> {
	Request::build(tokens(input))
}

#[test]
fn single_group_gets_the_defaults() {
	let request = build("2d6").unwrap();
	assert_eq!(request.specs.len(), 1);

	let spec = request.specs[0];
	assert_eq!(spec.group.count, 2);
	assert_eq!(spec.group.die.min, 1);
	assert_eq!(spec.group.die.max, 6);
	assert_eq!(spec.explode_at, DEFAULT_EXPLODE_AT);
	assert_eq!(spec.explosion_limit, Some(DEFAULT_EXPLOSION_LIMIT));
	assert_eq!(spec.drop_low, 0);
	assert_eq!(spec.drop_high, 0);

	assert!(request.modifiers.is_empty());
	assert!(request.shifts.is_empty());
}

#[test]
fn amount_defaults_to_one() {
	let request = build("d20").unwrap();
	assert_eq!(request.specs[0].group.count, 1);
	assert_eq!(request.specs[0].group.die.max, 20);
}

#[test]
fn negative_group_inverts_the_die() {
	let spec = build("-2d6").unwrap().specs[0];
	assert_eq!(spec.group.count, 2);
	assert_eq!(spec.group.die.min, -6);
	assert_eq!(spec.group.die.max, -1);
}

#[test]
fn amounts_and_sides_clamp_to_a_hundred() {
	let spec = build("500d500").unwrap().specs[0];
	assert_eq!(spec.group.count, 100);
	assert_eq!(spec.group.die.max, 100);

	let spec = build("0d6").unwrap().specs[0];
	assert_eq!(spec.group.count, 1);
}

#[test]
fn per_spec_modifiers_configure_the_current_group() {
	let spec = build("2d6!5?2l1h2").unwrap().specs[0];
	assert_eq!(spec.explode_at, 5);
	assert_eq!(spec.explosion_limit, Some(2));
	assert_eq!(spec.drop_low, 1);
	assert_eq!(spec.drop_high, 2);
}

#[test]
fn per_spec_modifiers_clamp() {
	let spec = build("2d6!999?999l999h999").unwrap().specs[0];
	assert_eq!(spec.explode_at, 100);
	assert_eq!(spec.explosion_limit, Some(99));
	assert_eq!(spec.drop_low, 99);
	assert_eq!(spec.drop_high, 99);
}

#[test]
fn modifiers_and_shifts_collect_in_order() {
	let request = build("2d6+3-2&10&4").unwrap();
	assert_eq!(&*request.modifiers, &[3, -2]);
	assert_eq!(request.modifiers.sum(), 1);
	assert_eq!(request.shifts, vec![10, 4]);
}

#[test]
fn modifiers_do_not_need_a_group() {
	let request = build("+5&3").unwrap();
	assert!(request.specs.is_empty());
	assert_eq!(&*request.modifiers, &[5]);
	assert_eq!(request.shifts, vec![3]);
}

#[test]
fn later_specs_take_over_as_current() {
	// `h1` binds to the first group, `l1` to the second
	let request = build("2d6h1-d20l1").unwrap();
	assert_eq!(request.specs.len(), 2);
	assert_eq!(request.specs[0].drop_high, 1);
	assert_eq!(request.specs[0].drop_low, 0);
	assert_eq!(request.specs[1].drop_low, 1);
	assert_eq!(request.specs[1].drop_high, 0);
	assert_eq!(request.specs[1].group.die.min, -20);
}

#[test]
fn token_streams_can_configure_several_groups() {
	// Hand-built tokens, as a message handler with its own splitting might
	// produce them
	let stream = [
		Token {
			kind: TokenKind::Dice,
			text: "2d6",
			span: 0..3,
		},
		Token {
			kind: TokenKind::Tagged('!'),
			text: "!5",
			span: 3..5,
		},
		Token {
			kind: TokenKind::Dice,
			text: "1d20",
			span: 5..9,
		},
		Token {
			kind: TokenKind::Tagged('l'),
			text: "l1",
			span: 9..11,
		},
	];

	let request = Request::build(stream.into_iter()).unwrap();
	assert_eq!(request.specs.len(), 2);
	assert_eq!(request.specs[0].explode_at, 5);
	assert_eq!(request.specs[0].drop_low, 0);
	assert_eq!(request.specs[1].explode_at, DEFAULT_EXPLODE_AT);
	assert_eq!(request.specs[1].drop_low, 1);
}

#[test]
fn orphan_modifiers_fail() {
	for input in ["!5", "?2", "l1", "h1", "+3!5"] {
		let err = build(input).unwrap_err();
		assert!(
			matches!(err, Error::OrphanModifier { .. }),
			"{input} should be an orphan failure, got {err:?}"
		);
	}

	let err = build("!5").unwrap_err();
	assert_eq!(err.token_text(), "!5");
	assert_eq!(err.span(), 0..2);
}

#[test]
fn absurd_dice_numbers_are_malformed() {
	let err = build("2d99999999999999999999").unwrap_err();
	assert!(matches!(err, Error::MalformedDice { .. }));
	assert_eq!(err.token_text(), "2d99999999999999999999");

	let err = build("99999999999999999999d6").unwrap_err();
	assert!(matches!(err, Error::MalformedDice { .. }));
}

#[test]
fn tagged_values_saturate_instead_of_failing() {
	let request = build("2d6+99999999999999999999").unwrap();
	assert_eq!(&*request.modifiers, &[i32::MAX]);

	let spec = build("2d6?99999999999999999999").unwrap().specs[0];
	assert_eq!(spec.explosion_limit, Some(99));
}

#[test]
fn failures_stop_the_whole_command() {
	// The orphan `!5` rejects the command even though a group follows later
	let err = Request::build(
		[
			Token {
				kind: TokenKind::Tagged('!'),
				text: "!5",
				span: 0..2,
			},
			Token {
				kind: TokenKind::Dice,
				text: "d6",
				span: 2..4,
			},
		]
		.into_iter(),
	)
	.unwrap_err();
	assert!(matches!(err, Error::OrphanModifier { .. }));
}

#[test]
fn unrecognized_tags_are_rejected_defensively() {
	let err = Request::build(
		[Token {
			kind: TokenKind::Tagged('z'),
			text: "z4",
			span: 0..2,
		}]
		.into_iter(),
	)
	.unwrap_err();
	assert!(matches!(err, Error::UnrecognizedToken { .. }));
}
