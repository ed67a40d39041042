//! Interactive command-line front end for evaluating dice notation.

#[cfg(feature = "build-binary")]
fn main() {
	use std::env;
	use std::io::{self, Write};

	use ariadne::{Label, Report, ReportKind, Source};
	use lachesis::{dice::roller::FastRand, display, evaluate, notation, Request};

	let mut args = env::args().skip(1).peekable();
	let markdown = args.peek().is_some_and(|arg| arg == "--markdown");
	if markdown {
		args.next();
	}
	let args: Vec<String> = args.collect();

	let input = if args.is_empty() {
		let mut lines = io::stdin().lines();

		// If there isn't already input available in stdin, display a prompt for it
		if lines.size_hint().1.is_none() {
			print!("Enter dice notation: ");
			io::stdout().flush().unwrap();
		}

		// Grab the first line available from stdin
		lines.next().unwrap().unwrap()
	} else {
		// Combine all args passed to the executable, so that the notation can be
		// left unquoted even with spaces
		args.join(" ")
	};

	let cleaned = notation::sanitize(&input);
	match Request::build(notation::tokens(&cleaned)) {
		Ok(request) => {
			let result = evaluate(&request, &mut FastRand::default());
			println!(
				"{}",
				if markdown {
					display::markdown(&result)
				} else {
					display::plain(&result)
				}
			);
		}
		Err(err) => {
			Report::build(ReportKind::Error, ("roll", err.span()))
				.with_message(err.to_string())
				.with_label(Label::new(("roll", err.span())).with_message("this token"))
				.finish()
				.eprint(("roll", Source::from(cleaned)))
				.unwrap();
		}
	}
}

#[cfg(not(feature = "build-binary"))]
fn main() {
	println!("Nothing to do since the build-binary feature is disabled.")
}
