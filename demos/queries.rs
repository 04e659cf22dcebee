//! Load a small rule set and resolve its queries, with explanations.
//!
//! Run with `cargo run --example queries`.

use entail::builder::LineKind;
use entail::config::Config;
use entail::context::Context;

fn main() {
    let mut the_context = Context::from_config(Config::default());

    let lines = [
        (LineKind::Rule, "A | B => C"),
        (LineKind::Rule, "D | E => F"),
        (LineKind::Rule, "C | F => G"),
        (LineKind::Fact, "BE"),
        (LineKind::Query, "G"),
        (LineKind::Query, "A"),
    ];

    if let Err(e) = the_context.load_lines(lines) {
        println!("Load error: {e:?}");
        std::process::exit(1);
    }

    for report in the_context.solve(true) {
        for line in &report.trace {
            println!("  {line}");
        }
        println!("{report}");
    }
}
