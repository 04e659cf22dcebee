use std::path::PathBuf;

use entail::{
    config::Config,
    context::Context,
    misc::log::targets::{self},
    reports::graph,
};

mod parse_args;
mod read;

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let matches = parse_args::cli().get_matches();

    let explain = matches.get_flag("explain");
    let show_graph = matches.get_flag("graph");

    let path = match matches.get_one::<PathBuf>("path") {
        Some(path) => path,
        None => {
            println!("Path to a rule file required");
            std::process::exit(1);
        }
    };

    let lines = match read::categorized_lines(path) {
        Ok(lines) => lines,
        Err(_) => {
            println!("Unable to read {path:?}");
            std::process::exit(1);
        }
    };

    let mut the_context = Context::from_config(Config::default());

    match the_context.load_lines(lines.iter().map(|(kind, content)| (*kind, content.as_str()))) {
        Ok(report) => {
            log::info!(
                target: targets::REGISTRY,
                "{} rule(s) as {} derivation(s), {} fact line(s), {} query line(s)",
                report.rules,
                report.derivations,
                report.facts,
                report.queries
            );
        }

        Err(e) => {
            println!("Load error: {e:?}");
            std::process::exit(1);
        }
    }

    for report in the_context.solve(explain) {
        for line in &report.trace {
            println!("  {line}");
        }
        println!("{report}");
    }

    if show_graph {
        println!("{}", graph::render_dot(&the_context));
    }

    log::info!(target: targets::SOLVE, "{:?}", the_context.counters);
}
