use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

/// The argument surface of the cli.
pub fn cli() -> Command {
    Command::new("entail")
        .about("Resolves queries over a set of propositional implication rules and known facts")
        .arg(
            Arg::new("path")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .help("The rule file to load: rules, a fact section (=…), and a query section (?…)."),
        )
        .arg(
            Arg::new("explain")
                .short('e')
                .long("explain")
                .action(ArgAction::SetTrue)
                .help("Print an explanation trace above each query result."),
        )
        .arg(
            Arg::new("graph")
                .short('g')
                .long("graph")
                .action(ArgAction::SetTrue)
                .help("Print a DOT rendering of the definition table after the queries."),
        )
}
