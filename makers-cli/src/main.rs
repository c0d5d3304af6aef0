//! Command-line interface for makers-markdown
//!
//! Reads a Makefile, collects the `#` comment blocks written under its targets
//! and writes them out as markdown.
//!
//! Usage:
//!   makers-markdown [--makefile `<path>`] [--outdir `<dir>`] [--merge [`<bool>`]] [--split [`<bool>`]]
//!
//! Settings not given on the command line come from `--config <file>`, then
//! `.makers-markdown.toml` in the working directory, then the built-in defaults.
mod error;
mod logging;
mod run;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use run::Invocation;
use std::path::PathBuf;

fn cli() -> Command {
    Command::new("makers-markdown")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate markdown documentation from comments in a Makefile")
        .arg(
            Arg::new("makefile")
                .long("makefile")
                .value_name("PATH")
                .help("The target makefile to process [default: Makefile]")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("outdir")
                .long("outdir")
                .value_name("DIR")
                .help("The directory in which to write output [default: ./makedocs]")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("split")
                .long("split")
                .value_name("BOOL")
                .help("Split each target into a separate file [default: false]")
                .num_args(0..=1)
                .default_missing_value("true")
                .value_parser(value_parser!(bool)),
        )
        .arg(
            Arg::new("merge")
                .long("merge")
                .value_name("BOOL")
                .help("Merge all targets into one resultant output file [default: true]")
                .num_args(0..=1)
                .default_missing_value("true")
                .value_parser(value_parser!(bool)),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("FILE")
                .help("Configuration file layered over the defaults")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log progress to stderr (repeat for more detail)")
                .action(ArgAction::Count),
        )
}

fn invocation(matches: &ArgMatches) -> Invocation {
    Invocation {
        makefile: matches.get_one::<PathBuf>("makefile").cloned(),
        outdir: matches.get_one::<PathBuf>("outdir").cloned(),
        split: matches.get_one::<bool>("split").copied(),
        merge: matches.get_one::<bool>("merge").copied(),
        config: matches.get_one::<PathBuf>("config").cloned(),
    }
}

fn main() {
    let matches = cli().get_matches();
    logging::init(matches.get_count("verbose"));

    if let Err(e) = run::run(&invocation(&matches)) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Invocation {
        let matches = cli()
            .try_get_matches_from(std::iter::once("makers-markdown").chain(args.iter().copied()))
            .expect("arguments to parse");
        invocation(&matches)
    }

    #[test]
    fn test_cli_definition_is_valid() {
        cli().debug_assert();
    }

    #[test]
    fn test_no_arguments_leaves_everything_to_config() {
        assert_eq!(parse(&[]), Invocation::default());
    }

    #[test]
    fn test_bare_flags_mean_true() {
        let inv = parse(&["--split", "--merge"]);
        assert_eq!(inv.split, Some(true));
        assert_eq!(inv.merge, Some(true));
    }

    #[test]
    fn test_flags_accept_explicit_values() {
        let inv = parse(&["--split", "true", "--merge=false"]);
        assert_eq!(inv.split, Some(true));
        assert_eq!(inv.merge, Some(false));
    }

    #[test]
    fn test_paths() {
        let inv = parse(&["--makefile", "build/Makefile", "--outdir", "docs"]);
        assert_eq!(inv.makefile, Some(PathBuf::from("build/Makefile")));
        assert_eq!(inv.outdir, Some(PathBuf::from("docs")));
    }

    #[test]
    fn test_rejects_non_boolean() {
        let result = cli().try_get_matches_from(["makers-markdown", "--split", "maybe"]);
        assert!(result.is_err());
    }
}
