use clap::Parser;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Fenley, Atiq, Carey, Nawel",
    version,
    about = "pdbtool - load the ATOM records of a PDB file and query them interactively.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    /// Path to the input structure file (must end in .pdb).
    #[arg(required = true, value_name = "PDB_FILE")]
    pub input: PathBuf,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_positional_file() {
        let cli = Cli::try_parse_from(["pdbtool", "1abc.pdb"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("1abc.pdb"));
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
        assert!(cli.config.is_none());
    }

    #[test]
    fn missing_or_extra_positionals_are_rejected() {
        assert!(Cli::try_parse_from(["pdbtool"]).is_err());
        assert!(Cli::try_parse_from(["pdbtool", "a.pdb", "b.pdb"]).is_err());
    }

    #[test]
    fn verbosity_flags_accumulate_and_conflict_with_quiet() {
        let cli = Cli::try_parse_from(["pdbtool", "-vv", "a.pdb"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(Cli::try_parse_from(["pdbtool", "-v", "-q", "a.pdb"]).is_err());
    }

    #[test]
    fn optional_paths_are_captured() {
        let cli = Cli::try_parse_from([
            "pdbtool",
            "--log-file",
            "run.log",
            "-c",
            "pdbtool.toml",
            "a.pdb",
        ])
        .unwrap();
        assert_eq!(cli.log_file, Some(PathBuf::from("run.log")));
        assert_eq!(cli.config, Some(PathBuf::from("pdbtool.toml")));
    }
}
