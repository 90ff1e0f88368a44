use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "patientbook", bin_name = "patientbook", version)]
#[command(
    about = "Keyboard-driven patient contact book",
    long_about = "Reads one command per line from stdin. Type `help` once running to list commands."
)]
pub struct Cli {
    /// Directory holding config.json (defaults to the per-user config dir)
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Log debug diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Start with an empty book instead of the sample patients
    #[arg(long)]
    pub empty: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::parse_from(["patientbook", "--config-dir", "/tmp/pb", "-v", "--empty"]);
        assert_eq!(cli.config_dir, Some(PathBuf::from("/tmp/pb")));
        assert!(cli.verbose);
        assert!(cli.empty);
    }

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["patientbook"]);
        assert!(cli.config_dir.is_none());
        assert!(!cli.verbose);
        assert!(!cli.empty);
    }
}
