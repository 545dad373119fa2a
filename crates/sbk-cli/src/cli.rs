use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "sbk",
    about = "Scorebook Ledger — ball-by-ball scoring with multi-scorer reconciliation",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run a scripted demonstration match with three scorers
    Demo(DemoArgs),
    /// List supported match formats
    Formats(FormatsArgs),
}

#[derive(Args)]
pub struct DemoArgs {
    /// Match format for the demonstration
    #[arg(long, default_value = "odi")]
    pub match_format: DemoFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum DemoFormat {
    Odi,
    T20,
    Test,
}

#[derive(Args)]
pub struct FormatsArgs {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_demo() {
        let cli = Cli::try_parse_from(["sbk", "demo"]).unwrap();
        assert!(matches!(cli.command, Command::Demo(_)));
    }

    #[test]
    fn parse_demo_with_format() {
        let cli = Cli::try_parse_from(["sbk", "demo", "--match-format", "t20"]).unwrap();
        if let Command::Demo(args) = cli.command {
            assert!(matches!(args.match_format, DemoFormat::T20));
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_formats() {
        let cli = Cli::try_parse_from(["sbk", "formats"]).unwrap();
        assert!(matches!(cli.command, Command::Formats(_)));
    }

    #[test]
    fn parse_verbose() {
        let cli = Cli::try_parse_from(["sbk", "--verbose", "demo"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn parse_json_output() {
        let cli = Cli::try_parse_from(["sbk", "--format", "json", "demo"]).unwrap();
        assert!(matches!(cli.format, OutputFormat::Json));
    }
}
