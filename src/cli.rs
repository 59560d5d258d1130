use clap::Parser;

#[derive(Parser)]
#[command(
    name = "dummy-fitness",
    version,
    about = "Fitness evaluator for the dummy optimization sample",
    long_about = "Reads ./dummy1 and ./dummy2 from the current directory, scores them and \
                  prints a [PYGGI_RESULT] line (on roughly 95% of runs)."
)]
pub struct Cli {
    /// Increase log verbosity on stderr (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all logging except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
