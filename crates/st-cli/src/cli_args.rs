use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "storythread")]
#[command(about = "Branching narrative player and content validator")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Play a story document interactively.
    Play(PlayArgs),
    /// Load and validate a story document without playing it.
    Validate(ValidateArgs),
}

#[derive(Debug, Args)]
pub(crate) struct PlayArgs {
    #[arg(long = "story")]
    pub(crate) story: String,
    #[arg(long = "start")]
    pub(crate) start: Option<String>,
}

#[derive(Debug, Args)]
pub(crate) struct ValidateArgs {
    #[arg(long = "story")]
    pub(crate) story: String,
}
