use clap::{Parser, Subcommand};

use crate::ui::View;

#[derive(Parser, Debug)]
#[command(name = "bn2hi")]
#[command(about = "Bengali to Hindi translation with dictionary, remote and transliteration tiers")]
#[command(version)]
pub struct Args {
    /// File to translate (reads from stdin if not provided)
    pub file: Option<String>,

    /// Show each line as a whole or token by token
    #[arg(long, value_enum, default_value_t = View::Line)]
    pub view: View,

    /// Provider name from the config file
    #[arg(short = 'p', long, global = true)]
    pub provider: Option<String>,

    /// Skip the remote tier (dictionary and transliteration only)
    #[arg(long, global = true)]
    pub offline: bool,

    /// Suppress status messages and progress
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log resolution details to stderr and show the tier of every translation
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Synthesize speech for a text and write it as MP3
    Speak {
        /// Text to speak
        text: String,

        /// Language code of the text (bn or hi)
        #[arg(short = 'l', long, default_value = "bn")]
        lang: String,

        /// Output file
        #[arg(short = 'o', long, default_value = "speech.mp3")]
        output: String,
    },
    /// Interactive translation session
    Chat {
        /// Initial view
        #[arg(long, value_enum, default_value_t = View::Line)]
        view: View,
    },
    /// List configured providers
    Providers {
        /// Show details for a specific provider
        provider: Option<String>,
    },
}
