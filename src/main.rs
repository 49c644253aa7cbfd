use anyhow::Result;
use clap::Parser;

use bn2hi::cli::commands::{chat, providers, speak, translate};
use bn2hi::cli::{Args, Command};
use bn2hi::output::{self, OutputConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    output::init(OutputConfig::from_flags(args.quiet, args.no_color));
    bn2hi::logging::init(args.verbose)?;

    match args.command {
        Some(Command::Providers { provider }) => {
            providers::print_providers(provider.as_deref())?;
        }
        Some(Command::Speak { text, lang, output }) => {
            let options = speak::SpeakOptions {
                text,
                language: lang,
                output,
                provider: args.provider,
                offline: args.offline,
            };
            speak::run_speak(options).await?;
        }
        Some(Command::Chat { view }) => {
            let options = chat::ChatOptions {
                view,
                provider: args.provider,
                offline: args.offline,
                show_tiers: args.verbose,
            };
            chat::run_chat(options).await?;
        }
        None => {
            let options = translate::TranslateOptions {
                file: args.file,
                view: args.view,
                provider: args.provider,
                offline: args.offline,
                show_tiers: args.verbose,
            };
            translate::run_translate(options).await?;
        }
    }

    Ok(())
}
