use anyhow::Context;
use clap::Parser;
use oop_showcase::utils::{logger, validation::Validate};
use oop_showcase::{CliConfig, OutputFormat, Showcase};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting oop-showcase");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let roster = match config.load_roster() {
        Ok(roster) => roster,
        Err(e) => {
            tracing::error!("❌ Failed to load roster: {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let transcript = Showcase::from_roster(&roster)
        .run()
        .context("showcase run failed")?;

    match config.format {
        OutputFormat::Text => print!("{}", transcript.render_text()),
        OutputFormat::Json => println!(
            "{}",
            transcript
                .render_json()
                .context("failed to render transcript as JSON")?
        ),
    }

    Ok(())
}
