use clap::{app_from_crate, AppSettings};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::commands::{Tidy, TidyOptions};

mod commands;
mod error;
mod input;
mod output;
mod transform;
mod walk;

#[cfg(test)]
mod test;

fn main() {
    let args: Vec<_> = std::env::args().collect();

    if let Err(e) = execute(&args) {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn execute(input: &[String]) -> anyhow::Result<()> {
    let app = Tidy::register(app_from_crate!().global_setting(AppSettings::DeriveDisplayOrder));

    let matches = app.get_matches_from(input);

    setup_logging(matches.is_present("verbose"))?;

    // options are validated before the input is touched
    let options = TidyOptions::from_matches(&matches)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    Tidy::run(&options, &mut out)?;

    Ok(())
}

// stdout carries the document, so log lines go to stderr
fn setup_logging(verbose: bool) -> anyhow::Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}
