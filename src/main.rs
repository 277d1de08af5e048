use clap::Parser;
use dirstash::backup::logger::Logger;
use dirstash::backup::runner::run_all;
use dirstash::backup::settings::Settings;
use std::path::PathBuf;
use std::process::exit;
use tracing::error;

/// Copies the top-level files of each configured directory into a
/// timestamped zip archive
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Location of the settings file
    #[arg(short, long, default_value = "settings.json")]
    config: PathBuf,
}

fn main() {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let res = Settings::load(&args.config).and_then(|settings| {
        let mut logger = Logger::create("logs")?;
        run_all(&settings, &mut logger);
        Ok(())
    });

    if let Err(e) = res {
        error!("{e}");
        exit(1);
    }

    println!("File copy completed.");
    // Interactive termination; EOF on a piped stdin falls through.
    let _ = std::io::stdin().read_line(&mut String::new());
}
