//! Arena game client binary.
//!
//! Thin interactive console shell over `arena-core`: reads the player's
//! name, runs encounters round by round, and prints stats and inventory.
//! All game rules live in the core; this binary only prompts, parses, and
//! displays.

use anyhow::Result;

mod config;
mod shell;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = config::ShellConfig::from_env();
    tracing::debug!(seed = config.seed, "starting arena session");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    shell::Shell::new(config).run(&mut stdin.lock(), &mut stdout.lock())
}
