use anyhow::Result;
use tracing::info;

use damka_shell::Shell;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    info!("damka starting");
    Shell::new().run()?;
    Ok(())
}
