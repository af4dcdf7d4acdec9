//! RPG demo binary.
//!
//! Creates one character per roster entry through its factory, shows its
//! stats and special ability, then equips it from a themed equipment factory.
//!
//! # Examples
//!
//! ```bash
//! # Default party
//! cargo run -p rpg-client
//!
//! # Custom party, abilities hidden
//! RPG_ROSTER="mage:medieval,archer:magic" RPG_SHOW_ABILITIES=false cargo run -p rpg-client
//! ```

use anyhow::Result;
use rpg_client::{ClientConfig, Demo, StdoutAnnouncer, logging};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // 1. Setup logging first so configuration warnings are captured
    let _guard = logging::setup_logging(ClientConfig::log_dir_from_env().as_deref())?;

    // 2. Load configuration from environment
    let config = ClientConfig::from_env();

    tracing::info!("Starting RPG demo");

    // 3. Build and run
    let demo = Demo::builder().config(&config).build()?;
    tracing::info!("Roster: {:?}", demo.roster());
    let party = demo.run(&mut StdoutAnnouncer)?;

    tracing::info!("Demo complete, {} characters equipped", party.len());
    Ok(())
}
