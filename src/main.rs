//! Demonstration entry point.
//!
//! Reads `OPENAI_API_KEY` from the environment, builds a [`SpellCheck`]
//! client for French, corrects one sample string, and prints the result.
//! The library API is the real surface; this binary only exercises it.

use anyhow::Context;
use spellcheck::SpellCheck;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let api_key =
        std::env::var("OPENAI_API_KEY").context("OPENAI_API_KEY is not set in the environment")?;

    let checker = SpellCheck::new(&api_key, "fr").await?;
    log::info!("client ready for {}", checker.language());

    let corrected = checker.correct("coocou").await?;
    println!("{corrected}");

    Ok(())
}
