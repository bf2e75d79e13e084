use std::error::Error;

use tracing::{Level, error};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load environment variables from .env file when present; real
    // environment variables win.
    let _ = dotenvy::dotenv();

    ai_llm_service::telemetry::init("info", Level::INFO)?;

    if let Err(e) = api::start().await {
        error!(error = %e, "ScamOrNot API failed");
        return Err(e.into());
    }

    Ok(())
}
