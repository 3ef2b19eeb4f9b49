use granite_ideas::{session, Credentials, Error, IdeaGenerator};
use std::io;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Nothing useful left to do if stdout is gone too
            let _ = session::report_error(&e, io::stdout());
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Error> {
    let credentials = Credentials::from_env()?;
    let generator = IdeaGenerator::from_credentials(&credentials)?;

    granite_ideas::run_session(&generator, io::stdin().lock(), io::stdout()).await?;
    Ok(())
}

fn init_tracing() {
    // RUST_LOG wins; otherwise only warnings from this crate
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("granite_ideas=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
