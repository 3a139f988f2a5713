//! Serve command: runs the HTTP API.

use crate::cli::Output;
use crate::config::Settings;
use crate::orchestrator::Orchestrator;
use crate::server::{router, ROUTES};
use tracing::info;

/// Run the HTTP API server.
pub async fn run_serve(
    host: Option<String>,
    port: Option<u16>,
    settings: Settings,
) -> anyhow::Result<()> {
    let orchestrator = Orchestrator::new(&settings)?;
    let app = router(orchestrator);

    let host = host.unwrap_or_else(|| settings.server.host.clone());
    let port = port.unwrap_or(settings.server.port);
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    Output::header("tldw API Server");
    println!();
    Output::success(&format!("Listening on http://{}", addr));
    Output::kv("Database", &settings.database_path().display().to_string());
    if settings.youtube.api_key.is_none() {
        Output::warning("No YouTube API key set (API_KEY); playlist routes will fail.");
    }
    if settings.llm.api_key.is_none() {
        Output::warning("No LLM API key set (OPENROUTER_API_KEY); summary routes will fail.");
    }
    println!();
    println!("Endpoints:");
    for (method, path, description) in ROUTES {
        Output::kv(description, &format!("{:<5}{}", method, path));
    }
    println!();
    Output::info("Press Ctrl+C to stop the server.");

    info!("HTTP server listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
