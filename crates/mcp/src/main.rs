use rmcp::ServiceExt;
use tracing_subscriber::EnvFilter;
use wiresketch_mcp::WiresketchServer;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // stdout carries the protocol; logs must stay on stderr.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let server = WiresketchServer::new();

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async move {
            tracing::info!("wiresketch-mcp serving on stdio");
            let service = server.serve(rmcp::transport::stdio()).await?;
            service.waiting().await?;
            Ok::<(), Box<dyn std::error::Error>>(())
        })?;

    Ok(())
}
