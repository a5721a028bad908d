use std::io::Read;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use wiresketch_core::device::Device;
use wiresketch_core::output::{self, WireframeRecord};
use wiresketch_core::request::GenerationRequest;

#[derive(Parser)]
#[command(name = "wiresketch", about = "Turn a plain-language page description into a wireframe")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a description and output the wireframe
    Parse {
        /// The description text (use - for stdin)
        input: String,

        /// Treat INPUT as a path to a file holding the description
        #[arg(long)]
        file: bool,

        /// Output as JSON instead of compact format
        #[arg(long)]
        json: bool,

        /// Target device: desktop, tablet or mobile
        #[arg(long, default_value = "desktop")]
        device: Device,
    },
    /// Serve the REST API
    #[cfg(feature = "serve")]
    Serve {
        /// Port to listen on (default: $PORT or 5001)
        #[arg(long)]
        port: Option<u16>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Parse {
            input,
            file,
            json,
            device,
        } => {
            let description = match read_description(&input, file) {
                Ok(d) => d,
                Err(e) => {
                    eprintln!("Error: failed to read {}: {}", input, e);
                    std::process::exit(1);
                }
            };

            let request = GenerationRequest::new(description.trim()).with_device(device);
            match wiresketch_core::generate(&request) {
                Ok(record) => print_record(&record, json),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
        #[cfg(feature = "serve")]
        Commands::Serve { port } => {
            if let Err(e) = serve(port) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn read_description(input: &str, from_file: bool) -> std::io::Result<String> {
    if input == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else if from_file {
        std::fs::read_to_string(input)
    } else {
        Ok(input.to_string())
    }
}

fn print_record(record: &WireframeRecord, as_json: bool) {
    if as_json {
        match serde_json::to_string_pretty(record) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    let wf = &record.wireframe;
    println!("title: {}", wf.title);
    println!("layout: {}", wf.layout);
    println!(
        "device: {} {}x{}",
        record.device, record.dimensions.width, record.dimensions.height
    );
    println!("els: {}", wf.components.len());
    println!("---");
    println!("{}", output::to_compact_string(wf));
}

#[cfg(feature = "serve")]
fn serve(port: Option<u16>) -> Result<(), Box<dyn std::error::Error>> {
    use std::sync::Arc;
    use wiresketch_server::{build_router, AppState, ServerConfig};

    let mut config = ServerConfig::from_env();
    if let Some(port) = port {
        config.port = port;
    }
    let port = config.port;
    let app = build_router(Arc::new(AppState::new(config)));

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async move {
            let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
            tracing::info!("wiresketch server listening on http://localhost:{port}");
            axum::serve(listener, app).await?;
            Ok::<(), Box<dyn std::error::Error>>(())
        })
}
