//! DeepScan CLI
//!
//! ```bash
//! deepscan serve --detector-url http://detector:8000/analyze --static-dir frontend/dist
//! deepscan check photo.jpg                 # ask a running gateway about one file
//! ```

use clap::{Parser, Subcommand};
use deepscan::{DetectorClient, GatewayConfig, MediaKind, Upload};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "deepscan")]
#[command(about = "Deepfake detection gateway and client", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start HTTP server
    Serve {
        /// Address to bind (default: DEEPSCAN_HOST or 0.0.0.0)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (default: DEEPSCAN_PORT or 8000)
        #[arg(short, long)]
        port: Option<u16>,

        /// Detector analyze endpoint (default: DETECTOR_URL)
        #[arg(short, long)]
        detector_url: Option<String>,

        /// Directory with the built widget (default: DEEPSCAN_STATIC_DIR)
        #[arg(short, long)]
        static_dir: Option<PathBuf>,

        /// Maximum upload size in bytes
        #[arg(long)]
        max_upload_bytes: Option<usize>,
    },

    /// Send one image or video to a running gateway and print the verdict
    Check {
        /// Image (.png, .jpg, .jpeg, ...) or video (.mp4, .webm, ...) file
        input: PathBuf,

        /// Gateway base URL
        #[arg(long, default_value = "http://localhost:8000")]
        server: String,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve {
            host,
            port,
            detector_url,
            static_dir,
            max_upload_bytes,
        } => cmd_serve(host, port, detector_url, static_dir, max_upload_bytes).await,

        Commands::Check { input, server } => cmd_check(&input, &server).await,
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

async fn cmd_serve(
    host: Option<String>,
    port: Option<u16>,
    detector_url: Option<String>,
    static_dir: Option<PathBuf>,
    max_upload_bytes: Option<usize>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = GatewayConfig::from_env()?;

    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }
    if detector_url.is_some() {
        config.detector_url = detector_url;
    }
    if static_dir.is_some() {
        config.static_dir = static_dir;
    }
    if let Some(limit) = max_upload_bytes {
        config.max_upload_bytes = limit;
    }

    deepscan::server::start_server(config).await
}

async fn cmd_check(input: &Path, server: &str) -> Result<(), Box<dyn std::error::Error>> {
    let (kind, mime) = MediaKind::from_path(input).ok_or_else(|| {
        format!(
            "Unsupported file type: {}. Use an image (.png, .jpg, .jpeg, .gif, .webp, .bmp) or video (.mp4, .webm, .mov, .avi, .mkv)",
            input.display()
        )
    })?;

    if !tokio::fs::try_exists(input).await.unwrap_or(false) {
        return Err(format!("File not found: {}", input.display()).into());
    }

    eprintln!("📄 Analyzing {} ({})", input.display(), kind.as_str());

    let upload = Upload::from_file(input, mime).await?;

    let client = DetectorClient::new(format!("{}/analyze", server.trim_end_matches('/')));
    let verdict = client.analyze(upload).await?;

    println!("\nAnalysis Results:");
    println!("{}", "-".repeat(20));
    println!(
        "Result: {}",
        if verdict.is_deepfake { "Deepfake Detected" } else { "Authentic" }
    );
    println!("Confidence: {:.2}%", verdict.confidence * 100.0);

    Ok(())
}
