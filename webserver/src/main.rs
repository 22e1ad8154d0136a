//! WebServer entry point
//!
//! Hosts the name suggestion stream endpoint backed by an LLM provider.

use clap::Parser;
use shared::{ProcessId, logging};
use std::net::SocketAddr;

use webserver::{RealNameGenerator, WebServer};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "webserver")]
#[command(about = "Name suggestion stream endpoint")]
struct Args {
    /// Address to bind the HTTP server to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port for HTTP server
    #[arg(long, default_value = "8080")]
    port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Provider credentials come from the environment / .env file
    dotenv::dotenv().ok();

    ProcessId::init_webserver();
    logging::init_tracing_with_level(Some(&args.log_level));

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid bind address: {e}"))?;

    let generator = RealNameGenerator::from_env()?;
    let server = WebServer::new(generator);

    logging::log_startup(ProcessId::current(), "name suggestion webserver");
    server.run(addr).await?;

    logging::log_success(ProcessId::current(), "WebServer stopped gracefully");
    Ok(())
}
