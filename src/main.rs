// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

mod api;
mod config;
mod environment;
mod minimal_tracer;
mod server;

use std::{env, error::Error, process::exit, sync::Arc};

use minimal_tracer::MinimalTracer;
use tawqit_time::TimeService;
use tawqit_weather::WeatherService;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::api::AppState;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    MinimalTracer::register()?;

    let args: Vec<String> = env::args().collect();
    if let Some(arg) = args.get(1) {
        match arg.as_str() {
            "-v" | "--version" => {
                print_version();
                return Ok(());
            },
            "-h" | "--help" => {
                usage();
                return Ok(());
            },
            _ => {
                eprintln!("Unknown option: {}", arg);
                usage();
                exit(1);
            },
        }
    }

    let state = Arc::new(AppState {
        time: TimeService::new(),
        weather: WeatherService::new(),
    });

    let addr = config::build_bind_addr();
    let listener = TcpListener::bind(addr).await?;
    info!("tawqit {} listening on {}", VERSION, listener.local_addr()?);

    let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(());

    tokio::spawn(async move {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!("failed to listen for shutdown signal: {}", err);
            return;
        }
        let _ = shutdown_tx.send(());
    });

    server::run(listener, state, shutdown_rx).await
}

fn print_version() {
    println!("tawqit {}", VERSION);
}

fn usage() {
    print_version();
    println!(
        r#"

Usage:
  tawqit
  tawqit -v | --version
  tawqit -h | --help

Options:
  -v, --version     Print version information
  -h, --help        Print this help message

Environment:
  TAWQIT_BIND       Bind address (default 0.0.0.0)
  TAWQIT_PORT       Bind port (default 8000)
  RUST_LOG          Log filter, e.g. "info" or "tawqit=debug"
"#
    );
}
