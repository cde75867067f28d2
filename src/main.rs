// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Paldex-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Paldex and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Paldex server entrypoint.
//!
//! Serves the pals and elements REST API at `http://127.0.0.1:<port>` and
//! persists both collections as JSON documents in the data directory.

use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

const DEFAULT_PORT: u16 = 3001;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<data-dir>] [--port <port>] [--durable-writes]\n  {program} [--data-dir <dir>] [--port <port>] [--durable-writes]\n\nServes the pals and elements REST API at `http://127.0.0.1:<port>` (default port {DEFAULT_PORT}).\n\nIf data-dir/--data-dir is omitted, the current working directory is used. The directory\nholds `pals.json` and `elements.json`; missing documents are created empty on startup.\n\n--durable-writes opts into slower, best-effort durable persistence (fsync/sync where supported)."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    data_dir: Option<String>,
    port: Option<u16>,
    durable_writes: bool,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--data-dir" => {
                if options.data_dir.is_some() {
                    return Err(());
                }
                let dir = args.next().ok_or(())?;
                options.data_dir = Some(dir);
            }
            "--port" => {
                if options.port.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                let port: u16 = raw.parse().map_err(|_| ())?;
                options.port = Some(port);
            }
            "--durable-writes" => {
                if options.durable_writes {
                    return Err(());
                }
                options.durable_writes = true;
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.data_dir.is_some() {
                    return Err(());
                }
                options.data_dir = Some(arg);
            }
        }
    }

    Ok(options)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "paldex".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .init();

        let durability = if options.durable_writes {
            paldex::store::WriteDurability::Durable
        } else {
            paldex::store::WriteDurability::BestEffort
        };
        let data_dir = PathBuf::from(options.data_dir.unwrap_or_else(|| ".".to_owned()));
        let port = options.port.unwrap_or(DEFAULT_PORT);

        let pals = paldex::store::PalStore::load_or_init(data_dir.join("pals.json"), durability)?;
        let elements =
            paldex::store::ElementStore::load_or_init(data_dir.join("elements.json"), durability)?;
        tracing::info!(
            "paldex v{} loaded {} pals and {} elements from {}",
            env!("CARGO_PKG_VERSION"),
            pals.list().len(),
            elements.list().len(),
            data_dir.display()
        );

        let state = Arc::new(paldex::api::AppState::new(pals, elements));

        let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;

        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::bind(("127.0.0.1", port)).await?;
            tracing::info!("listening on http://{}", listener.local_addr()?);

            paldex::api::serve(listener, state, async {
                let _ = tokio::signal::ctrl_c().await;
                tracing::info!("shutdown signal received");
            })
            .await?;

            Ok::<(), Box<dyn Error>>(())
        })?;

        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("paldex: {err}");
        std::process::exit(1);
    }
}
