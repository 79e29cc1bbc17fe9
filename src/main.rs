// Copyright 2025 coScene
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

mod config;
mod document;
mod flags;
mod transform;

use config::load_config_with_env;
use document::YamlDocument;
use flags::ProvisionFlags;

/// Cassandra Provision - one-shot, flag-driven cassandra.yaml editor
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to tool settings file (built-in defaults when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Path to the Cassandra YAML file (overrides settings)
    #[arg(short, long)]
    yaml: Option<PathBuf>,

    /// Print the transformed file to stdout instead of writing it
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Load settings, then apply CLI overrides
    let mut provision_config = load_config_with_env(args.config.as_deref())?;
    if let Some(yaml) = args.yaml {
        provision_config.yaml_path = yaml.to_string_lossy().into_owned();
    }

    // Initialize tracing with configured level
    let log_level = match provision_config.logging.level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let provision_flags = ProvisionFlags::from_env();

    info!("Starting Cassandra provisioning");
    info!("Target file: {}", provision_config.yaml_path);
    info!(
        "Flags: ssl={} client_auth={} byte_ordered_partitioner={}",
        provision_flags.ssl,
        provision_flags.client_auth,
        provision_flags.byte_ordered_partitioner
    );

    // Read once, mutate in memory, write once
    let content = std::fs::read_to_string(&provision_config.yaml_path)
        .with_context(|| format!("Failed to read {}", provision_config.yaml_path))?;

    let mut doc = YamlDocument::parse(&content);
    transform::apply(&mut doc, &provision_flags, &provision_config)?;
    let output = doc.render();

    if args.dry_run {
        print!("{}", output);
        info!("Dry run, file not written");
    } else {
        std::fs::write(&provision_config.yaml_path, output)
            .with_context(|| format!("Failed to write {}", provision_config.yaml_path))?;
        info!("Rewrote {}", provision_config.yaml_path);
    }

    Ok(())
}
