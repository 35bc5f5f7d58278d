//! `ocr3-submit` — binary entry point.
//!
//! Parses CLI / env-var configuration, reads a finalized report bundle from
//! disk, wires a wallet-backed provider into the contract writer, and
//! transmits the report to the off-ramp contract exactly once.

use std::{path::PathBuf, sync::Arc};

use alloy_network::EthereumWallet;
use alloy_primitives::{Bytes, B256};
use alloy_provider::ProviderBuilder;
use alloy_signer_local::PrivateKeySigner;
use anyhow::Context;
use clap::{Parser, ValueEnum};
use ocr3_transmitter::{Transmitter, METHOD_COMMIT, METHOD_COMMIT_PRICE_ONLY};
use ocr3_types::AttributedSignature;
use ocr3_writer::EvmContractWriter;
use serde::Deserialize;
use tracing::info;
use url::Url;

/// Which report pipeline the bundle came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Plugin {
    Commit,
    Execute,
}

/// Configuration for a single report submission.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "ocr3-submit",
    version,
    about = "Submit a finalized OCR3 report to an off-ramp contract"
)]
struct Args {
    /// RPC URL of the destination chain.
    #[arg(long, env = "OCR3_SUBMIT_RPC_URL")]
    pub rpc_url: Url,

    /// Hex-encoded private key of the transmitting account.
    #[arg(long, env = "OCR3_SUBMIT_PRIVATE_KEY", hide_env_values = true)]
    pub private_key: String,

    /// Address of the off-ramp contract.
    #[arg(long, env = "OCR3_SUBMIT_OFFRAMP_ADDRESS")]
    pub offramp_address: String,

    /// Report pipeline the bundle belongs to.
    #[arg(long, env = "OCR3_SUBMIT_PLUGIN", value_enum)]
    pub plugin: Plugin,

    /// Route price-only commit reports to the dedicated method.
    #[arg(long, env = "OCR3_SUBMIT_PRICE_ONLY")]
    pub price_only: bool,

    /// Path to the JSON report bundle.
    #[arg(long, env = "OCR3_SUBMIT_BUNDLE")]
    pub bundle: PathBuf,

    /// Log level filter.
    #[arg(long, env = "OCR3_SUBMIT_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Log format: `json` or `text`.
    #[arg(long, env = "OCR3_SUBMIT_LOG_FORMAT", default_value = "text")]
    pub log_format: String,
}

/// A consensus-finalized report plus its quorum of signatures, as written
/// out by the consensus layer.
#[derive(Debug, Deserialize)]
struct ReportBundle {
    config_digest: B256,
    sequence_number: u64,
    report: Bytes,
    #[serde(default)]
    info: Bytes,
    signatures: Vec<AttributedSignature>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let cfg = Args::parse();

    init_tracing(&cfg.log_level, &cfg.log_format);
    info!(version = env!("CARGO_PKG_VERSION"), "starting ocr3-submit");

    let raw = std::fs::read_to_string(&cfg.bundle)
        .with_context(|| format!("failed to read bundle {}", cfg.bundle.display()))?;
    let bundle: ReportBundle =
        serde_json::from_str(&raw).context("failed to decode report bundle")?;

    let signer: PrivateKeySigner = cfg
        .private_key
        .trim_start_matches("0x")
        .parse()
        .context("failed to parse private key")?;
    let from = signer.address();
    let provider = ProviderBuilder::new()
        .wallet(EthereumWallet::from(signer))
        .connect_http(cfg.rpc_url.clone());

    let writer = Arc::new(EvmContractWriter::new(Arc::new(provider), from));
    let transmitter = match cfg.plugin {
        Plugin::Commit => Transmitter::commit(
            writer,
            from.to_string(),
            cfg.offramp_address.clone(),
            METHOD_COMMIT,
            cfg.price_only.then(|| METHOD_COMMIT_PRICE_ONLY.to_owned()),
        ),
        Plugin::Execute => {
            Transmitter::execute(writer, from.to_string(), cfg.offramp_address.clone())
        }
    };

    info!(
        plugin = ?cfg.plugin,
        offramp = %cfg.offramp_address,
        seq_nr = bundle.sequence_number,
        signatures = bundle.signatures.len(),
        "transmitting report"
    );

    let report = ocr3_types::ReportWithInfo { report: bundle.report, info: bundle.info };
    transmitter
        .transmit(bundle.config_digest, bundle.sequence_number, &report, &bundle.signatures)
        .await
        .context("transmission failed")?;

    info!("report submitted");
    Ok(())
}

/// Initialise `tracing` with the given level and format (`json` or `text`).
fn init_tracing(level: &str, format: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    match format {
        "json" => {
            tracing_subscriber::fmt().with_env_filter(filter).json().init();
        }
        _ => {
            tracing_subscriber::fmt().with_env_filter(filter).init();
        }
    }
}
