//! envelope-tool: sign, verify and inspect BDLS consensus envelopes.
//!
//! Payloads are handled as raw bytes; the tool knows nothing about the
//! consensus message format inside them.

use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};
use bdls_envelope::adapters::wire;
use bdls_envelope::{Coordinate, EnvelopeApi, EnvelopeConfig, EnvelopeService, RawBytesCodec};
use clap::{Parser, Subcommand};
use k256::ecdsa::SigningKey;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use zeroize::Zeroizing;

/// envelope-tool: BDLS consensus envelope utility
#[derive(Parser, Debug)]
#[command(name = "envelope-tool")]
#[command(about = "Sign, verify and inspect BDLS consensus envelopes")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a secp256k1 secret key and print its coordinate
    Keygen,

    /// Sign a payload and print the wire-encoded envelope as hex
    Sign {
        /// Secret key as 32 hex-encoded bytes
        #[arg(long, env = "BDLS_SECRET_KEY", hide_env_values = true)]
        secret_key: String,

        /// Payload as UTF-8 text
        #[arg(
            long,
            conflicts_with = "payload_hex",
            required_unless_present = "payload_hex"
        )]
        payload: Option<String>,

        /// Payload as hex
        #[arg(long)]
        payload_hex: Option<String>,
    },

    /// Decode a hex-encoded envelope and verify its signature
    Verify {
        /// Wire-encoded envelope as hex
        envelope: String,
    },
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = EnvelopeConfig::from_env();
    debug!(?config, "loaded envelope configuration");
    let service = EnvelopeService::new(config, RawBytesCodec);

    match args.command {
        Command::Keygen => {
            keygen();
            Ok(ExitCode::SUCCESS)
        }
        Command::Sign {
            secret_key,
            payload,
            payload_hex,
        } => {
            let secret_key = Zeroizing::new(secret_key);
            let payload = match (payload, payload_hex) {
                (Some(text), _) => text.into_bytes(),
                (None, Some(hex_payload)) => {
                    hex::decode(hex_payload.trim()).context("payload is not valid hex")?
                }
                (None, None) => {
                    return Err(anyhow!("one of --payload or --payload-hex is required"))
                }
            };
            sign(&service, &secret_key, payload)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Verify { envelope } => verify(&service, &envelope),
    }
}

fn keygen() {
    let key = SigningKey::random(&mut rand::rngs::OsRng);
    let secret_hex = Zeroizing::new(hex::encode(key.to_bytes()));
    let coordinate = Coordinate::from_public_key(key.verifying_key());

    println!("secret-key: {}", secret_hex.as_str());
    println!("coordinate: {coordinate}");
}

fn sign(
    service: &EnvelopeService<RawBytesCodec>,
    secret_key_hex: &str,
    payload: Vec<u8>,
) -> Result<()> {
    let secret = Zeroizing::new(
        hex::decode(secret_key_hex.trim()).context("secret key is not valid hex")?,
    );
    let key = SigningKey::from_slice(&secret)
        .map_err(|_| anyhow!("secret key is not a valid secp256k1 scalar"))?;

    let envelope = service.sign(&payload, &key)?;
    let frame = wire::encode(&envelope)?;

    info!(
        sender = %envelope.coordinate(),
        version = envelope.version,
        frame_len = frame.len(),
        "envelope signed"
    );
    println!("{}", hex::encode(frame));
    Ok(())
}

fn verify(service: &EnvelopeService<RawBytesCodec>, envelope_hex: &str) -> Result<ExitCode> {
    let frame = hex::decode(envelope_hex.trim()).context("envelope is not valid hex")?;
    let envelope = wire::decode(&frame, service.config()).context("envelope frame is malformed")?;
    let valid = service.verify(&envelope);

    println!("version:    {}", envelope.version);
    println!("sender:     {}", envelope.coordinate());
    println!("payload:    {}", String::from_utf8_lossy(&envelope.payload));
    println!("signature:  {}", if valid { "valid" } else { "INVALID" });

    Ok(if valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
