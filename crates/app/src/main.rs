//! binconv: convert between raw bytes and binary-digit text.

mod config;
mod input_gen;

use std::fs;
use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use binconv_core::{
    decode_bytes,
    decoder::decode_with,
    encoder::encode_with,
    metrics::ConversionMetrics,
    ByteLength, Input,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, Mode};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = Config::from_args(&args).map_err(anyhow::Error::msg)?;

    init_logging(&config.log_level);

    if config.print_config {
        config.print();
    }

    let mut metrics = ConversionMetrics::new();

    let output = match config.mode {
        Mode::Encode => run_encode(&config, &mut metrics)?,
        Mode::Decode => run_decode(&config, &mut metrics)?,
    };

    write_output(&config, &output)?;
    metrics.complete();

    info!(duration_ms = metrics.duration().as_millis() as u64, "conversion finished");
    if config.print_stats {
        metrics.print_summary();
    }

    Ok(())
}

/// Logs go to stderr so they never mix with converted output.
fn init_logging(level: &str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn run_encode(config: &Config, metrics: &mut ConversionMetrics) -> Result<Vec<u8>> {
    let bytes = match config.sample_bytes {
        Some(size) => {
            info!(size, seed = config.seed, "generating sample input");
            input_gen::generate_sample_data(config.seed, size)
        }
        None => read_input(config)?,
    };

    let input = Input::from(&bytes[..]);
    let text = encode_with(&input, config.delimiter, config.width)?;
    metrics.record_encode(input.values(), config.width, &text);

    let mut output = text.into_bytes();
    output.push(b'\n');
    Ok(output)
}

fn run_decode(config: &Config, metrics: &mut ConversionMetrics) -> Result<Vec<u8>> {
    let raw = read_input(config)?;
    let text = String::from_utf8(raw).context("decode input is not valid UTF-8")?;

    if config.lenient {
        let groups = decode_with(&text, config.delimiter, ByteLength::new(config.width)?)?;
        metrics.record_decode(&text, &groups);

        let listing: Vec<String> = groups.iter().map(ToString::to_string).collect();
        let mut output = listing.join(",").into_bytes();
        output.push(b'\n');
        return Ok(output);
    }

    let bytes = decode_bytes(&text, config.delimiter.name(), config.width)?;
    metrics.chars_consumed += text.chars().count() as u64;
    metrics.groups_decoded += bytes.len() as u64;
    Ok(bytes)
}

fn read_input(config: &Config) -> Result<Vec<u8>> {
    match &config.input_file {
        Some(path) => fs::read(path).with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf).context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(config: &Config, output: &[u8]) -> Result<()> {
    match &config.output_file {
        Some(path) => fs::write(path, output).with_context(|| format!("failed to write {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(output).context("failed to write stdout")?;
            stdout.flush().context("failed to flush stdout")
        }
    }
}
