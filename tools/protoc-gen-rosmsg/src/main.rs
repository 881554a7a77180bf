mod options;

use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use options::GeneratorOptions;
use prost::Message;
use prost_types::compiler::CodeGeneratorRequest;
use protoros_msg::Corpus;
use tracing::debug;
use tracing_subscriber::EnvFilter;

// stdout carries the response, so diagnostics go to stderr.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let mut input = Vec::new();
    io::stdin()
        .read_to_end(&mut input)
        .context("failed to read request from stdin")?;
    let request = CodeGeneratorRequest::decode(input.as_slice())
        .context("failed to decode CodeGeneratorRequest")?;

    let options = GeneratorOptions::from_parameter(request.parameter())?;
    let corpus = match &options.corpus {
        Some(dir) => Corpus::load_dir(dir)
            .with_context(|| format!("failed to load corpus {}", dir.display()))?,
        None => Corpus::new(),
    };

    let response = protoros_protobuf::generate(&request, options.package.as_deref(), corpus)?;

    debug!(files = response.file.len(), "writing response");
    let mut stdout = io::stdout().lock();
    stdout.write_all(&response.encode_to_vec())?;
    stdout.flush()?;
    Ok(())
}
