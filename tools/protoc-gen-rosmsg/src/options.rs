//! Generator options carried in the request's `parameter` string.
//!
//! ```text
//! protoc --rosmsg_out=out --rosmsg_opt="-p geom -c lib" shapes.proto
//! ```

use std::path::PathBuf;

use clap::Parser;

/// The parameter string could not be parsed.
#[derive(Debug, thiserror::Error)]
#[error("invalid generator parameter: {0}")]
pub struct ConfigurationError(#[from] clap::Error);

#[derive(Debug, Parser, PartialEq, Eq)]
#[command(name = "protoc-gen-rosmsg", no_binary_name = true)]
pub struct GeneratorOptions {
    /// Package generated records are placed in
    #[arg(short, long)]
    pub package: Option<String>,

    /// Directory tree of existing .msg definitions to validate and reuse
    #[arg(short, long)]
    pub corpus: Option<PathBuf>,
}

impl GeneratorOptions {
    pub fn from_parameter(parameter: &str) -> Result<Self, ConfigurationError> {
        Ok(Self::try_parse_from(parameter.split_whitespace())?)
    }
}
