use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use docseal_sdk::{DEFAULT_KEY_FILE, DEFAULT_KEY_LENGTH};

#[derive(Parser)]
#[command(
    name = "docseal",
    about = "Docseal — keyed-digest document signing",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate a new signing key file
    Keygen(KeygenArgs),
    /// Sign a file, writing a <file>.sig sidecar
    Sign(SignArgs),
    /// Verify a file against a stored signature
    Verify(VerifyArgs),
}

#[derive(Args)]
pub struct KeygenArgs {
    /// Key length in characters
    #[arg(short, long, default_value_t = DEFAULT_KEY_LENGTH)]
    pub length: usize,

    /// Where to write the key file (overwrites without asking)
    #[arg(short, long, default_value = DEFAULT_KEY_FILE)]
    pub output: PathBuf,
}

#[derive(Args)]
pub struct SignArgs {
    /// File to sign
    pub file: PathBuf,

    /// Key file to sign with
    #[arg(short, long, default_value = DEFAULT_KEY_FILE)]
    pub key: PathBuf,
}

#[derive(Args)]
pub struct VerifyArgs {
    /// File to verify
    pub file: PathBuf,

    /// Key file to verify with
    #[arg(short, long, default_value = DEFAULT_KEY_FILE)]
    pub key: PathBuf,

    /// Stored signature (defaults to <file>.sig)
    #[arg(short, long)]
    pub signature: Option<PathBuf>,
}
