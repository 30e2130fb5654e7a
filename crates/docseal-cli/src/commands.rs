use std::process::ExitCode;

use colored::Colorize;

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<ExitCode> {
    match cli.command {
        Command::Keygen(args) => cmd_keygen(args),
        Command::Sign(args) => cmd_sign(args),
        Command::Verify(args) => cmd_verify(args),
    }
}

fn cmd_keygen(args: KeygenArgs) -> anyhow::Result<ExitCode> {
    let key = docseal_sdk::generate_key(args.length, &args.output)?;
    println!(
        "{} Generated {}-character signing key",
        "✓".green().bold(),
        key.len()
    );
    println!("  Key file: {} (owner-only)", args.output.display().to_string().bold());
    Ok(ExitCode::SUCCESS)
}

fn cmd_sign(args: SignArgs) -> anyhow::Result<ExitCode> {
    let key = docseal_sdk::load_key(&args.key)?;
    let sidecar = docseal_sdk::sign_to_sidecar(&args.file, &key)?;
    println!("{} Signed {}", "✓".green().bold(), args.file.display().to_string().bold());
    println!("  Signature: {}", sidecar.display());
    Ok(ExitCode::SUCCESS)
}

fn cmd_verify(args: VerifyArgs) -> anyhow::Result<ExitCode> {
    let sidecar = args
        .signature
        .unwrap_or_else(|| docseal_sdk::sidecar_path(&args.file));

    if docseal_sdk::validate(&args.key, &args.file, &sidecar)? {
        println!(
            "{} Signature valid for {}",
            "✓".green().bold(),
            args.file.display().to_string().bold()
        );
        Ok(ExitCode::SUCCESS)
    } else {
        // A mismatch is an answer, not an error: report it and exit 1.
        println!(
            "{} Signature mismatch for {}",
            "✗".red().bold(),
            args.file.display().to_string().bold()
        );
        Ok(ExitCode::FAILURE)
    }
}
