// This file is part of libpep.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Command-line driver for the PEP core. Thin glue only: argument parsing,
//! hex I/O, and exit codes. All cryptographic logic lives in the `libpep`
//! library crate.

use clap::{Parser, Subcommand};
use libpep::{elgamal::ElGamal, group::GroupElement, pep, scalar::Scalar};

#[derive(Parser)]
#[command(name = "pep-cli", about = "Polymorphic encryption and pseudonymisation core, CLI driver")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a fresh global public/secret keypair.
    GenerateGlobalKeys,
    /// Generate an encrypted global pseudonym for an identity string.
    GeneratePseudonym {
        identity: String,
        global_pk_hex: String,
    },
    /// Convert a global encrypted pseudonym to a local one.
    ConvertToLocalPseudonym {
        enc_hex: String,
        server_secret: String,
        dec_ctx: String,
        pse_ctx: String,
    },
    /// Derive the local decryption key for a given decryption context.
    MakeLocalDecryptionKey {
        sk_hex: String,
        server_secret: String,
        dec_ctx: String,
    },
    /// Decrypt a local encrypted pseudonym with its local decryption key.
    DecryptLocalPseudonym {
        enc_hex: String,
        local_sk_hex: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(message) = run(Cli::parse().command) {
        tracing::error!("{message}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), String> {
    let mut rng = rand::thread_rng();

    match command {
        Command::GenerateGlobalKeys => {
            let (pk, sk) = pep::generate_global_keys(&mut rng).map_err(|e| e.to_string())?;
            tracing::info!("generated a fresh global keypair");
            eprintln!("Public global key:");
            println!("{}", pk.to_hex());
            eprintln!("Secret global key:");
            println!("{}", sk.to_hex());
        }
        Command::GeneratePseudonym { identity, global_pk_hex } => {
            let pk = GroupElement::from_hex(&global_pk_hex).map_err(|e| e.to_string())?;
            let pseudonym = pep::generate_pseudonym(&identity, &pk, &mut rng).map_err(|e| e.to_string())?;
            println!("{}", pseudonym.to_hex());
        }
        Command::ConvertToLocalPseudonym { enc_hex, server_secret, dec_ctx, pse_ctx } => {
            let enc = ElGamal::from_hex(&enc_hex).map_err(|e| e.to_string())?;
            let local = pep::convert_to_local_pseudonym(&enc, &server_secret, &dec_ctx, &pse_ctx)
                .map_err(|e| e.to_string())?;
            let local = pep::rerandomize_local(&local, &mut rng).map_err(|e| e.to_string())?;
            println!("{}", local.to_hex());
        }
        Command::MakeLocalDecryptionKey { sk_hex, server_secret, dec_ctx } => {
            let sk = Scalar::from_hex(&sk_hex).map_err(|e| e.to_string())?;
            let local_sk = pep::make_local_decryption_key(&sk, &server_secret, &dec_ctx);
            println!("{}", local_sk.to_hex());
        }
        Command::DecryptLocalPseudonym { enc_hex, local_sk_hex } => {
            let enc = ElGamal::from_hex(&enc_hex).map_err(|e| e.to_string())?;
            let sk = Scalar::from_hex(&local_sk_hex).map_err(|e| e.to_string())?;
            let pseudonym = pep::decrypt_local_pseudonym(&enc, &sk).map_err(|e| e.to_string())?;
            println!("{}", pseudonym.to_hex());
        }
    }

    Ok(())
}
