// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the dint command-line interface.
//!
//! Two subcommands: `encode` to compress a collection with a trained
//! dictionary, and `check` to verify an encoded stream against its source,
//! value by value. Both take the codec by name so registry additions show up
//! without new flags.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "dint",
    about = "Dictionary-based compression for inverted index posting lists",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encode a .docs or .freqs collection into a codeword stream
    Encode {
        /// Codec to encode with
        #[arg(short, long, default_value = "dint")]
        codec: String,

        /// Input collection (.docs applies the d-gap transform, .freqs none)
        collection: PathBuf,

        /// Trained dictionary file; required by dictionary codecs
        #[arg(short, long)]
        dict: Option<PathBuf>,

        /// Where to write the encoded stream; omit for a stats-only dry run
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Decode an encoded stream and compare it against the source collection
    Check {
        /// Codec the stream was encoded with
        #[arg(short, long, default_value = "dint")]
        codec: String,

        /// The source collection the stream claims to encode
        collection: PathBuf,

        /// The encoded stream to verify
        encoded: PathBuf,

        /// Trained dictionary file; required by dictionary codecs
        #[arg(short, long)]
        dict: Option<PathBuf>,
    },
}
