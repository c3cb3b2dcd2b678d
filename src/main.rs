// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;

use dint::codec::Codec;
use dint::collection::Collection;
use dint::dict::Dictionary;
use dint::error::{Error, Result};
use dint::logger::{Reporter, StderrReporter};
use dint::registry::CodecRegistry;
use dint::tools::encode_collection;
use dint::transform::ListKind;
use dint::verify::verify_collection;

mod cli;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    let registry = CodecRegistry::with_builtins();
    let reporter = StderrReporter::new();

    let outcome = match cli.command {
        Commands::Encode {
            codec,
            collection,
            dict,
            out,
        } => run_encode(&registry, &reporter, &codec, &collection, dict, out),
        Commands::Check {
            codec,
            collection,
            encoded,
            dict,
        } => run_check(&registry, &reporter, &codec, &collection, &encoded, dict),
    };

    if let Err(e) = outcome {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

/// Load (and index) the dictionary a codec needs, or hand back the empty one.
fn load_dictionary(codec: &dyn Codec, path: Option<PathBuf>) -> Result<Dictionary> {
    match path {
        Some(path) => {
            let bytes = fs::read(&path)?;
            let mut dict = Dictionary::build(&bytes)?;
            dict.prepare_for_encoding();
            Ok(dict)
        }
        None if codec.needs_dictionary() => Err(Error::Format(format!(
            "codec '{}' requires a dictionary (pass --dict)",
            codec.name()
        ))),
        None => {
            let mut dict = Dictionary::empty();
            dict.prepare_for_encoding();
            Ok(dict)
        }
    }
}

fn run_encode(
    registry: &CodecRegistry,
    reporter: &StderrReporter,
    codec_name: &str,
    collection_path: &Path,
    dict_path: Option<PathBuf>,
    out_path: Option<PathBuf>,
) -> Result<()> {
    let codec = registry.get(codec_name)?;
    let kind = ListKind::from_path(collection_path)?;
    let dict = load_dictionary(codec, dict_path)?;
    let collection = Collection::open(collection_path)?;

    reporter.info(&format!(
        "encoding {} with '{}' ({} dictionary entries)",
        collection_path.display(),
        codec.name(),
        dict.num_entries()
    ));

    let mut out = Vec::new();
    let stats = encode_collection(codec, &dict, &collection, kind, reporter, &mut out)?;

    let bits_per_int = if stats.ints == 0 {
        0.0
    } else {
        (stats.bytes * 8) as f64 / stats.ints as f64
    };
    reporter.info(&format!(
        "done: {} lists, {} ints, {} bytes ({:.2} bits/int)",
        stats.lists, stats.ints, stats.bytes, bits_per_int
    ));

    if let Some(out_path) = out_path {
        fs::write(&out_path, &out)?;
        reporter.info(&format!("wrote {}", out_path.display()));
    }
    Ok(())
}

fn run_check(
    registry: &CodecRegistry,
    reporter: &StderrReporter,
    codec_name: &str,
    collection_path: &Path,
    encoded_path: &Path,
    dict_path: Option<PathBuf>,
) -> Result<()> {
    let codec = registry.get(codec_name)?;
    let kind = ListKind::from_path(collection_path)?;
    let dict = load_dictionary(codec, dict_path)?;
    let collection = Collection::open(collection_path)?;
    let encoded = fs::read(encoded_path)?;

    let report = verify_collection(codec, &dict, &collection, kind, &encoded, reporter)?;

    if report.is_clean() {
        reporter.info(&format!(
            "clean: {} lists, {} ints match",
            report.lists, report.ints
        ));
        return Ok(());
    }

    for defect in &report.defects {
        reporter.info(&format!("defect: {:?}", defect));
    }
    if let Some(reason) = &report.aborted {
        reporter.info(&format!("walk aborted: {}", reason));
    }
    Err(Error::CorruptStream(format!(
        "{} defects across {} checked lists{}",
        report.num_defects,
        report.lists,
        if report.aborted.is_some() {
            " (stream structure broke mid-walk)"
        } else {
            ""
        }
    )))
}
