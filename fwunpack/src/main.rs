mod manifest;


use std::path::PathBuf;

use clap::Parser;
use tracing::warn;


#[derive(Parser)]
enum ProgMode {
    /// Decompress a file containing a single raw LZSS stream.
    Expand(ExpandArgs),

    /// Slice the compressed segments out of a firmware image and decompress
    /// each into its own output file.
    Extract(ExtractArgs),
}

#[derive(Parser)]
struct ExpandArgs {
    pub input_file: PathBuf,
    pub output_file: PathBuf,
}

#[derive(Parser)]
struct ExtractArgs {
    pub firmware_file: PathBuf,
    pub manifest_file: PathBuf,
    pub output_dir: Option<PathBuf>,
}


fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mode = ProgMode::parse();
    match mode {
        ProgMode::Expand(args) => {
            let compressed = std::fs::read(&args.input_file)
                .expect("failed to read input file");
            let decompressed = decompress_lenient(&compressed, &args.input_file.display().to_string());
            std::fs::write(&args.output_file, &decompressed)
                .expect("failed to write output file");
        },
        ProgMode::Extract(args) => {
            let image = std::fs::read(&args.firmware_file)
                .expect("failed to read firmware image");
            let entries = manifest::read_manifest(&args.manifest_file);
            let output_dir = args.output_dir.unwrap_or_else(|| PathBuf::from("."));

            for entry in &entries {
                let compressed = expandhp::segment::segment_bytes(&image, entry.location)
                    .expect("segment lies outside the firmware image");
                let decompressed = decompress_lenient(compressed, &entry.output_name);
                std::fs::write(output_dir.join(&entry.output_name), &decompressed)
                    .expect("failed to write segment output file");
            }
        },
    }
}

/// Decodes one stream, keeping whatever output was produced if the stream
/// runs past its declared length.
fn decompress_lenient(compressed: &[u8], what: &str) -> Vec<u8> {
    let mut decompressed = Vec::new();
    if let Err(e) = expandhp::lzss::decompress(compressed, &mut decompressed) {
        warn!("{}: {}; keeping {} bytes of partial output", what, e, decompressed.len());
    }
    decompressed
}
