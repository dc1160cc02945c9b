use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use expandhp::segment::SegmentLocation;


/// One line of the segment manifest: where a compressed segment sits in the
/// firmware image and the file name its decompressed contents go to.
#[derive(Clone, Debug)]
pub(crate) struct ManifestEntry {
    pub location: SegmentLocation,
    pub output_name: String,
}


fn parse_number(text: &str) -> Option<usize> {
    if let Some(hex_digits) = text.strip_prefix("0x") {
        usize::from_str_radix(hex_digits, 16).ok()
    } else {
        text.parse().ok()
    }
}

/// Reads segment entries from a manifest file.
///
/// Each entry is a line of `offset length name`; offset and length take
/// decimal or `0x`-prefixed hexadecimal. Blank lines and lines starting
/// with `#` are skipped.
pub(crate) fn read_manifest(path: &Path) -> Vec<ManifestEntry> {
    let manifest_file = File::open(path)
        .expect("failed to open manifest file");
    let mut manifest_reader = BufReader::new(manifest_file);

    let mut string = String::new();
    let mut entries = Vec::new();
    loop {
        string.clear();
        let bytes_read = manifest_reader.read_line(&mut string)
            .expect("failed to read line");
        if bytes_read == 0 {
            break;
        }

        let trimmed = string.trim();
        if trimmed.len() == 0 {
            // empty line
            continue;
        }
        if trimmed.starts_with("#") {
            // comment
            continue;
        }

        let mut pieces = trimmed.split_whitespace();
        let offset = pieces.next().and_then(parse_number)
            .expect("manifest line is missing a valid segment offset");
        let length = pieces.next().and_then(parse_number)
            .expect("manifest line is missing a valid segment length");
        let output_name = pieces.next()
            .expect("manifest line is missing an output name");
        if pieces.next().is_some() {
            panic!("manifest line has trailing fields: {:?}", trimmed);
        }

        entries.push(ManifestEntry {
            location: SegmentLocation { offset, length },
            output_name: output_name.to_owned(),
        });
    }
    entries
}
