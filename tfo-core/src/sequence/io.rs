use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use bio::io::fasta;

use crate::types::TfoError;

/// FASTA record as `(id, description, sequence)`
pub type FastaRecord = (String, Option<String>, Vec<u8>);

fn collect_records<R: Read>(
    reader: fasta::Reader<BufReader<R>>,
) -> Result<Vec<FastaRecord>, TfoError> {
    let mut sequences = Vec::new();

    for result in reader.records() {
        let record = result.map_err(|e| TfoError::ParseError(e.to_string()))?;
        let id = record.id().to_string();
        let description = record.desc().map(String::from);
        let seq = record.seq().to_vec();
        sequences.push((id, description, seq));
    }

    Ok(sequences)
}

/// Read every record of a FASTA file using rust-bio
pub fn read_fasta_sequences<P: AsRef<Path>>(path: P) -> Result<Vec<FastaRecord>, TfoError> {
    let file = File::open(path)?;
    collect_records(fasta::Reader::new(file))
}

/// Parse FASTA records held in memory
pub fn parse_fasta_str(content: &str) -> Result<Vec<FastaRecord>, TfoError> {
    collect_records(fasta::Reader::new(content.as_bytes()))
}
