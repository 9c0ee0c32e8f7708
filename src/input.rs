// Fri Oct 16 2026 - Alex

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Error opening file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Error reading file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Please specify either a file with -f or a single domain with -d")]
    NoDomainSpecified,
}

pub fn read_domain_file(path: &Path) -> Result<Vec<String>, InputError> {
    let file = File::open(path).map_err(|source| InputError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut domains = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|source| InputError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let domain = line.trim();
        if !domain.is_empty() {
            domains.push(domain.to_string());
        }
    }

    Ok(domains)
}

/// File entries come first, the single domain is appended after them.
/// Duplicates are kept and scanned independently.
pub fn collect_domains(file: Option<&Path>, single: Option<&str>) -> Result<Vec<String>, InputError> {
    let single = single.map(str::trim).filter(|d| !d.is_empty());

    if file.is_none() && single.is_none() {
        return Err(InputError::NoDomainSpecified);
    }

    let mut domains = match file {
        Some(path) => read_domain_file(path)?,
        None => Vec::new(),
    };

    if let Some(domain) = single {
        domains.push(domain.to_string());
    }

    log::debug!("Collected {} domains", domains.len());
    Ok(domains)
}
