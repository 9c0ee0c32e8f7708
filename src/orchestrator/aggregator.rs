// Fri Oct 16 2026 - Alex

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Receiver;
use std::thread::{self, JoinHandle};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SinkError {
    #[error("Error creating output file {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Error writing to output file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Error flushing output file {path}: {source}")]
    Flush {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Output writer thread panicked")]
    Panicked,
}

/// One domain's subdomains, one per line with a trailing newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputChunk {
    text: String,
    lines: usize,
}

impl OutputChunk {
    pub fn from_subdomains(subdomains: &[String]) -> Option<Self> {
        if subdomains.is_empty() {
            return None;
        }

        let mut text = subdomains.join("\n");
        text.push('\n');

        Some(Self {
            text,
            lines: subdomains.len(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn lines(&self) -> usize {
        self.lines
    }
}

#[derive(Debug, Default)]
pub struct SinkReport {
    pub chunks_written: usize,
    pub lines_written: usize,
    pub chunks_discarded: usize,
    pub error: Option<SinkError>,
}

impl SinkReport {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    pub fn failed(error: SinkError) -> Self {
        Self {
            error: Some(error),
            ..Self::default()
        }
    }
}

/// Sole owner of the output file for a run.
pub struct OutputAggregator {
    path: PathBuf,
}

impl OutputAggregator {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    pub fn spawn(self, receiver: Receiver<OutputChunk>) -> JoinHandle<SinkReport> {
        thread::spawn(move || self.run(receiver))
    }

    /// Consumes chunks until every sender is gone. On a sink error the
    /// remaining chunks are still received and discarded so producers never
    /// stall on a dead consumer.
    pub fn run(&self, receiver: Receiver<OutputChunk>) -> SinkReport {
        match File::create(&self.path) {
            Ok(file) => consume(file, &self.path, receiver),
            Err(source) => {
                log::error!("Cannot create {}: {}", self.path.display(), source);
                let mut report = SinkReport::failed(SinkError::Create {
                    path: self.path.clone(),
                    source,
                });
                report.chunks_discarded = drain(&receiver);
                report
            }
        }
    }
}

pub(crate) fn consume<W: Write>(mut sink: W, path: &Path, receiver: Receiver<OutputChunk>) -> SinkReport {
    let mut report = SinkReport::default();

    for chunk in receiver.iter() {
        if let Err(source) = sink.write_all(chunk.as_str().as_bytes()) {
            log::error!("Write to {} failed: {}", path.display(), source);
            report.error = Some(SinkError::Write {
                path: path.to_path_buf(),
                source,
            });
            report.chunks_discarded = 1 + drain(&receiver);
            return report;
        }

        report.chunks_written += 1;
        report.lines_written += chunk.lines();
        log::debug!("Wrote {} lines to {}", chunk.lines(), path.display());
    }

    if let Err(source) = sink.flush() {
        report.error = Some(SinkError::Flush {
            path: path.to_path_buf(),
            source,
        });
    }

    report
}

fn drain(receiver: &Receiver<OutputChunk>) -> usize {
    let discarded = receiver.iter().count();
    if discarded > 0 {
        log::warn!("Discarded {} result chunks after output error", discarded);
    }
    discarded
}
