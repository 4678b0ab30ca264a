// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::mem;
use std::path::Path;

use log::debug;

use crate::errors::{AlnstatError, AlnstatResult};
use crate::seq::record::RawRecord;

pub const RECORD_MARKER: char = '>';

/// Lazily splits a FastA text stream into raw records, in file order.
///
/// The reader is consumed as it goes: once exhausted (or after the first error, after which it
/// only yields `None`) the source has to be reopened to be read again.
pub struct FastaReader<R> {
    reader: R,
    buf: String,
    line_num: usize,
    offset: usize,
    current_header: Option<String>,
    current_body: String,
    done: bool,
}

impl<R: BufRead> FastaReader<R> {
    pub fn new(reader: R) -> Self {
        FastaReader {
            reader,
            buf: String::new(),
            line_num: 0,
            offset: 0,
            current_header: None,
            current_body: String::new(),
            done: false,
        }
    }

    fn fail(&mut self, line_offset: usize, message: &str) -> AlnstatError {
        self.done = true;
        AlnstatError::Parse {
            line: self.line_num,
            offset: line_offset,
            message: message.to_string(),
        }
    }

    fn finish_record(&mut self, header: String) -> RawRecord {
        RawRecord {
            header,
            body: mem::take(&mut self.current_body),
        }
    }
}

impl<R: BufRead> Iterator for FastaReader<R> {
    type Item = AlnstatResult<RawRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.done {
                return None;
            }

            self.buf.clear();
            let nread = match self.reader.read_line(&mut self.buf) {
                Ok(n) => n,
                Err(e) => {
                    self.done = true;
                    return Some(Err(e.into()));
                }
            };
            if nread == 0 {
                // EOF: flush the last record, if any.
                self.done = true;
                return self
                    .current_header
                    .take()
                    .map(|hdr| Ok(self.finish_record(hdr)));
            }
            self.line_num += 1;
            let line_offset = self.offset;
            self.offset += nread;

            if let Some(rest) = self.buf.strip_prefix(RECORD_MARKER) {
                let header = rest.trim().to_string();
                if header.is_empty() {
                    return Some(Err(self.fail(line_offset, "empty header after '>'")));
                }
                if let Some(previous) = self.current_header.replace(header) {
                    return Some(Ok(self.finish_record(previous)));
                }
            } else if self.buf.trim().is_empty() {
                continue;
            } else if self.current_header.is_none() {
                return Some(Err(
                    self.fail(line_offset, "sequence data before first '>' marker")
                ));
            } else {
                self.current_body
                    .extend(self.buf.chars().filter(|c| !c.is_whitespace()));
            }
        }
    }
}

pub fn open_fasta_file<P: AsRef<Path>>(path: P) -> AlnstatResult<FastaReader<BufReader<File>>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        debug!("opening {}: {}", path.display(), e);
        AlnstatError::SourceNotFound {
            path: path.to_path_buf(),
        }
    })?;
    Ok(FastaReader::new(BufReader::new(file)))
}

pub fn read_fasta_file<P: AsRef<Path>>(path: P) -> AlnstatResult<Vec<RawRecord>> {
    open_fasta_file(path)?.collect()
}

pub fn read_fasta_str(content: &str) -> AlnstatResult<Vec<RawRecord>> {
    FastaReader::new(content.as_bytes()).collect()
}
