use crate::utils::error::{PageError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::iter::Enumerate;
use std::path::{Path, PathBuf};

/// Single-pass iterator over the lines of a text source.
///
/// Each item keeps its line terminator exactly as stored; the last line may
/// have none. A read error is yielded once and ends the sequence.
pub struct RecordLines<R = BufReader<File>> {
    reader: R,
    path: PathBuf,
    finished: bool,
}

impl RecordLines {
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| PageError::MissingFile {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Opened {}", path.display());
        Ok(Self::new(BufReader::new(file), path))
    }
}

impl<R: BufRead> RecordLines<R> {
    pub fn new(reader: R, path: impl Into<PathBuf>) -> Self {
        Self {
            reader,
            path: path.into(),
            finished: false,
        }
    }
}

impl<R: BufRead> Iterator for RecordLines<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => {
                self.finished = true;
                None
            }
            Ok(_) => Some(Ok(line)),
            Err(source) => {
                self.finished = true;
                Some(Err(PageError::ReadFailure {
                    path: self.path.clone(),
                    source,
                }))
            }
        }
    }
}

/// Lines of a source whose 0-based index is in a sorted index set.
///
/// Scanning stops once the last selected index has been emitted; indices past
/// the end of the source are never matched.
pub struct SampledLines<R = BufReader<File>> {
    lines: Enumerate<RecordLines<R>>,
    indices: Vec<usize>,
    cursor: usize,
}

impl<R: BufRead> SampledLines<R> {
    /// `indices` must be sorted ascending without duplicates.
    pub fn new(lines: RecordLines<R>, indices: Vec<usize>) -> Self {
        debug_assert!(indices.windows(2).all(|pair| pair[0] < pair[1]));
        Self {
            lines: lines.enumerate(),
            indices,
            cursor: 0,
        }
    }
}

impl<R: BufRead> Iterator for SampledLines<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let target = *self.indices.get(self.cursor)?;

        loop {
            let (index, item) = self.lines.next()?;
            match item {
                Err(e) => return Some(Err(e)),
                Ok(line) if index == target => {
                    self.cursor += 1;
                    return Some(Ok(line));
                }
                Ok(_) => continue,
            }
        }
    }
}
