//! Whole-file reads of input sequence files.
//!
//! Each file is materialized in full and its handle is closed before the
//! content is handed back, so at most one input file is open at a time.
//! No FASTQ structure is interpreted: header, sequence and quality lines are
//! all part of the scanned bytes.

use std::path::Path;

use crate::error::{OligoCountError, Result};

/// Content of one input file, ready to be scanned.
pub enum SequenceContent {
    /// Bytes read into memory.
    Buffer(Vec<u8>),
    /// Read-only memory map of an uncompressed file.
    #[cfg(feature = "mmap")]
    Mapped(crate::mmap::MmapSequence),
}

impl SequenceContent {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Buffer(bytes) => bytes,
            #[cfg(feature = "mmap")]
            Self::Mapped(mmap) => mmap.as_bytes(),
        }
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }
}

/// Check if a path has a gzip extension (.gz).
#[cfg(feature = "gzip")]
fn is_gzip_path(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "gz")
}

/// Opens `path` and returns its full content.
///
/// With the `gzip` feature, `.gz` files are decompressed (multi-member
/// archives included). With the `mmap` feature, other non-empty files are
/// memory-mapped instead of copied.
///
/// # Errors
///
/// Returns [`OligoCountError::SequenceRead`] if the file cannot be opened,
/// read or decompressed.
pub fn read_content(path: &Path) -> Result<SequenceContent> {
    let read_err = |source: std::io::Error| OligoCountError::SequenceRead {
        source,
        path: path.to_path_buf(),
    };

    #[cfg(feature = "gzip")]
    if is_gzip_path(path) {
        use std::io::Read;

        let file = std::fs::File::open(path).map_err(read_err)?;
        let mut bytes = Vec::new();
        flate2::read::MultiGzDecoder::new(file)
            .read_to_end(&mut bytes)
            .map_err(read_err)?;
        return Ok(SequenceContent::Buffer(bytes));
    }

    #[cfg(feature = "mmap")]
    {
        if std::fs::metadata(path).map_err(read_err)?.len() == 0 {
            return Ok(SequenceContent::Buffer(Vec::new()));
        }
        let mapped = crate::mmap::MmapSequence::open(path).map_err(read_err)?;
        Ok(SequenceContent::Mapped(mapped))
    }

    #[cfg(not(feature = "mmap"))]
    {
        use std::io::Read;

        let mut file = std::fs::File::open(path).map_err(read_err)?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(read_err)?;
        Ok(SequenceContent::Buffer(bytes))
    }
}
