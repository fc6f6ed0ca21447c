//! Memory-mapped file support for efficient I/O.
//!
//! Large uncompressed FASTQ files can be scanned straight from a read-only
//! mapping instead of being copied into a buffer first. The counting
//! semantics do not change.
//!
//! # Example
//!
//! ```rust,no_run
//! use oligocount::mmap::MmapSequence;
//!
//! let mmap = MmapSequence::open("reads.fastq")?;
//! let data = mmap.as_bytes();
//! // Scan the memory-mapped data...
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//! # Safety
//!
//! Memory mapping relies on the underlying file not being modified while
//! the mapping is active. Modifying a mapped file leads to undefined behavior.

use memmap2::Mmap;
use std::{fs::File, io, path::Path};

/// A memory-mapped sequence file.
///
/// The file is mapped read-only. Its handle is closed once the mapping
/// exists; the mapping itself is released when this value is dropped.
pub struct MmapSequence {
    mmap: Mmap,
}

impl MmapSequence {
    /// Open and memory-map a sequence file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or mapped.
    ///
    /// # Safety
    ///
    /// The underlying file must not be modified while this mapping exists.
    #[allow(unsafe_code)]
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::open(path)?;
        // SAFETY: We rely on the file not being modified while mapped.
        // This is documented behavior that callers must ensure.
        let mmap = unsafe { Mmap::map(&file)? };
        Ok(Self { mmap })
    }

    /// Get a slice of the mapped file contents.
    pub fn as_bytes(&self) -> &[u8] {
        &self.mmap
    }

    pub fn len(&self) -> usize {
        self.mmap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mmap.is_empty()
    }
}
