//! Writing generated programs to disk

use std::io::{self, Write};
use std::path::Path;

use atomicwrites::{AtomicFile, OverwriteBehavior};
use log::debug;

/// Default file name for the generated program
pub const DEFAULT_OUTPUT_FILE: &str = "multi_diameter_drill_test.cix";

/// Write `contents` to `path` atomically.
///
/// The text goes to a temporary file in the target directory which is then
/// renamed over `path`. If anything fails, `path` is left as it was.
pub fn write_atomic(path: &Path, contents: &str) -> io::Result<()> {
    debug!("Writing {} bytes to {}", contents.len(), path.display());

    AtomicFile::new(path, OverwriteBehavior::AllowOverwrite)
        .write(|f| {
            f.write_all(contents.as_bytes())?;
            f.flush()
        })
        .map_err(|err| match err {
            atomicwrites::Error::Internal(e) | atomicwrites::Error::User(e) => e,
        })
}
