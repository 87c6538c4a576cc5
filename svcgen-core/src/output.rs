//! Output destinations.

use std::{
    fs,
    io::{self, BufWriter, Write},
    path::PathBuf,
};

use tracing::debug;

use crate::{Error, Result};

/// Where the generated module is written.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OutputTarget {
    /// The process's standard output.
    #[default]
    Stdout,
    /// A file that is created (or truncated) before writing.
    File(PathBuf),
}

impl OutputTarget {
    /// Acquire the output stream.
    ///
    /// Nothing is written here; a file target is only created.
    pub fn open(&self) -> Result<Output> {
        match self {
            Self::Stdout => Ok(Output::Stdout(io::stdout().lock())),
            Self::File(path) => {
                let file = fs::File::create(path).map_err(|source| Error::Io {
                    path: path.clone(),
                    source,
                })?;
                debug!(path = %path.display(), "opened output file");
                Ok(Output::File(BufWriter::new(file)))
            }
        }
    }
}

/// An open output stream.
///
/// The stream is released when the value is dropped, which happens exactly
/// once whether or not [`Output::emit`] succeeds.
#[derive(Debug)]
pub enum Output {
    Stdout(io::StdoutLock<'static>),
    File(BufWriter<fs::File>),
}

impl Output {
    /// Write the full content, flush, and release the stream.
    ///
    /// Any write or flush failure is a render error; bytes already written
    /// must be treated as invalid.
    pub fn emit(mut self, content: &[u8]) -> Result<()> {
        self.write_all(content).map_err(Error::render)?;
        self.flush().map_err(Error::render)?;
        debug!(bytes = content.len(), "output written");
        Ok(())
    }
}

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Stdout(out) => out.write(buf),
            Self::File(out) => out.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Stdout(out) => out.flush(),
            Self::File(out) => out.flush(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_target_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("todo.go");

        let output = OutputTarget::File(path.clone()).open().unwrap();
        output.emit(b"package server\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "package server\n");
    }

    #[test]
    fn test_unopenable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("todo.go");

        let target = OutputTarget::File(path.clone());
        let err = target.open().unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert_eq!(
            err.to_string(),
            format!("unable to open file {}", path.display())
        );
        assert!(!path.exists());
    }

    #[test]
    fn test_open_truncates_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("todo.go");
        fs::write(&path, "stale content that is longer").unwrap();

        OutputTarget::File(path.clone())
            .open()
            .unwrap()
            .emit(b"fresh")
            .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "fresh");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_full_device_is_render_error() {
        let target = OutputTarget::File(PathBuf::from("/dev/full"));
        let output = target.open().unwrap();

        let err = output.emit(b"package server\n").unwrap_err();
        assert!(matches!(err, Error::Render { .. }));
        assert_eq!(err.to_string(), "unable to render output");
        assert_eq!(err.exit_code(), 2);
    }
}
