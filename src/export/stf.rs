use crate::error::ExportError;
use crate::stf::StfDocument;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Line terminator written after every line of the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Writes the document text split on `\n`, each piece followed by `line_ending`.
///
/// The empty piece after the final newline is written too, so files end
/// with a blank line.
pub fn write_lines<W: Write>(
    writer: &mut W,
    document: &StfDocument,
    line_ending: LineEnding,
) -> io::Result<()> {
    let text = document.to_text();
    for piece in text.split('\n') {
        writer.write_all(piece.as_bytes())?;
        writer.write_all(line_ending.as_str().as_bytes())?;
    }
    Ok(())
}

/// Writes `document` to `path`.
///
/// Data goes to a temporary file next to `path` first and is moved into
/// place only once everything is flushed, so a failed export leaves no
/// partial file behind.
pub fn write_stf<P: AsRef<Path>>(
    document: &StfDocument,
    path: P,
    line_ending: LineEnding,
) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    let dir = match path_ref.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(|source| ExportError::FileCreate {
        path: path_ref.to_path_buf(),
        source,
    })?;

    {
        let mut writer = BufWriter::new(file.as_file_mut());
        write_lines(&mut writer, document, line_ending)
            .and_then(|()| writer.flush())
            .map_err(|e| ExportError::WriteError {
                message: e.to_string(),
            })?;
    }

    file.persist(path_ref)
        .map_err(|source| ExportError::Persist {
            path: path_ref.to_path_buf(),
            source,
        })?;

    tracing::info!(lines = document.len(), "wrote {}", path_ref.display());
    Ok(())
}
