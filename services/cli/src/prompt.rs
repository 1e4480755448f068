use homematch::config::FileConfig;
use homematch::error::InputFileError;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// Asks for an input file name; a blank answer selects the configured default.
pub(crate) fn prompt_for_input<R: BufRead, W: Write>(
    files: &FileConfig,
    reader: &mut R,
    writer: &mut W,
) -> Result<PathBuf, InputFileError> {
    writeln!(
        writer,
        "Custom input file (leave blank for ./{}):",
        files.input_file
    )
    .and_then(|()| writer.flush())
    .map_err(InputFileError::Prompt)?;

    let mut answer = String::new();
    reader
        .read_line(&mut answer)
        .map_err(InputFileError::Prompt)?;

    let answer = answer.trim();
    if answer.is_empty() {
        Ok(files.default_input_path())
    } else {
        Ok(files.resolve(answer))
    }
}

/// Confirms the file exists and can be opened before any parsing starts.
pub(crate) fn verify_input_file(path: &Path) -> Result<(), InputFileError> {
    if !path.exists() {
        return Err(InputFileError::NotFound {
            path: path.to_path_buf(),
        });
    }

    std::fs::File::open(path).map_err(|source| InputFileError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(())
}
