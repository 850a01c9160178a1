//! Reading the webhook payload file written by the host runner.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

use crate::error::BotError;

/// Reads the event payload at `path`.
///
/// # Errors
///
/// Returns [`BotError::MissingEventPath`] for an empty path and
/// [`BotError::Io`] when the file cannot be opened or read.
pub fn read_event_payload(path: &Utf8Path) -> Result<Vec<u8>, BotError> {
    if path.as_str().trim().is_empty() {
        return Err(BotError::MissingEventPath);
    }

    let file_name = path.file_name().ok_or_else(|| BotError::Io {
        message: format!("event path '{path}' does not name a file"),
    })?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };

    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|error| BotError::Io {
        message: format!("failed to open event directory '{parent}': {error}"),
    })?;
    dir.read(file_name).map_err(|error| BotError::Io {
        message: format!("failed to read event payload '{path}': {error}"),
    })
}
