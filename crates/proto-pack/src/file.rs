//! Saving encoded messages to disk and loading them back.
//!
//! Files hold exactly the binary encoding of one message: no header, no
//! length prefix, no checksum. Writes are not atomic.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::ProtoError;
use crate::message::Message;

/// Encodes `message` and writes it to `path`, replacing any existing file.
pub fn save_to_path<M, P>(path: P, message: &M) -> Result<(), ProtoError>
where
    M: Message + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let bytes = message.encode_to_vec()?;
    fs::write(path, &bytes).map_err(|source| ProtoError::Io {
        op: "write",
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), size = bytes.len(), message = message.full_name(), "saved message");
    Ok(())
}

/// Reads `path` and replaces the contents of `message` with the decoded value.
pub fn load_into<M, P>(path: P, message: &mut M) -> Result<(), ProtoError>
where
    M: Message + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| ProtoError::Io {
        op: "read",
        path: path.to_path_buf(),
        source,
    })?;
    message.clear();
    message.merge(&bytes)?;
    debug!(path = %path.display(), size = bytes.len(), message = message.full_name(), "loaded message");
    Ok(())
}

/// Reads `path` into a fresh message.
pub fn load_from_path<M, P>(path: P) -> Result<M, ProtoError>
where
    M: Message + Default,
    P: AsRef<Path>,
{
    let mut message = M::default();
    load_into(path, &mut message)?;
    Ok(message)
}
