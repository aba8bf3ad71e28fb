/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use std::io;
use std::path::PathBuf;

/// Everything that stops a conversion. Each kind exits with its own status
/// so scripts can tell failures apart from success.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("{0}")]
    Usage(String),

    #[error("Fail to open png file {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Can't write the binary file {}: {source}", .path.display())]
    OutputOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed writing pixel data to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write preview {}: {source}", .path.display())]
    Preview {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl ConvertError {
    pub fn exit_code(&self) -> u8 {
        match self {
            ConvertError::Usage(_) => 2,
            ConvertError::Decode { .. } => 3,
            ConvertError::OutputOpen { .. } => 4,
            ConvertError::Write { .. } => 5,
            ConvertError::Preview { .. } => 6,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn exit_codes_are_distinct_and_nonzero() {
        let errors = [
            ConvertError::Usage("usage".into()),
            ConvertError::Decode {
                path: "in.png".into(),
                source: image::ImageError::IoError(io::ErrorKind::NotFound.into()),
            },
            ConvertError::OutputOpen {
                path: "out.raw".into(),
                source: io::ErrorKind::PermissionDenied.into(),
            },
            ConvertError::Write {
                path: "out.raw".into(),
                source: io::ErrorKind::WriteZero.into(),
            },
            ConvertError::Preview {
                path: "preview.png".into(),
                source: "bad".into(),
            },
        ];

        let codes: HashSet<u8> = errors.iter().map(ConvertError::exit_code).collect();
        assert!(!codes.contains(&0));
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn messages_name_the_path() {
        let err = ConvertError::OutputOpen {
            path: "missing/dir/out.raw".into(),
            source: io::ErrorKind::NotFound.into(),
        };
        assert!(err.to_string().contains("missing/dir/out.raw"));
    }
}
