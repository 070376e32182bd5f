use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading the product catalog.
///
/// Missing individual asset files are not errors; entries degrade to
/// placeholders. These variants cover the manifest itself.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("could not read manifest {path}: {source}")]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed manifest {path}: {source}")]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Failures in the clip playback backend.
#[derive(Debug, Error)]
pub enum PlaybackError {
    #[error("no audio output device: {0}")]
    Device(#[from] rodio::StreamError),

    #[error("could not create playback sink: {0}")]
    Sink(#[from] rodio::PlayError),

    #[error("could not open clip {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not decode clip {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: rodio::decoder::DecoderError,
    },
}
