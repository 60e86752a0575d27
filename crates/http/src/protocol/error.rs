use std::io;

use http::Version;
use thiserror::Error;

use crate::header::PseudoHeader;

#[derive(Error, Debug)]
pub enum SendError {
    #[error("unsupported http version: {0:?}")]
    UnsupportedVersion(Version),

    #[error("missing value for pseudo-header {name}")]
    MissingPseudoHeader { name: PseudoHeader },

    #[error("io error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
}

impl SendError {
    pub fn missing_pseudo_header(name: PseudoHeader) -> Self {
        Self::MissingPseudoHeader { name }
    }

    pub fn io<E: Into<io::Error>>(e: E) -> Self {
        Self::Io { source: e.into() }
    }
}
