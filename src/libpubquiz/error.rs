use crate::libpubquiz::quiz::ExtraRound;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot read or write file: {0}")]
    Io(#[from] io::Error),
    #[error("malformed YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("don't know how to read {0:?} (expected .yaml, .yml or .json)")]
    UnknownFormat(PathBuf),
    #[error("no template named {0:?}")]
    UnknownTemplate(String),
    #[error("{0} rounds are not implemented")]
    Unimplemented(ExtraRound),
}
