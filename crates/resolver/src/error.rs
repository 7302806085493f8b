use thiserror::Error;

/// Errors from loading or rendering action definition documents.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The document file could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML render error: {0}")]
    TomlRender(#[from] toml::ser::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// A top-level table names no known action block.
    #[error("unknown action block: {0}")]
    UnknownBlock(String),

    /// A known block holds something other than a table or a list of tables.
    #[error("invalid {block} block: {source}")]
    InvalidBlock {
        block: String,
        #[source]
        source: serde_json::Error,
    },

    /// The file extension maps to no supported document format.
    #[error("unsupported document format: {0}")]
    UnsupportedFormat(String),
}
