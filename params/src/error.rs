use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ParamsError {
    #[error("Failed to read parameter file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("YAML parsing failed")]
    Yaml(#[from] serde_yml::Error),
    #[error("Parameter document root is not a mapping")]
    NotAMapping,
    #[error("Namespace '{0}' is missing or not a mapping")]
    MissingNamespace(String),
}

pub type Result<T> = std::result::Result<T, ParamsError>;
