use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_xml_rs::Error,
    },

    #[error("Failed to parse {path:?}: expected root element <dhcpd>, found <{found}>")]
    UnexpectedRoot { path: PathBuf, found: String },

    #[error("Failed to serialize export: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ConvertError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConvertError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: serde_xml_rs::Error) -> Self {
        ConvertError::Parse {
            path: path.into(),
            source,
        }
    }

    pub fn unexpected_root(path: impl Into<PathBuf>, found: impl Into<String>) -> Self {
        ConvertError::UnexpectedRoot {
            path: path.into(),
            found: found.into(),
        }
    }

    pub fn is_io(&self) -> bool {
        matches!(self, ConvertError::Io { .. })
    }

    pub fn is_parse(&self) -> bool {
        matches!(
            self,
            ConvertError::Parse { .. } | ConvertError::UnexpectedRoot { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_names_path() {
        let err = ConvertError::io(
            "data/missing.xml",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        assert!(err.is_io());
        assert!(!err.is_parse());
        assert!(err.to_string().contains("data/missing.xml"));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn wrong_root_is_parse_error() {
        let err = ConvertError::unexpected_root("config.xml", "system");
        assert!(err.is_parse());
        assert!(!err.is_io());
        assert!(err.to_string().contains("found <system>"));
    }
}
