use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MeshError {
    #[error("sphere resolution must be at least 2, got {0}")]
    InvalidResolution(u32),

    #[error("sphere resolution must be at most 65536, got {0}")]
    ResolutionTooLarge(u32),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum MarbleError {
    #[error(transparent)]
    Mesh(#[from] MeshError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("export error: {0}")]
    Export(String),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mesh_error_display() {
        let err = MeshError::InvalidResolution(1);
        assert_eq!(
            err.to_string(),
            "sphere resolution must be at least 2, got 1"
        );

        let err = MeshError::ResolutionTooLarge(70_000);
        assert_eq!(
            err.to_string(),
            "sphere resolution must be at most 65536, got 70000"
        );
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("sphere.resolution = 1".into());
        assert_eq!(
            err.to_string(),
            "config validation error: sphere.resolution = 1"
        );
    }

    #[test]
    fn marble_error_from_mesh() {
        let marble_err: MarbleError = MeshError::InvalidResolution(0).into();
        assert!(matches!(marble_err, MarbleError::Mesh(_)));
        assert!(marble_err.to_string().contains("got 0"));
    }

    #[test]
    fn marble_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let marble_err: MarbleError = config_err.into();
        assert!(matches!(marble_err, MarbleError::Config(_)));
        assert!(marble_err.to_string().contains("bad toml"));
    }

    #[test]
    fn marble_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let marble_err: MarbleError = io_err.into();
        assert!(matches!(marble_err, MarbleError::Io(_)));
        assert!(marble_err.to_string().contains("file missing"));
    }

    #[test]
    fn marble_error_other_variants() {
        let err = MarbleError::Export("disk full".into());
        assert_eq!(err.to_string(), "export error: disk full");

        let err = MarbleError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
