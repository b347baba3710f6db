#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// No preset in the catalogue carries this name.
    #[error("unknown CRC algorithm '{0}'")]
    UnknownAlgorithm(String),
    /// Register widths other than 8, 16 and 32 bits are not supported.
    #[error("unsupported CRC width {0}, expected 8, 16 or 32")]
    UnsupportedWidth(u32),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
