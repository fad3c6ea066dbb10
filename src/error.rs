#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Base58Error {
    #[error("Malformed hex input: {0}")]
    MalformedInput(#[from] hex::FromHexError),

    #[error("Invalid encoded length {len} (trailing block of {last_block_size} symbols)")]
    InvalidLength { len: usize, last_block_size: usize },

    #[error("Invalid block length: {0}")]
    InvalidBlockLength(usize),

    #[error("Invalid block size: {0} symbols do not map to a decoded block")]
    InvalidBlockSize(usize),

    #[error("Invalid symbol '{0}'")]
    InvalidSymbol(char),

    #[error("Overflow")]
    Overflow,

    #[error("Output buffer too small (needed {needed} bytes, got {available})")]
    BufferTooSmall { needed: usize, available: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum TraceError {
    #[error(transparent)]
    Logger(#[from] tracing_log::log::SetLoggerError),

    #[error(transparent)]
    Subscriber(#[from] tracing::subscriber::SetGlobalDefaultError),
}
