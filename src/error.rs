/// Errors raised when a component is assigned a value in the wrong format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    /// Hash is neither empty nor starts with `#`
    InvalidHash,
    /// Pathname does not start with `/`
    InvalidPathname,
    /// Protocol does not end with `:`
    InvalidProtocol,
    /// Port is not the canonical decimal form of a positive integer
    InvalidPort,
    /// Search is neither empty nor starts with `?`
    InvalidSearch,
}

impl FormatError {
    /// Name of the component that rejected the value
    pub fn field(self) -> &'static str {
        match self {
            Self::InvalidHash => "hash",
            Self::InvalidPathname => "pathname",
            Self::InvalidProtocol => "protocol",
            Self::InvalidPort => "port",
            Self::InvalidSearch => "search",
        }
    }
}

impl core::fmt::Display for FormatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::InvalidHash => "Invalid hash: must be empty or start with '#'",
            Self::InvalidPathname => "Invalid pathname: must start with '/'",
            Self::InvalidProtocol => "Invalid protocol: must end with ':'",
            Self::InvalidPort => {
                "Invalid port: must be empty or a positive integer without leading zeros"
            }
            Self::InvalidSearch => "Invalid search: must be empty or start with '?'",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FormatError {}

/// Result type for component assignment
pub type Result<T> = core::result::Result<T, FormatError>;
