//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Flat classification of every failure the pipeline can report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MalformedDescriptor,
    UnknownSymbol,
    InvalidAddress,
    AddressOutOfRange,
    AmountOutOfRange,
    MissingTokenAddress,
    InvalidShortString,
    EmptyDataset,
}

/// Errors that can occur while parsing a reward descriptor
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DescriptorError {
    #[error("Malformed descriptor '{front}': {reason}")]
    Malformed { front: String, reason: String },

    #[error("Unknown token symbol: {0}")]
    UnknownSymbol(String),
}

/// Errors that can occur while normalizing an address
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("Invalid address '{address}': {reason}")]
    Invalid { address: String, reason: String },

    #[error("Address does not fit the Starknet field: {0}")]
    OutOfRange(String),
}

/// Errors that can occur while building a leaf record
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LeafError {
    #[error(transparent)]
    Descriptor(#[from] DescriptorError),

    #[error(transparent)]
    Address(#[from] AddressError),

    #[error("No token address configured for symbol {0}")]
    MissingTokenAddress(String),

    #[error("Amount does not fit the Starknet field: {0}")]
    AmountOutOfRange(String),

    #[error("Cannot encode '{0}' as a Cairo short string")]
    InvalidShortString(String),
}

/// Errors that can occur while folding statistics
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    #[error("No entries to aggregate")]
    EmptyDataset,
}

/// Errors that abort a dataset run
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DatasetError {
    #[error("Dataset contains no entries")]
    EmptyDataset,

    #[error("Entry {index} (address '{address}', front '{front}') rejected: {source}")]
    Entry {
        index: usize,
        address: String,
        front: String,
        #[source]
        source: LeafError,
    },
}

/// Errors that can occur while loading the drop configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("No leaf layout selected; set `layout` in the config or pass --layout")]
    MissingLayout,

    #[error("Unknown leaf layout: {0}")]
    UnknownLayout(String),

    #[error("Invalid address for token {symbol}: {source}")]
    InvalidTokenAddress {
        symbol: String,
        #[source]
        source: AddressError,
    },

    #[error("Invalid mystery pool amount for {name}: {amount}")]
    InvalidPoolAmount { name: String, amount: String },

    #[error("Invalid config value: {0}")]
    Invalid(String),
}

/// Errors that can occur while loading the card list
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read input file: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML deserialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}

impl DescriptorError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Malformed { .. } => ErrorKind::MalformedDescriptor,
            Self::UnknownSymbol(_) => ErrorKind::UnknownSymbol,
        }
    }
}

impl AddressError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Invalid { .. } => ErrorKind::InvalidAddress,
            Self::OutOfRange(_) => ErrorKind::AddressOutOfRange,
        }
    }
}

impl LeafError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Descriptor(e) => e.kind(),
            Self::Address(e) => e.kind(),
            Self::MissingTokenAddress(_) => ErrorKind::MissingTokenAddress,
            Self::AmountOutOfRange(_) => ErrorKind::AmountOutOfRange,
            Self::InvalidShortString(_) => ErrorKind::InvalidShortString,
        }
    }
}

impl DatasetError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyDataset => ErrorKind::EmptyDataset,
            Self::Entry { source, .. } => source.kind(),
        }
    }

    /// Position of the failing entry, if the failure belongs to one
    pub fn entry_index(&self) -> Option<usize> {
        match self {
            Self::EmptyDataset => None,
            Self::Entry { index, .. } => Some(*index),
        }
    }
}

impl From<StatsError> for DatasetError {
    fn from(err: StatsError) -> Self {
        match err {
            StatsError::EmptyDataset => Self::EmptyDataset,
        }
    }
}
