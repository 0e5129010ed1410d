use crate::domain::role::Role;

// Domain-level errors for the login workflow.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("login session not found")]
    SessionNotFound,
    #[error("no code has been requested for this session")]
    CodeNotRequested,
    #[error("session is already verified")]
    AlreadyVerified,
    #[error("session storage failure")]
    StorageFailure,
}

// Rejections raised by the pricing engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PricingError {
    #[error("{field} must not be negative (got {value})")]
    NegativeInput { field: &'static str, value: i64 },
    #[error("checkout total overflows")]
    Overflow,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("product {0} not found")]
    ProductNotFound(u64),
    #[error("invalid listing: {0}")]
    InvalidListing(&'static str),
    #[error(transparent)]
    Pricing(#[from] PricingError),
}

// Startup configuration problems.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
    #[error("invalid value for {name}: {value}")]
    InvalidEnv { name: &'static str, value: String },
    #[error("redirect target for {role} must be its home screen, got {path}")]
    InvalidRedirect { role: Role, path: String },
    #[error("invalid pricing: {0}")]
    Pricing(#[from] PricingError),
    #[error("accepted code must not be empty")]
    EmptyAcceptedCode,
    #[error("session idle ttl must be greater than zero")]
    ZeroSessionTtl,
}
