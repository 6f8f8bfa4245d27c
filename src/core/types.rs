//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// A secret identifier: the secret's name or full ARN.
pub type SecretId = String;

/// An AWS region code (e.g., us-east-1).
pub type Region = String;

/// A secret version stage label (e.g., AWSCURRENT).
pub type VersionStage = String;

/// The opaque id AWS assigns to each secret version.
pub type VersionId = String;
