//! Credentials, access tokens, and the redacting secret wrapper they share.

pub mod credentials;
pub mod secret;
pub mod token;

pub use credentials::*;
pub use secret::*;
pub use token::*;
