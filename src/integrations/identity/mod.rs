pub mod provider;

pub use provider::{IdentityProvider, LocalIdentityProvider, Session};
