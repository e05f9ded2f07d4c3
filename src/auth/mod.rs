//! Authentication primitives: token signing, credential hashing, middleware

pub mod middleware;
pub mod password;
pub mod token;

pub use middleware::{extract_token, require_auth, AuthContext};
pub use password::{PasswordHasher, Sha256PasswordHasher};
pub use token::{TokenError, TokenSigner};
