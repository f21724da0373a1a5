pub mod jwt;
pub mod password;
mod types;

pub use jwt::{JwtKeys, TokenSigner};
pub use types::{AuthError, Claims, UserId};
