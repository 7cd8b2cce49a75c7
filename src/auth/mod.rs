mod client;
mod guard;
mod token;

pub use client::{login, login_outcome, register, AuthResponse};
pub use guard::{is_authenticated, require_auth, require_guest};
pub use token::{FilesystemTokenStore, StoredToken, TokenStore, TOKEN_EXPIRY_DAYS};
