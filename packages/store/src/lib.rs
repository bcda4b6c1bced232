pub mod config;
pub mod cookie;
pub mod session;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use cookie::CookieStore;

pub use config::TaskifyConfig;
pub use session::{Credential, CredentialStore, Session, SessionStatus};
