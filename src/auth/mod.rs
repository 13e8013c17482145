//! Authentication session module

mod session;
mod traits;

pub use session::LocalAuthSession;
pub use traits::AuthSession;

#[cfg(test)]
pub use traits::MockAuthSession;
