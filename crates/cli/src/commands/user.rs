//! User management commands.
//!
//! # Usage
//!
//! ```bash
//! pantry-cli user create -e ana@example.com -u ana -p secret
//! pantry-cli user list
//! ```

use tracing::info;

use smart_pantry_server::repo::UserRepository;
use smart_pantry_server::services::auth::AuthService;

/// Register a new user account.
///
/// # Errors
///
/// Returns an error for invalid fields, a duplicate email, or a store
/// failure.
pub fn create(email: &str, username: &str, password: &str) -> Result<(), Box<dyn std::error::Error>> {
    let store = super::open_store()?;

    let user = AuthService::new(&store).register(username, email, password)?;
    info!("Created user {} <{}>", user.username, user.email);

    Ok(())
}

/// List registered users.
///
/// # Errors
///
/// Returns an error if the store cannot be opened or read.
pub fn list() -> Result<(), Box<dyn std::error::Error>> {
    let store = super::open_store()?;

    let users = UserRepository::new(&store).load_all()?;
    if users.is_empty() {
        info!("No registered users");
        return Ok(());
    }

    info!("{} registered user(s):", users.len());
    for user in users {
        info!(
            "  {} <{}> registered {}",
            user.username,
            user.email,
            user.registered.format("%Y-%m-%d %H:%M")
        );
    }

    Ok(())
}
