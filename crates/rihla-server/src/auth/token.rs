use crate::models::User;
use crate::store::Store;

const TOKEN_PREFIX: &str = "token-";

/// Deterministic bearer token derived from the user id. Minted identically
/// at registration and login; never stored.
pub fn mint_token(user_id: &str) -> String {
    format!("{TOKEN_PREFIX}{user_id}")
}

/// Resolve a presented bearer value back to a user. Only strings carrying
/// the minted prefix and matching a registered user resolve; everything
/// else is nobody.
pub fn resolve_token(store: &Store, token: &str) -> Option<User> {
    let user_id = token.strip_prefix(TOKEN_PREFIX)?;
    store.find_user_by_id(user_id)
}
