use scoring::{
    dto::{common::PaginationParams, leaderboard::LeaderboardRow},
    error::Result,
    services::tracker,
};

use crate::state::AppState;

pub const MAX_SCOPE_LEN: usize = 64;

/// Scopes are short ASCII identifiers: letters, digits, `-` and `_`.
pub fn validate_scope(scope: &str) -> std::result::Result<(), String> {
    if scope.is_empty() || scope.len() > MAX_SCOPE_LEN {
        return Err(format!("scope must be 1 to {} characters", MAX_SCOPE_LEN));
    }
    if !scope
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
    {
        return Err("scope may only contain letters, digits, '-' and '_'".to_string());
    }
    Ok(())
}

/// Re-rank the leaderboard for `scope` and return the requested page
///
/// Also returns the total number of ranked entries.
pub async fn get_leaderboard(
    state: &AppState,
    scope: &str,
    pagination: &PaginationParams,
) -> Result<(Vec<LeaderboardRow>, usize)> {
    let ranked = {
        let _guard = state.leaderboard_lock.lock().await;
        tracker::refresh_leaderboard(state.store.as_ref(), scope).await?
    };

    let total_items = ranked.entries.len();
    let rows = pagination
        .paginate(ranked.entries)
        .into_iter()
        .map(LeaderboardRow::from)
        .collect();

    Ok((rows, total_items))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_scope() {
        assert!(validate_scope("main").is_ok());
        assert!(validate_scope("viewer_2-eu").is_ok());
        assert!(validate_scope(&"a".repeat(MAX_SCOPE_LEN)).is_ok());

        assert!(validate_scope("").is_err());
        assert!(validate_scope(&"a".repeat(MAX_SCOPE_LEN + 1)).is_err());
        assert!(validate_scope("a b").is_err());
        assert!(validate_scope("élite").is_err());
    }
}
