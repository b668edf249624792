use crate::error::FollowError;
use crate::store::Catalog;
use leptos::logging::log;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowChange {
    Followed,
    Unfollowed,
}

/// Flips whether `follower` follows `target`. The follow list on the
/// follower's catalog record is the only copy of this relationship.
pub fn toggle_follow(catalog: &mut Catalog, follower: &str, target: &str) -> Result<FollowChange, FollowError> {
    if follower == target {
        return Err(FollowError::SelfFollow);
    }
    if catalog.user(target).is_none() {
        return Err(FollowError::UnknownUser(target.to_string()));
    }
    let user = catalog
        .user_mut(follower)
        .ok_or_else(|| FollowError::UnknownUser(follower.to_string()))?;

    let change = if let Some(pos) = user.following.iter().position(|id| id == target) {
        user.following.remove(pos);
        FollowChange::Unfollowed
    } else {
        user.following.push(target.to_string());
        FollowChange::Followed
    };
    log!("[FOLLOW] {} {:?} {}", follower, change, target);
    Ok(change)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_restores_following() {
        let mut catalog = Catalog::seeded(10);
        let me = catalog.current_user_id().to_string();
        let before = catalog.following_of(&me).to_vec();

        assert_eq!(toggle_follow(&mut catalog, &me, "u4"), Ok(FollowChange::Followed));
        assert!(catalog.is_following(&me, "u4"));
        assert_eq!(catalog.follower_count("u4"), 1);

        assert_eq!(toggle_follow(&mut catalog, &me, "u4"), Ok(FollowChange::Unfollowed));
        assert_eq!(catalog.following_of(&me), before.as_slice());
    }

    #[test]
    fn self_follow_is_refused() {
        let mut catalog = Catalog::seeded(10);
        let me = catalog.current_user_id().to_string();
        assert_eq!(toggle_follow(&mut catalog, &me, &me), Err(FollowError::SelfFollow));
        assert!(!catalog.is_following(&me, &me));
    }

    #[test]
    fn unknown_target_is_refused() {
        let mut catalog = Catalog::seeded(10);
        let me = catalog.current_user_id().to_string();
        assert_eq!(
            toggle_follow(&mut catalog, &me, "ghost"),
            Err(FollowError::UnknownUser("ghost".to_string()))
        );
    }
}
