use crate::models::review::Review;
use crate::models::user::User;
use crate::state::favorites::Favorites;
use crate::store::Catalog;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileTab {
    Favorites,
    Reviews,
}

impl ProfileTab {
    pub fn label(self) -> &'static str {
        match self {
            ProfileTab::Favorites => "Favoritos",
            ProfileTab::Reviews => "Reviews",
        }
    }
}

/// Everything the profile page shows about one user.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileSummary {
    pub user: User,
    pub is_own: bool,
    pub favorites_count: usize, // Zero for other users, favorites are private
    pub reviews_count: usize,
    pub followers_count: usize,
    pub following_count: usize,
    pub reviews: Vec<Review>,
}

impl ProfileSummary {
    pub fn default_tab(&self) -> ProfileTab {
        if self.is_own {
            ProfileTab::Favorites
        } else {
            ProfileTab::Reviews
        }
    }

    /// Favorites are private, so only the owner gets that tab.
    pub fn tabs(&self) -> Vec<ProfileTab> {
        if self.is_own {
            vec![ProfileTab::Favorites, ProfileTab::Reviews]
        } else {
            vec![ProfileTab::Reviews]
        }
    }
}

/// `requested` is the route's user id; `None` means the viewer's own profile.
pub fn profile_summary(
    catalog: &Catalog,
    viewer: &str,
    requested: Option<&str>,
    favorites: &Favorites,
) -> Option<ProfileSummary> {
    let target = requested.filter(|id| !id.is_empty()).unwrap_or(viewer);
    let is_own = target == viewer;
    let user = catalog.user(target)?.clone();
    let reviews: Vec<Review> = catalog.reviews_by_user(target).into_iter().cloned().collect();

    Some(ProfileSummary {
        is_own,
        favorites_count: if is_own { favorites.len() } else { 0 },
        reviews_count: reviews.len(),
        followers_count: catalog.follower_count(target),
        following_count: catalog.following_count(target),
        reviews,
        user,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn own_profile_without_route_id() {
        let catalog = Catalog::seeded(10);
        let favorites = Favorites::from_ids(vec!["b1".to_string()]);
        let summary = profile_summary(&catalog, "u1", None, &favorites).unwrap();

        assert!(summary.is_own);
        assert_eq!(summary.default_tab(), ProfileTab::Favorites);
        assert_eq!(summary.favorites_count, 1);
        assert_eq!(summary.followers_count, 2);
        assert_eq!(summary.following_count, 2);
        assert_eq!(summary.reviews_count, catalog.reviews_by_user("u1").len());
    }

    #[test]
    fn other_profile_hides_favorites() {
        let catalog = Catalog::seeded(10);
        let favorites = Favorites::from_ids(vec!["b1".to_string()]);
        let summary = profile_summary(&catalog, "u1", Some("u2"), &favorites).unwrap();

        assert!(!summary.is_own);
        assert_eq!(summary.default_tab(), ProfileTab::Reviews);
        assert_eq!(summary.tabs(), vec![ProfileTab::Reviews]);
        assert_eq!(summary.favorites_count, 0);
    }

    #[test]
    fn unknown_user_has_no_profile() {
        let catalog = Catalog::seeded(10);
        assert!(profile_summary(&catalog, "u1", Some("ghost"), &Favorites::new()).is_none());
    }
}
