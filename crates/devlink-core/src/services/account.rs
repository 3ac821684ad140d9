//! Account removal - the cascade across posts, profile, and user.

use uuid::Uuid;

use crate::error::RepoError;
use crate::ports::{PostRepository, ProfileRepository, UserRepository};

/// Delete everything belonging to `user_id`: posts first, then the
/// profile, then the user record itself.
///
/// The sequence is NOT transactional. A failing step halts the cascade and
/// leaves the deletions of earlier steps in place; there is no rollback.
/// Rows already absent (no posts, no profile) do not fail their step.
pub async fn delete_user_account(
    posts: &dyn PostRepository,
    profiles: &dyn ProfileRepository,
    users: &dyn UserRepository,
    user_id: Uuid,
) -> Result<(), RepoError> {
    posts.delete_by_author(user_id).await?;
    profiles.delete_by_user_id(user_id).await?;
    users.delete(user_id).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use super::*;
    use crate::domain::{Post, Profile, User};

    /// A step at which the injected fault fires.
    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Step {
        Posts,
        Profile,
        User,
    }

    /// Shared journal of executed deletion steps, with an optional fault.
    #[derive(Clone)]
    struct Journal {
        steps: Arc<Mutex<Vec<Step>>>,
        fail_at: Option<Step>,
    }

    impl Journal {
        fn new(fail_at: Option<Step>) -> Self {
            Self {
                steps: Arc::new(Mutex::new(Vec::new())),
                fail_at,
            }
        }

        fn record(&self, step: Step) -> Result<(), RepoError> {
            if self.fail_at == Some(step) {
                return Err(RepoError::Query("injected fault".to_string()));
            }
            self.steps.lock().unwrap().push(step);
            Ok(())
        }

        fn steps(&self) -> Vec<Step> {
            self.steps.lock().unwrap().clone()
        }
    }

    struct StubPosts(Journal);
    struct StubProfiles(Journal);
    struct StubUsers(Journal);

    #[async_trait]
    impl crate::ports::BaseRepository<Post, Uuid> for StubPosts {
        async fn find_by_id(&self, _id: Uuid) -> Result<Option<Post>, RepoError> {
            Ok(None)
        }
        async fn insert(&self, entity: Post) -> Result<Post, RepoError> {
            Ok(entity)
        }
        async fn update(&self, entity: Post) -> Result<Post, RepoError> {
            Ok(entity)
        }
        async fn delete(&self, _id: Uuid) -> Result<(), RepoError> {
            Ok(())
        }
    }

    #[async_trait]
    impl PostRepository for StubPosts {
        async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
            Ok(Vec::new())
        }
        async fn delete_by_author(&self, _author_id: Uuid) -> Result<u64, RepoError> {
            self.0.record(Step::Posts)?;
            Ok(2)
        }
    }

    #[async_trait]
    impl crate::ports::BaseRepository<Profile, Uuid> for StubProfiles {
        async fn find_by_id(&self, _id: Uuid) -> Result<Option<Profile>, RepoError> {
            Ok(None)
        }
        async fn insert(&self, entity: Profile) -> Result<Profile, RepoError> {
            Ok(entity)
        }
        async fn update(&self, entity: Profile) -> Result<Profile, RepoError> {
            Ok(entity)
        }
        async fn delete(&self, _id: Uuid) -> Result<(), RepoError> {
            Ok(())
        }
    }

    #[async_trait]
    impl ProfileRepository for StubProfiles {
        async fn find_by_user_id(&self, _user_id: Uuid) -> Result<Option<Profile>, RepoError> {
            Ok(None)
        }
        async fn find_all(&self) -> Result<Vec<Profile>, RepoError> {
            Ok(Vec::new())
        }
        async fn delete_by_user_id(&self, _user_id: Uuid) -> Result<(), RepoError> {
            self.0.record(Step::Profile)
        }
    }

    #[async_trait]
    impl crate::ports::BaseRepository<User, Uuid> for StubUsers {
        async fn find_by_id(&self, _id: Uuid) -> Result<Option<User>, RepoError> {
            Ok(None)
        }
        async fn insert(&self, entity: User) -> Result<User, RepoError> {
            Ok(entity)
        }
        async fn update(&self, entity: User) -> Result<User, RepoError> {
            Ok(entity)
        }
        async fn delete(&self, _id: Uuid) -> Result<(), RepoError> {
            self.0.record(Step::User)
        }
    }

    #[async_trait]
    impl UserRepository for StubUsers {
        async fn find_by_email(&self, _email: &str) -> Result<Option<User>, RepoError> {
            Ok(None)
        }
    }

    #[tokio::test]
    async fn cascade_runs_posts_then_profile_then_user() {
        let journal = Journal::new(None);
        let posts = StubPosts(journal.clone());
        let profiles = StubProfiles(journal.clone());
        let users = StubUsers(journal.clone());

        delete_user_account(&posts, &profiles, &users, Uuid::new_v4())
            .await
            .unwrap();

        assert_eq!(journal.steps(), vec![Step::Posts, Step::Profile, Step::User]);
    }

    #[tokio::test]
    async fn fault_mid_cascade_keeps_earlier_deletions() {
        let journal = Journal::new(Some(Step::Profile));
        let posts = StubPosts(journal.clone());
        let profiles = StubProfiles(journal.clone());
        let users = StubUsers(journal.clone());

        let err = delete_user_account(&posts, &profiles, &users, Uuid::new_v4())
            .await
            .unwrap_err();

        assert!(matches!(err, RepoError::Query(_)));
        // Posts are gone, profile and user survive.
        assert_eq!(journal.steps(), vec![Step::Posts]);
    }

    #[tokio::test]
    async fn fault_at_first_step_deletes_nothing() {
        let journal = Journal::new(Some(Step::Posts));
        let posts = StubPosts(journal.clone());
        let profiles = StubProfiles(journal.clone());
        let users = StubUsers(journal.clone());

        delete_user_account(&posts, &profiles, &users, Uuid::new_v4())
            .await
            .unwrap_err();

        assert!(journal.steps().is_empty());
    }
}
