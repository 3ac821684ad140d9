use chrono::NaiveDate;
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
use uuid::Uuid;

use devlink_core::domain::{Experience, Profile, SocialLinks, User};
use devlink_core::ports::{PostRepository, ProfileRepository, UserRepository};

use super::entity::{profile, user};
use super::postgres_repo::{PostgresPostRepository, PostgresProfileRepository, PostgresUserRepository};

fn profile_row(user_id: Uuid) -> profile::Model {
    let exp = Experience::new(
        "Engineer".to_string(),
        "Acme".to_string(),
        None,
        NaiveDate::from_ymd_opt(2021, 3, 1).unwrap(),
        None,
        true,
        None,
    );

    profile::Model {
        id: Uuid::new_v4(),
        user_id,
        company: Some("Acme".to_string()),
        website: None,
        location: None,
        bio: None,
        status: "Developer".to_string(),
        github_username: Some("octocat".to_string()),
        skills: profile::SkillsJson(vec!["rust".to_string(), "sql".to_string()]),
        social: profile::SocialJson(SocialLinks::default()),
        experience: profile::ExperienceJson(vec![exp]),
        education: profile::EducationJson(Vec::new()),
        updated_at: chrono::Utc::now().into(),
    }
}

#[tokio::test]
async fn find_profile_by_user_id_maps_document_columns() {
    let user_id = Uuid::new_v4();
    let row = profile_row(user_id);

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![row]])
        .into_connection();

    let repo = PostgresProfileRepository::new(db);

    let found: Profile = repo.find_by_user_id(user_id).await.unwrap().unwrap();

    assert_eq!(found.user_id, user_id);
    assert_eq!(found.status, "Developer");
    assert_eq!(found.skills, vec!["rust".to_string(), "sql".to_string()]);
    assert_eq!(found.experience.len(), 1);
    assert_eq!(found.experience[0].title, "Engineer");
    assert!(found.education.is_empty());
}

#[tokio::test]
async fn find_profile_by_user_id_returns_none_when_absent() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<profile::Model>::new()])
        .into_connection();

    let repo = PostgresProfileRepository::new(db);

    assert!(repo.find_by_user_id(Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
async fn delete_posts_by_author_reports_removed_rows() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 3,
        }])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let removed = repo.delete_by_author(Uuid::new_v4()).await.unwrap();
    assert_eq!(removed, 3);
}

#[tokio::test]
async fn find_user_by_email_maps_row() {
    let now = chrono::Utc::now();
    let row = user::Model {
        id: Uuid::new_v4(),
        name: "Dev".to_string(),
        email: "dev@example.com".to_string(),
        password_hash: "argon2-hash".to_string(),
        avatar: None,
        created_at: now.into(),
        updated_at: now.into(),
    };

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![row]])
        .into_connection();

    let repo = PostgresUserRepository::new(db);

    let found: User = repo.find_by_email("dev@example.com").await.unwrap().unwrap();
    assert_eq!(found.email, "dev@example.com");
    assert_eq!(found.name, "Dev");
}
