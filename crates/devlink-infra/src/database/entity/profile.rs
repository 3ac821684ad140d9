//! Profile entity for SeaORM.
//!
//! The profile row doubles as a document: skills, social links, and the
//! experience/education lists are JSONB columns read and written with the
//! rest of the row, so every mutation is a whole-document write.

use sea_orm::{FromJsonQueryResult, Set};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use devlink_core::domain::{Education, Experience, SocialLinks};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct SkillsJson(pub Vec<String>);

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct SocialJson(pub SocialLinks);

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct ExperienceJson(pub Vec<Experience>);

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct EducationJson(pub Vec<Education>);

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "profiles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub user_id: Uuid,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub bio: Option<String>,
    pub status: String,
    pub github_username: Option<String>,
    #[sea_orm(column_type = "JsonBinary")]
    pub skills: SkillsJson,
    #[sea_orm(column_type = "JsonBinary")]
    pub social: SocialJson,
    #[sea_orm(column_type = "JsonBinary")]
    pub experience: ExperienceJson,
    #[sea_orm(column_type = "JsonBinary")]
    pub education: EducationJson,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Profile.
impl From<Model> for devlink_core::domain::Profile {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            company: model.company,
            website: model.website,
            location: model.location,
            bio: model.bio,
            status: model.status,
            github_username: model.github_username,
            skills: model.skills.0,
            social: model.social.0,
            experience: model.experience.0,
            education: model.education.0,
            updated_at: model.updated_at.into(),
        }
    }
}

/// Conversion from Domain Profile to SeaORM ActiveModel.
impl From<devlink_core::domain::Profile> for ActiveModel {
    fn from(profile: devlink_core::domain::Profile) -> Self {
        Self {
            id: Set(profile.id),
            user_id: Set(profile.user_id),
            company: Set(profile.company),
            website: Set(profile.website),
            location: Set(profile.location),
            bio: Set(profile.bio),
            status: Set(profile.status),
            github_username: Set(profile.github_username),
            skills: Set(SkillsJson(profile.skills)),
            social: Set(SocialJson(profile.social)),
            experience: Set(ExperienceJson(profile.experience)),
            education: Set(EducationJson(profile.education)),
            updated_at: Set(profile.updated_at.into()),
        }
    }
}
