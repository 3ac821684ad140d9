//! Profile handlers - upsert, reads, sub-resource lists, account removal,
//! and the GitHub repos proxy.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use devlink_core::domain::{Education, Experience, Profile, ProfileFields};
use devlink_core::services::delete_user_account;
use devlink_shared::dto::{
    AddEducationRequest, AddExperienceRequest, ProfileResponse, UpsertProfileRequest,
};
use devlink_shared::{FieldError, Message};

use super::present;
use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

const NO_PROFILE: &str = "There is no profile for this user";
const PROFILE_NOT_FOUND: &str = "Profile not found";

/// Map the sparse request payload onto a domain field set. Empty strings
/// count as absent, matching the stored-value-preserving merge.
fn build_fields(req: UpsertProfileRequest) -> ProfileFields {
    let mut fields = ProfileFields {
        company: present(req.company),
        website: present(req.website),
        location: present(req.location),
        bio: present(req.bio),
        status: present(req.status),
        github_username: present(req.github_username),
        skills: present(req.skills).map(|s| ProfileFields::parse_skills(&s)),
        ..Default::default()
    };
    // Social starts from an empty object on every call; only the platforms
    // present in this request survive.
    fields.social.youtube = present(req.youtube);
    fields.social.twitter = present(req.twitter);
    fields.social.instagram = present(req.instagram);
    fields.social.linkedin = present(req.linkedin);
    fields.social.facebook = present(req.facebook);
    fields
}

/// GET /api/profile/me - the session user's own profile.
pub async fn me(state: web::Data<AppState>, identity: Identity) -> AppResult<HttpResponse> {
    let profile = state
        .profiles
        .find_by_user_id(identity.user_id)
        .await?
        .ok_or_else(|| AppError::BadRequest(NO_PROFILE.to_string()))?;

    let user = state.users.find_by_id(profile.user_id).await?;
    Ok(HttpResponse::Ok().json(ProfileResponse::from_parts(profile, user.as_ref())))
}

/// POST /api/profile - create or update the session user's profile.
pub async fn upsert(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<UpsertProfileRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    // Validate before touching the store
    let mut errors = Vec::new();
    if present(req.status.clone()).is_none() {
        errors.push(FieldError::new("status", "Status is required"));
    }
    if present(req.skills.clone()).is_none() {
        errors.push(FieldError::new("skills", "Skills are required"));
    }
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let fields = build_fields(req);

    let profile = match state.profiles.find_by_user_id(identity.user_id).await? {
        Some(mut existing) => {
            existing.apply(fields);
            state.profiles.update(existing).await?
        }
        None => {
            let fresh = Profile::from_fields(identity.user_id, fields);
            state.profiles.insert(fresh).await?
        }
    };

    Ok(HttpResponse::Ok().json(profile))
}

/// GET /api/profile - every profile, joined with owner display fields.
pub async fn all(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let profiles = state.profiles.find_all().await?;

    let mut out = Vec::with_capacity(profiles.len());
    for profile in profiles {
        let user = state.users.find_by_id(profile.user_id).await?;
        out.push(ProfileResponse::from_parts(profile, user.as_ref()));
    }

    Ok(HttpResponse::Ok().json(out))
}

/// GET /api/profile/user/{user_id} - one profile by user id.
///
/// A malformed id is answered exactly like an absent one.
pub async fn by_user(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let user_id = parse_profile_user_id(&path.into_inner())?;

    let profile = state
        .profiles
        .find_by_user_id(user_id)
        .await?
        .ok_or_else(|| AppError::BadRequest(PROFILE_NOT_FOUND.to_string()))?;

    let user = state.users.find_by_id(profile.user_id).await?;
    Ok(HttpResponse::Ok().json(ProfileResponse::from_parts(profile, user.as_ref())))
}

/// DELETE /api/profile - remove the session user's posts, profile, and
/// account, in that order.
pub async fn delete_account(
    state: web::Data<AppState>,
    identity: Identity,
) -> AppResult<HttpResponse> {
    delete_user_account(
        state.posts.as_ref(),
        state.profiles.as_ref(),
        state.users.as_ref(),
        identity.user_id,
    )
    .await?;

    Ok(HttpResponse::Ok().json(Message::new("User deleted")))
}

/// PUT /api/profile/experience
pub async fn add_experience(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<AddExperienceRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let mut errors = Vec::new();
    let title = present(req.title);
    if title.is_none() {
        errors.push(FieldError::new("title", "Title is required"));
    }
    let company = present(req.company);
    if company.is_none() {
        errors.push(FieldError::new("company", "Company is required"));
    }
    if req.from.is_none() {
        errors.push(FieldError::new("from", "From date is required"));
    }
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }
    let (Some(title), Some(company), Some(from)) = (title, company, req.from) else {
        return Err(AppError::Internal("validated fields missing".to_string()));
    };

    let mut profile = load_own_profile(&state, &identity).await?;
    profile.add_experience(Experience::new(
        title,
        company,
        present(req.location),
        from,
        req.to,
        req.current.unwrap_or(false),
        present(req.description),
    ));

    let profile = state.profiles.update(profile).await?;
    Ok(HttpResponse::Ok().json(profile))
}

/// DELETE /api/profile/experience/{exp_id}
///
/// An unknown (or malformed) id is a successful no-op: the list is
/// re-persisted unchanged.
pub async fn remove_experience(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let mut profile = load_own_profile(&state, &identity).await?;

    if let Ok(exp_id) = Uuid::parse_str(&path.into_inner()) {
        profile.remove_experience(exp_id);
    }

    let profile = state.profiles.update(profile).await?;
    Ok(HttpResponse::Ok().json(profile))
}

/// PUT /api/profile/education
pub async fn add_education(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<AddEducationRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let mut errors = Vec::new();
    let school = present(req.school);
    if school.is_none() {
        errors.push(FieldError::new("school", "School is required"));
    }
    let degree = present(req.degree);
    if degree.is_none() {
        errors.push(FieldError::new("degree", "Degree is required"));
    }
    let field_of_study = present(req.field_of_study);
    if field_of_study.is_none() {
        errors.push(FieldError::new(
            "field_of_study",
            "Field of study is required",
        ));
    }
    if req.from.is_none() {
        errors.push(FieldError::new("from", "From date is required"));
    }
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }
    let (Some(school), Some(degree), Some(field_of_study), Some(from)) =
        (school, degree, field_of_study, req.from)
    else {
        return Err(AppError::Internal("validated fields missing".to_string()));
    };

    let mut profile = load_own_profile(&state, &identity).await?;
    profile.add_education(Education::new(
        school,
        degree,
        field_of_study,
        from,
        req.to,
        req.current.unwrap_or(false),
        present(req.description),
    ));

    let profile = state.profiles.update(profile).await?;
    Ok(HttpResponse::Ok().json(profile))
}

/// DELETE /api/profile/education/{edu_id} - same no-op contract as the
/// experience removal.
pub async fn remove_education(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let mut profile = load_own_profile(&state, &identity).await?;

    if let Ok(edu_id) = Uuid::parse_str(&path.into_inner()) {
        profile.remove_education(edu_id);
    }

    let profile = state.profiles.update(profile).await?;
    Ok(HttpResponse::Ok().json(profile))
}

/// GET /api/profile/github/{username} - proxied repo listing.
pub async fn github_repos(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let repos = state.github.user_repos(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(repos))
}

/// A syntactically invalid user id can match no profile, so it gets the
/// same "not found" answer as a well-formed but absent one.
fn parse_profile_user_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::BadRequest(PROFILE_NOT_FOUND.to_string()))
}

/// The list-mutation paths require an existing profile; answer 400 with the
/// "no profile" message instead of assuming one exists.
async fn load_own_profile(state: &AppState, identity: &Identity) -> AppResult<Profile> {
    state
        .profiles
        .find_by_user_id(identity.user_id)
        .await?
        .ok_or_else(|| AppError::BadRequest(NO_PROFILE.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_fields_skips_empty_strings() {
        let req = UpsertProfileRequest {
            company: Some("".to_string()),
            status: Some("Developer".to_string()),
            skills: Some("rust, actix".to_string()),
            ..Default::default()
        };

        let fields = build_fields(req);

        assert_eq!(fields.company, None);
        assert_eq!(fields.status.as_deref(), Some("Developer"));
        assert_eq!(
            fields.skills,
            Some(vec!["rust".to_string(), "actix".to_string()])
        );
    }

    #[test]
    fn build_fields_rebuilds_social_from_present_keys_only() {
        let req = UpsertProfileRequest {
            status: Some("Developer".to_string()),
            skills: Some("rust".to_string()),
            twitter: Some("https://twitter.com/dev".to_string()),
            ..Default::default()
        };

        let fields = build_fields(req);

        assert_eq!(
            fields.social.twitter.as_deref(),
            Some("https://twitter.com/dev")
        );
        assert_eq!(fields.social.youtube, None);
        assert_eq!(fields.social.facebook, None);
    }

    #[test]
    fn malformed_user_id_reads_as_not_found() {
        let err = parse_profile_user_id("definitely-not-a-uuid").unwrap_err();

        match err {
            AppError::BadRequest(msg) => assert_eq!(msg, PROFILE_NOT_FOUND),
            other => panic!("expected BadRequest, got {other:?}"),
        }
    }
}
