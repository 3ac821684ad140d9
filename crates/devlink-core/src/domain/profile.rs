use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Social platform links embedded in a profile.
///
/// Rebuilt from scratch on every profile upsert: only the platforms present
/// in that request survive the call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
}

/// A position held at a company, embedded in a profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

impl Experience {
    /// Create an entry with a store-assigned identifier.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        title: String,
        company: String,
        location: Option<String>,
        from: NaiveDate,
        to: Option<NaiveDate>,
        current: bool,
        description: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            company,
            location,
            from,
            to,
            current,
            description,
        }
    }
}

/// A degree or course of study, embedded in a profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub id: Uuid,
    pub school: String,
    pub degree: String,
    pub field_of_study: String,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

impl Education {
    /// Create an entry with a store-assigned identifier.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        school: String,
        degree: String,
        field_of_study: String,
        from: NaiveDate,
        to: Option<NaiveDate>,
        current: bool,
        description: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            school,
            degree,
            field_of_study,
            from,
            to,
            current,
            description,
        }
    }
}

/// The sparse field set of a profile upsert.
///
/// Only fields the caller actually sent are `Some`; absent fields are left
/// untouched when merged into an existing profile. `social` is the
/// exception: it is always replaced wholesale.
#[derive(Debug, Clone, Default)]
pub struct ProfileFields {
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub status: Option<String>,
    pub github_username: Option<String>,
    pub skills: Option<Vec<String>>,
    pub social: SocialLinks,
}

impl ProfileFields {
    /// Split a comma-delimited skills string into trimmed, non-empty tokens.
    pub fn parse_skills(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    }
}

/// Profile entity - the per-user document aggregating professional details,
/// skills, social links, and embedded experience/education lists.
///
/// One profile per user; the whole document is read, mutated in memory, and
/// written back. Concurrent writers for the same user can lose updates -
/// there is no version check on the row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub status: String,
    pub github_username: Option<String>,
    pub skills: Vec<String>,
    pub social: SocialLinks,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Create a new profile for `user_id` from an upsert field set.
    ///
    /// The caller has already validated that `status` and `skills` are
    /// present and non-empty.
    pub fn from_fields(user_id: Uuid, fields: ProfileFields) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            company: fields.company,
            website: fields.website,
            location: fields.location,
            bio: fields.bio,
            status: fields.status.unwrap_or_default(),
            github_username: fields.github_username,
            skills: fields.skills.unwrap_or_default(),
            social: fields.social,
            experience: Vec::new(),
            education: Vec::new(),
            updated_at: Utc::now(),
        }
    }

    /// Merge an upsert field set into an existing profile.
    ///
    /// Fields absent from the request keep their stored value; `social` is
    /// replaced with exactly the platforms present in this request.
    pub fn apply(&mut self, fields: ProfileFields) {
        if let Some(company) = fields.company {
            self.company = Some(company);
        }
        if let Some(website) = fields.website {
            self.website = Some(website);
        }
        if let Some(location) = fields.location {
            self.location = Some(location);
        }
        if let Some(bio) = fields.bio {
            self.bio = Some(bio);
        }
        if let Some(status) = fields.status {
            self.status = status;
        }
        if let Some(github_username) = fields.github_username {
            self.github_username = Some(github_username);
        }
        if let Some(skills) = fields.skills {
            self.skills = skills;
        }
        self.social = fields.social;
        self.touch();
    }

    /// Prepend an experience entry; the rest of the list keeps its order.
    pub fn add_experience(&mut self, entry: Experience) {
        self.experience.insert(0, entry);
        self.touch();
    }

    /// Remove the experience entry with `id`, if any.
    ///
    /// Returns whether an entry was removed. An unknown id is a no-op, not
    /// an error; relative order of the remaining entries is preserved.
    pub fn remove_experience(&mut self, id: Uuid) -> bool {
        match self.experience.iter().position(|e| e.id == id) {
            Some(idx) => {
                self.experience.remove(idx);
                self.touch();
                true
            }
            None => false,
        }
    }

    /// Prepend an education entry; the rest of the list keeps its order.
    pub fn add_education(&mut self, entry: Education) {
        self.education.insert(0, entry);
        self.touch();
    }

    /// Remove the education entry with `id`, if any. Same no-op contract as
    /// [`Profile::remove_experience`].
    pub fn remove_education(&mut self, id: Uuid) -> bool {
        match self.education.iter().position(|e| e.id == id) {
            Some(idx) => {
                self.education.remove(idx);
                self.touch();
                true
            }
            None => false,
        }
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn base_fields() -> ProfileFields {
        ProfileFields {
            status: Some("Developer".to_string()),
            skills: Some(vec!["Rust".to_string()]),
            ..Default::default()
        }
    }

    fn exp(title: &str) -> Experience {
        Experience::new(
            title.to_string(),
            "Acme".to_string(),
            None,
            date(2020, 1, 1),
            None,
            true,
            None,
        )
    }

    #[test]
    fn parse_skills_trims_and_drops_empty_tokens() {
        assert_eq!(
            ProfileFields::parse_skills("a, b ,c"),
            vec!["a".to_string(), "b".to_string(), "c".to_string()]
        );
        assert_eq!(
            ProfileFields::parse_skills("rust,, ,tokio"),
            vec!["rust".to_string(), "tokio".to_string()]
        );
    }

    #[test]
    fn apply_leaves_absent_fields_untouched() {
        let mut fields = base_fields();
        fields.company = Some("Acme".to_string());
        fields.bio = Some("hello".to_string());
        let mut profile = Profile::from_fields(Uuid::new_v4(), fields);

        let update = ProfileFields {
            status: Some("Architect".to_string()),
            ..Default::default()
        };
        profile.apply(update);

        assert_eq!(profile.status, "Architect");
        assert_eq!(profile.company.as_deref(), Some("Acme"));
        assert_eq!(profile.bio.as_deref(), Some("hello"));
        assert_eq!(profile.skills, vec!["Rust".to_string()]);
    }

    #[test]
    fn apply_is_idempotent_on_identical_input() {
        let mut fields = base_fields();
        fields.website = Some("https://example.com".to_string());
        fields.social.twitter = Some("https://twitter.com/dev".to_string());

        let mut profile = Profile::from_fields(Uuid::new_v4(), fields.clone());
        let first = profile.clone();
        profile.apply(fields);

        // Only the modification timestamp may differ between the two states.
        let mut second = profile.clone();
        second.updated_at = first.updated_at;
        assert_eq!(first, second);
    }

    #[test]
    fn apply_replaces_social_links_wholesale() {
        let mut fields = base_fields();
        fields.social.youtube = Some("https://youtube.com/dev".to_string());
        fields.social.twitter = Some("https://twitter.com/dev".to_string());
        let mut profile = Profile::from_fields(Uuid::new_v4(), fields);

        let mut update = ProfileFields::default();
        update.social.twitter = Some("https://twitter.com/other".to_string());
        profile.apply(update);

        // A partial social update drops previously stored platforms.
        assert_eq!(profile.social.youtube, None);
        assert_eq!(
            profile.social.twitter.as_deref(),
            Some("https://twitter.com/other")
        );

        profile.apply(ProfileFields::default());
        assert_eq!(profile.social, SocialLinks::default());
    }

    #[test]
    fn add_experience_prepends() {
        let mut profile = Profile::from_fields(Uuid::new_v4(), base_fields());
        let e1 = exp("first");
        let e2 = exp("second");

        profile.add_experience(e1.clone());
        profile.add_experience(e2.clone());

        assert_eq!(profile.experience, vec![e2, e1]);
    }

    #[test]
    fn remove_experience_unknown_id_is_a_noop() {
        let mut profile = Profile::from_fields(Uuid::new_v4(), base_fields());
        profile.add_experience(exp("only"));
        let before = profile.experience.clone();

        assert!(!profile.remove_experience(Uuid::new_v4()));
        assert_eq!(profile.experience, before);
    }

    #[test]
    fn remove_experience_drops_exactly_one_preserving_order() {
        let mut profile = Profile::from_fields(Uuid::new_v4(), base_fields());
        let e1 = exp("e1");
        let e2 = exp("e2");
        let e3 = exp("e3");
        // Prepends invert the insertion order.
        profile.add_experience(e3.clone());
        profile.add_experience(e2.clone());
        profile.add_experience(e1.clone());

        assert!(profile.remove_experience(e2.id));
        assert_eq!(profile.experience, vec![e1, e3]);
    }

    #[test]
    fn education_list_shares_the_same_contract() {
        let mut profile = Profile::from_fields(Uuid::new_v4(), base_fields());
        let ed1 = Education::new(
            "MIT".to_string(),
            "BSc".to_string(),
            "CS".to_string(),
            date(2015, 9, 1),
            Some(date(2019, 6, 1)),
            false,
            None,
        );
        let ed2 = Education::new(
            "Stanford".to_string(),
            "MSc".to_string(),
            "CS".to_string(),
            date(2019, 9, 1),
            None,
            true,
            None,
        );

        profile.add_education(ed1.clone());
        profile.add_education(ed2.clone());
        assert_eq!(profile.education, vec![ed2.clone(), ed1.clone()]);

        assert!(profile.remove_education(ed2.id));
        assert_eq!(profile.education, vec![ed1]);
    }
}
