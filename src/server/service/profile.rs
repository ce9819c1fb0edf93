use sea_orm::DatabaseConnection;

use crate::{
    model::profile::{ProfileDto, ProfileForm},
    server::{
        data::profile::{ProfilePenyewaRepository, ProfileValues},
        error::{profile::ProfileError, validation::ValidationError, Error},
        model::profile::Gender,
        util::time::parse_iso_date,
    },
};

fn required(value: &Option<String>, field: &'static str) -> Result<String, ValidationError> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or(ValidationError::Missing(field))
}

/// Validates a tenant profile form, reporting the first failing rule
pub fn validate_profile(form: &ProfileForm) -> Result<ProfileValues, ValidationError> {
    let full_name = required(&form.full_name, "Full name")?;
    let phone_number = required(&form.phone_number, "Phone number")?;

    let gender = required(&form.gender, "Gender")?;
    let gender = Gender::parse(&gender.to_lowercase()).ok_or_else(|| {
        ValidationError::Invalid(format!("Gender must be one of: {}", Gender::vocabulary()))
    })?;

    let date_of_birth = required(&form.date_of_birth, "Date of birth")?;
    let date_of_birth = parse_iso_date(&date_of_birth).ok_or_else(|| {
        ValidationError::Invalid("Date of birth must be a valid date (YYYY-MM-DD)".to_string())
    })?;

    let address = required(&form.address, "Address")?;
    let emergency_contact = required(&form.emergency_contact, "Emergency contact")?;

    Ok(ProfileValues {
        full_name,
        phone_number,
        gender: gender.as_str().to_string(),
        date_of_birth,
        address,
        emergency_contact,
    })
}

pub struct ProfileService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProfileService<'a> {
    /// Creates a new instance of [`ProfileService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_profile(&self, user_id: i32) -> Result<ProfileDto, Error> {
        let Some(profile) = ProfilePenyewaRepository::new(self.db).get(user_id).await? else {
            return Err(ProfileError::NotCreated(user_id).into());
        };

        Ok(profile.into())
    }

    /// Creates or replaces the tenant's profile
    pub async fn upsert_profile(&self, user_id: i32, form: &ProfileForm) -> Result<ProfileDto, Error> {
        let values = validate_profile(form)?;

        let profile = ProfilePenyewaRepository::new(self.db)
            .upsert(user_id, values)
            .await?;

        Ok(profile.into())
    }
}
