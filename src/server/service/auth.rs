use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    model::user::{RegisterDto, RoleFlagsDto, TokenDto},
    server::{
        data::{role::RoleRepository, user::UserRepository},
        error::{auth::AuthError, validation::ValidationError, Error},
        model::{auth::TokenType, db::UserModel, role::RoleName},
        util::{
            jwt::JwtKeys,
            validation::{is_valid_email, MIN_PASSWORD_LEN},
        },
    },
};

/// Token type reported to mobile clients
pub const BEARER_TOKEN_TYPE: &str = "bearer";

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of [`AuthService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an account holding `role`
    ///
    /// Emails are stored lowercased, so registration is case-insensitive.
    ///
    /// # Returns
    /// - `Ok(UserModel)`: The created user
    /// - `Err(Error::ValidationError)`: The first failing field rule
    /// - `Err(Error::AuthError(AuthError::EmailTaken))`: The email is already registered
    pub async fn register(&self, form: &RegisterDto, role: RoleName) -> Result<UserModel, Error> {
        let email = validate_registration(form)?;

        let user_repository = UserRepository::new(self.db);
        let role_repository = RoleRepository::new(self.db);

        if user_repository.find_by_email(&email).await?.is_some() {
            return Err(AuthError::EmailTaken(email).into());
        }

        let Some(role_model) = role_repository.find_by_name(role.as_str()).await? else {
            return Err(Error::InternalError(format!(
                "Role {} is missing from the role table",
                role
            )));
        };

        let password_hash = hash_password(form.password.clone()).await?;
        let name = form
            .name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string);

        let user = user_repository.create(&email, &password_hash, name).await?;
        role_repository.assign(user.id, role_model.id).await?;

        tracing::info!("Registered user ID {} with role {}", user.id, role);

        Ok(user)
    }

    /// Checks the email and password pair
    pub async fn login(&self, email: &str, password: &str) -> Result<UserModel, Error> {
        let email = email.trim().to_lowercase();

        let Some(user) = UserRepository::new(self.db).find_by_email(&email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password.to_string(), user.password_hash.clone()).await? {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }

    /// Login for the mobile app, which only serves tenants
    pub async fn mobile_login(
        &self,
        jwt: &JwtKeys,
        email: &str,
        password: &str,
    ) -> Result<TokenDto, Error> {
        let user = self.login(email, password).await?;

        let roles = RoleRepository::new(self.db).get_role_names(user.id).await?;
        let roles = RoleFlagsDto::from_roles(roles);
        if !roles.is_penyewa {
            return Err(AuthError::TenantOnly.into());
        }

        issue_tokens(jwt, user, roles)
    }

    /// Exchanges a refresh token for a new token pair
    pub async fn refresh(&self, jwt: &JwtKeys, refresh_token: &str) -> Result<TokenDto, Error> {
        let user_id = jwt.verify(refresh_token, TokenType::Refresh)?;

        let Some(user) = self.get_user(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        let roles = RoleRepository::new(self.db).get_role_names(user.id).await?;

        issue_tokens(jwt, user, RoleFlagsDto::from_roles(roles))
    }

    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserModel>, Error> {
        Ok(UserRepository::new(self.db).get(user_id).await?)
    }

    /// Creates the configured administrator account when no account uses its email
    pub async fn bootstrap_admin(&self, email: &str, password: &str) -> Result<(), Error> {
        let email = email.trim().to_lowercase();

        let user_repository = UserRepository::new(self.db);
        let role_repository = RoleRepository::new(self.db);

        if user_repository.find_by_email(&email).await?.is_some() {
            return Ok(());
        }

        let Some(role_model) = role_repository
            .find_by_name(RoleName::Admin.as_str())
            .await?
        else {
            return Err(Error::InternalError(
                "Role admin is missing from the role table".to_string(),
            ));
        };

        let password_hash = hash_password(password.to_string()).await?;
        let user = user_repository
            .create(&email, &password_hash, Some("Administrator".to_string()))
            .await?;
        role_repository.assign(user.id, role_model.id).await?;

        tracing::info!("Created administrator account {}", email);

        Ok(())
    }
}

/// Hashes a password on the blocking pool, bcrypt being CPU bound
async fn hash_password(password: String) -> Result<String, Error> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, bcrypt::DEFAULT_COST))
        .await
        .map_err(|e| Error::InternalError(format!("Password hashing task failed: {}", e)))?
        .map_err(Into::into)
}

/// Checks a password against its bcrypt hash on the blocking pool
async fn verify_password(password: String, hash: String) -> Result<bool, Error> {
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| Error::InternalError(format!("Password verification task failed: {}", e)))?
        .map_err(Into::into)
}

/// Validates a registration form, returning the normalized email
fn validate_registration(form: &RegisterDto) -> Result<String, ValidationError> {
    let email = form.email.trim().to_lowercase();

    if email.is_empty() {
        return Err(ValidationError::Missing("Email"));
    }
    if !is_valid_email(&email) {
        return Err(ValidationError::Invalid("Email format is invalid".to_string()));
    }
    if form.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::Invalid(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }
    if form.password != form.confirm_password {
        return Err(ValidationError::Invalid(
            "Password confirmation does not match".to_string(),
        ));
    }

    Ok(email)
}

fn issue_tokens(jwt: &JwtKeys, user: UserModel, roles: RoleFlagsDto) -> Result<TokenDto, Error> {
    let pair = jwt.issue_pair(user.id, Utc::now())?;

    Ok(TokenDto {
        access_token: pair.access_token,
        refresh_token: pair.refresh_token,
        expires_in: pair.expires_in,
        expires_at: pair.expires_at,
        token_type: BEARER_TOKEN_TYPE.to_string(),
        user: user.into(),
        roles,
    })
}
