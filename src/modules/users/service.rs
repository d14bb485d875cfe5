use happyhomes_core::AppError;
use happyhomes_db::{Collection, Filter, SharedStore, UpdateResult, collections};
use happyhomes_models::{CreateUserDto, RegisterUserResponse, RoleUpdate, User, UserRole};
use happyhomes_observability::track_user_registered;
use serde_json::Value;
use tracing::{info, instrument};

pub struct UserService;

impl UserService {
    fn users(store: &SharedStore) -> Collection<User> {
        Collection::new(store.clone(), collections::USERS)
    }

    #[instrument(skip(store))]
    pub async fn get_users(store: &SharedStore) -> Result<Vec<User>, AppError> {
        Ok(Self::users(store).find_many(&Filter::all()).await?)
    }

    /// Inserts a user unless one with the same email exists.
    ///
    /// Returns whether a record was created; an existing record is left untouched.
    #[instrument(skip(store))]
    pub async fn register_user(
        store: &SharedStore,
        dto: CreateUserDto,
    ) -> Result<(bool, RegisterUserResponse), AppError> {
        let by_email = Filter::by_email(&dto.email);
        let user = dto.into_user(chrono::Utc::now());

        let Some(result) = Self::users(store)
            .insert_one_if_absent(&by_email, &user)
            .await?
        else {
            return Ok((false, RegisterUserResponse::already_exists()));
        };

        track_user_registered();
        info!(user_id = %result.inserted_id, "User registered");

        Ok((true, RegisterUserResponse::created(result.inserted_id)))
    }

    /// The role stored for `email`, read from the raw document.
    ///
    /// `None` when no user has that email. Any stored value other than the
    /// exact string `admin` yields [`UserRole::User`].
    #[instrument(skip(store))]
    pub async fn stored_role(store: &SharedStore, email: &str) -> Result<Option<UserRole>, AppError> {
        let document = Self::users(store)
            .find_one_document(&Filter::by_email(email))
            .await?;

        Ok(document.map(|doc| UserRole::from_stored(doc.get("role").and_then(Value::as_str))))
    }

    #[instrument(skip(store))]
    pub async fn is_admin(store: &SharedStore, email: &str) -> Result<bool, AppError> {
        Ok(Self::stored_role(store, email).await? == Some(UserRole::Admin))
    }

    #[instrument(skip(store))]
    pub async fn make_admin(store: &SharedStore, id: &str) -> Result<UpdateResult, AppError> {
        let result = Self::users(store)
            .update_one(
                &Filter::by_id(id),
                &RoleUpdate {
                    role: UserRole::Admin,
                },
            )
            .await?;

        Ok(result)
    }
}
