use happyhomes_db::{DocumentStore, Filter, UpdateResult, collections, to_document};
use happyhomes_models::{RoleUpdate, UserRole};

/// Sets the stored role of the user registered under `email` to `admin`.
///
/// Fails when no such user exists; promoting an admin again is a no-op.
pub async fn promote_admin(
    store: &dyn DocumentStore,
    email: &str,
) -> Result<UpdateResult, Box<dyn std::error::Error>> {
    let set = to_document(&RoleUpdate {
        role: UserRole::Admin,
    })?;

    let result = store
        .update_one(collections::USERS, &Filter::by_email(email), set)
        .await?;

    if result.matched_count == 0 {
        return Err(format!("No user registered with email {email}").into());
    }

    Ok(result)
}
