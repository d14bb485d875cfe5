use happyhomes_core::AppError;
use happyhomes_db::{Collection, Filter, InsertOneResult, SharedStore, UpdateResult, collections};
use happyhomes_models::{AdoptionRequest, CreateAdoptionDto, UpdateAdoptionStatusDto};
use tracing::instrument;

pub struct AdoptionService;

impl AdoptionService {
    fn requests(store: &SharedStore) -> Collection<AdoptionRequest> {
        Collection::new(store.clone(), collections::ADOPTIONS)
    }

    /// Requests made for pets listed by `owner_email`.
    #[instrument(skip(store))]
    pub async fn get_requests_for_owner(
        store: &SharedStore,
        owner_email: &str,
    ) -> Result<Vec<AdoptionRequest>, AppError> {
        Ok(Self::requests(store)
            .find_many(&Filter::eq("ownerEmail", owner_email))
            .await?)
    }

    #[instrument(skip(store))]
    pub async fn create_request(
        store: &SharedStore,
        caller_email: &str,
        dto: CreateAdoptionDto,
    ) -> Result<InsertOneResult, AppError> {
        let request = dto.into_request(caller_email, chrono::Utc::now());
        Ok(Self::requests(store).insert_one(&request).await?)
    }

    #[instrument(skip(store))]
    pub async fn update_status(
        store: &SharedStore,
        id: &str,
        dto: UpdateAdoptionStatusDto,
    ) -> Result<UpdateResult, AppError> {
        Ok(Self::requests(store).update_one(&Filter::by_id(id), &dto).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use happyhomes_db::MemoryStore;
    use happyhomes_models::AdoptionStatus;
    use serde_json::json;

    fn request_for(owner: &str) -> CreateAdoptionDto {
        serde_json::from_value(json!({
            "petId": "pet-1",
            "petName": "Rex",
            "ownerEmail": owner,
            "address": "12 Park Road"
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn requests_are_listed_per_owner_and_start_pending() {
        let store: SharedStore = Arc::new(MemoryStore::new());
        AdoptionService::create_request(&store, "me@x.com", request_for("owner@x.com"))
            .await
            .unwrap();
        AdoptionService::create_request(&store, "me@x.com", request_for("other@x.com"))
            .await
            .unwrap();

        let requests = AdoptionService::get_requests_for_owner(&store, "owner@x.com")
            .await
            .unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].status, AdoptionStatus::Pending);
        assert_eq!(requests[0].requester_email, "me@x.com");
    }

    #[tokio::test]
    async fn status_update_touches_only_status() {
        let store: SharedStore = Arc::new(MemoryStore::new());
        let id = AdoptionService::create_request(&store, "me@x.com", request_for("owner@x.com"))
            .await
            .unwrap()
            .inserted_id;

        let result = AdoptionService::update_status(
            &store,
            &id,
            UpdateAdoptionStatusDto {
                status: AdoptionStatus::Accepted,
            },
        )
        .await
        .unwrap();
        assert_eq!(result.modified_count, 1);

        let requests = AdoptionService::get_requests_for_owner(&store, "owner@x.com")
            .await
            .unwrap();
        assert_eq!(requests[0].status, AdoptionStatus::Accepted);
        assert_eq!(requests[0].address.as_deref(), Some("12 Park Road"));
    }
}
