use happyhomes_core::AppError;
use happyhomes_db::{Collection, Filter, InsertOneResult, SharedStore, UpdateResult, collections};
use happyhomes_models::{CreateDonationDto, DonationCampaign, UpdateDonationDto};
use tracing::instrument;

pub struct DonationService;

impl DonationService {
    fn campaigns(store: &SharedStore) -> Collection<DonationCampaign> {
        Collection::new(store.clone(), collections::DONATIONS)
    }

    #[instrument(skip(store))]
    pub async fn get_campaigns(store: &SharedStore) -> Result<Vec<DonationCampaign>, AppError> {
        Ok(Self::campaigns(store).find_many(&Filter::all()).await?)
    }

    #[instrument(skip(store))]
    pub async fn get_campaign(store: &SharedStore, id: &str) -> Result<DonationCampaign, AppError> {
        Self::campaigns(store)
            .find_one(&Filter::by_id(id))
            .await?
            .ok_or_else(|| AppError::not_found("Donation campaign not found"))
    }

    #[instrument(skip(store))]
    pub async fn get_campaigns_by_creator(
        store: &SharedStore,
        email: &str,
    ) -> Result<Vec<DonationCampaign>, AppError> {
        Ok(Self::campaigns(store)
            .find_many(&Filter::by_email(email))
            .await?)
    }

    #[instrument(skip(store))]
    pub async fn create_campaign(
        store: &SharedStore,
        caller_email: &str,
        dto: CreateDonationDto,
    ) -> Result<InsertOneResult, AppError> {
        let campaign = dto.into_campaign(caller_email, chrono::Utc::now());
        Ok(Self::campaigns(store).insert_one(&campaign).await?)
    }

    /// Sets only the fields present in `dto`, pausing or resuming included.
    #[instrument(skip(store))]
    pub async fn update_campaign(
        store: &SharedStore,
        id: &str,
        dto: UpdateDonationDto,
    ) -> Result<UpdateResult, AppError> {
        Ok(Self::campaigns(store)
            .update_one(&Filter::by_id(id), &dto)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::http::StatusCode;
    use happyhomes_db::MemoryStore;

    fn campaign(name: &str) -> CreateDonationDto {
        CreateDonationDto {
            pet_name: name.to_string(),
            pet_image: None,
            max_amount: 1000.0,
            last_date: Some("2026-12-01".to_string()),
            short_description: Some("Surgery fund".to_string()),
            long_description: None,
            email: None,
        }
    }

    #[tokio::test]
    async fn pause_keeps_campaign_details() {
        let store: SharedStore = Arc::new(MemoryStore::new());
        let id = DonationService::create_campaign(&store, "c@x.com", campaign("Rex"))
            .await
            .unwrap()
            .inserted_id;

        let result = DonationService::update_campaign(
            &store,
            &id,
            UpdateDonationDto {
                paused: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(result, UpdateResult::new(1, 1));

        let stored = DonationService::get_campaign(&store, &id).await.unwrap();
        assert!(stored.paused);
        assert_eq!(stored.max_amount, 1000.0);
        assert_eq!(stored.donated_amount, 0.0);
        assert_eq!(stored.short_description.as_deref(), Some("Surgery fund"));
    }

    #[tokio::test]
    async fn campaigns_by_creator() {
        let store: SharedStore = Arc::new(MemoryStore::new());
        DonationService::create_campaign(&store, "c@x.com", campaign("Rex"))
            .await
            .unwrap();
        DonationService::create_campaign(&store, "d@x.com", campaign("Tom"))
            .await
            .unwrap();

        let mine = DonationService::get_campaigns_by_creator(&store, "c@x.com")
            .await
            .unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].pet_name, "Rex");
        assert_eq!(DonationService::get_campaigns(&store).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn unknown_campaign_is_not_found() {
        let store: SharedStore = Arc::new(MemoryStore::new());
        let err = DonationService::get_campaign(&store, "missing").await.unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }
}
