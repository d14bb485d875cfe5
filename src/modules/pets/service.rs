use happyhomes_core::AppError;
use happyhomes_db::{
    Collection, DeleteResult, Filter, InsertOneResult, SharedStore, UpdateResult, collections,
};
use happyhomes_models::{CreatePetDto, MarkAdopted, Pet, PetFilterParams, UpdatePetDto};
use tracing::instrument;

pub struct PetService;

impl PetService {
    fn pets(store: &SharedStore) -> Collection<Pet> {
        Collection::new(store.clone(), collections::PETS)
    }

    #[instrument(skip(store))]
    pub async fn get_pets(store: &SharedStore, params: PetFilterParams) -> Result<Vec<Pet>, AppError> {
        let mut filter = Filter::all();
        if let Some(category) = params.category {
            filter = filter.and("category", category);
        }
        if let Some(adopted) = params.adopted {
            filter = filter.and("adopted", adopted);
        }

        Ok(Self::pets(store).find_many(&filter).await?)
    }

    #[instrument(skip(store))]
    pub async fn get_pet(store: &SharedStore, id: &str) -> Result<Pet, AppError> {
        Self::pets(store)
            .find_one(&Filter::by_id(id))
            .await?
            .ok_or_else(|| AppError::not_found("Pet not found"))
    }

    #[instrument(skip(store))]
    pub async fn get_pets_by_email(store: &SharedStore, email: &str) -> Result<Vec<Pet>, AppError> {
        Ok(Self::pets(store).find_many(&Filter::by_email(email)).await?)
    }

    #[instrument(skip(store))]
    pub async fn create_pet(
        store: &SharedStore,
        caller_email: &str,
        dto: CreatePetDto,
    ) -> Result<InsertOneResult, AppError> {
        let pet = dto.into_pet(caller_email, chrono::Utc::now());
        Ok(Self::pets(store).insert_one(&pet).await?)
    }

    /// Sets only the fields present in `dto`.
    #[instrument(skip(store))]
    pub async fn update_pet(
        store: &SharedStore,
        id: &str,
        dto: UpdatePetDto,
    ) -> Result<UpdateResult, AppError> {
        Ok(Self::pets(store).update_one(&Filter::by_id(id), &dto).await?)
    }

    #[instrument(skip(store))]
    pub async fn mark_adopted(store: &SharedStore, id: &str) -> Result<UpdateResult, AppError> {
        Ok(Self::pets(store)
            .update_one(&Filter::by_id(id), &MarkAdopted { adopted: true })
            .await?)
    }

    #[instrument(skip(store))]
    pub async fn delete_pet(store: &SharedStore, id: &str) -> Result<DeleteResult, AppError> {
        Ok(Self::pets(store).delete_one(&Filter::by_id(id)).await?)
    }
}
