use happyhomes_core::AppError;
use happyhomes_db::{
    Collection, DeleteResult, Filter, InsertOneResult, SharedStore, UpdateResult, collections,
};
use happyhomes_models::{
    CreatePaymentDto, PaymentIntentRequest, PaymentIntentResponse, PaymentRecord, UpdatePaymentDto,
};
use happyhomes_observability::track_payment_intent_created;
use tracing::{error, info, instrument};

use crate::payments::SharedPaymentGateway;

pub struct PaymentService;

impl PaymentService {
    fn records(store: &SharedStore) -> Collection<PaymentRecord> {
        Collection::new(store.clone(), collections::PAYMENTS)
    }

    /// Asks the processor for an intent worth `request.price` and hands back its client secret.
    ///
    /// Nothing is persisted; the client records the payment once it succeeds.
    #[instrument(skip(gateway))]
    pub async fn create_intent(
        gateway: Option<&SharedPaymentGateway>,
        request: PaymentIntentRequest,
    ) -> Result<PaymentIntentResponse, AppError> {
        let gateway = gateway
            .ok_or_else(|| AppError::service_unavailable("Payment processing is not configured"))?;

        let amount_cents = request.amount_cents();
        let intent = gateway
            .create_payment_intent(amount_cents)
            .await
            .map_err(|e| {
                error!(error = %e, amount_cents, "Payment intent creation failed");
                AppError::new(e.status(), e)
            })?;

        track_payment_intent_created();
        info!(amount_cents, intent_id = ?intent.id, "Payment intent created");

        Ok(PaymentIntentResponse {
            client_secret: intent.client_secret,
        })
    }

    #[instrument(skip(store))]
    pub async fn get_by_donor(
        store: &SharedStore,
        email: &str,
    ) -> Result<Vec<PaymentRecord>, AppError> {
        Ok(Self::records(store).find_many(&Filter::by_email(email)).await?)
    }

    #[instrument(skip(store))]
    pub async fn get_by_campaign(
        store: &SharedStore,
        campaign_id: &str,
    ) -> Result<Vec<PaymentRecord>, AppError> {
        Ok(Self::records(store)
            .find_many(&Filter::eq("campaignId", campaign_id))
            .await?)
    }

    #[instrument(skip(store))]
    pub async fn create_record(
        store: &SharedStore,
        caller_email: &str,
        dto: CreatePaymentDto,
    ) -> Result<InsertOneResult, AppError> {
        let record = dto.into_record(caller_email, chrono::Utc::now());
        Ok(Self::records(store).insert_one(&record).await?)
    }

    #[instrument(skip(store))]
    pub async fn update_record(
        store: &SharedStore,
        id: &str,
        dto: UpdatePaymentDto,
    ) -> Result<UpdateResult, AppError> {
        Ok(Self::records(store)
            .update_one(&Filter::by_id(id), &dto)
            .await?)
    }

    /// A refund removes the payment record; the processor is not contacted.
    #[instrument(skip(store))]
    pub async fn refund(store: &SharedStore, id: &str) -> Result<DeleteResult, AppError> {
        Ok(Self::records(store).delete_one(&Filter::by_id(id)).await?)
    }
}
