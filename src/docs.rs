use happyhomes_auth::IdentityPayload;
use happyhomes_core::ErrorResponse;
use happyhomes_db::{DeleteResult, InsertOneResult, UpdateResult};
use happyhomes_models::{
    AdminStatusResponse, AdoptionRequest, AdoptionStatus, CreateAdoptionDto, CreateDonationDto,
    CreatePaymentDto, CreatePetDto, CreateUserDto, DonationCampaign, MarkAdopted,
    PaymentIntentRequest, PaymentIntentResponse, PaymentRecord, Pet, PetFilterParams,
    RegisterUserResponse, RoleUpdate, TokenResponse, UpdateAdoptionStatusDto, UpdateDonationDto,
    UpdatePaymentDto, UpdatePetDto, User, UserRole,
};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::issue_jwt,
        crate::modules::users::controller::get_users,
        crate::modules::users::controller::register_user,
        crate::modules::users::controller::check_admin,
        crate::modules::users::controller::make_admin,
        crate::modules::pets::controller::get_pets,
        crate::modules::pets::controller::get_pet,
        crate::modules::pets::controller::get_pets_by_email,
        crate::modules::pets::controller::create_pet,
        crate::modules::pets::controller::update_pet,
        crate::modules::pets::controller::adopt_pet,
        crate::modules::pets::controller::delete_pet,
        crate::modules::adoptions::controller::get_adoption_requests,
        crate::modules::adoptions::controller::create_adoption_request,
        crate::modules::adoptions::controller::update_adoption_status,
        crate::modules::donations::controller::get_campaigns,
        crate::modules::donations::controller::get_campaign,
        crate::modules::donations::controller::update_campaign,
        crate::modules::donations::controller::create_campaign,
        crate::modules::donations::controller::get_campaigns_by_creator,
        crate::modules::payments::controller::create_payment_intent,
        crate::modules::payments::controller::get_payments_by_donor,
        crate::modules::payments::controller::get_payments_by_campaign,
        crate::modules::payments::controller::create_payment_record,
        crate::modules::payments::controller::update_payment_record,
        crate::modules::payments::controller::refund_payment,
    ),
    components(
        schemas(
            IdentityPayload,
            TokenResponse,
            ErrorResponse,
            InsertOneResult,
            UpdateResult,
            DeleteResult,
            User,
            UserRole,
            CreateUserDto,
            RegisterUserResponse,
            AdminStatusResponse,
            RoleUpdate,
            Pet,
            CreatePetDto,
            UpdatePetDto,
            PetFilterParams,
            MarkAdopted,
            AdoptionRequest,
            AdoptionStatus,
            CreateAdoptionDto,
            UpdateAdoptionStatusDto,
            DonationCampaign,
            CreateDonationDto,
            UpdateDonationDto,
            PaymentRecord,
            CreatePaymentDto,
            UpdatePaymentDto,
            PaymentIntentRequest,
            PaymentIntentResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Identity token exchange"),
        (name = "Users", description = "User registration and admin roles"),
        (name = "Pets", description = "Pet listings"),
        (name = "Adoptions", description = "Adoption requests between requesters and pet owners"),
        (name = "Donations", description = "Donation campaigns"),
        (name = "Payments", description = "Payment intents and donation payment records")
    ),
    info(
        title = "Happy Homes API",
        version = "0.1.0",
        description = "Pet adoption and donation backend built with Rust and Axum. Routes marked with a lock require a bearer identity token from `POST /jwt`.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
