//! # Happy Homes Models
//!
//! Stored records and request/response DTOs for the Happy Homes API.
//!
//! Records serialize with camelCase field names and carry the store-assigned
//! identifier as `_id`. The identifier is omitted while empty so that a new
//! record can be serialized straight into an insert.
//!
//! # Modules
//!
//! - [`auth`]: token exchange responses
//! - [`users`]: user records, roles and registration
//! - [`pets`]: pet listings
//! - [`adoptions`]: adoption requests
//! - [`donations`]: donation campaigns
//! - [`payments`]: payment records and payment intents

pub mod adoptions;
pub mod auth;
pub mod donations;
pub mod payments;
pub mod pets;
pub mod users;

// Re-export commonly used types at crate root for convenience
pub use adoptions::{AdoptionRequest, AdoptionStatus, CreateAdoptionDto, UpdateAdoptionStatusDto};
pub use auth::TokenResponse;
pub use donations::{CreateDonationDto, DonationCampaign, UpdateDonationDto};
pub use payments::{
    CreatePaymentDto, PaymentIntentRequest, PaymentIntentResponse, PaymentRecord,
    UpdatePaymentDto,
};
pub use pets::{CreatePetDto, MarkAdopted, Pet, PetFilterParams, UpdatePetDto};
pub use users::{
    AdminStatusResponse, CreateUserDto, RegisterUserResponse, RoleUpdate, User, UserRole,
};
