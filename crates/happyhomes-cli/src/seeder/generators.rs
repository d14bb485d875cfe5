use chrono::Utc;
use fake::Fake;
use fake::faker::address::en::CityName;
use fake::faker::lorem::en::{Paragraph, Sentence};
use fake::faker::name::en::{FirstName, LastName};
use happyhomes_models::{DonationCampaign, Pet, User, UserRole};
use rayon::prelude::*;

const CATEGORIES: [&str; 5] = ["dog", "cat", "rabbit", "bird", "fish"];

pub fn generate_users(count: usize) -> Vec<User> {
    (0..count)
        .into_par_iter()
        .map(|idx| {
            let first_name: String = FirstName().fake();
            let last_name: String = LastName().fake();

            User {
                id: String::new(),
                email: format!(
                    "{}.{}+seed{}@example.com",
                    first_name.to_lowercase(),
                    last_name.to_lowercase(),
                    idx
                ),
                name: Some(format!("{first_name} {last_name}")),
                photo: None,
                role: UserRole::User,
                created_at: Some(Utc::now()),
            }
        })
        .collect()
}

/// Pets are spread round-robin over `owners`. No owners, no pets.
pub fn generate_pets(count: usize, owners: &[String]) -> Vec<Pet> {
    if owners.is_empty() {
        return Vec::new();
    }

    (0..count)
        .into_par_iter()
        .map(|idx| Pet {
            id: String::new(),
            name: FirstName().fake(),
            age: Some((1..15).fake()),
            image: None,
            category: Some(CATEGORIES[idx % CATEGORIES.len()].to_string()),
            location: Some(CityName().fake()),
            short_description: Some(Sentence(3..8).fake()),
            long_description: Some(Paragraph(2..4).fake()),
            email: owners[idx % owners.len()].clone(),
            adopted: idx % 4 == 0,
            created_at: Some(Utc::now()),
        })
        .collect()
}

pub fn generate_campaigns(count: usize, owners: &[String]) -> Vec<DonationCampaign> {
    if owners.is_empty() {
        return Vec::new();
    }

    (0..count)
        .into_par_iter()
        .map(|idx| {
            let max_amount = (100..5000).fake::<u32>() as f64;
            DonationCampaign {
                id: String::new(),
                pet_name: FirstName().fake(),
                pet_image: None,
                max_amount,
                donated_amount: 0.0,
                last_date: None,
                short_description: Some(Sentence(3..8).fake()),
                long_description: Some(Paragraph(2..4).fake()),
                email: owners[idx % owners.len()].clone(),
                paused: false,
                created_at: Some(Utc::now()),
            }
        })
        .collect()
}
