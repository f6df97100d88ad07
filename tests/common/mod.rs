//! Shared test utilities.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use userdeck::api::{Continent, Country, UserPage, UserRecord};
use userdeck::ui::countries::{CountriesIntent, CountriesReducer, CountriesState};
use userdeck::ui::mvi::Reducer;

pub fn user(id: usize) -> UserRecord {
    UserRecord {
        id: format!("60d0fe4f53112361{id:08}"),
        title: "mr".to_string(),
        first_name: format!("First{id}"),
        last_name: format!("Last{id}"),
        email: format!("user{id}@example.com"),
        picture: Some(format!("https://randomuser.me/api/portraits/men/{id}.jpg")),
    }
}

pub fn user_page(page: u32, limit: u32) -> UserPage {
    let start = (page * limit) as usize;
    UserPage {
        data: (start..start + limit as usize).map(user).collect(),
        total: 99,
        page,
        limit,
    }
}

/// Wire form of [`user_page`].
pub fn user_page_json(page: u32, limit: u32) -> String {
    serde_json::to_string(&user_page(page, limit)).unwrap()
}

pub fn countries(n: usize) -> Vec<Country> {
    (0..n)
        .map(|i| Country {
            code: format!("C{i:03}"),
            name: format!("Country {i}"),
            emoji: String::new(),
            native: format!("Native {i}"),
            phone: format!("{i}"),
            currency: Some("EUR".to_string()),
            capital: Some(format!("Capital {i}")),
            continent: Continent {
                name: "Europe".to_string(),
            },
        })
        .collect()
}

pub fn countries_json(n: usize) -> String {
    serde_json::to_string(&serde_json::json!({
        "data": { "countries": countries(n) }
    }))
    .unwrap()
}

pub fn loaded_window(n: usize) -> CountriesState {
    CountriesReducer::reduce(
        CountriesState::default(),
        CountriesIntent::SetDisplayData {
            countries: countries(n),
        },
    )
}
