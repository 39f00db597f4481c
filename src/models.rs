use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_PRICE: f64 = 10_000_000.0;
pub const MAX_LISTING_GUESTS: u32 = 10;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub price_discount: Option<f64>,
    pub max_guests: u32,
    pub bedrooms: u32,
    pub beds: u32,
    pub bathrooms: u32,
    pub area: u32,
    pub image_url: String,
    pub images: Vec<String>,
    pub location: String,
    pub rating: f32,
    pub review_count: u32,
    pub amenities: Vec<String>,
    pub is_popular: bool,
    pub is_new: bool,
}

impl Room {
    /// Gallery shown on the detail page, falling back to the cover image.
    pub fn gallery(&self) -> Vec<String> {
        if self.images.is_empty() {
            vec![self.image_url.clone()]
        } else {
            self.images.clone()
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    pub location: Option<String>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub guests: u32,
    pub price_range: [f64; 2],
    pub amenities: Vec<String>,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            location: None,
            check_in: None,
            check_out: None,
            guests: 1,
            price_range: [0.0, DEFAULT_MAX_PRICE],
            amenities: Vec::new(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ListingTab {
    #[default]
    All,
    Popular,
    New,
    Discounted,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub is_authenticated: bool,
    pub loading: bool,
    pub user: Option<User>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ThemeView {
    pub dark_mode: bool,
    pub body_class: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingRequest {
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub guests: u32,
}

impl Default for BookingRequest {
    fn default() -> Self {
        Self {
            check_in: None,
            check_out: None,
            guests: 1,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingQuote {
    pub nightly_rate: f64,
    pub nights: u32,
    pub guests: u32,
    pub subtotal: f64,
    pub service_fee: f64,
    pub total: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingSummary {
    pub room_id: i64,
    pub room_name: String,
    pub location: String,
    pub image_url: String,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub quote: BookingQuote,
    pub nightly_rate_display: String,
    pub service_fee_display: String,
    pub total_display: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListingView {
    pub rooms: Vec<Room>,
    pub is_empty: bool,
    pub applied_tags: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoomDetailView {
    pub room: Room,
    pub gallery: Vec<String>,
    pub similar: Vec<Room>,
    pub price_display: String,
    pub original_price_display: Option<String>,
}
