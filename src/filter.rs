use crate::models::{FilterCriteria, ListingTab, Room};
use crate::pricing::nightly_rate;
use log::debug;

/// Location picker entry that matches every room.
pub const ALL_LOCATIONS: &str = "Tất cả";

pub const LOCATIONS: [&str; 8] = [
    ALL_LOCATIONS,
    "Hồ Chí Minh",
    "Hà Nội",
    "Đà Nẵng",
    "Nha Trang",
    "Đà Lạt",
    "Phú Quốc",
    "Hội An",
];

pub const SIMILAR_ROOMS_LIMIT: usize = 3;

impl FilterCriteria {
    /// The location to match on, or `None` when any location is accepted.
    pub fn location_filter(&self) -> Option<&str> {
        match self.location.as_deref() {
            None | Some("") | Some(ALL_LOCATIONS) => None,
            Some(location) => Some(location),
        }
    }

    pub fn matches(&self, room: &Room) -> bool {
        if let Some(location) = self.location_filter() {
            if room.location != location {
                return false;
            }
        }

        if room.max_guests < self.guests {
            return false;
        }

        let rate = nightly_rate(room);
        let [min, max] = self.price_range;
        rate >= min && rate <= max
    }

    pub fn toggle_amenity(&mut self, amenity: &str) {
        if let Some(pos) = self.amenities.iter().position(|a| a == amenity) {
            self.amenities.remove(pos);
        } else {
            self.amenities.push(amenity.to_string());
        }
    }

    /// Chips shown above the listing for the active location and guest filters.
    pub fn applied_tags(&self) -> Vec<String> {
        let mut tags = Vec::new();
        if let Some(location) = self.location.as_deref().filter(|l| !l.is_empty()) {
            tags.push(location.to_string());
        }
        if self.guests > 1 {
            tags.push(format!("{} khách", self.guests));
        }
        tags
    }

    pub fn cleared(&self) -> Self {
        Self {
            location: None,
            guests: 1,
            ..self.clone()
        }
    }
}

pub fn apply_filters(rooms: &[Room], criteria: &FilterCriteria) -> Vec<Room> {
    if !criteria.amenities.is_empty() {
        debug!(
            "amenity selection {:?} is collected but not applied to the listing",
            criteria.amenities
        );
    }

    let filtered: Vec<Room> = rooms
        .iter()
        .filter(|room| criteria.matches(room))
        .cloned()
        .collect();

    debug!(
        "filtered {} rooms down to {} (location={:?}, guests={}, price={:?})",
        rooms.len(),
        filtered.len(),
        criteria.location_filter(),
        criteria.guests,
        criteria.price_range
    );

    filtered
}

pub fn filter_by_tab(rooms: &[Room], tab: ListingTab) -> Vec<Room> {
    rooms
        .iter()
        .filter(|room| match tab {
            ListingTab::All => true,
            ListingTab::Popular => room.is_popular,
            ListingTab::New => room.is_new,
            ListingTab::Discounted => room.price_discount.is_some(),
        })
        .cloned()
        .collect()
}

pub fn similar_rooms(rooms: &[Room], room: &Room, limit: usize) -> Vec<Room> {
    rooms
        .iter()
        .filter(|r| r.id != room.id && r.location == room.location)
        .take(limit)
        .cloned()
        .collect()
}

/// Guest stepper: a step that would leave `1..=max` is ignored.
pub fn adjust_guests(current: u32, delta: i32, max: u32) -> u32 {
    let next = i64::from(current) + i64::from(delta);
    if next >= 1 && next <= i64::from(max) {
        next as u32
    } else {
        current
    }
}
