use crate::carousel::{self, Direction};
use crate::filter::{self, LOCATIONS};
use crate::loading::LoadState;
use crate::models::{FilterCriteria, ListingTab, ListingView, Room, RoomDetailView};
use crate::state::AppStateExt;
use tauri::AppHandle;

#[tauri::command]
pub fn get_locations() -> Vec<String> {
    LOCATIONS.iter().map(|l| l.to_string()).collect()
}

#[tauri::command]
pub async fn list_rooms(app: AppHandle) -> Result<ListingView, String> {
    app.booking()
        .initial_listing()
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn filter_rooms(app: AppHandle, criteria: FilterCriteria) -> Result<ListingView, String> {
    app.booking()
        .listing(&criteria)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn rooms_by_tab(app: AppHandle, tab: ListingTab) -> Result<ListingView, String> {
    app.booking()
        .listing_by_tab(tab)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub fn get_listing_state(app: AppHandle) -> Result<LoadState<ListingView>, String> {
    app.booking().listing_state().map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn get_room(app: AppHandle, id: i64) -> Result<RoomDetailView, String> {
    app.booking().room_detail(id).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn get_similar_rooms(app: AppHandle, id: i64) -> Result<Vec<Room>, String> {
    app.booking().similar(id).await.map_err(|e| e.to_string())
}

#[tauri::command]
#[allow(non_snake_case)]
pub async fn step_gallery(
    app: AppHandle,
    roomId: i64,
    active: usize,
    direction: Direction,
) -> Result<usize, String> {
    app.booking()
        .step_gallery(roomId, active, direction)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub fn placeholder_image(width: u32, height: u32) -> String {
    carousel::placeholder_image(width, height)
}

#[tauri::command]
pub fn adjust_guest_count(current: u32, delta: i32, max: u32) -> u32 {
    filter::adjust_guests(current, delta, max)
}
