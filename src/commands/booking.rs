use crate::models::{BookingQuote, BookingRequest, BookingSummary};
use crate::state::AppStateExt;
use tauri::AppHandle;

#[tauri::command]
#[allow(non_snake_case)]
pub async fn quote_booking(
    app: AppHandle,
    roomId: i64,
    request: BookingRequest,
) -> Result<BookingQuote, String> {
    app.booking()
        .booking_quote(roomId, &request)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
#[allow(non_snake_case)]
pub async fn get_booking_summary(
    app: AppHandle,
    roomId: i64,
    request: BookingRequest,
) -> Result<BookingSummary, String> {
    app.booking()
        .booking_summary(roomId, &request)
        .await
        .map_err(|e| e.to_string())
}
