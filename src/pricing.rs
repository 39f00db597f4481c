use crate::error::{BookingError, Result};
use crate::models::{BookingQuote, BookingRequest, BookingSummary, Room};
use chrono::NaiveDate;

pub const SERVICE_FEE_RATE: f64 = 0.05;

pub fn nightly_rate(room: &Room) -> f64 {
    room.price_discount.unwrap_or(room.price)
}

/// Whole nights between the two dates, at least one. Missing dates count as a
/// single night and the order of the dates does not matter.
pub fn count_nights(check_in: Option<NaiveDate>, check_out: Option<NaiveDate>) -> u32 {
    match (check_in, check_out) {
        (Some(start), Some(end)) => {
            let days = (end - start).num_days().unsigned_abs();
            u32::try_from(days).unwrap_or(u32::MAX).max(1)
        }
        _ => 1,
    }
}

pub fn quote(room: &Room, request: &BookingRequest) -> BookingQuote {
    let nightly_rate = nightly_rate(room);
    let nights = count_nights(request.check_in, request.check_out);
    let subtotal = nightly_rate * f64::from(nights) * f64::from(request.guests);

    BookingQuote {
        nightly_rate,
        nights,
        guests: request.guests,
        subtotal,
        service_fee: subtotal * SERVICE_FEE_RATE,
        total: subtotal * (1.0 + SERVICE_FEE_RATE),
    }
}

pub fn summarize_booking(room: &Room, request: &BookingRequest) -> Result<BookingSummary> {
    if request.guests < 1 || request.guests > room.max_guests {
        return Err(BookingError::GuestsOutOfRange {
            requested: request.guests,
            max: room.max_guests,
        });
    }

    let quote = quote(room, request);

    Ok(BookingSummary {
        room_id: room.id,
        room_name: room.name.clone(),
        location: room.location.clone(),
        image_url: room.image_url.clone(),
        check_in: request.check_in,
        check_out: request.check_out,
        nightly_rate_display: format_vnd(quote.nightly_rate),
        service_fee_display: format_vnd(quote.service_fee),
        total_display: format_vnd(quote.total),
        quote,
    })
}

/// Groups an amount with dots, rounded to whole dong: `1200000.0` -> `1.200.000`.
pub fn group_thousands(amount: f64) -> String {
    let rounded = amount.round();
    let digits = format!("{}", rounded.abs() as u64);

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    if rounded < 0.0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

pub fn format_vnd(amount: f64) -> String {
    format!("{}\u{a0}₫", group_thousands(amount))
}
