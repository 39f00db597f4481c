use crate::carousel::{Carousel, Direction};
use crate::catalog::RoomRepository;
use crate::config::AppConfig;
use crate::db::LocalStorage;
use crate::error::{BookingError, Result};
use crate::filter::{apply_filters, filter_by_tab, SIMILAR_ROOMS_LIMIT};
use crate::loading::LoadState;
use crate::models::{
    BookingQuote, BookingRequest, BookingSummary, FilterCriteria, ListingTab, ListingView,
    LoginForm, Room, RoomDetailView, SessionView, ThemeView,
};
use crate::pricing::{format_vnd, nightly_rate, quote, summarize_booking};
use crate::routes::{resolve, Navigation};
use crate::session::AuthStore;
use crate::theme::ThemeStore;
use log::debug;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tauri::{AppHandle, Manager};

/// Everything the command handlers share, injected once with `app.manage`.
pub struct AppState {
    pub config: AppConfig,
    pub rooms: Arc<dyn RoomRepository>,
    pub auth: Mutex<AuthStore>,
    pub theme: Mutex<ThemeStore>,
    pub listing: Mutex<LoadState<ListingView>>,
    /// Ticket of the most recent listing request; older results are not published.
    listing_seq: AtomicU64,
}

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>> {
    mutex.lock().map_err(|_| BookingError::StatePoisoned)
}

async fn simulate_latency(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

impl AppState {
    pub fn new(
        config: AppConfig,
        storage: Arc<dyn LocalStorage>,
        rooms: Arc<dyn RoomRepository>,
    ) -> Result<Self> {
        let mut auth = AuthStore::new(storage.clone());
        auth.restore()?;
        let theme = ThemeStore::load(storage)?;

        Ok(AppState {
            config,
            rooms,
            auth: Mutex::new(auth),
            theme: Mutex::new(theme),
            listing: Mutex::new(LoadState::Idle),
            listing_seq: AtomicU64::new(0),
        })
    }

    // Listing

    async fn load_listing<F>(&self, delay: Duration, select: F) -> Result<ListingView>
    where
        F: FnOnce(Vec<Room>) -> ListingView,
    {
        let ticket = self.listing_seq.fetch_add(1, Ordering::SeqCst) + 1;
        lock(&self.listing)?.begin();

        simulate_latency(delay).await;
        let result = self.rooms.list_rooms().await.map(select);

        let mut listing = lock(&self.listing)?;
        if self.listing_seq.load(Ordering::SeqCst) == ticket {
            listing.finish(result.as_ref().map(ListingView::clone));
        } else {
            debug!("Dropping stale listing result (request {ticket})");
        }
        result
    }

    fn filtered_view(rooms: Vec<Room>, criteria: &FilterCriteria) -> ListingView {
        let rooms = apply_filters(&rooms, criteria);
        ListingView {
            is_empty: rooms.is_empty(),
            rooms,
            applied_tags: criteria.applied_tags(),
        }
    }

    /// First load of the home page, unfiltered.
    pub async fn initial_listing(&self) -> Result<ListingView> {
        let criteria = FilterCriteria::default();
        self.load_listing(self.config.initial_delay, |rooms| {
            Self::filtered_view(rooms, &criteria)
        })
        .await
    }

    pub async fn listing(&self, criteria: &FilterCriteria) -> Result<ListingView> {
        self.load_listing(self.config.listing_delay, |rooms| {
            Self::filtered_view(rooms, criteria)
        })
        .await
    }

    pub async fn listing_by_tab(&self, tab: ListingTab) -> Result<ListingView> {
        self.load_listing(Duration::ZERO, |rooms| {
            let rooms = filter_by_tab(&rooms, tab);
            ListingView {
                is_empty: rooms.is_empty(),
                rooms,
                applied_tags: Vec::new(),
            }
        })
        .await
    }

    pub fn listing_state(&self) -> Result<LoadState<ListingView>> {
        Ok(lock(&self.listing)?.clone())
    }

    // Detail

    pub async fn room(&self, id: i64) -> Result<Room> {
        self.rooms
            .find_room(id)
            .await?
            .ok_or(BookingError::RoomNotFound(id))
    }

    /// Rooms sharing the location of room `id`, excluding itself.
    pub async fn similar(&self, id: i64) -> Result<Vec<Room>> {
        let room = self.room(id).await?;
        self.rooms.similar_rooms(&room, SIMILAR_ROOMS_LIMIT).await
    }

    pub async fn room_detail(&self, id: i64) -> Result<RoomDetailView> {
        simulate_latency(self.config.detail_delay).await;
        let room = self.room(id).await?;
        let similar = self.rooms.similar_rooms(&room, SIMILAR_ROOMS_LIMIT).await?;

        Ok(RoomDetailView {
            gallery: room.gallery(),
            similar,
            price_display: format_vnd(nightly_rate(&room)),
            original_price_display: room.price_discount.map(|_| format_vnd(room.price)),
            room,
        })
    }

    pub async fn step_gallery(
        &self,
        room_id: i64,
        active: usize,
        direction: Direction,
    ) -> Result<usize> {
        let room = self.room(room_id).await?;
        let mut carousel = Carousel::at(room.gallery().len(), active);
        Ok(carousel.step(direction))
    }

    // Booking

    pub async fn booking_quote(
        &self,
        room_id: i64,
        request: &BookingRequest,
    ) -> Result<BookingQuote> {
        let room = self.room(room_id).await?;
        Ok(quote(&room, request))
    }

    pub async fn booking_summary(
        &self,
        room_id: i64,
        request: &BookingRequest,
    ) -> Result<BookingSummary> {
        let room = self.room(room_id).await?;
        summarize_booking(&room, request)
    }

    // Session

    pub fn login(&self, form: &LoginForm) -> Result<SessionView> {
        let mut auth = lock(&self.auth)?;
        auth.login(form)?;
        Ok(auth.view())
    }

    pub fn logout(&self) -> Result<SessionView> {
        let mut auth = lock(&self.auth)?;
        auth.logout()?;
        Ok(auth.view())
    }

    pub fn session(&self) -> Result<SessionView> {
        Ok(lock(&self.auth)?.view())
    }

    // Theme

    pub fn theme(&self) -> Result<ThemeView> {
        Ok(lock(&self.theme)?.view())
    }

    pub fn toggle_theme(&self) -> Result<ThemeView> {
        let mut theme = lock(&self.theme)?;
        theme.toggle()?;
        Ok(theme.view())
    }

    // Navigation

    pub fn navigate(&self, path: &str) -> Result<Navigation> {
        let session = self.session()?;
        Ok(resolve(path, &session))
    }
}

pub trait AppStateExt {
    fn booking(&self) -> &AppState;
}

impl AppStateExt for AppHandle {
    fn booking(&self) -> &AppState {
        self.state::<AppState>().inner()
    }
}
