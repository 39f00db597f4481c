pub mod carousel;
pub mod catalog;
mod commands;
pub mod config;
pub mod data;
pub mod db;
pub mod error;
pub mod filter;
pub mod loading;
pub mod models;
pub mod pricing;
pub mod routes;
pub mod session;
pub mod state;
pub mod theme;


use catalog::InMemoryRooms;
use commands::{booking, navigation, rooms, session as session_commands, theme as theme_commands};
use config::AppConfig;
use db::{Database, LocalStorage};
use log::{error, info};
use state::{AppState, AppStateExt};
use std::sync::Arc;
use tauri::{
    menu::{Menu, MenuItem},
    tray::{MouseButton, MouseButtonState, TrayIconBuilder, TrayIconEvent},
    AppHandle, Emitter, Manager,
};

fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}

fn handle_tray_menu(app: &AppHandle, id: &str) {
    match id {
        "toggle_theme" => match app.booking().toggle_theme() {
            Ok(view) => {
                if let Err(e) = app.emit("theme-changed", view) {
                    error!("Failed to emit theme-changed: {e}");
                }
            }
            Err(e) => error!("Failed to toggle theme from tray: {e}"),
        },
        "logout" => match app.booking().logout() {
            Ok(view) => {
                if let Err(e) = app.emit("session-changed", view) {
                    error!("Failed to emit session-changed: {e}");
                }
            }
            Err(e) => error!("Failed to log out from tray: {e}"),
        },
        "quit" => app.exit(0),
        _ => {}
    }
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    init_logging();

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            let config = AppConfig::load();

            // Local storage for the session and theme entries
            let db = Database::new(app.handle(), &config.db_file)?;
            db.initialize()?;
            let storage: Arc<dyn LocalStorage> = Arc::new(db);

            let rooms = Arc::new(InMemoryRooms::sample());

            let state = AppState::new(config, storage, rooms)?;
            info!(
                "StayVN started (authenticated={}, dark_mode={})",
                state.session()?.is_authenticated,
                state.theme()?.dark_mode
            );
            app.manage(state);

            // Create tray menu
            let toggle_theme = MenuItem::with_id(app, "toggle_theme", "Đổi giao diện", true, None::<&str>)?;
            let logout = MenuItem::with_id(app, "logout", "Đăng xuất", true, None::<&str>)?;
            let quit = MenuItem::with_id(app, "quit", "Thoát", true, None::<&str>)?;
            let menu = Menu::with_items(app, &[&toggle_theme, &logout, &quit])?;

            let mut tray = TrayIconBuilder::new()
                .menu(&menu)
                .show_menu_on_left_click(false)
                .on_tray_icon_event(|tray, event| {
                    if let TrayIconEvent::Click {
                        button: MouseButton::Left,
                        button_state: MouseButtonState::Up,
                        ..
                    } = event
                    {
                        let app = tray.app_handle();
                        if let Some(window) = app.get_webview_window("main") {
                            if window.is_visible().unwrap_or(false) {
                                let _ = window.hide();
                            } else {
                                let _ = window.show();
                                let _ = window.set_focus();
                            }
                        }
                    }
                })
                .on_menu_event(|app, event| handle_tray_menu(app, event.id.as_ref()));

            if let Some(icon) = app.default_window_icon() {
                tray = tray.icon(icon.clone());
            }
            let _tray = tray.build(app)?;

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Listing and detail
            rooms::get_locations,
            rooms::list_rooms,
            rooms::filter_rooms,
            rooms::rooms_by_tab,
            rooms::get_listing_state,
            rooms::get_room,
            rooms::get_similar_rooms,
            rooms::step_gallery,
            rooms::placeholder_image,
            rooms::adjust_guest_count,
            // Booking
            booking::quote_booking,
            booking::get_booking_summary,
            // Session
            session_commands::login,
            session_commands::logout,
            session_commands::get_session,
            // Theme
            theme_commands::get_theme,
            theme_commands::toggle_theme,
            // Navigation
            navigation::resolve_route,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
