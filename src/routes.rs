use crate::models::SessionView;
use serde::Serialize;

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";
/// Where the detail page sends an unknown room; the catch-all then lands on home.
pub const NOT_FOUND_PATH: &str = "/not-found";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "page", content = "roomId", rename_all = "camelCase")]
pub enum Route {
    Login,
    Home,
    RoomDetail(Option<i64>),
    Booking(Option<i64>),
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Navigation {
    Render {
        route: Route,
        #[serde(rename = "showChrome")]
        show_chrome: bool,
    },
    Redirect { to: String },
    /// Session is still being restored.
    Loading,
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["login"] => Route::Login,
            ["room", id] => Route::RoomDetail(id.parse().ok()),
            ["booking", id] => Route::Booking(id.parse().ok()),
            _ => Route::Unknown,
        }
    }

    pub fn requires_auth(self) -> bool {
        !matches!(self, Route::Login | Route::Unknown)
    }

    /// Header and footer are hidden on the login page.
    pub fn show_chrome(self) -> bool {
        self != Route::Login
    }
}

pub fn room_path(id: i64) -> String {
    format!("/room/{id}")
}

pub fn booking_path(id: i64) -> String {
    format!("/booking/{id}")
}

fn redirect(to: &str) -> Navigation {
    Navigation::Redirect { to: to.to_string() }
}

pub fn resolve(path: &str, session: &SessionView) -> Navigation {
    let route = Route::parse(path);

    match route {
        Route::Unknown => redirect(HOME_PATH),
        Route::Login if session.is_authenticated => redirect(HOME_PATH),
        _ if route.requires_auth() && session.loading => Navigation::Loading,
        _ if route.requires_auth() && !session.is_authenticated => redirect(LOGIN_PATH),
        _ => Navigation::Render {
            route,
            show_chrome: route.show_chrome(),
        },
    }
}
