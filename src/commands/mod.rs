pub mod booking;
pub mod navigation;
pub mod rooms;
pub mod session;
pub mod theme;
