use crate::models::{LoginForm, SessionView};
use crate::state::AppStateExt;
use tauri::AppHandle;

#[tauri::command]
pub fn login(app: AppHandle, form: LoginForm) -> Result<SessionView, String> {
    app.booking().login(&form).map_err(|e| e.to_string())
}

#[tauri::command]
pub fn logout(app: AppHandle) -> Result<SessionView, String> {
    app.booking().logout().map_err(|e| e.to_string())
}

#[tauri::command]
pub fn get_session(app: AppHandle) -> Result<SessionView, String> {
    app.booking().session().map_err(|e| e.to_string())
}
