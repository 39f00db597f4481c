use crate::models::ThemeView;
use crate::state::AppStateExt;
use tauri::AppHandle;

#[tauri::command]
pub fn get_theme(app: AppHandle) -> Result<ThemeView, String> {
    app.booking().theme().map_err(|e| e.to_string())
}

#[tauri::command]
pub fn toggle_theme(app: AppHandle) -> Result<ThemeView, String> {
    app.booking().toggle_theme().map_err(|e| e.to_string())
}
