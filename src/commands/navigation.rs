use crate::routes::Navigation;
use crate::state::AppStateExt;
use tauri::AppHandle;

#[tauri::command]
pub fn resolve_route(app: AppHandle, path: String) -> Result<Navigation, String> {
    app.booking().navigate(&path).map_err(|e| e.to_string())
}
