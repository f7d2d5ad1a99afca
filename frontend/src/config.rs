use web_sys::window;

/// Path prefix the app is served under.
pub const BASE_PATH: &str = "/minigames";

pub fn get_base_url() -> String {
    if let Some(window) = window() {
        if let Ok(origin) = window.location().origin() {
            return format!("{}{}", origin, BASE_PATH);
        }
    }

    // Relative to the page when there is no window (e.g. prerendering)
    BASE_PATH.to_string()
}

pub fn get_asset_url(path: &str) -> String {
    if path.starts_with("http") {
        path.to_string()
    } else {
        format!("{}/assets/{}", get_base_url(), path.trim_start_matches('/'))
    }
}
