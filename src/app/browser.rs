//! Opening the generated map in the default browser.

use log::{info, warn};

/// Opens `url` in the default browser.
///
/// Returns `false` (after a warning with the URL to open by hand) if no
/// browser could be launched.
pub fn open_browser(url: &str) -> bool {
    match open::that(url) {
        Ok(()) => {
            info!("Opened browser automatically");
            true
        }
        Err(e) => {
            warn!("Could not open browser automatically: {}", e);
            warn!("Please open {} manually", url);
            false
        }
    }
}
