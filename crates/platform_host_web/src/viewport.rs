//! Browser viewport queries.

/// Viewport width below which the desktop switches to fullscreen (mobile) windows.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Returns `window.innerWidth`, or `None` outside the browser.
pub fn viewport_width() -> Option<f64> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()?.inner_width().ok()?.as_f64()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}
