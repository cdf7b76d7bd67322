//! Fire-and-forget UI sound playback.

/// Plays the audio file at `url` at `volume` (0.0-1.0).
///
/// Autoplay-policy rejections and missing files are swallowed: a silent click is the expected
/// degradation.
pub fn play_ui_sound(url: &str, volume: f64) {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen_futures::JsFuture;

        let Ok(audio) = web_sys::HtmlAudioElement::new_with_src(url) else {
            return;
        };
        audio.set_volume(volume.clamp(0.0, 1.0));
        if let Ok(promise) = audio.play() {
            wasm_bindgen_futures::spawn_local(async move {
                let _ = JsFuture::from(promise).await;
            });
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (url, volume);
    }
}
