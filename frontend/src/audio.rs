use log::warn;
use shared::audio::{AudioChannel, AudioError};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlAudioElement;

use crate::config::get_asset_url;

// Generated by build.rs from assets/twister-songs
include!(concat!(env!("OUT_DIR"), "/tracks.rs"));

pub fn track_urls() -> Vec<String> {
    TRACK_FILES
        .iter()
        .map(|file| get_asset_url(&format!("twister-songs/{}", file)))
        .collect()
}

/// One `<audio>` element. If the element cannot be created every call is a
/// no-op and `play` reports [`AudioError::Unavailable`].
pub struct HtmlAudioChannel {
    element: Option<HtmlAudioElement>,
}

impl HtmlAudioChannel {
    pub fn new() -> Self {
        let element = match HtmlAudioElement::new() {
            Ok(element) => {
                element.set_loop(false);
                Some(element)
            }
            Err(e) => {
                warn!("Could not create audio element: {:?}", e);
                None
            }
        };
        Self { element }
    }

    pub fn element(&self) -> Option<&HtmlAudioElement> {
        self.element.as_ref()
    }
}

impl Default for HtmlAudioChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioChannel for HtmlAudioChannel {
    fn set_source(&mut self, track: &str) {
        if let Some(element) = &self.element {
            element.set_src(track);
        }
    }

    fn play(&mut self) -> Result<(), AudioError> {
        let element = self.element.as_ref().ok_or(AudioError::Unavailable)?;
        let promise = element
            .play()
            .map_err(|e| AudioError::PlayRejected(format!("{:?}", e)))?;

        // Autoplay policy rejections arrive through the promise
        spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                warn!("Audio play failed: {:?}", e);
            }
        });
        Ok(())
    }

    fn pause(&mut self) {
        if let Some(element) = &self.element {
            let _ = element.pause();
        }
    }

    fn volume(&self) -> f64 {
        self.element.as_ref().map(|e| e.volume()).unwrap_or(0.0)
    }

    fn set_volume(&mut self, volume: f64) {
        if let Some(element) = &self.element {
            element.set_volume(volume.clamp(0.0, 1.0));
        }
    }

    fn release(&mut self) {
        if let Some(element) = &self.element {
            let _ = element.pause();
            element.set_src("");
        }
    }
}
