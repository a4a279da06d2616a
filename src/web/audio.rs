use web_sys::HtmlAudioElement;

use crate::relay::MusicSink;

/// `MusicSink` over the page's `<audio>` element.
pub(super) struct AudioElementSink {
    element: HtmlAudioElement,
}

impl AudioElementSink {
    pub(super) fn new(element: HtmlAudioElement) -> Self {
        Self { element }
    }
}

impl MusicSink for AudioElementSink {
    fn pause(&self) -> Result<(), String> {
        self.element
            .pause()
            .map_err(|_| "music: pause threw".to_string())
    }

    fn play(&self) -> Result<(), String> {
        // play() hands back a promise the page never consumed; if autoplay
        // policy refuses, the browser reports the rejection on its own.
        self.element
            .play()
            .map(|_promise| ())
            .map_err(|_| "music: play threw".to_string())
    }

    fn set_muted(&self, muted: bool) -> Result<(), String> {
        self.element.set_muted(muted);
        Ok(())
    }
}
