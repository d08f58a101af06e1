//! Background music
//!
//! A single looped track at a fixed low volume. The simulation never touches
//! audio; the host feeds session events to `BackgroundMusic`, which drives
//! whatever `MusicSink` the platform provides.

use crate::sim::SessionEvent;

/// Something that can play one looped track
pub trait MusicSink {
    /// Start (or resume) looped playback at `volume`
    fn play_loop(&mut self, volume: f32);
    fn stop(&mut self);
}

/// Sink for native builds and tests
#[derive(Debug, Default)]
pub struct SilentSink {
    pub playing: bool,
    pub volume: f32,
}

impl MusicSink for SilentSink {
    fn play_loop(&mut self, volume: f32) {
        self.playing = true;
        self.volume = volume;
    }

    fn stop(&mut self) {
        self.playing = false;
    }
}

/// Music controller reacting to session events
pub struct BackgroundMusic<S: MusicSink> {
    sink: S,
    volume: f32,
    playing: bool,
}

impl<S: MusicSink> BackgroundMusic<S> {
    pub fn new(sink: S, volume: f32) -> Self {
        Self {
            sink,
            volume: volume.clamp(0.0, 1.0),
            playing: false,
        }
    }

    /// Start the loop. Already playing is a no-op.
    pub fn start(&mut self) {
        if self.playing {
            return;
        }
        self.sink.play_loop(self.volume);
        self.playing = true;
    }

    pub fn stop(&mut self) {
        if !self.playing {
            return;
        }
        self.sink.stop();
        self.playing = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Play while the round runs, stop at game over
    pub fn handle(&mut self, event: &SessionEvent) {
        match event {
            SessionEvent::GameStarted => self.start(),
            SessionEvent::GameOver { .. } => self.stop(),
            _ => {}
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

/// Browser sink backed by an `<audio>` element
#[cfg(target_arch = "wasm32")]
pub struct HtmlMusic {
    element: Option<web_sys::HtmlAudioElement>,
}

#[cfg(target_arch = "wasm32")]
impl HtmlMusic {
    pub fn new(src: &str) -> Self {
        let element = web_sys::HtmlAudioElement::new_with_src(src).ok();
        if element.is_none() {
            log::warn!("Failed to create audio element for {src} - music disabled");
        }
        Self { element }
    }
}

#[cfg(target_arch = "wasm32")]
impl MusicSink for HtmlMusic {
    fn play_loop(&mut self, volume: f32) {
        let Some(element) = &self.element else { return };
        element.set_loop(true);
        element.set_volume(volume as f64);
        // Autoplay may be refused until a user gesture; the promise is ignored
        if element.play().is_err() {
            log::warn!("Background music playback refused");
        }
    }

    fn stop(&mut self) {
        if let Some(element) = &self.element {
            let _ = element.pause();
        }
    }
}
