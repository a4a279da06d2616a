//! The live page: DOM lookups, mount, offline registration, relay wiring.
//!
//! Everything in here assumes a real document and only compiles for
//! `--features web` on `wasm32`; the modules it wires together are the
//! platform-free ones in the crate root.

use leptos::prelude::*;

use crate::error::ShellError;
use crate::port::UiHandle;
use crate::relay::MusicRelay;
use crate::startup;

mod app;
mod audio;
mod dom;
mod offline;

use app::App;
use audio::AudioElementSink;
use offline::ServiceWorkerCache;

/// Container the game UI mounts into.
const CONTAINER_ID: &str = "root";
/// The page's music element.
const MUSIC_ID: &str = "music";
/// Conventional path of the offline caching worker.
const WORKER_SCRIPT: &str = "service-worker.js";

/// Wires the live page. Called once from the wasm entrypoint.
///
/// A page that is missing its contract elements is unusable; `start`
/// surfaces that as a panic, which the panic hook turns into the browser's
/// own error report. No recovery is attempted.
pub fn start() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    if let Err(e) = boot() {
        panic!("startup failed: {e}");
    }
}

fn boot() -> Result<(), ShellError> {
    let document = dom::document()?;

    let container = dom::require_html_element(&document, CONTAINER_ID)?;
    let ui = mount_ui(container);

    let music = dom::require_audio_element(&document, MUSIC_ID)?;
    let relay = MusicRelay::new(AudioElementSink::new(music));

    startup::wire(&ServiceWorkerCache::new(WORKER_SCRIPT), &ui, relay);
    Ok(())
}

/// Replaces the container's contents with the game UI and hands back the
/// handle that owns its signal channels.
fn mount_ui(container: web_sys::HtmlElement) -> UiHandle {
    let ui = UiHandle::new();
    let ports = ui.clone();

    // Drop the static placeholder markup; the component owns the container
    // from here on.
    container.set_inner_html("");
    leptos::mount::mount_to(container, move || view! { <App ports=ports /> }).forget();

    ui
}
