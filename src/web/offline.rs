use wasm_bindgen_futures::{spawn_local, JsFuture};

use crate::offline::OfflineCache;

/// Registers the page's offline caching worker with the browser.
///
/// The worker script itself is a deploy artifact, not part of this crate;
/// registration only points the browser at it.
pub(super) struct ServiceWorkerCache {
    script_url: &'static str,
}

impl ServiceWorkerCache {
    pub(super) fn new(script_url: &'static str) -> Self {
        Self { script_url }
    }
}

impl OfflineCache for ServiceWorkerCache {
    fn register(&self) {
        let Some(window) = web_sys::window() else {
            log::warn!("offline cache: no window, skipping registration");
            return;
        };

        // The request is already in flight once register() returns; the
        // task only exists to keep the rejection out of the console's
        // unhandled-promise noise.
        let pending = JsFuture::from(window.navigator().service_worker().register(self.script_url));
        let script_url = self.script_url;
        spawn_local(async move {
            if let Err(err) = pending.await {
                log::warn!("offline cache: registering {script_url} failed: {err:?}");
            }
        });
    }
}
