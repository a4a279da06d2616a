use crate::offline::OfflineCache;
use crate::port::UiHandle;
use crate::relay::{MusicRelay, MusicSink};

/// Tail of the boot sequence, once the page handles exist: fire the offline
/// registration, then put the relay on the music toggle channel. The page
/// contract fixes this order (mount first, then the offline hook, then the
/// subscription); the mount half lives in the `web` module because it needs
/// a real document.
///
/// This half is platform-free so the whole sequence after mount runs in
/// native tests with doubles.
pub fn wire<S, O>(offline: &O, ui: &UiHandle, relay: MusicRelay<S>)
where
    S: MusicSink + 'static,
    O: OfflineCache,
{
    offline.register();
    relay.subscribe(ui.toggle_music());
    log::debug!("page wired");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::offline::NoopOfflineCache;
    use crate::relay::fakes::FakeSink;
    use std::cell::Cell;
    use std::rc::Rc;

    struct CountingCache {
        registrations: Rc<Cell<u32>>,
    }

    impl OfflineCache for CountingCache {
        fn register(&self) {
            self.registrations.set(self.registrations.get() + 1);
        }
    }

    #[test]
    fn wire_registers_the_offline_cache_exactly_once() {
        let registrations = Rc::new(Cell::new(0));
        let cache = CountingCache {
            registrations: Rc::clone(&registrations),
        };

        wire(&cache, &UiHandle::new(), MusicRelay::new(FakeSink::new()));

        assert_eq!(registrations.get(), 1);
    }

    #[test]
    fn wire_subscribes_the_relay() {
        let sink = FakeSink::new();
        let ui = UiHandle::new();

        wire(&NoopOfflineCache, &ui, MusicRelay::new(sink.clone()));
        ui.toggle_music().emit(false);

        assert!(sink.playing());
    }

    #[test]
    fn without_wiring_no_emission_reaches_the_sink() {
        // The mount-failed boundary: startup stopped before `wire`, so the
        // relay stays unsubscribed and the sink never moves.
        let sink = FakeSink::new();
        let ui = UiHandle::new();

        ui.toggle_music().emit(true);
        ui.toggle_music().emit(false);

        assert!(sink.ops().is_empty());
    }

    #[test]
    fn end_to_end_toggle_scenario() {
        let sink = FakeSink::new();
        let ui = UiHandle::new();
        wire(&NoopOfflineCache, &ui, MusicRelay::new(sink.clone()));

        ui.toggle_music().emit(true);
        assert!(!sink.playing());
        assert!(sink.muted());

        ui.toggle_music().emit(false);
        assert!(sink.playing());
        assert!(!sink.muted());
    }
}
