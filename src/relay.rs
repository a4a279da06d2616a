use crate::port::Port;

/// Imperative controls of the page's music element.
///
/// The shell resolves the real `<audio>` element once at startup and injects
/// it behind this trait, so the relay never reaches into the document itself
/// and tests can substitute an in-memory sink.
pub trait MusicSink {
    fn pause(&self) -> Result<(), String>;
    fn play(&self) -> Result<(), String>;
    fn set_muted(&self, muted: bool) -> Result<(), String>;
}

/// Relays the UI's music toggle channel to the audio sink.
///
/// The relay is built unsubscribed. [`subscribe`](MusicRelay::subscribe)
/// consumes it and moves it onto a channel for the rest of the page's life;
/// there is no unsubscribe.
///
/// Emissions are applied one at a time, in emission order, with no buffering
/// or coalescing; when toggles race, the last one wins by being the last to
/// mutate the sink.
pub struct MusicRelay<S: MusicSink> {
    sink: S,
}

impl<S: MusicSink> MusicRelay<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Applies one toggle emission to the sink.
    ///
    /// `true` turns the music off: pause, then mute. `false` turns it back
    /// on: unmute, then play. The order within each branch is part of the
    /// page contract. A failing sink operation stops the emission; the
    /// remaining operation does not run.
    pub fn apply(&self, music_off: bool) -> Result<(), String> {
        if music_off {
            self.sink.pause()?;
            self.sink.set_muted(true)?;
        } else {
            self.sink.set_muted(false)?;
            self.sink.play()?;
        }
        Ok(())
    }

    /// Moves the relay onto `channel`. From here on every emission drives
    /// the sink; a failed emission surfaces as an unhandled platform fault
    /// (an uncaught exception on wasm, a panic elsewhere) with no retry,
    /// and later emissions are handled on their own.
    pub fn subscribe(self, channel: &Port<bool>)
    where
        S: 'static,
    {
        log::debug!("music relay: subscribed to {}", channel.name());
        channel.subscribe(move |music_off| {
            if let Err(msg) = self.apply(music_off) {
                fault(msg);
            }
        });
    }
}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
fn fault(msg: String) {
    // throw_str exits without running destructors; thrown inside the
    // handler it would leave the channel's delivery borrow held and every
    // later emission would fault before reaching the sink. From its own
    // task the browser still reports the exception as uncaught and the
    // channel stays usable.
    wasm_bindgen_futures::spawn_local(async move {
        wasm_bindgen::throw_str(&msg);
    });
}

#[cfg(not(all(feature = "web", target_arch = "wasm32")))]
fn fault(msg: String) -> ! {
    panic!("{msg}")
}

#[cfg(test)]
pub(crate) mod fakes {
    use super::MusicSink;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct FakeSinkState {
        playing: bool,
        muted: bool,
        ops: Vec<&'static str>,
        fail_on: Option<&'static str>,
    }

    /// In-memory stand-in for the page's audio element. Clones share state,
    /// so a test can keep one handle while the relay owns another.
    #[derive(Clone, Default)]
    pub(crate) struct FakeSink {
        state: Rc<RefCell<FakeSinkState>>,
    }

    impl FakeSink {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        /// Makes the named operation ("pause", "play", "mute", "unmute")
        /// fail without touching state, like an element that is gone.
        pub(crate) fn fail_on(&self, op: &'static str) {
            self.state.borrow_mut().fail_on = Some(op);
        }

        pub(crate) fn playing(&self) -> bool {
            self.state.borrow().playing
        }

        pub(crate) fn muted(&self) -> bool {
            self.state.borrow().muted
        }

        pub(crate) fn ops(&self) -> Vec<&'static str> {
            self.state.borrow().ops.clone()
        }

        fn record(
            &self,
            op: &'static str,
            write: impl FnOnce(&mut FakeSinkState),
        ) -> Result<(), String> {
            let mut state = self.state.borrow_mut();
            if state.fail_on == Some(op) {
                return Err(format!("{op} failed"));
            }
            write(&mut state);
            state.ops.push(op);
            Ok(())
        }
    }

    impl MusicSink for FakeSink {
        fn pause(&self) -> Result<(), String> {
            self.record("pause", |s| s.playing = false)
        }

        fn play(&self) -> Result<(), String> {
            self.record("play", |s| s.playing = true)
        }

        fn set_muted(&self, muted: bool) -> Result<(), String> {
            self.record(if muted { "mute" } else { "unmute" }, |s| s.muted = muted)
        }
    }
}
