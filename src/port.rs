use std::cell::RefCell;
use std::rc::Rc;

/// A named, typed event channel of the mounted UI.
///
/// Ports are the signaling surface between the embedded game component and
/// the page shell: the component emits, the shell subscribes. Everything is
/// single-threaded on the page event loop; `emit` runs every handler to
/// completion, in registration order, before it returns. There is no
/// buffering: an emission that nobody has subscribed to yet is gone.
///
/// Clones share the underlying channel.
pub struct Port<T> {
    name: &'static str,
    handlers: Rc<RefCell<Vec<Box<dyn FnMut(T)>>>>,
}

impl<T> Clone for Port<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            handlers: Rc::clone(&self.handlers),
        }
    }
}

impl<T> Port<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            handlers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// The page-visible channel name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Registers a handler. Every registered handler fires independently on
    /// each emission; there is no way to unsubscribe.
    pub fn subscribe(&self, handler: impl FnMut(T) + 'static) {
        self.handlers.borrow_mut().push(Box::new(handler));
    }

    /// Delivers `value` to every handler, in registration order. The
    /// handler list stays borrowed until the last handler has returned.
    ///
    /// Re-entering the channel from inside a handler is not supported: the
    /// page contract leaves reentrancy undefined, and this channel faults on
    /// it (borrow panic) instead of guessing an ordering.
    pub fn emit(&self, value: T)
    where
        T: Clone,
    {
        let mut handlers = self.handlers.borrow_mut();
        for handler in handlers.iter_mut() {
            handler(value.clone());
        }
    }
}

/// Handle to the mounted game component, owning its named signal channels.
///
/// One handle exists per page instance; it is produced by the mount
/// operation and lives as long as the page. Clones share the channels.
#[derive(Clone)]
pub struct UiHandle {
    toggle_music: Port<bool>,
}

impl UiHandle {
    pub fn new() -> Self {
        Self {
            toggle_music: Port::new("toggleMusic"),
        }
    }

    /// The music toggle channel. Payload semantics are fixed by the page
    /// contract: `true` silences playback, `false` brings it back.
    pub fn toggle_music(&self) -> &Port<bool> {
        &self.toggle_music
    }
}

impl Default for UiHandle {
    fn default() -> Self {
        Self::new()
    }
}
