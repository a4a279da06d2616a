//! Browser shell for the Blockfall game.
//!
//! This crate is the page-side glue, not the game: it mounts the embedded
//! game UI into the `#root` container, registers the offline cache worker,
//! and relays the UI's `toggle_music` channel to the `#music` audio element.
//! Game rules, rendering, and game state live in the mounted component and
//! are opaque to everything here.
//!
//! The crate is intentionally a stub by default so it builds and tests on
//! native targets without a wasm toolchain. Enable the real page with
//! `--features web` on `wasm32` (Trunk builds it via `src/main.rs`).

pub mod error;
pub mod offline;
pub mod port;
pub mod relay;
pub mod startup;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod web;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use web::start;
