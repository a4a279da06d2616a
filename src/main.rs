// WASM entrypoint for Trunk.
//
// `index.html` asks Trunk for `--features web`; without that feature (and on
// non-wasm targets) this binary is an intentional no-op so plain `cargo test`
// keeps working.

fn main() {
    // No-op outside the browser build.
}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn wasm_start() {
    blockfall_web::start();
}
