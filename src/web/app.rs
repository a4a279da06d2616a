use leptos::prelude::*;

use crate::port::UiHandle;

/// Game chrome around the playfield.
///
/// This is the mounted component's outer shell: a header with the music
/// control, and the slot the game board renders into. Game rules and board
/// state are none of its business; the only thing it tells the page is the
/// player's music choice, emitted on `toggle_music`.
#[component]
pub(super) fn App(ports: UiHandle) -> impl IntoView {
    // Music starts off; the relay unmutes and plays on the first `false`.
    let (music_off, set_music_off) = signal(true);

    let toggle = move |_| {
        let next = !music_off.get_untracked();
        set_music_off.set(next);
        ports.toggle_music().emit(next);
    };

    view! {
        <div class="shell">
            <header class="shell-header">
                <h1 class="brand">"Blockfall"</h1>
                <button
                    class="music-toggle"
                    title="Toggle music"
                    on:click=toggle
                >
                    {move || if music_off.get() { "♪ off" } else { "♪ on" }}
                </button>
            </header>

            // The game board renders into this slot; the shell only owns
            // the chrome around it.
            <main class="playfield"></main>
        </div>
    }
}
