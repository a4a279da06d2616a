use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlAudioElement, HtmlElement};

use crate::error::ShellError;

pub(super) fn document() -> Result<Document, ShellError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or(ShellError::NoDocument)
}

fn require_element(document: &Document, id: &'static str) -> Result<Element, ShellError> {
    document
        .get_element_by_id(id)
        .ok_or(ShellError::ElementNotFound { id })
}

pub(super) fn require_html_element(
    document: &Document,
    id: &'static str,
) -> Result<HtmlElement, ShellError> {
    require_element(document, id)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| ShellError::WrongElementKind {
            id,
            expected: "an HTML element",
        })
}

pub(super) fn require_audio_element(
    document: &Document,
    id: &'static str,
) -> Result<HtmlAudioElement, ShellError> {
    require_element(document, id)?
        .dyn_into::<HtmlAudioElement>()
        .map_err(|_| ShellError::WrongElementKind {
            id,
            expected: "an <audio> element",
        })
}
