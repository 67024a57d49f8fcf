//! Direct `document` access for the pieces Leptos does not own.
//!
//! The button itself is rendered by Leptos; the theme classes live on
//! `<body>`, outside the mounted view, so they are edited here.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

use crate::error::Result;
use crate::theme::ClassChange;

#[cfg(feature = "csr")]
use crate::error::Error;

#[cfg(feature = "csr")]
fn document() -> Result<web_sys::Document> {
    web_sys::window()
        .ok_or(Error::Unavailable("window"))?
        .document()
        .ok_or(Error::Unavailable("document"))
}

#[cfg(feature = "csr")]
fn js_err(e: wasm_bindgen::JsValue) -> Error {
    Error::Dom(format!("{e:?}"))
}

/// Whether a `document.readyState` value means the DOM is still parsing.
pub fn still_loading(ready_state: &str) -> bool {
    ready_state == "loading"
}

/// Apply a planned class edit to `<body>`.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
pub fn apply_class_change(change: &ClassChange) -> Result<()> {
    #[cfg(feature = "csr")]
    {
        let body = document()?.body().ok_or(Error::Unavailable("body"))?;
        let classes = body.class_list();
        for class in &change.remove {
            classes.remove_1(class).map_err(js_err)?;
        }
        if let Some(class) = &change.add {
            classes.add_1(class).map_err(js_err)?;
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        Ok(())
    }
}

/// Text of the element with `id`, if the page has one.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
pub fn inline_config(id: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let doc = match document() {
            Ok(doc) => doc,
            Err(e) => {
                log::debug!("no inline config: {e}");
                return None;
            }
        };
        doc.get_element_by_id(id)?.text_content()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Run `f` once the DOM is parsed.
///
/// Runs immediately unless `document.readyState` is still `loading`, in
/// which case `f` waits for `DOMContentLoaded`. Outside the browser `f` runs
/// immediately.
pub fn when_ready<F>(f: F) -> Result<()>
where
    F: FnOnce() + 'static,
{
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let doc = document()?;
        if !still_loading(&doc.ready_state()) {
            f();
            return Ok(());
        }
        let cb = Closure::once_into_js(f);
        doc.add_event_listener_with_callback("DOMContentLoaded", cb.unchecked_ref())
            .map_err(js_err)
    }
    #[cfg(not(feature = "csr"))]
    {
        f();
        Ok(())
    }
}
