//! Browser-initiated text downloads.

#[cfg(test)]
#[path = "download_test.rs"]
mod download_test;

/// How long a download's object URL stays valid after the click. Revoking it
/// immediately can abort the save in some browsers.
pub const OBJECT_URL_LIFETIME: std::time::Duration = std::time::Duration::from_secs(60);

/// Download filename for a meeting transcript: `transcript-<slug>.txt`, where
/// every whitespace run in the title becomes one hyphen and the result is
/// lower-cased.
pub fn transcript_filename(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut in_space = false;
    for ch in title.chars() {
        if ch.is_whitespace() {
            if !in_space {
                slug.push('-');
            }
            in_space = true;
        } else {
            slug.extend(ch.to_lowercase());
            in_space = false;
        }
    }
    format!("transcript-{slug}.txt")
}

/// Save `contents` as a plain-text file named `filename` through a temporary
/// object URL and anchor click. No-op outside the browser.
pub fn save_text(filename: &str, contents: &str) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(contents));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type("text/plain");
        let Ok(blob) = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options) else {
            leptos::logging::warn!("transcript download: blob creation failed");
            return;
        };
        let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
            leptos::logging::warn!("transcript download: object url failed");
            return;
        };

        if let Ok(anchor) = document
            .create_element("a")
            .map(|el| el.unchecked_into::<web_sys::HtmlAnchorElement>())
        {
            anchor.set_href(&url);
            anchor.set_download(filename);
            if let Some(body) = document.body() {
                let _ = body.append_child(&anchor);
                anchor.click();
                let _ = body.remove_child(&anchor);
            }
        }
        leptos::task::spawn_local(async move {
            crate::util::timer::sleep(OBJECT_URL_LIFETIME).await;
            let _ = web_sys::Url::revoke_object_url(&url);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (filename, contents);
    }
}
