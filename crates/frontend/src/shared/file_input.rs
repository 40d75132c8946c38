use wasm_bindgen::JsCast;

/// Первый файл из `<input type="file">`, вызвавшего событие
pub fn selected_file(ev: &leptos::ev::Event) -> Option<web_sys::File> {
    ev.target()?
        .dyn_into::<web_sys::HtmlInputElement>()
        .ok()?
        .files()?
        .get(0)
}
