use leptos::prelude::*;

/// Цветная метка: "primary", "success", "warning", "error", иначе нейтральная
#[component]
pub fn Badge(#[prop(optional, into)] variant: MaybeProp<String>, children: Children) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge badge--primary",
        "success" => "badge badge--success",
        "warning" => "badge badge--warning",
        "error" => "badge badge--error",
        _ => "badge badge--neutral",
    };

    view! { <span class=variant_class>{children()}</span> }
}
