use leptos::prelude::*;

#[component]
pub fn ErrorDisplay(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="error" role="alert">
            <p class="error__message">{message}</p>
        </div>
    }
}
