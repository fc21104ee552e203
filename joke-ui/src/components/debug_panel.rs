use joke_app::domain::DebugInfo;
use leptos::prelude::*;

#[component]
pub fn DebugPanel(info: DebugInfo) -> impl IntoView {
    view! {
        <details class="debug">
            <summary class="debug__summary">"Debug"</summary>
            <pre class="debug__content">{info.to_pretty_json()}</pre>
        </details>
    }
}
