use joke_app::domain::ModelId;
use leptos::prelude::*;

#[component]
pub fn ModelSelect(selected: ModelId) -> impl IntoView {
    view! {
        <label class="joke-form__label" for="model">"Model"</label>
        <select
            id="model"
            name="model"
            class="joke-form__select"
            title="Models are hosted by GitHub Models."
        >
            {ModelId::ALL.into_iter().map(|model| {
                view! {
                    <option value=model.as_str() selected={model == selected}>
                        {model.as_str()}
                    </option>
                }
            }).collect::<Vec<_>>()}
        </select>
    }
}
