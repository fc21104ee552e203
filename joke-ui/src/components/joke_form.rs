use super::ModelSelect;
use crate::assets::JOKE_PLACEHOLDER;
use joke_app::domain::ModelId;
use leptos::prelude::*;

/// Plain HTML form so it works before (or without) hydration.
#[component]
pub fn JokeForm(selected: ModelId) -> impl IntoView {
    view! {
        <form action="/explain" method="post" class="joke-form">
            <ModelSelect selected=selected/>
            <label class="joke-form__label" for="joke">"Enter a joke to explain:"</label>
            <textarea
                id="joke"
                name="joke"
                class="joke-form__textarea"
                rows="6"
                placeholder=JOKE_PLACEHOLDER
            ></textarea>
            <button type="submit" class="joke-form__button">
                "Explain Joke"
            </button>
        </form>
    }
}
