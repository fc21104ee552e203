use super::ErrorDisplay;
use joke_errors::AppError;
use leptos::prelude::*;

/// Rendered in place of the form when no credential was found at startup.
#[component]
pub fn MissingTokenNotice() -> impl IntoView {
    view! { <ErrorDisplay message=AppError::MissingCredential.user_message()/> }
}
