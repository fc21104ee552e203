use crate::assets::{APP_CAPTION, APP_TITLE};
use crate::components::{DebugPanel, ErrorDisplay, JokeForm, MissingTokenNotice};
use joke_app::domain::{DebugInfo, Explanation};
use leptos::prelude::*;
use server_fn::ServerFnError;

#[server(GetDebugInfoFn, "/api", endpoint = "debug_info")]
pub async fn get_debug_info() -> Result<DebugInfo, ServerFnError> {
    use joke_app::domain::ModelId;
    use joke_app::AppContext;

    let ctx = expect_context::<AppContext>();
    Ok(ctx.debug_info(ModelId::default()))
}

#[server(ExplainJokeFn, "/api", endpoint = "explain_joke")]
pub async fn explain_joke(model: String, joke: String) -> Result<Explanation, ServerFnError> {
    use joke_app::domain::ModelId;
    use joke_app::AppContext;
    use joke_errors::AppError;

    let ctx = expect_context::<AppContext>();
    let to_server_error = |e: AppError| -> ServerFnError { ServerFnError::new(e.user_message()) };

    let model = ModelId::parse_or_default(&model).map_err(to_server_error)?;
    let explain = ctx.explain_joke().map_err(to_server_error)?;

    tracing::info!("explain_joke server function called with model {}", model);
    explain.execute(model, &joke).await.map_err(to_server_error)
}

#[component]
pub fn HomePage() -> impl IntoView {
    let debug_info = Resource::new(|| (), |_| get_debug_info());

    view! {
        <div class="hero">
            <h1 class="hero__title">{APP_TITLE}</h1>
            <p class="hero__subtitle">{APP_CAPTION}</p>
        </div>

        <Suspense fallback=move || view! { <p class="loading__text">"Loading…"</p> }>
            {move || {
                debug_info.get().map(|result| {
                    match result {
                        // No form without a credential: nothing here can trigger a request.
                        Ok(info) => view! {
                            <DebugPanel info=info/>
                            {if info.has_github_token {
                                view! { <JokeForm selected=info.model/> }.into_any()
                            } else {
                                view! { <MissingTokenNotice/> }.into_any()
                            }}
                        }.into_any(),
                        Err(e) => view! {
                            <ErrorDisplay message=e.to_string()/>
                        }.into_any(),
                    }
                })
            }}
        </Suspense>
    }
}
