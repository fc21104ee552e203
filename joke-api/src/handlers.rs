use crate::pages::render_result_page;
use axum::response::Html;
use joke_app::domain::ModelId;
use joke_app::AppContext;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct ExplainForm {
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub joke: String,
}

pub async fn handle_explain_form(ctx: AppContext, form: ExplainForm) -> Html<String> {
    let parsed_model = ModelId::parse_or_default(&form.model);
    let debug = ctx.debug_info(parsed_model.clone().unwrap_or_default());

    let explain = match ctx.explain_joke() {
        Ok(explain) => explain,
        Err(e) => return Html(render_result_page(&debug, &form.joke, Err(&e))),
    };

    let model = match parsed_model {
        Ok(model) => model,
        Err(e) => {
            tracing::warn!("Rejected form with {}", e);
            return Html(render_result_page(&debug, &form.joke, Err(&e)));
        }
    };

    let outcome = explain.execute(model, &form.joke).await;
    Html(render_result_page(&debug, &form.joke, outcome.as_ref()))
}
