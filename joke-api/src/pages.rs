use joke_app::domain::{DebugInfo, Explanation, ModelId};
use joke_errors::AppError;
use joke_ui::assets::{
    APP_CAPTION, APP_TITLE, FAVICON, JOKE_PLACEHOLDER, PAGE_TITLE, STYLES, SUBMIT_SCRIPT,
};

/// Page shown after a form submission. A fatal error replaces the form, so no
/// further request can be triggered from the page.
pub fn render_result_page(
    debug: &DebugInfo,
    joke: &str,
    outcome: Result<&Explanation, &AppError>,
) -> String {
    let outcome_html = match outcome {
        Ok(explanation) => render_explanation(explanation),
        Err(e) if e.is_warning() => render_warning(e),
        Err(e) => render_error(e),
    };
    let form_html = match outcome {
        Err(e) if e.is_fatal() => String::new(),
        _ => render_form(debug.model, joke),
    };
    render_page(debug, &form_html, &outcome_html)
}

fn render_page(debug: &DebugInfo, form_html: &str, outcome_html: &str) -> String {
    format!(r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{page_title}</title>
    <link rel="icon" href="{favicon}">
    <style>{styles}</style>
</head>
<body>
    <main class="container">
        <div class="hero">
            <h1 class="hero__title">{app_title}</h1>
            <p class="hero__subtitle">{app_caption}</p>
        </div>
        <details class="debug">
            <summary class="debug__summary">Debug</summary>
            <pre class="debug__content">{debug_json}</pre>
        </details>
        {form_html}
        {outcome_html}
    </main>
    <script>{script}</script>
</body>
</html>"#,
        page_title = PAGE_TITLE,
        favicon = FAVICON,
        styles = STYLES,
        app_title = APP_TITLE,
        app_caption = APP_CAPTION,
        debug_json = escape_html(&debug.to_pretty_json()),
        form_html = form_html,
        outcome_html = outcome_html,
        script = SUBMIT_SCRIPT,
    )
}

fn render_form(selected: ModelId, joke: &str) -> String {
    let options: String = ModelId::ALL
        .iter()
        .map(|model| {
            let selected_attr = if *model == selected { " selected" } else { "" };
            format!(
                r#"<option value="{id}"{selected_attr}>{id}</option>"#,
                id = model.as_str(),
                selected_attr = selected_attr
            )
        })
        .collect();

    // The newline after <textarea> is dropped by the HTML parser, so a joke
    // starting with a newline keeps it.
    format!(r#"<form action="/explain" method="post" class="joke-form">
            <label class="joke-form__label" for="model">Model</label>
            <select id="model" name="model" class="joke-form__select" title="Models are hosted by GitHub Models.">{options}</select>
            <label class="joke-form__label" for="joke">Enter a joke to explain:</label>
            <textarea id="joke" name="joke" class="joke-form__textarea" rows="6" placeholder="{placeholder}">
{joke}</textarea>
            <button type="submit" class="joke-form__button">Explain Joke</button>
        </form>"#,
        options = options,
        placeholder = escape_html(JOKE_PLACEHOLDER),
        joke = escape_html(joke),
    )
}

fn render_explanation(explanation: &Explanation) -> String {
    format!(
        r#"<div class="explanation">
            <h2 class="explanation__title">Explanation</h2>
            <div class="explanation__content">{}</div>
        </div>"#,
        escape_html(&explanation.text)
    )
}

fn render_warning(error: &AppError) -> String {
    format!(
        r#"<div class="warning" role="status"><p class="warning__message">{}</p></div>"#,
        escape_html(&error.user_message())
    )
}

fn render_error(error: &AppError) -> String {
    format!(
        r#"<div class="error" role="alert"><p class="error__message">{}</p></div>"#,
        escape_html(&error.user_message())
    )
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn debug(has_token: bool) -> DebugInfo {
        DebugInfo::new(has_token, ModelId::Gpt41)
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain text"), "plain text");
    }

    #[test]
    fn test_explanation_rendered_verbatim() {
        let explanation = Explanation::new(ModelId::Gpt41, "X".to_string());
        let html = render_result_page(&debug(true), "joke", Ok(&explanation));
        assert!(html.contains(r#"<div class="explanation__content">X</div>"#));
        assert!(!html.contains(r#"class="error""#));
    }

    #[test]
    fn test_selected_model_and_joke_are_kept() {
        let explanation = Explanation::new(ModelId::Gpt41, "X".to_string());
        let html = render_result_page(&debug(true), "a <b> joke", Ok(&explanation));
        assert!(html.contains(r#"<option value="openai/gpt-4.1" selected>"#));
        assert!(html.contains(r#"<option value="openai/gpt-4.1-mini">"#));
        assert!(html.contains("\na &lt;b&gt; joke</textarea>"));
    }

    #[test]
    fn test_warning_region_for_empty_input() {
        let html = render_result_page(&debug(true), "  ", Err(&AppError::EmptyInput));
        assert!(html.contains(r#"<p class="warning__message">Please enter a joke first.</p>"#));
        assert!(!html.contains(r#"class="explanation__content""#));
    }

    #[test]
    fn test_api_error_shows_status_and_body() {
        let err = AppError::ApiError {
            status: 404,
            body: "not found".to_string(),
        };
        let html = render_result_page(&debug(true), "joke", Err(&err));
        assert!(html.contains("GitHub Models API error 404: not found"));
        assert!(html.contains("<form"));
        assert!(!html.contains(r#"class="explanation__content""#));
    }

    #[test]
    fn test_missing_credential_hides_form() {
        let html = render_result_page(&debug(false), "joke", Err(&AppError::MissingCredential));
        assert!(html.contains("No GitHub token found."));
        assert!(html.contains("&quot;has_github_token&quot;: false"));
        assert!(!html.contains("<form"));
        assert!(!html.contains("<textarea"));
    }
}
