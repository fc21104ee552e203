//! Static text, styles and scripts shared by the Leptos shell and the
//! server-rendered result pages.

pub const PAGE_TITLE: &str = "Joke Explanation (GitHub Models)";
pub const APP_TITLE: &str = "Joke Explanation App 😂";
pub const APP_CAPTION: &str = "Powered by GitHub Models free tier";
pub const JOKE_PLACEHOLDER: &str =
    "e.g., Why did the scarecrow win an award? Because he was outstanding in his field!";

pub const FAVICON: &str = "data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>😂</text></svg>";

pub const STYLES: &str = r#"
:root {
    --base: #faf4ed;
    --surface: #fffaf3;
    --overlay: #f2e9e1;
    --muted: #9893a5;
    --subtle: #797593;
    --text: #575279;
    --love: #b4637a;
    --gold: #ea9d34;
    --pine: #286983;
    --foam: #56949f;
}
* { box-sizing: border-box; margin: 0; padding: 0; }
body {
    font-family: 'Inter', -apple-system, sans-serif;
    background: var(--base);
    color: var(--text);
    min-height: 100vh;
}
.container { max-width: 800px; margin: 0 auto; padding: 1.5rem; }
.hero { padding: 2.5rem 0 1.5rem; }
.hero__title { font-size: clamp(1.8rem, 5vw, 2.6rem); color: var(--love); font-weight: 800; margin-bottom: 0.5rem; }
.hero__subtitle { color: var(--subtle); font-size: 0.95rem; }
.debug { background: var(--surface); border: 1px solid var(--overlay); border-radius: 8px; padding: 0.75rem 1rem; margin: 1rem 0; }
.debug__summary { cursor: pointer; color: var(--subtle); font-weight: 600; }
.debug__content { margin-top: 0.75rem; font-size: 0.9rem; white-space: pre-wrap; }
.joke-form { display: flex; flex-direction: column; gap: 0.75rem; margin: 1.5rem 0; }
.joke-form__label { font-weight: 600; }
.joke-form__select, .joke-form__textarea {
    padding: 0.75rem 1rem; border: 2px solid var(--overlay);
    border-radius: 8px; background: var(--surface); color: var(--text); font-size: 1rem; font-family: inherit;
}
.joke-form__textarea { min-height: 140px; resize: vertical; }
.joke-form__select:focus, .joke-form__textarea:focus { outline: none; border-color: var(--pine); }
.joke-form__textarea::placeholder { color: var(--muted); }
.joke-form__button {
    align-self: flex-start; padding: 0.75rem 1.75rem; background: var(--love); color: var(--base);
    border: none; border-radius: 8px; font-size: 1rem; font-weight: 600; cursor: pointer;
}
.joke-form__button:hover { opacity: 0.9; }
.joke-form__button:disabled { background: var(--muted); cursor: wait; }
.loading__text { color: var(--subtle); font-style: italic; }
.warning { background: #fdf3e1; border: 2px solid var(--gold); border-radius: 8px; padding: 1rem 1.25rem; margin: 1.5rem 0; }
.warning__message { color: #8a5a14; }
.error { background: #fce8ec; border: 2px solid var(--love); border-radius: 8px; padding: 1rem 1.25rem; margin: 1.5rem 0; }
.error__message { color: #8b3d4d; white-space: pre-wrap; }
.explanation {
    background: var(--surface); border: 2px solid var(--overlay);
    border-radius: 12px; padding: 1.5rem; margin: 1.5rem 0;
}
.explanation__title { color: var(--pine); font-size: 1.3rem; margin-bottom: 0.75rem; }
.explanation__content { line-height: 1.7; font-size: 1.05rem; white-space: pre-wrap; }
"#;

/// Disables the button while the single request is in flight.
pub const SUBMIT_SCRIPT: &str = r#"
document.addEventListener('DOMContentLoaded', function() {
    const form = document.querySelector('.joke-form');
    if (!form) return;
    const button = form.querySelector('.joke-form__button');

    form.addEventListener('submit', function() {
        button.disabled = true;
        button.textContent = 'Explaining…';
    });
});
"#;
