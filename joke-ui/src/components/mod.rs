mod debug_panel;
mod error_display;
mod joke_form;
mod missing_token_notice;
mod model_select;

pub use debug_panel::DebugPanel;
pub use error_display::ErrorDisplay;
pub use joke_form::JokeForm;
pub use missing_token_notice::MissingTokenNotice;
pub use model_select::ModelSelect;
