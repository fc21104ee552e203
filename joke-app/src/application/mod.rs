mod explain_joke;

pub use explain_joke::ExplainJoke;
