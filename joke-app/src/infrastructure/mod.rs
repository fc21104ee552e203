pub mod credentials;
pub mod github_models;
