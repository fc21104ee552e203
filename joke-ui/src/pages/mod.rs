mod home;

pub use home::{ExplainJokeFn, GetDebugInfoFn, HomePage};
