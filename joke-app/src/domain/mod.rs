mod debug_info;
mod explanation;
mod model_id;

pub use debug_info::DebugInfo;
pub use explanation::Explanation;
pub use model_id::ModelId;
