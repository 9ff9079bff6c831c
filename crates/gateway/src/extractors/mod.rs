//! Custom request extractors.

mod path;
mod validated_json;

pub use path::ApiPath;
pub use validated_json::ValidatedJson;
