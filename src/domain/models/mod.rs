mod answer_payload;
mod conversation;
mod endpoint;
mod query_result;

pub use answer_payload::*;
pub use conversation::*;
pub use endpoint::*;
pub use query_result::*;
