pub mod advisory;
pub mod ai;
pub mod ai_types;
pub mod batch;
pub mod emitter;
pub mod encoding;
pub mod missing;
pub mod pipeline;
pub mod store;
