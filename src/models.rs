pub mod pipeline;
pub mod opportunity;
pub mod client;
pub mod call;
pub mod task;
pub mod import;
pub mod query;
