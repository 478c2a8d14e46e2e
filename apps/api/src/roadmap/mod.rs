pub mod generator;
pub mod handlers;
pub mod ingest;
pub mod model;
pub mod progress;
pub mod prompts;
pub mod update;
