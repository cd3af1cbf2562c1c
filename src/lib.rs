pub mod agent;
pub mod conversation;
pub mod errors;
pub mod prompt;
pub mod providers;
pub mod render;
pub mod step;
pub mod tools;
