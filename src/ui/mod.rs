pub mod prompts;

pub use prompts::{disclaimer_prompt, reset_confirm};
