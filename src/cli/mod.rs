pub mod context;
pub mod entry;
pub mod prompts;
pub mod session;

pub use context::CliContext;
pub use entry::{Args, Field, run, run_with_prompt};
pub use prompts::Prompt;
pub use session::{SessionOutcome, execute};
