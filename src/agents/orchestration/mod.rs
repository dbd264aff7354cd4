//! Multi-agent routing
//!
//! - keywords: static keyword table and agent selection
//! - Router: isolated per-agent invocation followed by a synthesis call

mod keywords;
mod router;


pub use keywords::{select_agents, KEYWORD_TABLE};
pub use router::{synthesis_prompt, Router};
