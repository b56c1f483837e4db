//! # `ideabox` – the umbrella crate
//!
//! One dependency line for the whole generation stack:
//!
//! | Crate | What it provides |
//! |---|---|
//! | **`ideabox-core`** | Model table, registry, credentials, `GenerationGateway`, error taxonomy |
//! | **`ideabox-prompt`** | `PromptBuilder` and `PromptChain` |
//! | **`ideabox-types`** | The four marketing templates, `MarketingCopy`, password validator |
//! | **`ideabox-providers`** | DeepSeek and Tongyi adapters *(feature `providers`, on by default)* |
//!
//! ## Quick example
//!
//! ```rust,no_run
//! use ideabox::types::MarketingCopy;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Reads DEEPSEEK_API_KEY / TONGYI_API_KEY.
//!     let gateway = ideabox::providers::gateway_from_env();
//!     let title = gateway.generate_title("咖啡", "小红书", "活泼").await?;
//!     println!("{title}");
//!     Ok(())
//! }
//! ```

pub use ideabox_core::*;
pub use ideabox_prompt as prompt;
pub use ideabox_types as types;

#[cfg(feature = "providers")]
pub use ideabox_providers as providers;
