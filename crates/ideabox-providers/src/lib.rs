//! DeepSeek and Tongyi back-ends for `ideabox-core`.
//!
//! Each adapter implements [`WireAdapter`](ideabox_core::provider::WireAdapter)
//! and therefore plugs straight into a
//! [`GenerationGateway`](ideabox_core::gateway::GenerationGateway).

mod adapter;
mod client;
pub mod deepseek;
pub mod error;
mod gateway;
pub mod tongyi;

#[cfg(test)]
mod test_support;

pub use adapter::{AdapterBuilder, BuildAdapter};
pub use client::ProviderClient;
pub use deepseek::DeepSeekAdapter;
pub use gateway::{gateway_from_credentials, gateway_from_env};
pub use tongyi::TongyiAdapter;
