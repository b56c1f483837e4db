//! One-call marketing tasks on top of any [`TextGeneration`].
//!
//! ```rust,no_run
//! # async fn demo(generator: &dyn ideabox_core::provider::TextGeneration) -> ideabox_core::Result<()> {
//! use ideabox_types::MarketingCopy;
//!
//! let title = generator.generate_title("咖啡", "小红书", "活泼").await?;
//! println!("{title}");
//! # Ok(())
//! # }
//! ```
//!
//! Each helper renders its template, applies the template's budget, lets the
//! registry pick the model and returns only the trimmed text. Use
//! [`PromptExecution::execute`] directly when the model should be pinned or
//! reported.

use std::future::Future;

use ideabox_core::{
    error::Result,
    provider::{PromptExecution, TextGeneration},
    template::PromptTemplate,
};

use crate::templates::{BrandNamePrompt, CreativePromptPrompt, SloganPrompt, TitlePrompt};

pub trait MarketingCopy: TextGeneration {
    /// Headline, temperature 0.8, at most 100 tokens.
    fn generate_title(
        &self,
        keywords: &str,
        platform: &str,
        style: &str,
    ) -> impl Future<Output = Result<String>> + Send;

    /// Brand name, temperature 0.7, at most 50 tokens.
    fn generate_brand_name(
        &self,
        description: &str,
        style: &str,
    ) -> impl Future<Output = Result<String>> + Send;

    /// Slogan, temperature 0.8, at most 100 tokens.
    fn generate_slogan(
        &self,
        brand_name: &str,
        selling_points: &str,
        tone: &str,
    ) -> impl Future<Output = Result<String>> + Send;

    /// Creative brief, temperature 0.9, at most 150 tokens.
    fn generate_creative_prompt(
        &self,
        scene: &str,
        audience: &str,
        angle: &str,
    ) -> impl Future<Output = Result<String>> + Send;
}

async fn text_of<G, P>(generator: &G, prompt: P) -> Result<String>
where
    G: TextGeneration + ?Sized,
    P: PromptTemplate,
{
    Ok(generator.execute(prompt, None).await?.text)
}

impl<T: TextGeneration + ?Sized> MarketingCopy for T {
    fn generate_title(
        &self,
        keywords: &str,
        platform: &str,
        style: &str,
    ) -> impl Future<Output = Result<String>> + Send {
        text_of(self, TitlePrompt::new(keywords, platform, style))
    }

    fn generate_brand_name(
        &self,
        description: &str,
        style: &str,
    ) -> impl Future<Output = Result<String>> + Send {
        text_of(self, BrandNamePrompt::new(description, style))
    }

    fn generate_slogan(
        &self,
        brand_name: &str,
        selling_points: &str,
        tone: &str,
    ) -> impl Future<Output = Result<String>> + Send {
        text_of(self, SloganPrompt::new(brand_name, selling_points, tone))
    }

    fn generate_creative_prompt(
        &self,
        scene: &str,
        audience: &str,
        angle: &str,
    ) -> impl Future<Output = Result<String>> + Send {
        text_of(self, CreativePromptPrompt::new(scene, audience, angle))
    }
}
