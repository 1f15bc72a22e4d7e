//! Simple variable substitution renderer.

use sageblock_core::{
    application::ports::TemplateRenderer, domain::RenderContext, error::BlockResult,
};
use tracing::{instrument, trace};

/// Renderer using `{{TOKEN}}` substitution from the [`RenderContext`].
///
/// No conditionals, loops or filters. Unknown tokens are left as written.
#[derive(Debug, Clone, Copy)]
pub struct SimpleRenderer;

impl SimpleRenderer {
    /// Create a new simple renderer.
    pub fn new() -> Self {
        Self
    }
}

impl Default for SimpleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for SimpleRenderer {
    #[instrument(skip_all, fields(len = template.len()))]
    fn render(&self, template: &str, context: &RenderContext) -> BlockResult<String> {
        let rendered = context.render(template);
        trace!(rendered_len = rendered.len(), "Template rendered");
        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sageblock_core::domain::{BlockConfig, BlockLayout, BlockRequest};

    #[test]
    fn substitutes_block_tokens() {
        let layout = BlockLayout::derive(
            &BlockRequest::new("pricing-table").with_vendor("acme"),
            &BlockConfig::default(),
        )
        .unwrap();
        let ctx = RenderContext::for_block(&layout);

        let out = SimpleRenderer::new()
            .render(".{{BLOCK_CSS_CLASS}} { } /* {{BLOCK_NAME_PASCAL}} */", &ctx)
            .unwrap();
        assert_eq!(out, ".wp-block-acme-pricing-table { } /* PricingTable */");
    }
}
