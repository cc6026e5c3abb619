//! Contract between this engine and the CSS bundling layer.
//!
//! The bundling layer (merge/minify of many stylesheets into one artifact)
//! lives outside this crate; only the init-time surface it must expose is
//! defined here, so both sides agree on the parameters a link renderer is
//! constructed with.

/// Init parameters for a CSS bundle link renderer.
#[derive(Debug, Clone, Default)]
pub struct CssRendererInit {
    /// `media` attribute for the rendered `<link>` elements.
    pub media: Option<String>,
    /// Render as an alternate stylesheet.
    pub alternate: bool,
    /// Also emit links for the alternate styles of the bundle.
    pub display_alternate_styles: bool,
    /// `title` attribute for the rendered `<link>` elements.
    pub title: Option<String>,
    /// Append a random parameter to defeat caching in development.
    pub use_random_param: bool,
}

/// A renderer the bundling layer registers with the presentation layer.
pub trait CssBundleRenderer: Send + Sync {
    /// Initialize the renderer with its link attributes.
    fn init(&mut self, params: CssRendererInit);
}
