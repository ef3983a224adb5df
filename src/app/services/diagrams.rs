use crate::app::error::Result;

/// Layout engine handed to the compiler for every diagram.
pub const LAYOUT_ENGINE: &str = "elk";

/// Padding around the rendered diagram, in pixels.
pub const RENDER_PAD: u32 = 100;

/// A fully resolved compilation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileRequest {
    pub source: String,
    pub theme_id: i64,
    pub layout: &'static str,
    pub pad: u32,
}

/// An external diagram compiler producing SVG text.
pub trait DiagramCompiler {
    fn compile(&self, request: &CompileRequest) -> Result<String>;
}

/// Façade over the external compiler.
///
/// Every call is a full compilation; nothing is cached between calls.
pub struct DiagramService {
    compiler: Box<dyn DiagramCompiler>,
}

impl DiagramService {
    pub fn new(compiler: impl DiagramCompiler + 'static) -> Self {
        Self {
            compiler: Box::new(compiler),
        }
    }

    pub fn compile(&self, source: &str, theme_id: i64, background: &str) -> Result<String> {
        let request = CompileRequest {
            source: with_background(source, background),
            theme_id,
            layout: LAYOUT_ENGINE,
            pad: RENDER_PAD,
        };
        log::debug!(
            "compiling diagram: {} bytes, theme {}, background {:?}",
            request.source.len(),
            theme_id,
            background
        );

        self.compiler.compile(&request)
    }
}

/// Prepend a root fill directive when a background color is given.
///
/// The color is trimmed first, so a whitespace-only value counts as empty and
/// leaves the source unchanged. The directive is plain text on its own first
/// line; the source is not otherwise touched.
pub fn with_background(source: &str, background: &str) -> String {
    let background = background.trim();
    if background.is_empty() {
        return source.to_string();
    }
    let escaped = background.replace('\\', "\\\\").replace('"', "\\\"");
    format!("style.fill: \"{}\"\n{}", escaped, source)
}
