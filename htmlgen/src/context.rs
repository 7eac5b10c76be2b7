use crate::config::Config;
use crate::document::{Document, document_error};
use crate::fs::write_string;
use crate::reports::{parse_error_report, print_report};
use crate::{Generator, MPath, MResult, Options, Overrides};
use log::{debug, info};
use std::path::PathBuf;

#[derive(Debug)]
pub struct Context {
    config: Config,
    cwd: MPath,
    overrides: Overrides,
}

impl Context {
    pub fn new(cwd: PathBuf) -> MResult<Self> {
        let config = Config::find_recursively(cwd.clone())?;

        Ok(Context::from_config(config, crate::fs::to_mpath(cwd)?))
    }

    pub fn from_config(config: Config, cwd: MPath) -> Self {
        Context { config, cwd, overrides: Overrides::default() }
    }

    /// Command line overrides. They win over the config and over page documents.
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Options for output that is not backed by a document.
    pub fn options(&self) -> Options {
        self.overrides.apply(self.config.render)
    }

    pub fn generator(&self) -> Generator {
        Generator::new(self.options())
    }

    pub fn cwd(&self) -> &MPath {
        &self.cwd
    }

    pub fn build_dir(&self) -> &MPath {
        &self.config.build.output_dir
    }

    pub fn main_dir(&self) -> &MPath {
        &self.config.build.main_dir
    }

    /// Config `[render]`, then the document's `[options]`, then the overrides.
    pub fn render_document(&self, document: &Document) -> String {
        document.render_with(self.config.render, self.overrides)
    }

    /// Renders a page document, printing a diagnostic when it does not parse.
    pub fn process_file(&self, file: &MPath) -> MResult<String> {
        debug!("rendering {file}");
        let (source, document) = Document::load(file)?;

        match document {
            Ok(document) => Ok(self.render_document(&document)),
            Err(err) => {
                print_report(&parse_error_report(file, &source, &err), file, &source);
                Err(document_error(file, &err).into())
            }
        }
    }

    /// Where `file` under the main directory lands in the build directory.
    pub fn output_path(&self, file: &MPath) -> MPath {
        let relative = file.strip_prefix(self.main_dir()).unwrap_or(file.as_path());
        self.build_dir().join(relative).with_extension("html")
    }

    pub fn build_file(&self, file: &MPath) -> MResult<MPath> {
        let html = self.process_file(file)?;
        let output = self.output_path(file);

        write_string(&output, &html)?;
        info!("{file} -> {output}");

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HeadingLevels;

    fn context(render: &str) -> Context {
        let config = Config::parse(render, MPath::from("/site")).unwrap();
        Context::from_config(config, MPath::from("/site"))
    }

    fn heading_page(options: &str) -> Document {
        Document::parse(&format!(
            "{options}\n[[node]]\nkind = \"heading\"\nlevel = 9\ncontent = \"a&b\"\n"
        ))
        .unwrap()
    }

    #[test]
    fn overrides_layer_over_config() {
        let ctx = context("[render]\nescape = false").with_overrides(Overrides {
            escape: Some(true),
            headings: Some(HeadingLevels::Verbatim),
        });

        assert!(ctx.options().escape);
        assert_eq!(ctx.generator().heading(7, "x", &Default::default()), "<7 >x</7>");
    }

    #[test]
    fn overrides_can_switch_escaping_off() {
        let ctx = context("[render]\nescape = true")
            .with_overrides(Overrides { escape: Some(false), headings: None });

        assert_eq!(ctx.options(), Options::default());
    }

    #[test]
    fn without_overrides_config_is_kept() {
        let ctx = context("[render]\nheadings = \"verbatim\"").with_overrides(Overrides::default());
        assert_eq!(ctx.options(), Options::new().headings(HeadingLevels::Verbatim));
    }

    #[test]
    fn option_layers_take_precedence_in_order() {
        let config = "[render]\nescape = true\nheadings = \"verbatim\"";
        let page_options = "[options]\nescape = false\nheadings = \"clamp\"";

        // defaults only
        assert_eq!(context("").render_document(&heading_page("")), "<h1 >a&b</h1>");

        // config over defaults
        assert_eq!(context(config).render_document(&heading_page("")), "<9 >a&amp;b</9>");

        // document over config
        assert_eq!(context(config).render_document(&heading_page(page_options)), "<h1 >a&b</h1>");

        // command line over document
        let ctx = context(config).with_overrides(Overrides {
            escape: Some(true),
            headings: Some(HeadingLevels::Verbatim),
        });
        assert_eq!(ctx.render_document(&heading_page(page_options)), "<9 >a&amp;b</9>");

        // a partial override leaves the other field to the lower layers
        let ctx = context(config).with_overrides(Overrides { escape: Some(true), headings: None });
        assert_eq!(ctx.render_document(&heading_page(page_options)), "<h1 >a&amp;b</h1>");
    }

    #[test]
    fn output_path_mirrors_main_dir() {
        let ctx = context("");

        assert_eq!(
            ctx.output_path(&MPath::from("/site/pages/blog/post.toml")),
            MPath::from("/site/dist/blog/post.html")
        );
        assert_eq!(
            ctx.output_path(&MPath::from("/elsewhere/a.toml")),
            MPath::from("/elsewhere/a.html")
        );
    }
}
