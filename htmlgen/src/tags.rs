//! One function per HTML element, each delegating to the element builder
//! with default [`Options`](crate::Options).

use crate::{Attributes, Content, Generator, Markup, TableRow};

macro_rules! define_wrappers {
    (
        $(
            $(#[$doc:meta])*
            $name:ident => $tag:literal
        ),* $(,)?
    ) => {
        impl Generator {
            $(
                $(#[$doc])*
                pub fn $name(
                    &self,
                    content: impl Into<Content>,
                    attributes: &Attributes,
                ) -> Markup {
                    self.element($tag, content, attributes, false)
                }
            )*
        }

        $(
            $(#[$doc])*
            pub fn $name(content: impl Into<Content>, attributes: &Attributes) -> Markup {
                Generator::default().$name(content, attributes)
            }
        )*
    };
}

define_wrappers! {
    html => "html",
    header => "header",
    body => "body",
    footer => "footer",
    /// Paragraph.
    p => "p",
    div => "div",
    form => "form",
    textarea => "textarea",
    button => "button",
    thead => "thead",
    tbody => "tbody",
    /// Table row around cells rendered beforehand.
    tr => "tr",
    th => "th",
    td => "td",
}

pub fn a(href: impl ToString, content: impl Into<Content>, attributes: &Attributes) -> Markup {
    Generator::default().a(href, content, attributes)
}

/// Levels outside 1..=6 fall back to `h1`. See [`crate::HeadingLevels`] for the raw behavior.
pub fn heading(level: i64, content: impl Into<Content>, attributes: &Attributes) -> Markup {
    Generator::default().heading(level, content, attributes)
}

pub fn list<I>(ordered: bool, items: I, attributes: &Attributes) -> Markup
where
    I: IntoIterator,
    I::Item: Into<Content>,
{
    Generator::default().list(ordered, items, attributes)
}

pub fn table<H, R>(headers: H, rows: R, attributes: &Attributes) -> Markup
where
    H: IntoIterator,
    H::Item: Into<String>,
    R: IntoIterator,
    R::Item: Into<TableRow>,
{
    Generator::default().table(headers, rows, attributes)
}

pub fn table_markup(rows: impl Into<Content>, attributes: &Attributes) -> Markup {
    Generator::default().table_markup(rows, attributes)
}

pub fn input(attributes: &Attributes) -> Markup {
    Generator::default().input(attributes)
}

pub fn select<I, K, V>(options: I, attributes: &Attributes) -> Markup
where
    I: IntoIterator<Item = (K, V)>,
    K: ToString,
    V: Into<String>,
{
    Generator::default().select(options, attributes)
}

pub fn select_markup(options: impl Into<Content>, attributes: &Attributes) -> Markup {
    Generator::default().select_markup(options, attributes)
}

pub fn option(
    value: impl ToString,
    content: impl Into<Content>,
    attributes: &Attributes,
) -> Markup {
    Generator::default().option(value, content, attributes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HeadingLevels, Options};

    #[test]
    fn fixed_tag_wrappers() {
        let none = Attributes::new();
        let style = Attributes::from([("style", "display: block;")]);

        assert_eq!(html("x", &none), "<html >x</html>");
        assert_eq!(
            header("Example", &style),
            r#"<header style="display: block;" >Example</header>"#
        );
        assert_eq!(body("x", &none), "<body >x</body>");
        assert_eq!(footer("Footer", &none), "<footer >Footer</footer>");
        assert_eq!(p("x", &none), "<p >x</p>");
        assert_eq!(div("", &none), "<div ></div>");
        assert_eq!(form("x", &none), "<form >x</form>");
        assert_eq!(textarea("notes", &none), "<textarea >notes</textarea>");
        assert_eq!(
            button("Go", &Attributes::from([("type", "submit")])),
            r#"<button type="submit" >Go</button>"#
        );
        assert_eq!(thead("x", &none), "<thead >x</thead>");
        assert_eq!(tbody("x", &none), "<tbody >x</tbody>");
        assert_eq!(th("x", &none), "<th >x</th>");
        assert_eq!(td("x", &none), "<td >x</td>");
    }

    #[test]
    fn table_from_parts() {
        let none = Attributes::new();
        let head = thead(tr(vec![th("Name", &none), th("Age", &none)], &none), &none);
        let rows = tbody(
            vec![
                tr(vec![td("Ana", &none), td("31", &none)], &none),
                tr(vec![td("Rui", &none), td("27", &none)], &none),
            ],
            &none,
        );

        assert_eq!(
            table_markup(vec![head, rows], &Attributes::from([("class", "people")])),
            "<table class=\"people\" >\
             <thead ><tr ><th >Name</th><th >Age</th></tr></thead>\
             <tbody ><tr ><td >Ana</td><td >31</td></tr>\
             <tr ><td >Rui</td><td >27</td></tr></tbody>\
             </table>"
        );
    }

    #[test]
    fn nested_page() {
        let none = Attributes::new();
        let page = html(
            body(
                vec![heading(1, "Title", &none), p("Body text", &none), a("/next", "Next", &none)],
                &none,
            ),
            &none,
        );

        assert_eq!(
            page,
            concat!(
                r#"<html ><body ><h1 >Title</h1><p >Body text</p>"#,
                r#"<a href="/next" >Next</a></body></html>"#
            )
        );
    }

    #[test]
    fn free_functions_match_the_default_generator() {
        let generator = Generator::default();
        let attrs = Attributes::from([("id", "x")]);

        assert_eq!(div("a", &attrs), generator.div("a", &attrs));
        assert_eq!(heading(9, "a", &attrs), generator.heading(9, "a", &attrs));
        assert_eq!(input(&attrs), generator.input(&attrs));
        assert_eq!(option(1, "one", &attrs), r#"<option id="x" value="1" >one</option>"#);
        assert_eq!(select([("k", "v")], &attrs), generator.select([("k", "v")], &attrs));
        assert_eq!(list(true, ["a"], &attrs), generator.list(true, ["a"], &attrs));
        assert_eq!(table(["h"], ["c"], &attrs), generator.table(["h"], ["c"], &attrs));
        assert_eq!(select_markup("", &attrs), r#"<select id="x" ></select>"#);
    }

    #[test]
    fn generator_wrappers_honor_options() {
        let generator =
            Generator::new(Options::new().escaped(true).headings(HeadingLevels::Verbatim));

        assert_eq!(generator.p("<b>", &Attributes::new()), "<p >&lt;b&gt;</p>");
        assert_eq!(generator.heading(8, "x", &Attributes::new()), "<8 >x</8>");
        assert_eq!(generator.div(Content::markup("<b>"), &Attributes::new()), "<div ><b></div>");
    }

    #[test]
    fn escaped_page_composes_without_double_escaping() {
        let generator = Generator::new(Options::new().escaped(true));
        let none = Attributes::new();

        let cells = vec![generator.td("1 < 2", &none), generator.td("ok", &none)];
        let row = generator.tr(cells, &none);
        let page = generator.body(
            vec![
                generator.table_markup(generator.tbody(row, &none), &none),
                generator.select_markup(vec![generator.option("a&b", "A & B", &none)], &none),
            ],
            &none,
        );

        assert_eq!(
            page,
            concat!(
                "<body ><table ><tbody ><tr ><td >1 &lt; 2</td><td >ok</td></tr></tbody></table>",
                r#"<select ><option value="a&amp;b" >A &amp; B</option></select></body>"#
            )
        );
    }

    #[test]
    fn same_arguments_same_output() {
        let attrs = Attributes::from([("class", "c")]);
        let render = || table(["a"], [["1"], ["2"]], &attrs);

        assert_eq!(render(), render());
    }
}
