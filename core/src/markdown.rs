use pulldown_cmark::{html, Options, Parser};

fn gfm_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_FOOTNOTES
}

/// Converts summary markdown to HTML with GitHub-flavored extensions.
pub fn render_markdown(source: &str) -> String {
    let parser = Parser::new_ext(source, gfm_options());
    let mut output = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut output, parser);
    output
}
