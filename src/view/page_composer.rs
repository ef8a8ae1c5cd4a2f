use std::fs::File;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;
use std::{fs, io};

use ramhorns::{Content, Template};
use spdlog::debug;

use crate::view::page_context::CardDiv;

pub const HEAD_FRAGMENT: &str = "head.html";
pub const NAVBAR_FRAGMENT: &str = "navbar.html";
pub const FOOTER_FRAGMENT: &str = "footer.html";
pub const CARD_FRAGMENT: &str = "cardDiv.html";

pub fn parse_fragment(name: &str, source: String) -> io::Result<Template<'static>> {
    match Template::new(source) {
        Ok(x) => Ok(x),
        Err(e) => Err(io::Error::new(ErrorKind::InvalidInput, format!("Error parsing template {}: {}", name, e))),
    }
}

pub fn load_fragment(path: &Path) -> io::Result<Template<'static>> {
    let source = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => return Err(io::Error::new(e.kind(), format!("Error loading template {}: {}", path.display(), e))),
    };
    parse_fragment(&path.display().to_string(), source)
}

/// Wraps a page body with the shared head, navbar and footer fragments.
///
/// Every fragment is rendered against the same page context, and the
/// sections are separated by comments so the generated HTML stays readable.
pub struct PageComposer {
    head: Template<'static>,
    navbar: Template<'static>,
    footer: Template<'static>,
    card: Template<'static>,
}

impl PageComposer {
    pub fn from_dir(component_dir: &Path) -> io::Result<PageComposer> {
        Ok(PageComposer {
            head: load_fragment(&component_dir.join(HEAD_FRAGMENT))?,
            navbar: load_fragment(&component_dir.join(NAVBAR_FRAGMENT))?,
            footer: load_fragment(&component_dir.join(FOOTER_FRAGMENT))?,
            card: load_fragment(&component_dir.join(CARD_FRAGMENT))?,
        })
    }

    pub fn render_cards(&self, cards: &[CardDiv]) -> String {
        cards.iter().map(|card| self.card.render(card)).collect()
    }

    pub fn compose<C: Content>(&self, context: &C, body: &Template) -> String {
        let mut page = String::from("<html>");
        page.push_str(&self.head.render(context));
        page.push_str("<body>");

        page.push_str("\n\n<!-- Auto-generated navbar -->\n");
        page.push_str(&self.navbar.render(context));

        page.push_str("\n\n<!-- Copied body -->\n");
        page.push_str(&body.render(context));

        page.push_str("\n\n<!-- Auto-generated footer -->\n");
        page.push_str(&self.footer.render(context));

        page.push_str("</body>");
        page.push_str("</html>");
        page
    }

    pub fn write_page<C: Content>(&self, context: &C, body: &Template, dest: &Path) -> io::Result<()> {
        debug!("Writing page {}", dest.display());
        let file = match File::create(dest) {
            Ok(file) => file,
            Err(e) => return Err(io::Error::new(e.kind(), format!("Error creating page {}: {}", dest.display(), e))),
        };

        let mut writer = BufWriter::new(file);
        writer.write_all(self.compose(context, body).as_bytes())?;
        writer.flush()
    }
}
