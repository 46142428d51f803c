//! Structural queries over a parsed venue page.
//!
//! Both queries are plain selector matches over the whole document and return
//! element handles in document order. They share nothing, so they can run in
//! either order against the same `Html`.

use crate::core::extract;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

static MENU_SECTION: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".menu-section").expect("menu section selector"));
static SECTION_HEADER: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("div.menu-section-header h4").expect("section header selector")
});
static MENU_ITEM: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("li.menu-item").expect("menu item selector"));
static PATRON_CREDIT: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"a[data-href=":loyal/drinkers"]"#).expect("patron credit selector")
});

/// One `.menu-section` block: its cleaned header and raw item handles.
#[derive(Debug, Clone)]
pub struct SectionNode<'a> {
    pub name: String,
    pub items: Vec<ElementRef<'a>>,
}

pub fn menu_sections(document: &Html) -> Vec<SectionNode<'_>> {
    document
        .select(&MENU_SECTION)
        .map(|section| SectionNode {
            name: section_name(section),
            items: section.select(&MENU_ITEM).collect(),
        })
        .collect()
}

/// Header text with inline `<span>` badges (the asterisk markers) removed.
fn section_name(section: ElementRef<'_>) -> String {
    section
        .select(&SECTION_HEADER)
        .next()
        .map(|header| extract::text_without(header, "span"))
        .map(|text| extract::normalize_whitespace(&text))
        .unwrap_or_default()
}

pub fn patron_credits(document: &Html) -> Vec<ElementRef<'_>> {
    document.select(&PATRON_CREDIT).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
<html><body>
  <div class="menu-section">
    <div class="menu-section-header"><h4>Draft <span class="new">*</span></h4></div>
    <ul class="menu-section-list">
      <li class="menu-item"><h5><a>One</a></h5></li>
      <li class="menu-item"><h5><a>Two</a></h5></li>
    </ul>
  </div>
  <div class="menu-section">
    <div class="menu-section-header"><h4>
      Cans
    </h4></div>
    <ul class="menu-section-list"></ul>
  </div>
  <a data-href=":loyal/drinkers" title="A (1 check-ins)"></a>
  <a data-href=":other" title="B (2 check-ins)"></a>
  <a data-href=":loyal/drinkers" original-title="C (3 check-ins)"></a>
</body></html>
"#;

    #[test]
    fn test_menu_sections_in_document_order() {
        let document = Html::parse_document(PAGE);
        let sections = menu_sections(&document);

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].name, "Draft");
        assert_eq!(sections[0].items.len(), 2);
        assert_eq!(sections[1].name, "Cans");
        assert!(sections[1].items.is_empty());
    }

    #[test]
    fn test_section_without_header_has_empty_name() {
        let document = Html::parse_document(
            r#"<div class="menu-section"><li class="menu-item"></li></div>"#,
        );
        let sections = menu_sections(&document);

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].name, "");
        assert_eq!(sections[0].items.len(), 1);
    }

    #[test]
    fn test_patron_credits_only_match_loyal_drinkers() {
        let document = Html::parse_document(PAGE);
        let credits = patron_credits(&document);

        assert_eq!(credits.len(), 2);
        assert_eq!(credits[0].value().attr("title"), Some("A (1 check-ins)"));
        assert_eq!(
            credits[1].value().attr("original-title"),
            Some("C (3 check-ins)")
        );
    }

    #[test]
    fn test_empty_document_yields_nothing() {
        let document = Html::parse_document("");
        assert!(menu_sections(&document).is_empty());
        assert!(patron_credits(&document).is_empty());
    }
}
