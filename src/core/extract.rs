//! Turns raw element handles into typed records.

use crate::core::{MenuItem, IBU_NOT_AVAILABLE};
use crate::utils::error::{Result, ScrapeError};
use regex::Regex;
use scraper::{ElementRef, Node, Selector};
use std::sync::LazyLock;

/// Separates strength from bitterness in an item's detail line.
pub const DETAIL_DELIMITER: char = '•';
const IBU_MARKER: &str = "IBU";

static ITEM_NAME: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h5 a").expect("item name selector"));
static ITEM_STYLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h5 em").expect("item style selector"));
static ITEM_DETAILS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h6 span").expect("item details selector"));
static ITEM_BREWERY: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h6 span a").expect("item brewery selector"));

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace regex"));
static PATRON_TITLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.*) \((\d+) check-ins\)$").expect("patron title regex")
});

pub fn extract_menu_item(item: ElementRef<'_>) -> MenuItem {
    let name = first_text(item, &ITEM_NAME).replace('*', "");
    let (abv, ibu) = split_strength(&first_text(item, &ITEM_DETAILS));

    MenuItem {
        name: normalize_whitespace(&name),
        brewery: first_text(item, &ITEM_BREWERY).trim().to_string(),
        style: first_text(item, &ITEM_STYLE).trim().to_string(),
        abv,
        ibu,
    }
}

/// Splits a detail line like `"5.2% ABV • 45 IBU • Brewery"` into `("5.2%", "45")`.
///
/// Only the first two segments are read. Without a second segment the
/// bitterness is [`IBU_NOT_AVAILABLE`].
pub fn split_strength(details: &str) -> (String, String) {
    let mut parts = details.trim().split(DETAIL_DELIMITER);

    let abv = parts
        .next()
        .and_then(|first| first.split_whitespace().next())
        .unwrap_or_default()
        .to_string();

    let ibu = match parts.next() {
        Some(segment) => segment
            .split(IBU_MARKER)
            .next()
            .unwrap_or_default()
            .trim()
            .to_string(),
        None => IBU_NOT_AVAILABLE.to_string(),
    };

    (abv, ibu)
}

/// Title text for a patron credit: `original-title`, else `title`.
/// `None` when both are missing or empty.
pub fn patron_title<'a>(element: ElementRef<'a>) -> Option<&'a str> {
    let attrs = element.value();
    [attrs.attr("original-title"), attrs.attr("title")]
        .into_iter()
        .flatten()
        .find(|title| !title.is_empty())
}

/// Matches `"<name> (<digits> check-ins)"`.
///
/// `Ok(None)` when the title does not have that shape. A digit group too large
/// for a `u64` is a [`ScrapeError::MalformedCheckInCount`].
pub fn parse_patron_title(title: &str) -> Result<Option<(String, u64)>> {
    let Some(caps) = PATRON_TITLE_RE.captures(title) else {
        return Ok(None);
    };

    let check_ins = caps[2]
        .parse::<u64>()
        .map_err(|source| ScrapeError::MalformedCheckInCount {
            title: title.to_string(),
            source,
        })?;

    Ok(Some((caps[1].to_string(), check_ins)))
}

pub fn normalize_whitespace(input: &str) -> String {
    WHITESPACE_RE.replace_all(input, " ").trim().to_string()
}

/// Concatenated text of `element`, skipping any descendant `<skip_tag>` subtree.
pub fn text_without(element: ElementRef<'_>, skip_tag: &str) -> String {
    let mut out = String::new();
    collect_text(element, skip_tag, &mut out);
    out
}

fn collect_text(element: ElementRef<'_>, skip_tag: &str, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) if el.name() == skip_tag => {}
            Node::Element(_) => {
                if let Some(child) = ElementRef::wrap(child) {
                    collect_text(child, skip_tag, out);
                }
            }
            _ => {}
        }
    }
}

fn first_text(element: ElementRef<'_>, selector: &Selector) -> String {
    element
        .select(selector)
        .next()
        .map(|el| el.text().collect())
        .unwrap_or_default()
}
