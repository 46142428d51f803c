use brew_scrape::{scrape_document, MenuItem, RankingMode};

fn fixture() -> String {
    std::fs::read_to_string("tests/fixtures/venue.html").unwrap()
}

fn item(name: &str, brewery: &str, style: &str, abv: &str, ibu: &str) -> MenuItem {
    MenuItem {
        name: name.to_string(),
        brewery: brewery.to_string(),
        style: style.to_string(),
        abv: abv.to_string(),
        ibu: ibu.to_string(),
    }
}

#[test]
fn test_sections_and_items_follow_document_order() {
    let result = scrape_document(&fixture(), RankingMode::Positional);

    let shape: Vec<(&str, usize)> = result
        .menus
        .iter()
        .map(|m| (m.name.as_str(), m.items.len()))
        .collect();
    assert_eq!(
        shape,
        vec![("Draft Beer", 2), ("Cans & Bottles", 3), ("Seltzers", 1)]
    );
    assert_eq!(result.item_count(), 6);
}

#[test]
fn test_menu_item_fields() {
    let result = scrape_document(&fixture(), RankingMode::Positional);

    assert_eq!(
        result.menus[0].items,
        vec![
            item(
                "Hazy Little Thing",
                "Sierra Nevada Brewing Co.",
                "IPA - New England / Hazy",
                "6.7%",
                "40"
            ),
            item(
                "Pilsner",
                "pFriem Family Brewers",
                "Pilsner - German",
                "4.9%",
                "N/A"
            ),
        ]
    );
    assert_eq!(
        result.menus[1].items,
        vec![
            item(
                "Midnight Oil",
                "Brown Beard Brewing",
                "Stout - Imperial",
                "11.2%",
                "65"
            ),
            item("Dry Cider", "", "Cider - Dry", "6.0%", "N/A"),
            item("Mystery Can", "", "", "", "N/A"),
        ]
    );
    assert_eq!(
        result.menus[2].items,
        vec![item("Lime Seltzer", "Fizz Co", "Hard Seltzer", "5%", "0")]
    );
}

#[test]
fn test_positional_ranks_skip_unmatched_titles() {
    let result = scrape_document(&fixture(), RankingMode::Positional);

    let patrons: Vec<(&str, u64, u64)> = result
        .patrons
        .iter()
        .map(|p| (p.name.as_str(), p.check_ins, p.rank))
        .collect();

    // The untitled element takes no rank; "Private profile" takes rank 3.
    assert_eq!(
        patrons,
        vec![("hopfiend", 214, 1), ("Malt Monk", 180, 2), ("Ian", 181, 4)]
    );
}

#[test]
fn test_contiguous_ranks() {
    let result = scrape_document(&fixture(), RankingMode::Contiguous);

    let ranks: Vec<(&str, u64)> = result
        .patrons
        .iter()
        .map(|p| (p.name.as_str(), p.rank))
        .collect();
    assert_eq!(ranks, vec![("hopfiend", 1), ("Malt Monk", 2), ("Ian", 3)]);
}

#[test]
fn test_extraction_is_deterministic() {
    let html = fixture();
    let first = scrape_document(&html, RankingMode::Positional);
    let second = scrape_document(&html, RankingMode::Positional);
    assert_eq!(first, second);
}

#[test]
fn test_malformed_count_does_not_abort_scrape() {
    let html = r#"
<div class="menu-section">
  <div class="menu-section-header"><h4>Draft</h4></div>
  <ul><li class="menu-item"><h5><a>Lager</a></h5><h6><span>5% ABV</span></h6></li></ul>
</div>
<a data-href=":loyal/drinkers" title="Overflow (123456789012345678901234 check-ins)"></a>
<a data-href=":loyal/drinkers" title="Steady (7 check-ins)"></a>
"#;
    let result = scrape_document(html, RankingMode::Positional);

    assert_eq!(result.menus.len(), 1);
    assert_eq!(result.patrons.len(), 1);
    assert_eq!(result.patrons[0].name, "Steady");
    assert_eq!(result.patrons[0].rank, 2);
}

#[test]
fn test_counts_beyond_u32_are_kept() {
    let html = r#"<a data-href=":loyal/drinkers" title="Huge (5000000000 check-ins)"></a>"#;
    let result = scrape_document(html, RankingMode::Positional);

    assert_eq!(result.patrons.len(), 1);
    assert_eq!(result.patrons[0].check_ins, 5_000_000_000);
    assert_eq!(result.patrons[0].rank, 1);
}

#[test]
fn test_detail_line_without_ibu_reads_second_segment_only() {
    let html = r#"
<div class="menu-section">
  <div class="menu-section-header"><h4>Draft</h4></div>
  <ul><li class="menu-item"><h5><a>Lager</a></h5><h6><span>5%&nbsp;ABV • Brewery A • Town</span></h6></li></ul>
</div>
"#;
    let result = scrape_document(html, RankingMode::Positional);
    let item = &result.menus[0].items[0];

    assert_eq!(item.abv, "5%");
    assert_eq!(item.ibu, "Brewery A");
}
