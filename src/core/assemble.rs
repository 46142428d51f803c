use crate::core::extract;
use crate::core::traversal::SectionNode;
use crate::core::{Menu, Patron, RankingMode};
use scraper::ElementRef;

/// Per-scrape rank counter. Never shared between scrapes.
#[derive(Debug)]
pub struct RankCounter {
    mode: RankingMode,
    position: u64,
    accepted: u64,
}

impl RankCounter {
    pub fn new(mode: RankingMode) -> Self {
        Self {
            mode,
            position: 0,
            accepted: 0,
        }
    }

    /// Called for every candidate with a usable title, before it is parsed.
    pub fn tick(&mut self) {
        self.position += 1;
    }

    /// Rank for a candidate that parsed successfully.
    pub fn accept(&mut self) -> u64 {
        self.accepted += 1;
        match self.mode {
            RankingMode::Positional => self.position,
            RankingMode::Contiguous => self.accepted,
        }
    }
}

pub fn assemble_menus(sections: Vec<SectionNode<'_>>) -> Vec<Menu> {
    sections
        .into_iter()
        .map(|section| Menu {
            items: section
                .items
                .into_iter()
                .map(extract::extract_menu_item)
                .collect(),
            name: section.name,
        })
        .collect()
}

pub fn assemble_patrons(credits: &[ElementRef<'_>], mode: RankingMode) -> Vec<Patron> {
    let mut counter = RankCounter::new(mode);
    let mut patrons = Vec::new();

    for credit in credits {
        let Some(title) = extract::patron_title(*credit) else {
            continue;
        };
        counter.tick();

        match extract::parse_patron_title(title) {
            Ok(Some((name, check_ins))) => patrons.push(Patron {
                name,
                check_ins,
                rank: counter.accept(),
            }),
            Ok(None) => tracing::debug!("Patron title did not match, skipping: {:?}", title),
            Err(e) => tracing::warn!("Skipping patron element: {}", e),
        }
    }

    patrons
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traversal;
    use scraper::Html;

    const CREDITS: &str = r#"
<a data-href=":loyal/drinkers" title="Alice (40 check-ins)"></a>
<a data-href=":loyal/drinkers" title=""></a>
<a data-href=":loyal/drinkers" title="not a patron"></a>
<a data-href=":loyal/drinkers" title="Bob (12 check-ins)"></a>
<a data-href=":loyal/drinkers" title="Carol (99999999999999999999999 check-ins)"></a>
<a data-href=":loyal/drinkers" original-title="Dave (50 check-ins)"></a>
"#;

    fn patrons(mode: RankingMode) -> Vec<Patron> {
        let document = Html::parse_document(CREDITS);
        let credits = traversal::patron_credits(&document);
        assemble_patrons(&credits, mode)
    }

    #[test]
    fn test_positional_ranks_keep_gaps() {
        let result = patrons(RankingMode::Positional);
        let ranks: Vec<(&str, u64, u64)> = result
            .iter()
            .map(|p| (p.name.as_str(), p.check_ins, p.rank))
            .collect();

        // Empty title: no tick. Unmatched title and overflowing count: tick, no record.
        assert_eq!(
            ranks,
            vec![("Alice", 40, 1), ("Bob", 12, 3), ("Dave", 50, 5)]
        );
    }

    #[test]
    fn test_contiguous_ranks_have_no_gaps() {
        let result = patrons(RankingMode::Contiguous);
        let ranks: Vec<u64> = result.iter().map(|p| p.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
    }

    #[test]
    fn test_rank_follows_document_order_not_check_ins() {
        let document = Html::parse_document(
            r#"<a data-href=":loyal/drinkers" title="Low (1 check-ins)"></a>
               <a data-href=":loyal/drinkers" title="High (100 check-ins)"></a>"#,
        );
        let credits = traversal::patron_credits(&document);
        let result = assemble_patrons(&credits, RankingMode::Positional);

        assert_eq!(result[0].name, "Low");
        assert_eq!(result[0].rank, 1);
        assert_eq!(result[1].name, "High");
        assert_eq!(result[1].rank, 2);
    }

    #[test]
    fn test_counter_is_local_to_each_call() {
        assert_eq!(patrons(RankingMode::Positional), patrons(RankingMode::Positional));
    }

    #[test]
    fn test_assemble_menus_groups_items_by_section() {
        let document = Html::parse_document(
            r#"<div class="menu-section">
                 <div class="menu-section-header"><h4>Draft</h4></div>
                 <ul><li class="menu-item"><h5><a>A</a></h5></li>
                     <li class="menu-item"><h5><a>B</a></h5></li></ul>
               </div>
               <div class="menu-section">
                 <div class="menu-section-header"><h4>Bottles</h4></div>
                 <ul><li class="menu-item"><h5><a>C</a></h5></li></ul>
               </div>"#,
        );
        let menus = assemble_menus(traversal::menu_sections(&document));

        assert_eq!(menus.len(), 2);
        let names: Vec<Vec<&str>> = menus
            .iter()
            .map(|m| m.items.iter().map(|i| i.name.as_str()).collect())
            .collect();
        assert_eq!(names, vec![vec!["A", "B"], vec!["C"]]);
        assert_eq!(menus[1].name, "Bottles");
    }
}
