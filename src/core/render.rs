//! Text and tabular renderings of a scrape, used by the CLI and the load phase.

use crate::core::{Menu, Patron};
use crate::utils::error::{Result, ScrapeError};
use serde::Serialize;

const COLUMN_PADDING: usize = 2;
const MENU_HEADER: [&str; 6] = ["section", "name", "brewery", "style", "abv", "ibu"];
const LEADERBOARD_HEADER: [&str; 3] = ["rank", "name", "check_ins"];

#[derive(Serialize)]
struct MenuRow<'a> {
    section: &'a str,
    name: &'a str,
    brewery: &'a str,
    style: &'a str,
    abv: &'a str,
    ibu: &'a str,
}

#[derive(Serialize)]
struct PatronRow<'a> {
    rank: u64,
    name: &'a str,
    check_ins: u64,
}

pub fn menu_text(menus: &[Menu]) -> String {
    let mut out = String::new();
    for menu in menus {
        out.push_str(&format!("__**{}**__\n", menu.name));
        for item in &menu.items {
            out.push_str(&format!(
                "**{}** *{}* ({}) {} ABV - {} IBU\n",
                item.name, item.brewery, item.style, item.abv, item.ibu
            ));
        }
    }
    out
}

/// `<VENUE> Top Check-ins` followed by the aligned table in a code fence.
pub fn leaderboard_text(venue: &str, patrons: &[Patron]) -> String {
    format!(
        "{} Top Check-ins\n```\n{}```\n",
        venue.to_uppercase(),
        aligned_leaderboard(patrons)
    )
}

fn aligned_leaderboard(patrons: &[Patron]) -> String {
    let mut rows = vec![[String::new(), "Name".to_string(), "Check-Ins".to_string()]];
    rows.extend(
        patrons
            .iter()
            .map(|p| [p.rank.to_string(), p.name.clone(), p.check_ins.to_string()]),
    );

    let mut widths = [0usize; 3];
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for row in &rows {
        let mut line = String::new();
        for (i, cell) in row.iter().enumerate() {
            if i + 1 == row.len() {
                line.push_str(cell);
            } else {
                line.push_str(&format!("{:<width$}", cell, width = widths[i] + COLUMN_PADDING));
            }
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

pub fn menu_table(menus: &[Menu], delimiter: u8) -> Result<String> {
    let mut writer = table_writer(delimiter);
    writer.write_record(MENU_HEADER)?;

    for menu in menus {
        for item in &menu.items {
            writer.serialize(MenuRow {
                section: &menu.name,
                name: &item.name,
                brewery: &item.brewery,
                style: &item.style,
                abv: &item.abv,
                ibu: &item.ibu,
            })?;
        }
    }

    finish(writer)
}

pub fn leaderboard_table(patrons: &[Patron], delimiter: u8) -> Result<String> {
    let mut writer = table_writer(delimiter);
    writer.write_record(LEADERBOARD_HEADER)?;

    for patron in patrons {
        writer.serialize(PatronRow {
            rank: patron.rank,
            name: &patron.name,
            check_ins: patron.check_ins,
        })?;
    }

    finish(writer)
}

/// Headers are written explicitly so an empty table still carries its columns.
fn table_writer(delimiter: u8) -> csv::Writer<Vec<u8>> {
    csv::WriterBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .from_writer(Vec::new())
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer
        .into_inner()
        .map_err(|e| ScrapeError::IoError(std::io::Error::new(e.error().kind(), e.to_string())))?;
    String::from_utf8(bytes).map_err(|e| ScrapeError::IoError(std::io::Error::other(e)))
}
