//! Plain-text tables for the interactive prompt.

use watchlist_core::types::{Film, Show, ViewRow};

const GAP: &str = "  ";

/// Left-aligned columns sized to their widest cell, with a dashed rule under
/// the header.
#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row. Missing trailing cells render empty; extra cells are dropped.
    pub fn push(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    pub fn render(&self) -> String {
        let widths: Vec<usize> = self
            .headers
            .iter()
            .enumerate()
            .map(|(col, header)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(col))
                    .map(|cell| cell.chars().count())
                    .fold(header.chars().count(), usize::max)
            })
            .collect();

        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();

        let mut out = String::new();
        out.push_str(&render_line(&self.headers, &widths));
        out.push_str(&render_line(&rule, &widths));
        for row in &self.rows {
            out.push_str(&render_line(row, &widths));
        }
        out
    }
}

fn render_line(cells: &[String], widths: &[usize]) -> String {
    let line = widths
        .iter()
        .enumerate()
        .map(|(col, width)| {
            let cell = cells.get(col).map(String::as_str).unwrap_or("");
            format!("{cell:<width$}")
        })
        .collect::<Vec<_>>()
        .join(GAP);
    format!("{}\n", line.trim_end())
}

pub fn watching_table(rows: &[ViewRow]) -> String {
    if rows.is_empty() {
        return "No shows currently being watched.\n".to_string();
    }
    let mut table = Table::new(&["Index", "Name", "Genre", "Provider", "Series", "Episode"]);
    for row in rows {
        table.push(vec![
            row.index.to_string(),
            row.name.clone(),
            row.genre.clone(),
            row.provider.clone(),
            row.series.clone(),
            row.episode.clone(),
        ]);
    }
    table.render()
}

pub fn films_table(films: &[Film]) -> String {
    if films.is_empty() {
        return "No films found.\n".to_string();
    }
    let mut table = Table::new(&["Index", "Name", "Genre", "Provider"]);
    for (i, film) in films.iter().enumerate() {
        table.push(vec![
            (i + 1).to_string(),
            film.name.clone(),
            film.genre.clone(),
            film.provider.clone(),
        ]);
    }
    table.render()
}

pub fn genre_shows_table(shows: &[Show]) -> String {
    if shows.is_empty() {
        return "No unwatched shows in this genre.\n".to_string();
    }
    let mut table = Table::new(&["Index", "Name", "Provider"]);
    for (i, show) in shows.iter().enumerate() {
        table.push(vec![
            (i + 1).to_string(),
            show.name.clone(),
            show.provider.clone(),
        ]);
    }
    table.render()
}
