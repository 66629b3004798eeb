//! Geometric table detection over positioned words.
//!
//! Words are grouped into lines by their baseline, lines are cut into cells
//! at horizontal gaps wider than [`CELL_GAP`] ems, and runs of multi-cell
//! lines become tables whose columns are the merged x-extents of their cells.

use crate::page::{PageTable, PdfPage};

/// Horizontal gap, in ems, that separates two cells on a line.
pub const CELL_GAP: f64 = 1.0;

/// Baseline difference, in ems, tolerated within one line.
const LINE_TOLERANCE: f64 = 0.5;

/// Vertical distance, in ems, beyond which a table run is broken.
const ROW_GAP: f64 = 3.0;

/// A word placed on the page. Coordinates are in points with `y` measured
/// down from the top edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Word {
    pub text: String,
    pub x0: f64,
    pub x1: f64,
    pub y: f64,
    pub size: f64,
}

impl Word {
    pub fn new(text: impl Into<String>, x0: f64, x1: f64, y: f64, size: f64) -> Self {
        Self {
            text: text.into(),
            x0,
            x1,
            y,
            size,
        }
    }
}

/// Words sharing a baseline, sorted left to right.
#[derive(Debug, Clone, PartialEq)]
struct Line {
    y: f64,
    size: f64,
    words: Vec<Word>,
}

/// A run of words on one line with no wide gap between them.
#[derive(Debug, Clone, PartialEq)]
struct Cell {
    text: String,
    x0: f64,
    x1: f64,
}

impl Cell {
    fn mid(&self) -> f64 {
        (self.x0 + self.x1) / 2.0
    }
}

fn group_lines(words: &[Word]) -> Vec<Line> {
    let mut sorted: Vec<&Word> = words.iter().filter(|word| !word.text.is_empty()).collect();
    sorted.sort_by(|a, b| a.y.total_cmp(&b.y).then(a.x0.total_cmp(&b.x0)));

    let mut lines: Vec<Line> = Vec::new();
    for word in sorted {
        match lines.last_mut() {
            Some(line) if (word.y - line.y).abs() <= LINE_TOLERANCE * line.size.max(word.size) => {
                line.size = line.size.max(word.size);
                line.words.push(word.clone());
            }
            _ => lines.push(Line {
                y: word.y,
                size: word.size,
                words: vec![word.clone()],
            }),
        }
    }
    for line in &mut lines {
        line.words.sort_by(|a, b| a.x0.total_cmp(&b.x0));
    }
    lines
}

fn line_cells(line: &Line) -> Vec<Cell> {
    let mut cells: Vec<Cell> = Vec::new();
    for word in &line.words {
        match cells.last_mut() {
            Some(cell) if word.x0 - cell.x1 < CELL_GAP * word.size => {
                cell.text.push(' ');
                cell.text.push_str(&word.text);
                cell.x1 = cell.x1.max(word.x1);
            }
            _ => cells.push(Cell {
                text: word.text.clone(),
                x0: word.x0,
                x1: word.x1,
            }),
        }
    }
    cells
}

/// Merges overlapping cell extents into column intervals.
fn column_bounds(rows: &[Vec<Cell>]) -> Vec<(f64, f64)> {
    let mut spans: Vec<(f64, f64)> = rows
        .iter()
        .flatten()
        .map(|cell| (cell.x0, cell.x1))
        .collect();
    spans.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut columns: Vec<(f64, f64)> = Vec::new();
    for (x0, x1) in spans {
        match columns.last_mut() {
            Some(column) if x0 <= column.1 => column.1 = column.1.max(x1),
            _ => columns.push((x0, x1)),
        }
    }
    columns
}

fn column_of(columns: &[(f64, f64)], cell: &Cell) -> usize {
    let mid = cell.mid();
    columns
        .iter()
        .position(|&(x0, x1)| mid >= x0 && mid <= x1)
        .unwrap_or_else(|| {
            columns
                .iter()
                .enumerate()
                .min_by(|a, b| {
                    let distance = |(x0, x1): (f64, f64)| (mid - (x0 + x1) / 2.0).abs();
                    distance(*a.1).total_cmp(&distance(*b.1))
                })
                .map(|(index, _)| index)
                .unwrap_or_default()
        })
}

fn build_table(rows: &[Vec<Cell>]) -> Option<PageTable> {
    let columns = column_bounds(rows);
    if columns.len() < 2 {
        return None;
    }
    let table = rows
        .iter()
        .map(|cells| {
            let mut row: Vec<Option<String>> = vec![None; columns.len()];
            for cell in cells {
                let slot = &mut row[column_of(&columns, cell)];
                match slot.as_mut() {
                    Some(text) => {
                        text.push(' ');
                        text.push_str(&cell.text);
                    }
                    None => *slot = Some(cell.text.clone()),
                }
            }
            row
        })
        .collect();
    Some(table)
}

/// Detects tables among `words`.
///
/// A table is a run of consecutive lines that each split into two or more
/// cells. Single-cell lines and wide vertical gaps end a run.
pub fn detect_tables(words: &[Word]) -> Vec<PageTable> {
    let mut tables = Vec::new();
    let mut run: Vec<Vec<Cell>> = Vec::new();
    let mut last: Option<(f64, f64)> = None;

    for line in group_lines(words) {
        let cells = line_cells(&line);
        let detached = last.is_some_and(|(y, size)| line.y - y > ROW_GAP * size.max(line.size));
        if cells.len() < 2 || detached {
            tables.extend(build_table(&run));
            run.clear();
        }
        if cells.len() >= 2 {
            run.push(cells);
            last = Some((line.y, line.size));
        } else {
            last = None;
        }
    }
    tables.extend(build_table(&run));
    tables
}

/// Renders `words` as text, one line per baseline.
pub fn layout_text(words: &[Word]) -> String {
    group_lines(words)
        .iter()
        .map(|line| {
            line.words
                .iter()
                .map(|word| word.text.as_str())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// A page read from a PDF, as positioned words.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutPage {
    pub number: u32,
    pub words: Vec<Word>,
}

impl LayoutPage {
    pub fn new(number: u32, words: Vec<Word>) -> Self {
        Self { number, words }
    }
}

impl PdfPage for LayoutPage {
    fn text(&self) -> Option<String> {
        let text = layout_text(&self.words);
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }

    fn tables(&self) -> Vec<PageTable> {
        detect_tables(&self.words)
    }
}
