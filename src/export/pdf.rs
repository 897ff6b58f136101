// src/export/pdf.rs

use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::ops::Range;

const PAGE_W: f32 = 842.0;
const PAGE_H: f32 = 595.0;
const MARGIN: f32 = 36.0;
const LINE_H: f32 = 11.0;
const PAD: f32 = 4.0;

const BODY_PT: f32 = 8.5;
const HEAD_PT: f32 = 9.5;
const TITLE_PT: f32 = 13.0;

// title band above the table
const TITLE_H: f32 = 26.0;
// widest column, as a share of the usable width
const COLUMN_CAP: f32 = 0.35;

const FONT: Name<'static> = Name(b"F1");

/// Cell text already broken into lines for its column.
type Wrapped = Vec<Vec<String>>;

/// Landscape A4 table document on the base-14 Helvetica font.
///
/// Pages are laid out before anything is drawn, so every footer can
/// carry the total page count.
pub struct TableWriter {
    pdf: Pdf,
    next_ref: i32,
    pages: Vec<Ref>,
}

const CATALOG: Ref = Ref::new(1);
const PAGE_TREE: Ref = Ref::new(2);
const FONT_REF: Ref = Ref::new(3);

impl Default for TableWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl TableWriter {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();
        pdf.type1_font(FONT_REF)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        Self {
            pdf,
            next_ref: 4,
            pages: Vec::new(),
        }
    }

    fn alloc(&mut self) -> Ref {
        let r = Ref::new(self.next_ref);
        self.next_ref += 1;
        r
    }

    /// Lay out `rows` under `headers` across as many pages as needed.
    /// The header row is repeated on each page.
    pub fn write_table(&mut self, title: &str, headers: &[String], rows: &[Vec<String>]) {
        let widths = column_widths(headers, rows);
        let head = wrap_row(headers, &widths, HEAD_PT);

        let head_h = row_height(&head);
        let room = PAGE_H - 2.0 * MARGIN - TITLE_H - head_h;
        let max_lines = (((room - 2.0 * PAD) / LINE_H).floor() as usize).max(1);

        // (source row, fragment); fragments of one row share its band
        let body: Vec<(usize, Wrapped)> = rows
            .iter()
            .enumerate()
            .flat_map(|(i, r)| {
                split_tall(wrap_row(r, &widths, BODY_PT), max_lines)
                    .into_iter()
                    .map(move |part| (i, part))
            })
            .collect();
        let heights: Vec<f32> = body.iter().map(|(_, cells)| row_height(cells)).collect();
        let chunks = paginate(&heights, room);
        let total = chunks.len();

        for (n, chunk) in chunks.into_iter().enumerate() {
            let mut c = Content::new();
            draw_text(&mut c, MARGIN, PAGE_H - MARGIN - TITLE_PT, TITLE_PT, title);
            draw_text(
                &mut c,
                PAGE_W - MARGIN - 70.0,
                MARGIN / 2.0,
                BODY_PT,
                &format!("Page {} of {}", n + 1, total),
            );

            let mut top = PAGE_H - MARGIN - TITLE_H;
            top -= draw_row(&mut c, top, &widths, &head, HEAD_PT, Some(0.85));
            for (i, cells) in &body[chunk] {
                let band = (i % 2 == 1).then_some(0.95);
                top -= draw_row(&mut c, top, &widths, cells, BODY_PT, band);
            }

            self.push_page(c);
        }
    }

    fn push_page(&mut self, content: Content) {
        let page = self.alloc();
        let stream = self.alloc();

        {
            let mut p = self.pdf.page(page);
            p.parent(PAGE_TREE)
                .media_box(Rect::new(0.0, 0.0, PAGE_W, PAGE_H))
                .contents(stream);
            p.resources().fonts().pair(FONT, FONT_REF);
        }

        self.pdf.stream(stream, &content.finish());
        self.pages.push(page);
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn finish(mut self) -> Vec<u8> {
        self.pdf.catalog(CATALOG).pages(PAGE_TREE);
        self.pdf
            .pages(PAGE_TREE)
            .count(self.pages.len() as i32)
            .kids(self.pages.iter().copied());
        self.pdf.finish()
    }
}

/// Split rows into pages that fit `room` points. Rows are expected to be no
/// taller than `room` (see [`split_tall`]). Always at least one page.
pub(crate) fn paginate(heights: &[f32], room: f32) -> Vec<Range<usize>> {
    let mut pages = Vec::new();
    let mut start = 0;
    let mut used = 0.0;

    for (i, h) in heights.iter().enumerate() {
        if used + h > room && i > start {
            pages.push(start..i);
            start = i;
            used = 0.0;
        }
        used += h;
    }
    pages.push(start..heights.len());
    pages
}

/// Cut a row whose cells run past `max_lines` into consecutive fragments,
/// so that no text is drawn below the bottom margin.
fn split_tall(cells: Wrapped, max_lines: usize) -> Vec<Wrapped> {
    let lines = cells.iter().map(Vec::len).max().unwrap_or(0);
    if lines <= max_lines {
        return vec![cells];
    }

    (0..lines.div_ceil(max_lines))
        .map(|part| {
            cells
                .iter()
                .map(|cell| {
                    cell.iter()
                        .skip(part * max_lines)
                        .take(max_lines)
                        .cloned()
                        .collect()
                })
                .collect()
        })
        .collect()
}

/// Widths from header and content length, capped per column and scaled
/// down to the usable page width.
fn column_widths(headers: &[String], rows: &[Vec<String>]) -> Vec<f32> {
    let usable = PAGE_W - 2.0 * MARGIN;
    let cap = usable * COLUMN_CAP;

    let mut widths: Vec<f32> = headers
        .iter()
        .map(|h| text_width(h, HEAD_PT).min(cap))
        .collect();
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = w.max(text_width(cell, BODY_PT).min(cap));
        }
    }

    let total: f32 = widths.iter().sum();
    if total > usable {
        widths.iter_mut().for_each(|w| *w *= usable / total);
    }
    widths
}

// rough Helvetica average advance
fn text_width(s: &str, pt: f32) -> f32 {
    s.chars().count() as f32 * pt * 0.55 + 2.0 * PAD
}

fn wrap_row(cells: &[String], widths: &[f32], pt: f32) -> Wrapped {
    cells
        .iter()
        .zip(widths)
        .map(|(text, w)| {
            let per_line = ((w - 2.0 * PAD) / (pt * 0.5)).max(1.0) as usize;
            let lines: Vec<String> = textwrap::wrap(text, per_line)
                .into_iter()
                .map(|l| l.into_owned())
                .collect();
            if lines.is_empty() {
                vec![String::new()]
            } else {
                lines
            }
        })
        .collect()
}

fn row_height(cells: &Wrapped) -> f32 {
    let lines = cells.iter().map(Vec::len).max().unwrap_or(1).max(1);
    lines as f32 * LINE_H + 2.0 * PAD
}

/// Draw one row whose top edge sits at `top`; returns its height.
fn draw_row(
    c: &mut Content,
    top: f32,
    widths: &[f32],
    cells: &Wrapped,
    pt: f32,
    fill: Option<f32>,
) -> f32 {
    let h = row_height(cells);
    let bottom = top - h;

    if let Some(gray) = fill {
        let total: f32 = widths.iter().sum();
        c.save_state();
        c.set_fill_gray(gray);
        c.rect(MARGIN, bottom, total, h);
        c.fill_nonzero();
        c.restore_state();
    }

    let mut x = MARGIN;
    for (lines, w) in cells.iter().zip(widths) {
        for (n, line) in lines.iter().enumerate() {
            let baseline = top - PAD - (n as f32 + 1.0) * LINE_H + 2.5;
            draw_text(c, x + PAD, baseline, pt, line);
        }
        c.save_state();
        c.set_stroke_gray(0.65);
        c.rect(x, bottom, *w, h);
        c.stroke();
        c.restore_state();
        x += w;
    }

    h
}

fn draw_text(c: &mut Content, x: f32, y: f32, pt: f32, text: &str) {
    let bytes = win_ansi(text);
    c.begin_text();
    c.set_font(FONT, pt);
    c.next_line(x, y);
    c.show(Str(&bytes));
    c.end_text();
}

/// Encode text for the WinAnsi-encoded base font. Unmappable chars become `?`.
pub(crate) fn win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{20}'..='\u{7E}' | '\u{A0}'..='\u{FF}' => c as u32 as u8,
            '€' => 0x80,
            '‚' => 0x82,
            '„' => 0x84,
            '…' => 0x85,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            '™' => 0x99,
            _ => b'?',
        })
        .collect()
}
