//! Terminal Example
//!
//! Drives a MultiCheckboxList backed by an in-memory document:
//! - Up/Down to move between entries
//! - Space to toggle the entry under the cursor
//! - q or Escape to quit
//!
//! Listener activity goes to multicheck-terminal.log.

use std::fs::File;
use std::io::{self, Write};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::style::Print;
use crossterm::{cursor, execute, queue, terminal};
use futures::executor::block_on;
use hostdom::{Document, NodeId};
use log::LevelFilter;
use multicheck::{classes, Entry, EntryChange, MultiCheckboxList};
use simplelog::WriteLogger;
use unicode_width::UnicodeWidthStr;

const COLUMN_GAP: usize = 4;

fn main() -> io::Result<()> {
    if let Ok(log_file) = File::create("multicheck-terminal.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, simplelog::Config::default(), log_file);
    }

    let mut list = build();
    let mut stdout = io::stdout();

    terminal::enable_raw_mode()?;
    execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;

    let result = run(&mut list, &mut stdout);

    execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;

    println!("Selected: {:?}", list.get_selected());
    result
}

fn build() -> MultiCheckboxList<Document> {
    let mut doc = Document::new();
    let host = doc.select_with_options([
        ("rust", "Rust"),
        ("go", "Go"),
        ("zig", "Zig"),
        ("ocaml", "OCaml"),
    ]);

    let config = multicheck::Config::new()
        .list_title("Languages")
        .selected_list(true)
        .selected_title("Picked")
        .entry(Entry::new("c", "C").selected(true));

    let mut list = MultiCheckboxList::new(doc, host, config);
    list.on_select(|change: &EntryChange| log::info!("select {} ({})", change.value, change.name));
    list.on_deselect(|change: &EntryChange| {
        log::info!("deselect {} ({})", change.value, change.name)
    });
    list
}

fn run(list: &mut MultiCheckboxList<Document>, stdout: &mut io::Stdout) -> io::Result<()> {
    let mut cursor_at = 0usize;

    loop {
        draw(list, cursor_at, stdout)?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
            KeyCode::Up => cursor_at = cursor_at.saturating_sub(1),
            KeyCode::Down => {
                cursor_at = (cursor_at + 1).min(list.checkboxes().len().saturating_sub(1));
            }
            KeyCode::Char(' ') => {
                let Some(checkbox) = list.checkboxes().get(cursor_at).copied() else {
                    continue;
                };
                list.view_mut().click(checkbox);
                if let Err(e) = block_on(list.handle_change(&checkbox).settle()) {
                    log::error!("{e}");
                }
            }
            _ => {}
        }
    }
}

/// Render each panel of the container as a text column.
fn columns(list: &MultiCheckboxList<Document>, cursor_at: usize) -> Vec<Vec<String>> {
    let doc = list.view();
    doc.elements_by_class(*list.container(), classes::LIST)
        .into_iter()
        .map(|panel| {
            doc.descendants(panel)
                .into_iter()
                .filter_map(|node| line(list, node, cursor_at))
                .collect()
        })
        .collect()
}

fn line(list: &MultiCheckboxList<Document>, node: NodeId, cursor_at: usize) -> Option<String> {
    let doc = list.view();
    let el = &doc[node];

    if el.has_class(classes::ENTRY_LIST_TITLE) || el.has_class(classes::SELECTED_TITLE) {
        return Some(format!("== {} ==", doc.text_content(node)));
    }
    if el.has_class(classes::SELECTED_ENTRY) {
        return Some(format!("  {}", doc.text_content(node)));
    }
    if el.has_class(classes::ENTRY) {
        let checkbox = doc.children(node).first().copied()?;
        let marker = if doc[checkbox].checked { "[x]" } else { "[ ]" };
        let pointer = if list.checkboxes().get(cursor_at) == Some(&checkbox) {
            '>'
        } else {
            ' '
        };
        return Some(format!("{pointer} {marker} {}", doc.text_content(node)));
    }
    None
}

fn draw(
    list: &MultiCheckboxList<Document>,
    cursor_at: usize,
    stdout: &mut io::Stdout,
) -> io::Result<()> {
    let columns = columns(list, cursor_at);
    let widths: Vec<usize> = columns
        .iter()
        .map(|col| col.iter().map(|l| l.width()).max().unwrap_or(0))
        .collect();
    let height = columns.iter().map(Vec::len).max().unwrap_or(0);

    queue!(stdout, terminal::Clear(terminal::ClearType::All))?;
    for y in 0..height {
        let mut text = String::new();
        for (col, width) in columns.iter().zip(&widths) {
            let cell = col.get(y).map(String::as_str).unwrap_or("");
            text.push_str(cell);
            text.push_str(&" ".repeat(width - cell.width() + COLUMN_GAP));
        }
        queue!(stdout, cursor::MoveTo(0, y as u16), Print(text.trim_end()))?;
    }
    let footer = height as u16 + 1;
    queue!(
        stdout,
        cursor::MoveTo(0, footer),
        Print("Up/Down: move  Space: toggle  q: quit")
    )?;
    stdout.flush()
}
