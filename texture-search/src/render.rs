use anyhow::Result;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};

use texture_types::{PreviewSelection, SessionState, TextureRecord, TEXTURE_CATEGORIES};

pub fn print_categories() {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["", "Id", "Label"]);

    for cat in TEXTURE_CATEGORIES {
        table.add_row(vec![Cell::new(cat.icon), Cell::new(cat.id), Cell::new(cat.label)]);
    }

    println!("{table}");
}

/// Render a settled session. Returns false when the search failed.
pub fn print_state(state: &SessionState, json: bool, preview: Option<usize>) -> Result<bool> {
    if json {
        println!("{}", serde_json::to_string_pretty(state)?);
        return Ok(state.error_message().is_none());
    }

    match state {
        SessionState::Success(records) => {
            print_cards(records);
            if let Some(id) = preview {
                let mut selection = PreviewSelection::new();
                if selection.select_id(records, id) {
                    if let Some(record) = selection.current() {
                        print_preview(record);
                    }
                } else {
                    println!("{}", format!("No result with id {id}.").yellow());
                }
            }
        },
        SessionState::Empty => {
            println!("{}", "No textures found. Try a different search term.".yellow());
        },
        SessionState::Failed(message) => {
            eprintln!("{}", message.red());
            return Ok(false);
        },
        SessionState::Idle | SessionState::Loading => {},
    }
    Ok(true)
}

fn print_cards(records: &[TextureRecord]) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Id", "Title", "Source", "Download"]);

    for record in records {
        let download = if record.has_page() {
            Cell::new(&record.page_url).fg(Color::Green)
        } else {
            Cell::new("-")
        };
        table.add_row(vec![
            Cell::new(record.id),
            Cell::new(&record.title),
            Cell::new(&record.source),
            download,
        ]);
    }

    println!("{table}");
    println!("\n{} textures found · FREE · 4K", records.len());
}

fn print_preview(record: &TextureRecord) {
    println!();
    println!("{}", record.title.bold());
    println!("  {} · {} · {}", "CC0 / Free".green(), "4K Resolution", record.source.cyan());
    println!("  Preview:  {}", record.preview_url);
    if record.has_page() {
        println!("  Download: {}", record.page_url.underline());
    }
    println!("  ✓ No watermarks · ✓ Free for commercial use · ✓ High resolution");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<TextureRecord> {
        vec![TextureRecord {
            id: 0,
            title: "Oak Planks".to_string(),
            source: "ambientcg.com".to_string(),
            page_url: "https://ambientcg.com/view?id=Planks012".to_string(),
            preview_url: "https://source.unsplash.com/512x512/?oak&sig=0".to_string(),
        }]
    }

    fn failed() -> SessionState {
        SessionState::Failed("Search failed. Please try again.".to_string())
    }

    #[test]
    fn test_failed_state_reports_failure() {
        assert!(!print_state(&failed(), false, None).unwrap());
        assert!(!print_state(&failed(), true, None).unwrap());
    }

    #[test]
    fn test_empty_state_is_success() {
        assert!(print_state(&SessionState::Empty, false, None).unwrap());
        assert!(print_state(&SessionState::Empty, true, None).unwrap());
    }

    #[test]
    fn test_success_with_valid_preview() {
        let state = SessionState::Success(records());
        assert!(print_state(&state, false, Some(0)).unwrap());
        assert!(print_state(&state, true, Some(0)).unwrap());
    }

    #[test]
    fn test_success_with_unknown_preview_id_still_succeeds() {
        let state = SessionState::Success(records());
        assert!(print_state(&state, false, Some(42)).unwrap());
    }

    #[test]
    fn test_success_without_page_url_renders() {
        let mut list = records();
        list[0].page_url.clear();
        assert!(print_state(&SessionState::Success(list), false, Some(0)).unwrap());
    }
}
