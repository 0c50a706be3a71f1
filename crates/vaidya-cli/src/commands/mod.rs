use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use vaidya_core::Vaidya;
use vaidya_core::models::QueryFilters;
use vaidya_core::normalize::NormalizedRecord;
use vaidya_core::overlay::DetailView;
use vaidya_core::screen::{Panel, PanelItem, SearchScreen};
use vaidya_core::session::SearchSession;

use crate::cli::{Commands, SearchArgs};

pub(crate) fn run_from_root(root: &Path, command: Commands) -> Result<()> {
    let app = Vaidya::new(root).context("failed to create app")?;

    match command {
        Commands::Filters => {
            let options = app.filter_options()?;
            print_json(&options)?;
        }
        Commands::Search(args) => run_search(&app, &args)?,
        Commands::Chat(args) => {
            let turn = app.chat(&args.question)?;
            println!("{}", turn.answer);
        }
        Commands::Transcript(args) => {
            let transcript = app.transcript();
            if args.clear {
                transcript.clear()?;
                println!("transcript cleared");
            } else {
                for turn in transcript.load()? {
                    println!("> {}", turn.question);
                    println!("{}", turn.answer);
                    println!();
                }
            }
        }
        Commands::Log(args) => {
            let entries = app.recent_requests(args.limit)?;
            print_json(&entries)?;
        }
        Commands::Web(args) => {
            vaidya_web::serve_web(app, &args.host, args.port)?;
        }
    }
    Ok(())
}

fn run_search(app: &Vaidya, args: &SearchArgs) -> Result<()> {
    let filters = QueryFilters::new(args.disease.as_deref(), &args.ingredients);

    let mut session = SearchSession::new();
    let ticket = session.begin();
    let screen = app.run_search(&filters);
    session.apply(ticket, screen);
    let screen = session.screen();

    if args.json {
        print_json(screen)?;
        return Ok(());
    }
    print!("{}", render_screen_text(screen));

    if let Some(index) = args.detail {
        let records = visible_entries(screen);
        let record = records
            .get(index)
            .with_context(|| format!("no result at index {index}"))?;
        print!("{}", render_detail_text(&DetailView::build(record)));
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

const PANEL_TITLES: [(&str, fn(&SearchScreen) -> &Panel); 4] = [
    ("Disease matches", |screen| &screen.disease),
    ("Diseases for ingredients", |screen| {
        &screen.diseases_for_ingredients
    }),
    ("Remedies", |screen| &screen.ingredient_remedies),
    ("Remedies matching both filters", |screen| {
        &screen.intersection
    }),
];

fn render_screen_text(screen: &SearchScreen) -> String {
    let mut out = String::new();
    let mut index = 0usize;
    for (title, panel_of) in PANEL_TITLES {
        let panel = panel_of(screen);
        if !panel.visible {
            continue;
        }
        out.push_str(&format!("== {title}\n"));
        for item in &panel.items {
            match item {
                PanelItem::Info { message }
                | PanelItem::NoResults { message }
                | PanelItem::Error { message } => {
                    out.push_str(&format!("  ({message})\n"));
                }
                PanelItem::Entry { record, match_info } => {
                    out.push_str(&format!("  [{index}] {}\n", record.title));
                    push_line(&mut out, "symptoms", &record.symptoms);
                    push_line(&mut out, "preparation", &record.preparation);
                    push_line(&mut out, "usage", &record.usage);
                    if let Some(info) = match_info {
                        if !info.matched.is_empty() {
                            push_line(&mut out, "matched", &info.matched.join(", "));
                        }
                        if !info.missing.is_empty() {
                            push_line(&mut out, "missing", &info.missing.join(", "));
                        }
                    }
                    for nested in &record.nested {
                        out.push_str(&format!("      * {}: {}\n", nested.title, nested.preparation));
                    }
                    index += 1;
                }
            }
        }
        out.push('\n');
    }
    out
}

fn push_line(out: &mut String, label: &str, value: &str) {
    if value.is_empty() {
        return;
    }
    out.push_str(&format!("      {label}: {value}\n"));
}

/// Entries across the visible panels in display order, matching the indexes
/// printed by `render_screen_text`.
fn visible_entries(screen: &SearchScreen) -> Vec<&NormalizedRecord> {
    let mut records = Vec::new();
    for (_, panel_of) in PANEL_TITLES {
        let panel = panel_of(screen);
        if !panel.visible {
            continue;
        }
        for item in &panel.items {
            if let PanelItem::Entry { record, .. } = item {
                records.push(record);
            }
        }
    }
    records
}

fn render_detail_text(view: &DetailView) -> String {
    let mut out = format!("--- {} ---\n{}\n", view.kind.as_str(), view.title);
    for section in &view.sections {
        out.push_str(&format!("{}: {}\n", section.label, section.text));
    }
    if let Some(link) = &view.link {
        out.push_str(&format!("reference: {link}\n"));
    }
    out
}
