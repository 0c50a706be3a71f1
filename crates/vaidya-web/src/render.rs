use std::fmt::Write;

use vaidya_core::models::MatchInfo;
use vaidya_core::normalize::NormalizedRecord;
use vaidya_core::overlay::DetailView;
use vaidya_core::screen::{Panel, PanelItem};
use vaidya_core::text::escape_html;

/// Render one panel as an HTML fragment. Record fields arrive pre-escaped
/// from the normalizer; everything else (placeholder messages, match info)
/// is escaped here.
pub(crate) fn render_panel(panel_id: &str, panel: &Panel) -> String {
    if !panel.visible {
        return String::new();
    }

    let mut out = String::from("<ul class=\"result-list\">");
    let mut entry_index = 0usize;
    for item in &panel.items {
        match item {
            PanelItem::Info { message } => {
                push_placeholder(&mut out, "placeholder", message);
            }
            PanelItem::NoResults { message } => {
                push_placeholder(&mut out, "placeholder empty", message);
            }
            PanelItem::Error { message } => {
                push_placeholder(&mut out, "placeholder error", message);
            }
            PanelItem::Entry { record, match_info } => {
                push_entry(&mut out, panel_id, entry_index, record, match_info.as_ref());
                entry_index += 1;
            }
        }
    }
    out.push_str("</ul>");
    out
}

fn push_placeholder(out: &mut String, class: &str, message: &str) {
    let _ = write!(
        out,
        "<li class=\"{class}\">{}</li>",
        escape_html(message)
    );
}

fn push_entry(
    out: &mut String,
    panel_id: &str,
    index: usize,
    record: &NormalizedRecord,
    match_info: Option<&MatchInfo>,
) {
    let _ = write!(
        out,
        "<li class=\"result-card\" data-panel=\"{panel_id}\" data-index=\"{index}\"><h3>{}</h3>",
        record.title
    );
    push_field(out, "Signs and Symptoms", &record.symptoms);
    push_field(out, "Preparation", &record.preparation);
    push_field(out, "Usage", &record.usage);

    if !record.matched_ingredients.is_empty() {
        let _ = write!(
            out,
            "<p class=\"match-line\"><strong>Matched ingredients:</strong> {}</p>",
            record.matched_ingredients.join(", ")
        );
    }
    if let Some(info) = match_info {
        out.push_str(&render_match_info(info));
    }
    if !record.nested.is_empty() {
        out.push_str("<ul class=\"nested-remedies\">");
        for nested in &record.nested {
            let _ = write!(
                out,
                "<li><strong>{}</strong> {}</li>",
                nested.title, nested.preparation
            );
        }
        out.push_str("</ul>");
    }
    out.push_str("</li>");
}

fn push_field(out: &mut String, label: &str, value: &str) {
    if value.is_empty() {
        return;
    }
    let _ = write!(out, "<p><strong>{label}:</strong> {value}</p>");
}

fn render_match_info(info: &MatchInfo) -> String {
    let mut parts = Vec::<String>::new();
    if !info.matched.is_empty() {
        parts.push(format!(
            "matched: {}",
            escape_html(&info.matched.join(", "))
        ));
    }
    if !info.missing.is_empty() {
        parts.push(format!(
            "missing: {}",
            escape_html(&info.missing.join(", "))
        ));
    }
    if let Some(coverage) = info.coverage {
        parts.push(format!("coverage: {:.0}%", coverage * 100.0));
    }
    if parts.is_empty() {
        return String::new();
    }
    format!("<p class=\"match-line\">{}</p>", parts.join(" | "))
}

/// Render the overlay body for one selected record.
pub(crate) fn render_detail(view: &DetailView) -> String {
    let mut out = format!("<h2>{}</h2><dl>", view.title);
    for section in &view.sections {
        let _ = write!(out, "<dt>{}</dt><dd>{}</dd>", section.label, section.text);
    }
    out.push_str("</dl>");
    if let Some(link) = &view.link {
        let _ = write!(
            out,
            "<p><a href=\"{link}\" target=\"_blank\" rel=\"noopener\">Open reference</a></p>"
        );
    }
    out
}
