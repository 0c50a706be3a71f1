use crate::models::{ChatReply, RemedyRecord};

/// Fold a chat reply into the single answer string that gets rendered and
/// stored: lookup header first, then the model answer, then any structured
/// remedy sections. Storing the folded text keeps transcript re-render
/// faithful to what was shown.
#[must_use]
pub fn compose_final_answer(reply: &ChatReply) -> String {
    let mut answer = reply.answer.clone();
    if let Some(lookup) = &reply.lookup {
        answer = format!(
            "Direct {} lookup for: {} (matches: {})\n\n{}",
            lookup.category, lookup.query, lookup.count, answer
        );
    }
    answer.push_str(&remedy_section(&reply.referenced_remedies, "Remedy Details"));
    answer.push_str(&remedy_section(
        &reply.suggested_remedies,
        "Suggested Remedies",
    ));
    answer
}

fn remedy_section(remedies: &[RemedyRecord], title: &str) -> String {
    if remedies.is_empty() {
        return String::new();
    }

    let mut out = format!("\n\n### {title}\n");
    for remedy in remedies {
        out.push_str(&format!("\n**{}**\n", remedy.name));
        out.push_str(&format!("- Preparation: {}\n", remedy.preparation));
        out.push_str(&format!("- Usage: {}\n", remedy.usage));
        if let Some(url) = &remedy.detail_url {
            out.push_str(&format!("- More: [Open]({url})\n"));
        }
    }
    out
}
