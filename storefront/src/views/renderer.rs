//! View renderer
//!
//! Renders storefront views to plain text for terminals and text clients.

use crate::app::{AdoptionHall, CartView, CatalogView, FamiliarDetails};
use crate::domain::entities::LoreEntry;

/// Render the cabinet listing
pub fn render_catalog(view: &CatalogView) -> String {
    let mut buf = String::new();

    buf.push_str("# The Cabinet\n\n");
    if !view.query.is_empty() {
        buf.push_str(&format!("Search: \"{}\"\n", view.query));
    }
    buf.push_str(&format!("{}\n\n", view.label));

    for entry in &view.items {
        buf.push_str(&format!(
            "- {} | {} [{}]\n",
            entry.title, entry.price_display, entry.id
        ));
        if let Some(tagline) = &entry.tagline {
            buf.push_str(&format!("    {}\n", truncate(tagline, 60)));
        }
    }

    buf
}

/// Render the cart drawer
pub fn render_cart(view: &CartView) -> String {
    let mut buf = String::new();

    buf.push_str(&format!("# Your Cabinet ({})\n\n", view.item_count));

    if view.is_empty() {
        buf.push_str("_The cabinet is empty. For now._\n\n");
    } else {
        for line in &view.lines {
            buf.push_str(&format!(
                "- {} x{} @ {} = {} [{}]\n",
                line.title,
                line.quantity,
                line.unit_price_display,
                line.line_total_display,
                line.item_id
            ));
        }
        buf.push('\n');
    }

    buf.push_str("---\n\n");
    buf.push_str(&format!("Subtotal: {}\n", view.subtotal_display));
    buf.push_str("Taxes & shipping calculated at checkout.\n");

    buf
}

/// Render the Adoption Hall with the Book of Keepers
pub fn render_adoption_hall(hall: &AdoptionHall) -> String {
    let mut buf = String::new();

    buf.push_str("# Adoption Hall\n\n");
    buf.push_str(&format!("{} available\n\n", hall.available));

    for familiar in &hall.familiars {
        let marker = if familiar.adopted { "[ADOPTED]" } else { "[ ]" };
        buf.push_str(&format!(
            "{} {} | {} | {} [{}]\n",
            marker, familiar.name, familiar.rarity, familiar.status_label, familiar.id
        ));
        buf.push_str(&format!("    {}\n", familiar.temperament));
    }

    buf.push_str("\n## The Book of Keepers\n\n");
    if hall.keepers.is_empty() {
        buf.push_str("_No entries yet. The page waits._\n");
    } else {
        for keeper in &hall.keepers {
            buf.push_str(&format!("- {} — Adopted\n", keeper.name));
        }
    }

    buf
}

/// Render a familiar's full details
pub fn render_familiar(details: &FamiliarDetails) -> String {
    let mut buf = String::new();
    let summary = &details.summary;

    buf.push_str(&format!("# {}\n\n", summary.name));
    buf.push_str(&format!("{} • {}\n\n", summary.rarity, summary.temperament));

    buf.push_str(&format!("- **Origin:** {}\n", details.origin));
    buf.push_str(&format!("- **Traits:** {}\n", details.traits.join(", ")));
    if let Some(blessing) = &details.blessing {
        buf.push_str(&format!("- **Blessing:** {}\n", blessing));
    }
    if let Some(curse) = &details.curse {
        buf.push_str(&format!("- **Curse:** {}\n", curse));
    }
    buf.push_str(&format!("- **Lore:** {}\n", details.lore));
    buf.push_str(&format!("- **Adoption Oath:** {}\n", details.oath));

    buf.push_str("\n---\n\n");
    if summary.adopted {
        buf.push_str("Already adopted\n");
    } else {
        buf.push_str(&format!("{}\n", summary.status_label));
    }

    buf
}

/// Render the Lore & Provenance section
pub fn render_lore(entries: &[LoreEntry]) -> String {
    let mut buf = String::new();

    buf.push_str("# Lore & Provenance\n\n");
    for entry in entries {
        buf.push_str(&format!("## {}\n\n", entry.title));
        buf.push_str(&format!("_{}_\n\n", entry.teaser));
        buf.push_str(&format!("{}\n\n", entry.body));
    }

    buf
}

/// Truncate a string with ellipsis
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
