// Plain-text rendering of the batting order form
use std::fmt::Write;

use crate::generator::{BattingSlot, OrderGenerator};

pub const TITLE: &str = "Cricket Batting Order";
pub const SUBTITLE: &str = "Generate random batting orders for your cricket team";
pub const ROSTER_PROMPT: &str = "Enter Number of Batsmen (Max 11)";

/// Placeholder shown in an empty name field
pub fn placeholder(slot: usize) -> String {
    format!("Batsman {}", slot)
}

/// Rows of the generated order, `position. name`
pub fn render_order(order: &[BattingSlot]) -> String {
    let mut out = String::new();
    for slot in order {
        let _ = writeln!(out, "{:>2}. {}", slot.position, slot.name);
    }
    out
}

/// Whole form: header, roster field, name fields, generate action,
/// results and an optional advisory line
pub fn render_form(generator: &OrderGenerator, advisory: Option<&str>) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", TITLE);
    let _ = writeln!(out, "{}", SUBTITLE);
    let _ = writeln!(out);

    // The field shows blank rather than 0
    let size = match generator.roster_size() {
        0 => String::new(),
        n => n.to_string(),
    };
    let _ = writeln!(out, "{}: [{}]", ROSTER_PROMPT, size);

    if generator.roster_size() > 0 {
        let _ = writeln!(out);
        for (i, name) in generator.names().iter().enumerate() {
            let slot = i + 1;
            if name.is_empty() {
                let _ = writeln!(out, "{:>2} | ({})", slot, placeholder(slot));
            } else {
                let _ = writeln!(out, "{:>2} | {}", slot, name);
            }
        }

        let state = if generator.can_generate() {
            "ready"
        } else {
            "disabled"
        };
        let _ = writeln!(out);
        let _ = writeln!(out, "[Generate Order] ({})", state);
    }

    if generator.results_visible() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Batting Order:");
        out.push_str(&render_order(generator.order()));
    }

    if let Some(message) = advisory {
        let _ = writeln!(out);
        let _ = writeln!(out, "! {}", message);
    }

    out
}
