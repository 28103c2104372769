//! Denomination legend shared by the maps and the index page.

use std::fmt::Write;

use strum::IntoEnumIterator;

use crate::classify::Denomination;

/// Fixed overlay in the top right corner of a map.
pub fn legend_overlay() -> String {
    let mut html = String::from(
        r#"<div style="position: fixed; top: 10px; right: 10px; width: 160px; background-color: white; border: 2px solid grey; z-index: 9999; font-size: 11px; padding: 8px; border-radius: 3px; box-shadow: 0 0 10px rgba(0,0,0,0.2);">
<div style="text-align: center; font-weight: bold; margin-bottom: 8px; color: #333;">⛪ Churches Legend</div>
"#,
    );
    for denomination in Denomination::iter() {
        let _ = writeln!(
            html,
            r#"<div style="margin: 3px 0; font-size: 10px;"><span style="color: {}; font-size: 14px; margin-right: 5px;">●</span>{}</div>"#,
            denomination.color(),
            denomination.label()
        );
    }
    html.push_str(
        r#"<div style="margin-top: 8px; padding-top: 5px; border-top: 1px solid #eee; font-size: 9px; color: #666; text-align: center;">Click markers for details</div>
</div>"#,
    );
    html
}

/// Compact legend appended to every marker popup.
pub fn popup_legend() -> String {
    let entries: Vec<String> = Denomination::iter()
        .map(|d| format!(r#"<span style="color: {};">●</span> {}"#, d.color(), d.label()))
        .collect();
    format!(
        r#"<hr style="margin: 10px 0;"><small style="color: #666;"><strong>Legend:</strong><br>{}</small>"#,
        entries.join(" &nbsp; ")
    )
}

/// Inline legend line of the index page.
pub fn index_legend() -> String {
    Denomination::iter()
        .map(|d| {
            let label = match d {
                Denomination::General => "General Christian",
                other => other.label(),
            };
            format!(r#"<span style="color: {};">●</span> {}"#, d.hex(), label)
        })
        .collect::<Vec<_>>()
        .join(" &nbsp;\n            ")
}

/// Logs the colour of every denomination.
pub fn log_legend() {
    log::info!("Legend colors:");
    for denomination in Denomination::iter() {
        log::info!(
            "   {}: {} churches",
            denomination.color().to_uppercase(),
            denomination.label()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_lists_every_denomination() {
        let html = legend_overlay();
        for denomination in Denomination::iter() {
            assert!(html.contains(denomination.label()));
            assert!(html.contains(&format!("color: {};", denomination.color())));
        }
    }

    #[test]
    fn test_index_legend_names_general_christian() {
        let html = index_legend();
        assert!(html.contains("General Christian"));
        assert!(html.contains("#800080"));
    }
}
