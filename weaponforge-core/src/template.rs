//! Literal-marker templates.
//!
//! Markers are plain substrings; there is no escaping. Any line holding
//! [`PERK_MARKER`] is repeated once per perk.

use crate::sampler::GeneratedWeapon;

pub const NAME_MARKER: &str = "{REPLACE_NAME_STR}";
pub const HIT_MARKER: &str = "{REPLACE_HIT_STR}";
pub const DAMAGE_MARKER: &str = "{REPLACE_DAMAGE_STR}";
pub const RANGE_MARKER: &str = "{REPLACE_RANGE_STR}";
pub const DESC_MARKER: &str = "{REPLACE_DESC_STR}";
pub const PERK_MARKER: &str = "{REPLACE_PERK_STR}";

pub fn render(template: &str, generated: &GeneratedWeapon) -> String {
    let weapon = &generated.weapon;
    let filled = template
        .replace(NAME_MARKER, &weapon.name)
        .replace(HIT_MARKER, &weapon.hit)
        .replace(DAMAGE_MARKER, &weapon.damage)
        .replace(RANGE_MARKER, &weapon.range)
        .replace(DESC_MARKER, &weapon.description);

    let mut lines: Vec<String> = Vec::new();
    for line in filled.split('\n') {
        if line.contains(PERK_MARKER) {
            // No perks drops the line.
            lines.extend(generated.perks.iter().map(|perk| line.replace(PERK_MARKER, perk)));
        } else {
            lines.push(line.to_string());
        }
    }
    lines.join("\n")
}

/// Renders each weapon against the same template, one after another,
/// each followed by a newline.
pub fn render_all(template: &str, weapons: &[GeneratedWeapon]) -> String {
    let mut out = String::new();
    for generated in weapons {
        out.push_str(&render(template, generated));
        out.push('\n');
    }
    out
}
