use std::fs;
use std::path::Path;

use anybadge_core::color::COLORS;
use anybadge_core::{Badge, BadgeOptions, IdSequence};
use anyhow::{Context, Result};

use crate::cli::GalleryArgs;

pub fn run(args: GalleryArgs) -> Result<()> {
    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("Failed to create {}", args.out_dir.display()))?;

    let sequence = IdSequence::new();
    let table = write_color_badges(&args.out_dir, &args.link_prefix, &sequence)?;
    write_samples(&args.out_dir, &sequence)?;

    println!("{table}");
    Ok(())
}

/// Write `color_<name>.svg` for every named color and return the Markdown table.
fn write_color_badges(out_dir: &Path, link_prefix: &str, sequence: &IdSequence) -> Result<String> {
    let mut table = String::from("| Color Name | Hex | Example |\n| --- | --- | --- |\n");
    for (name, hex) in colors_by_name() {
        let name = name.to_ascii_lowercase();
        let file = format!("color_{name}.svg");
        let badge = Badge::with_sequence(
            BadgeOptions::new("Color", name.as_str()).default_color(hex),
            sequence,
        )?;
        badge.write(out_dir.join(&file), true)?;
        table.push_str(&format!(
            "| {name} | {} | ![]({}/{file}) |\n",
            hex.to_ascii_uppercase(),
            link_prefix.trim_end_matches('/')
        ));
    }
    Ok(table)
}

/// Named colors in alphabetical order.
fn colors_by_name() -> Vec<(&'static str, &'static str)> {
    let mut colors = COLORS.to_vec();
    colors.sort_by_key(|(name, _)| *name);
    colors
}

fn samples() -> Vec<(&'static str, BadgeOptions)> {
    vec![
        (
            "pipeline_smile.svg",
            BadgeOptions::new("Pipeline status", "😄"),
        ),
        (
            "pipeline_smile_padding.svg",
            BadgeOptions::new("Pipeline status", "😄").value_padding(1.0),
        ),
        (
            "pipeline_frown.svg",
            BadgeOptions::new("Pipeline status", "😟").default_color("Red"),
        ),
        (
            "documentation_link.svg",
            BadgeOptions::new("🔗", "Documentation"),
        ),
        ("pypi_link.svg", BadgeOptions::new("🔗", "PyPi")),
        ("value_only.svg", BadgeOptions::new("", "Value only")),
        ("label_only.svg", BadgeOptions::new("Label only", "")),
    ]
}

fn write_samples(out_dir: &Path, sequence: &IdSequence) -> Result<()> {
    for (file, options) in samples() {
        let badge = Badge::with_sequence(options, sequence)
            .with_context(|| format!("Failed to build {file}"))?;
        badge.write(out_dir.join(file), true)?;
    }
    Ok(())
}
