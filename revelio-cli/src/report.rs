//! Human-readable report rendering.
//!
//! Groups the missing collectibles by region (regions grouped by zone),
//! deduplicates guide-video links per region, and prints the bug advice
//! when a heuristic fired.

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use revelio_catalog::{Collectible, CollectibleKind, region_group};
use revelio_lib::ScanReport;

/// Render the whole scan report to stdout.
pub(crate) fn render(report: &ScanReport) {
    if !report.unreadable.is_empty() {
        println!(
            "{}",
            "SQLite was unable to read parts of the database"
                .if_supports_color(Stdout, |t| t.yellow())
        );
        println!("The following collectible types were affected and won't work correctly:");
        println!("{}", report.unreadable.join(", "));
        println!();
    }

    let missing: Vec<&Collectible> = report
        .collectibles
        .iter()
        .filter(|c| !c.collected)
        .collect();

    if missing.is_empty() {
        println!(
            "{}",
            "Congratulations! You've gotten every collectible that revelio can detect"
                .if_supports_color(Stdout, |t| t.green())
        );
        render_bugs(report);
        return;
    }

    let mut regions: Vec<&str> = missing.iter().map(|c| c.region.as_str()).collect();
    regions.sort_unstable();
    regions.dedup();
    // Stable re-sort keeps regions alphabetical within each zone.
    regions.sort_by_key(|r| region_group(r));

    for region in regions {
        render_region(region, &missing);
    }
    render_bugs(report);
}

/// Print one region section with its missing entries.
fn render_region(region: &str, missing: &[&Collectible]) {
    let mut entries: Vec<&Collectible> = missing
        .iter()
        .filter(|c| c.region == region)
        .copied()
        .collect();

    let mut videos: Vec<&str> = entries.iter().filter_map(|c| c.video.as_deref()).collect();
    videos.sort_unstable();
    videos.dedup();
    let links: Vec<String> = videos
        .iter()
        .map(|id| format!("https://youtu.be/{id}"))
        .collect();

    let group = region_group(region);
    let header = if group.is_empty() {
        format!("{region} ({})", links.join(", "))
    } else {
        format!("{group} - {region} ({})", links.join(", "))
    };
    println!();
    println!("{}", header.if_supports_color(Stdout, |t| t.cyan()));

    entries.sort_by_key(|c| {
        (
            c.video.clone().unwrap_or_default(),
            c.time.unwrap_or(0),
            c.kind.as_str(),
            c.index,
        )
    });
    for entry in entries {
        println!("\t{}", collectible_line(entry));
    }
}

/// One display line for a missing collectible.
fn collectible_line(c: &Collectible) -> String {
    let (name, qualifier) = c.kind.display_names();
    let mut line = String::new();
    // Finishing Touches entries are enemy names, not numbered items.
    if c.kind != CollectibleKind::FinishingTouchEnemy {
        line.push_str(name);
        line.push_str(" #");
    }
    line.push_str(&c.index.to_string());
    if !qualifier.is_empty() {
        line.push_str(&format!(" ({qualifier})"));
    }
    match &c.video {
        Some(video) => {
            let time = c.time.unwrap_or(0);
            line.push_str(&format!(" - https://youtu.be/{video}&t={time}"));
        }
        None => line.push_str(" - No video yet"),
    }
    line
}

/// Print advice for any heuristic that fired.
fn render_bugs(report: &ScanReport) {
    if report.bugs.butterfly {
        println!();
        println!(
            "Your save seems to be affected by the butterfly quest bug. If you're unable to"
        );
        println!(
            "collect Butterfly Chest #1, consider using a save editor to clear the stuck quest."
        );
    }
    if report.bugs.conjuration {
        println!();
        println!(
            "Your save seems to be affected by the 139/140 conjuration bug. If you can't find"
        );
        println!("your last exploration conjuration, consider using a save-fix mod.");
    }
}
