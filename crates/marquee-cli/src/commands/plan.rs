use std::fmt::Write as _;

use anyhow::Result;

use marquee_core::plan::RenderPlan;
use marquee_core::AppConfig;

pub fn run(config: &AppConfig, json: bool) -> Result<()> {
    let plan = RenderPlan::build(&config.slider, &config.slide_items())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        print!("{}", render_text(&plan)?);
    }

    Ok(())
}

fn render_text(plan: &RenderPlan) -> Result<String> {
    let mut out = String::new();

    writeln!(out, "Slides: {} × {}", plan.slide_count, plan.slide_width)?;
    writeln!(out, "Direction: {:?}", plan.direction)?;
    writeln!(
        out,
        "Track: {} copies, {} wide",
        plan.replication_factor, plan.container_width
    )?;

    match &plan.animation {
        Some(animation) => {
            writeln!(
                out,
                "Animation: {} → {} over {}ms, {}, {} iterations",
                animation.keyframes[0],
                animation.keyframes[1],
                animation.duration_ms,
                animation.easing,
                animation.iterations
            )?;
        }
        None => writeln!(out, "Animation: none (no slides)")?,
    }
    writeln!(
        out,
        "Pause on hover: {}",
        if plan.pause_on_hover { "yes" } else { "no" }
    )?;

    if !plan.sequence.is_empty() {
        writeln!(out, "\nSequence ({}):", plan.sequence.len())?;
        for entry in &plan.sequence {
            writeln!(
                out,
                "  [{}:{}] {} ({})",
                entry.copy, entry.index, entry.content, entry.width
            )?;
        }
    }

    if !plan.overlays.is_empty() {
        writeln!(out, "\nOverlays:")?;
        for overlay in &plan.overlays {
            writeln!(
                out,
                "  {:?}: {} × {}%, z {}{}, {}",
                overlay.edge,
                overlay.width,
                overlay.height_percent,
                overlay.z_index,
                if overlay.rotated { ", rotated" } else { "" },
                overlay.background()
            )?;
        }
    }

    Ok(out)
}
