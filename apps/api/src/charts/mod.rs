//! Chart rendering for the results page.
//!
//! Two fixed-size PNGs per analysis: a grouped bar chart of user vs
//! required proficiency and a radar plot of the same levels. Both are
//! returned base64-encoded for inline `data:` URIs.
//!
//! The bitmap backend is driven in raw pixel coordinates and no text is
//! drawn, so no font stack is needed. Skill names appear in the HTML
//! legend next to the images instead; chart pixel content is cosmetic.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use image::{codecs::png::PngEncoder, ExtendedColorType, ImageEncoder};
use plotters::prelude::*;

use crate::errors::AppError;
use crate::scoring::interactive::ScoredSkill;

const BAR_WIDTH: u32 = 640;
const BAR_HEIGHT: u32 = 360;
const RADAR_SIZE: u32 = 480;
const MARGIN: i32 = 30;

/// Proficiency axis tops out at Expert.
const MAX_LEVEL: f64 = 3.0;

const USER_COLOR: RGBColor = RGBColor(135, 206, 235); // sky blue
const REQUIRED_COLOR: RGBColor = RGBColor(255, 165, 0); // orange

/// Grouped bar chart: per skill, the user bar next to the required bar.
pub fn bar_chart_png(scored: &[ScoredSkill]) -> Result<String, AppError> {
    if scored.is_empty() {
        return Err(AppError::Chart("no skills to chart".to_string()));
    }

    let mut pixels = vec![0u8; (BAR_WIDTH * BAR_HEIGHT * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut pixels, (BAR_WIDTH, BAR_HEIGHT))
            .into_drawing_area();
        root.fill(&WHITE).map_err(chart_err)?;

        let plot_w = BAR_WIDTH as i32 - 2 * MARGIN;
        let plot_h = BAR_HEIGHT as i32 - 2 * MARGIN;
        let baseline = MARGIN + plot_h;
        let group_w = plot_w / scored.len() as i32;
        // Two bars and a gap per group.
        let bar_w = (group_w as f64 * 0.35).max(1.0) as i32;

        // Baseline axis.
        root.draw(&PathElement::new(
            vec![(MARGIN, baseline), (MARGIN + plot_w, baseline)],
            BLACK.stroke_width(1),
        ))
        .map_err(chart_err)?;

        for (i, skill) in scored.iter().enumerate() {
            let group_x = MARGIN + i as i32 * group_w + group_w / 10;
            let user_h = (skill.user.clamp(0, 3) as f64 / MAX_LEVEL * plot_h as f64) as i32;
            let required_h =
                (skill.required.clamp(0, 3) as f64 / MAX_LEVEL * plot_h as f64) as i32;

            root.draw(&Rectangle::new(
                [(group_x, baseline - user_h), (group_x + bar_w, baseline)],
                USER_COLOR.filled(),
            ))
            .map_err(chart_err)?;
            root.draw(&Rectangle::new(
                [
                    (group_x + bar_w + 2, baseline - required_h),
                    (group_x + 2 * bar_w + 2, baseline),
                ],
                REQUIRED_COLOR.filled(),
            ))
            .map_err(chart_err)?;
        }

        root.present().map_err(chart_err)?;
    }

    encode_png(&pixels, BAR_WIDTH, BAR_HEIGHT)
}

/// Radar plot: required-level polygon (light) under the user-level polygon
/// (heavier), one spoke per skill starting at twelve o'clock.
pub fn radar_chart_png(scored: &[ScoredSkill]) -> Result<String, AppError> {
    if scored.is_empty() {
        return Err(AppError::Chart("no skills to chart".to_string()));
    }

    let mut pixels = vec![0u8; (RADAR_SIZE * RADAR_SIZE * 3) as usize];
    {
        let root =
            BitMapBackend::with_buffer(&mut pixels, (RADAR_SIZE, RADAR_SIZE)).into_drawing_area();
        root.fill(&WHITE).map_err(chart_err)?;

        let center = (RADAR_SIZE as i32 / 2, RADAR_SIZE as i32 / 2);
        let radius = (RADAR_SIZE as i32 / 2 - MARGIN) as f64;
        let n = scored.len();

        // Concentric reference rings at each proficiency level.
        for level in 1..=3 {
            let ring = ring_points(center, radius * level as f64 / MAX_LEVEL, n.max(24));
            root.draw(&PathElement::new(ring, RGBColor(200, 200, 200).stroke_width(1)))
                .map_err(chart_err)?;
        }

        // Spokes.
        for i in 0..n {
            let (x, y) = polar_point(center, radius, i, n);
            root.draw(&PathElement::new(
                vec![center, (x, y)],
                RGBColor(200, 200, 200).stroke_width(1),
            ))
            .map_err(chart_err)?;
        }

        let required: Vec<(i32, i32)> = scored
            .iter()
            .enumerate()
            .map(|(i, s)| {
                polar_point(center, radius * s.required.clamp(0, 3) as f64 / MAX_LEVEL, i, n)
            })
            .collect();
        let user: Vec<(i32, i32)> = scored
            .iter()
            .enumerate()
            .map(|(i, s)| polar_point(center, radius * s.user.clamp(0, 3) as f64 / MAX_LEVEL, i, n))
            .collect();

        root.draw(&Polygon::new(required.clone(), REQUIRED_COLOR.mix(0.25).filled()))
            .map_err(chart_err)?;
        root.draw(&Polygon::new(user.clone(), USER_COLOR.mix(0.6).filled()))
            .map_err(chart_err)?;

        // Outlines close the polygons back to their first vertex.
        root.draw(&PathElement::new(closed(required), REQUIRED_COLOR.stroke_width(2)))
            .map_err(chart_err)?;
        root.draw(&PathElement::new(closed(user), USER_COLOR.stroke_width(2)))
            .map_err(chart_err)?;

        root.present().map_err(chart_err)?;
    }

    encode_png(&pixels, RADAR_SIZE, RADAR_SIZE)
}

fn polar_point(center: (i32, i32), r: f64, index: usize, total: usize) -> (i32, i32) {
    let angle = -std::f64::consts::FRAC_PI_2
        + index as f64 / total as f64 * 2.0 * std::f64::consts::PI;
    (
        center.0 + (r * angle.cos()).round() as i32,
        center.1 + (r * angle.sin()).round() as i32,
    )
}

fn ring_points(center: (i32, i32), r: f64, segments: usize) -> Vec<(i32, i32)> {
    let mut points: Vec<(i32, i32)> = (0..segments)
        .map(|i| polar_point(center, r, i, segments))
        .collect();
    points.push(points[0]);
    points
}

fn closed(mut points: Vec<(i32, i32)>) -> Vec<(i32, i32)> {
    if let Some(&first) = points.first() {
        points.push(first);
    }
    points
}

fn chart_err<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Chart(e.to_string())
}

fn encode_png(pixels: &[u8], width: u32, height: u32) -> Result<String, AppError> {
    let mut png = Vec::new();
    PngEncoder::new(&mut png)
        .write_image(pixels, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| AppError::Chart(format!("PNG encoding failed: {e}")))?;
    Ok(BASE64.encode(png))
}
