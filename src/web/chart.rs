//! Layout for the emotion bar chart.
//!
//! The page draws the chart as inline SVG; this module computes every
//! coordinate so the template only has to emit elements.

use serde::Serialize;

use crate::analysis::EmotionTally;

pub const BAR_COLORS: [&str; 3] = ["#6A82FB", "#FC5C7D", "#D4FC79"];

const MARGIN_LEFT: u32 = 56;
const MARGIN_RIGHT: u32 = 24;
const MARGIN_TOP: u32 = 48;
const MARGIN_BOTTOM: u32 = 110;
const PLOT_HEIGHT: u32 = 280;
const SLOT_WIDTH: u32 = 72;
const BAR_WIDTH: u32 = 48;
const MIN_WIDTH: u32 = 480;
const MAX_TICKS: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub label: String,
    pub count: usize,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub color: &'static str,
    /// Anchor for the rotated label under the bar.
    pub label_x: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tick {
    pub value: usize,
    pub y: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub width: u32,
    pub height: u32,
    pub plot_left: u32,
    pub plot_right: u32,
    pub plot_top: u32,
    pub plot_bottom: u32,
    pub max_count: usize,
    pub bars: Vec<Bar>,
    pub ticks: Vec<Tick>,
}

impl BarChart {
    /// Lay out one bar per emotion, in the tally's display order.
    pub fn from_tally(tally: &EmotionTally) -> Self {
        let rows = tally.sorted();
        let max_count = rows.first().map(|row| row.count).unwrap_or(0);

        let plot_width =
            (rows.len() as u32 * SLOT_WIDTH).max(MIN_WIDTH - MARGIN_LEFT - MARGIN_RIGHT);
        let width = MARGIN_LEFT + plot_width + MARGIN_RIGHT;
        let plot_top = MARGIN_TOP;
        let plot_bottom = MARGIN_TOP + PLOT_HEIGHT;

        let bars = rows
            .into_iter()
            .enumerate()
            .map(|(idx, row)| {
                let height = scale(row.count, max_count);
                let slot_x = MARGIN_LEFT + idx as u32 * SLOT_WIDTH;
                let x = slot_x + (SLOT_WIDTH - BAR_WIDTH) / 2;
                Bar {
                    label: row.emotion,
                    count: row.count,
                    x,
                    y: plot_bottom - height,
                    width: BAR_WIDTH,
                    height,
                    color: BAR_COLORS[idx % BAR_COLORS.len()],
                    label_x: x + BAR_WIDTH / 2,
                }
            })
            .collect();

        Self {
            width,
            height: plot_bottom + MARGIN_BOTTOM,
            plot_left: MARGIN_LEFT,
            plot_right: MARGIN_LEFT + plot_width,
            plot_top,
            plot_bottom,
            max_count,
            bars,
            ticks: ticks(max_count, plot_bottom),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}

fn scale(count: usize, max_count: usize) -> u32 {
    if max_count == 0 {
        return 0;
    }
    (count as u64 * PLOT_HEIGHT as u64 / max_count as u64) as u32
}

fn ticks(max_count: usize, plot_bottom: u32) -> Vec<Tick> {
    if max_count == 0 {
        return Vec::new();
    }
    let step = max_count.div_ceil(MAX_TICKS);
    (0..=max_count)
        .step_by(step)
        .map(|value| Tick {
            value,
            y: plot_bottom - scale(value, max_count),
        })
        .collect()
}
