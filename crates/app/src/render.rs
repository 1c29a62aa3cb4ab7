use sort_visualiser_core::Dimensionality;

const LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
const RAISED_ROWS: usize = 10;

/// Draws the array as a bar chart. `max` is the largest value in the input
/// and fixes the vertical scale for the whole session.
pub fn bars(values: &[u32], max: u32, dimensions: Dimensionality) -> String {
    match dimensions {
        Dimensionality::TwoD => flat(values, max),
        Dimensionality::ThreeD => raised(values, max),
    }
}

pub fn title(algorithm: &str, status: &str) -> String {
    format!("{algorithm} | {status}")
}

fn flat(values: &[u32], max: u32) -> String {
    let max = max.max(1) as usize;
    values
        .iter()
        .map(|&value| {
            let level = (value as usize * LEVELS.len()).div_ceil(max);
            LEVELS[level.clamp(1, LEVELS.len()) - 1]
        })
        .collect()
}

/// Column chart with a shaded cap on every bar.
fn raised(values: &[u32], max: u32) -> String {
    let max = max.max(1) as usize;
    let heights: Vec<usize> = values
        .iter()
        .map(|&value| (value as usize * RAISED_ROWS).div_ceil(max))
        .collect();

    let mut out = String::new();
    for row in (1..=RAISED_ROWS).rev() {
        let line: String = heights
            .iter()
            .map(|&height| match height {
                h if h == row => '▓',
                h if h > row => '█',
                _ => ' ',
            })
            .collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out.push_str(&"▀".repeat(values.len()));
    out
}
