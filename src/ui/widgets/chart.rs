//! Chart panel widget
//!
//! The backend answers with plotly-style `{data, layout}` figures. Bar and
//! histogram traces become a bar chart, scatter traces (markers or lines)
//! become a braille plot. Anything else is summarized.
//!
//! Numeric columns may arrive as plotly typed arrays
//! (`{"dtype": "f8", "bdata": "<base64>"}`) instead of JSON lists.

use crate::api::ChartSpec;
use crate::app::App;
use crate::ui::widgets::helpers::truncate_to_width;
use crate::ui::DefaultTheme;
use ratatui::prelude::*;
use ratatui::symbols::Marker;
use ratatui::widgets::{Axis, BarChart, Block, Borders, Chart, Dataset, GraphType, Paragraph, Wrap};
use rust_i18n::t;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::Value;
use std::borrow::Cow;

/// Histogram bin count when the trace sets no `nbinsx`
const DEFAULT_BINS: usize = 10;

/// One plotted series
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub name: String,
    pub points: Vec<(f64, f64)>,
    pub lines: bool,
}

/// A figure reduced to what a terminal can draw
#[derive(Clone, Debug, PartialEq)]
pub enum ChartData {
    Bars(Vec<(String, u64)>),
    Series {
        series: Vec<Series>,
        x_bounds: [f64; 2],
        y_bounds: [f64; 2],
        /// Category names when x is not numeric: first and last
        x_labels: Option<(String, String)>,
    },
    Unsupported { traces: usize },
}

fn array<'a>(trace: &'a Value, key: &str) -> Option<Cow<'a, [Value]>> {
    let value = trace.get(key)?;
    match value.as_array() {
        Some(items) => Some(Cow::Borrowed(items.as_slice())),
        None => decode_typed_array(value).map(Cow::Owned),
    }
}

/// Decode a little-endian plotly typed array into JSON numbers.
///
/// Non-finite floats become `null`. Unknown dtypes and malformed payloads
/// give `None`.
fn decode_typed_array(encoded: &Value) -> Option<Vec<Value>> {
    let dtype = encoded.get("dtype")?.as_str()?;
    let bytes = STANDARD.decode(encoded.get("bdata")?.as_str()?).ok()?;
    let width = match dtype {
        "f8" | "i8" | "u8" => 8,
        "f4" | "i4" | "u4" => 4,
        "i2" | "u2" => 2,
        "i1" | "u1" | "u1c" => 1,
        _ => return None,
    };
    if bytes.len() % width != 0 {
        return None;
    }
    bytes
        .chunks_exact(width)
        .map(|chunk| decode_element(dtype, chunk))
        .collect()
}

fn decode_element(dtype: &str, chunk: &[u8]) -> Option<Value> {
    let value = match dtype {
        "f8" => Value::from(f64::from_le_bytes(chunk.try_into().ok()?)),
        "f4" => Value::from(f32::from_le_bytes(chunk.try_into().ok()?) as f64),
        "i8" => Value::from(i64::from_le_bytes(chunk.try_into().ok()?)),
        "i4" => Value::from(i32::from_le_bytes(chunk.try_into().ok()?)),
        "i2" => Value::from(i16::from_le_bytes(chunk.try_into().ok()?)),
        "i1" => Value::from(i8::from_le_bytes(chunk.try_into().ok()?)),
        "u8" => Value::from(u64::from_le_bytes(chunk.try_into().ok()?)),
        "u4" => Value::from(u32::from_le_bytes(chunk.try_into().ok()?)),
        "u2" => Value::from(u16::from_le_bytes(chunk.try_into().ok()?)),
        "u1" | "u1c" => Value::from(chunk[0]),
        _ => return None,
    };
    Some(value)
}

fn label(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn trace_type(trace: &Value) -> &str {
    // Plotly's default trace type
    trace.get("type").and_then(Value::as_str).unwrap_or("scatter")
}

/// Add `amount` to the bar called `name`, keeping first-seen order
fn add_bar(bars: &mut Vec<(String, u64)>, name: String, amount: u64) {
    match bars.iter_mut().find(|(n, _)| *n == name) {
        Some((_, value)) => *value += amount,
        None => bars.push((name, amount)),
    }
}

fn bounds(values: impl Iterator<Item = f64>) -> Option<[f64; 2]> {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if !min.is_finite() || !max.is_finite() {
        return None;
    }
    if min == max {
        return Some([min - 1.0, max + 1.0]);
    }
    Some([min, max])
}

/// Count numeric values into equal-width bins labelled by their lower edge
fn histogram_bins(values: &[f64], nbins: Option<usize>) -> Vec<(String, u64)> {
    let lo = values.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !lo.is_finite() || !hi.is_finite() {
        return Vec::new();
    }
    if lo == hi {
        return vec![(axis_label(lo), values.len() as u64)];
    }

    let mut distinct = values.to_vec();
    distinct.sort_by(f64::total_cmp);
    distinct.dedup();
    let count = nbins
        .unwrap_or_else(|| distinct.len().min(DEFAULT_BINS))
        .max(1);
    let width = (hi - lo) / count as f64;

    let mut counts = vec![0u64; count];
    for v in values {
        let idx = (((v - lo) / width) as usize).min(count - 1);
        counts[idx] += 1;
    }
    counts
        .into_iter()
        .enumerate()
        .map(|(i, n)| (axis_label(lo + width * i as f64), n))
        .collect()
}

/// Reduce a chart spec to bars or point series
pub fn chart_data(spec: &ChartSpec) -> ChartData {
    let unsupported = ChartData::Unsupported { traces: spec.data.len() };

    let mut bars: Vec<(String, u64)> = Vec::new();
    let mut series: Vec<Series> = Vec::new();
    let mut x_labels: Option<(String, String)> = None;

    for (i, trace) in spec.data.iter().enumerate() {
        match trace_type(trace) {
            "bar" => {
                let (Some(xs), Some(ys)) = (array(trace, "x"), array(trace, "y")) else {
                    continue;
                };
                for (x, y) in xs.iter().zip(ys.iter()) {
                    let amount = y.as_f64().unwrap_or(0.0).max(0.0).round() as u64;
                    add_bar(&mut bars, label(x), amount);
                }
            }
            "histogram" => {
                let Some(xs) = array(trace, "x").or_else(|| array(trace, "y")) else {
                    continue;
                };
                let present: Vec<&Value> = xs.iter().filter(|v| !v.is_null()).collect();
                let numeric: Option<Vec<f64>> = present.iter().map(|v| v.as_f64()).collect();
                match numeric {
                    Some(values) if !values.is_empty() => {
                        let nbins = trace
                            .get("nbinsx")
                            .and_then(Value::as_u64)
                            .filter(|n| *n > 0)
                            .map(|n| n as usize);
                        for (name, amount) in histogram_bins(&values, nbins) {
                            add_bar(&mut bars, name, amount);
                        }
                    }
                    _ => {
                        for x in present {
                            add_bar(&mut bars, label(x), 1);
                        }
                    }
                }
            }
            "scatter" | "scattergl" => {
                let (Some(xs), Some(ys)) = (array(trace, "x"), array(trace, "y")) else {
                    continue;
                };
                let numeric_x = xs.iter().all(Value::is_number);
                if !numeric_x && x_labels.is_none() {
                    if let (Some(first), Some(last)) = (xs.first(), xs.last()) {
                        x_labels = Some((label(first), label(last)));
                    }
                }
                let points = xs
                    .iter()
                    .zip(ys.iter())
                    .enumerate()
                    .filter_map(|(idx, (x, y))| {
                        let x = if numeric_x { x.as_f64()? } else { idx as f64 };
                        Some((x, y.as_f64()?))
                    })
                    .collect();
                let lines = trace
                    .get("mode")
                    .and_then(Value::as_str)
                    .map(|m| m.contains("lines"))
                    .unwrap_or(false);
                let name = trace
                    .get("name")
                    .and_then(Value::as_str)
                    .filter(|n| !n.is_empty())
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("trace {}", i + 1));
                series.push(Series { name, points, lines });
            }
            _ => {}
        }
    }

    if !series.is_empty() {
        let points = || series.iter().flat_map(|s| s.points.iter());
        let (Some(x_bounds), Some(y_bounds)) = (
            bounds(points().map(|(x, _)| *x)),
            bounds(points().map(|(_, y)| *y)),
        ) else {
            return unsupported;
        };
        return ChartData::Series {
            series,
            x_bounds,
            y_bounds,
            x_labels,
        };
    }
    if !bars.is_empty() {
        return ChartData::Bars(bars);
    }
    unsupported
}

fn axis_label(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{:.2}", v)
    }
}

/// Draw the visualization panel: controls line, then the chart
pub fn draw_chart_panel(f: &mut Frame, app: &App, area: Rect, active: bool) {
    let view = app.workbench.view();
    let chart_title = view.chart.as_ref().and_then(ChartSpec::title);
    let title = match chart_title {
        Some(name) => format!(" {} │ {} ", t!("title_chart"), name),
        None => format!(" {} ", t!("title_chart")),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(DefaultTheme::border(active))
        .title(Span::styled(title, DefaultTheme::title()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(inner);

    let unset = t!("axis_unset").to_string();
    let controls = vec![
        Line::from(Span::styled(
            t!(
                "chart_controls",
                chart_type = app.chart_type,
                x = view.axis.x_column().unwrap_or(&unset),
                y = view.axis.y_column().unwrap_or(&unset)
            )
            .to_string(),
            DefaultTheme::info(),
        )),
        Line::from(Span::styled(t!("chart_hint").to_string(), DefaultTheme::dim_text())),
    ];
    f.render_widget(Paragraph::new(controls), chunks[0]);

    let Some(spec) = view.chart.as_ref() else {
        f.render_widget(
            Paragraph::new(Span::styled(t!("no_chart").to_string(), DefaultTheme::dim_text())),
            chunks[1],
        );
        return;
    };

    match chart_data(spec) {
        ChartData::Bars(bars) => draw_bars(f, &bars, chunks[1]),
        ChartData::Series { series, x_bounds, y_bounds, x_labels } => {
            draw_series(f, &series, x_bounds, y_bounds, x_labels, chunks[1])
        }
        ChartData::Unsupported { traces } => {
            let note = Paragraph::new(Span::styled(
                t!("chart_unsupported", traces = traces).to_string(),
                DefaultTheme::dim_text(),
            ))
            .wrap(Wrap { trim: true });
            f.render_widget(note, chunks[1]);
        }
    }
}

fn draw_bars(f: &mut Frame, bars: &[(String, u64)], area: Rect) {
    let count = bars.len().max(1) as u16;
    let bar_width = (area.width / count).saturating_sub(1).clamp(1, 9);
    let labels: Vec<String> = bars
        .iter()
        .map(|(name, _)| truncate_to_width(name, bar_width as usize))
        .collect();
    let data: Vec<(&str, u64)> = labels
        .iter()
        .zip(bars)
        .map(|(name, (_, value))| (name.as_str(), *value))
        .collect();

    let chart = BarChart::default()
        .bar_width(bar_width)
        .bar_gap(1)
        .bar_style(Style::default().fg(DefaultTheme::GOLD))
        .value_style(DefaultTheme::selected())
        .label_style(DefaultTheme::dim_text())
        .data(data.as_slice());
    f.render_widget(chart, area);
}

fn draw_series(
    f: &mut Frame,
    series: &[Series],
    x_bounds: [f64; 2],
    y_bounds: [f64; 2],
    x_labels: Option<(String, String)>,
    area: Rect,
) {
    const COLORS: [Color; 4] = [
        DefaultTheme::GOLD,
        DefaultTheme::INFO,
        DefaultTheme::SUCCESS,
        DefaultTheme::WARNING,
    ];

    let datasets: Vec<Dataset> = series
        .iter()
        .enumerate()
        .map(|(i, s)| {
            Dataset::default()
                .name(s.name.clone())
                .marker(Marker::Braille)
                .graph_type(if s.lines { GraphType::Line } else { GraphType::Scatter })
                .style(Style::default().fg(COLORS[i % COLORS.len()]))
                .data(&s.points)
        })
        .collect();

    let (x_first, x_last) = x_labels
        .unwrap_or_else(|| (axis_label(x_bounds[0]), axis_label(x_bounds[1])));

    let chart = Chart::new(datasets)
        .x_axis(
            Axis::default()
                .style(DefaultTheme::dim_text())
                .bounds(x_bounds)
                .labels(vec![Span::raw(x_first), Span::raw(x_last)]),
        )
        .y_axis(
            Axis::default()
                .style(DefaultTheme::dim_text())
                .bounds(y_bounds)
                .labels(vec![
                    Span::raw(axis_label(y_bounds[0])),
                    Span::raw(axis_label(y_bounds[1])),
                ]),
        );
    f.render_widget(chart, area);
}
