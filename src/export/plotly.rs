use std::path::Path;

use serde_json::{Value, json};

use crate::assemble::sequence::SceneSequence;
use crate::export::json::{ensure_parent_dir, write_json};
use crate::foundation::core::FIELD_LENGTH_YDS;
use crate::foundation::error::{SnapreelError, SnapreelResult};
use crate::synth::scene::{DrawLayer, GroupLayer, MarkerKind, MarkerLayer, Scene, TextLayer};

/// plotly.js bundle referenced by exported HTML pages.
pub const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Milliseconds each scene stays on screen during playback.
const FRAME_DURATION_MS: u32 = 100;
const PIXELS_PER_YARD: f64 = 10.0;
/// Visible field height; slightly tighter than the marker span.
const Y_AXIS_MAX: f64 = 53.3;
/// Blank title lines pushing the description below the plot.
const DESCRIPTION_OFFSET_LINES: usize = 19;

/// A Plotly figure (`data`, `layout`, `frames`) built from a [`SceneSequence`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PlotlyFigure {
    /// Traces of the first scene.
    pub data: Vec<Value>,
    /// Axes, title, controls and annotations.
    pub layout: Value,
    /// One frame per scene, named by sample id.
    pub frames: Vec<Value>,
}

impl PlotlyFigure {
    /// Build the figure; fails on an empty sequence.
    pub fn from_sequence(seq: &SceneSequence) -> SnapreelResult<Self> {
        let first = seq
            .scenes
            .first()
            .ok_or_else(|| SnapreelError::validation("cannot export an empty scene sequence"))?;
        let frames = seq
            .scenes
            .iter()
            .map(|scene| {
                json!({
                    "name": scene.sample.to_string(),
                    "data": scene_traces(scene),
                })
            })
            .collect();

        Ok(Self {
            data: scene_traces(first),
            layout: layout(seq),
            frames,
        })
    }

    /// Write the figure as pretty JSON.
    pub fn write_json(&self, path: &Path) -> SnapreelResult<()> {
        write_json(self, path)
    }

    /// Standalone HTML page that loads plotly.js from [`PLOTLY_CDN`].
    pub fn to_html(&self, page_title: &str) -> SnapreelResult<String> {
        let fig = serde_json::to_string(self)
            .map_err(|e| SnapreelError::serde(format!("encode figure: {e}")))?
            .replace("</", "<\\/");
        Ok(format!(
            r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<script src="{PLOTLY_CDN}"></script>
</head>
<body>
<div id="play"></div>
<script>
const fig = {fig};
Plotly.newPlot("play", fig.data, fig.layout).then(() => Plotly.addFrames("play", fig.frames));
</script>
</body>
</html>
"#,
            title = escape_html(page_title),
        ))
    }

    /// Write [`Self::to_html`] to `path`, creating parent directories.
    pub fn write_html(&self, path: &Path, page_title: &str) -> SnapreelResult<()> {
        ensure_parent_dir(path)?;
        std::fs::write(path, self.to_html(page_title)?)
            .map_err(|e| SnapreelError::serde(format!("write '{}': {e}", path.display())))
    }
}

fn scene_traces(scene: &Scene) -> Vec<Value> {
    scene.layers.iter().map(layer_trace).collect()
}

fn layer_trace(layer: &DrawLayer) -> Value {
    match layer {
        DrawLayer::YardNumbers(t) => text_trace(t),
        DrawLayer::Marker(m) => marker_trace(m),
        DrawLayer::Group(g) => group_trace(g),
    }
}

fn text_trace(t: &TextLayer) -> Value {
    json!({
        "type": "scatter",
        "x": t.labels.iter().map(|l| l.position.x).collect::<Vec<_>>(),
        "y": t.labels.iter().map(|l| l.position.y).collect::<Vec<_>>(),
        "mode": "text",
        "text": t.labels.iter().map(|l| l.text.as_str()).collect::<Vec<_>>(),
        "textfont": { "size": 30, "family": "Courier New, monospace", "color": "#ffffff" },
        "showlegend": false,
        "hoverinfo": "none",
    })
}

fn marker_trace(m: &MarkerLayer) -> Value {
    let color = match m.kind {
        MarkerKind::Scrimmage => "blue",
        MarkerKind::FirstDown => "yellow",
    };
    json!({
        "type": "scatter",
        "x": [m.x, m.x],
        "y": [m.y_from, m.y_to],
        "mode": "lines",
        "line": { "dash": "dash", "color": color },
        "showlegend": false,
        "hoverinfo": "none",
    })
}

fn group_trace(g: &GroupLayer) -> Value {
    json!({
        "type": "scatter",
        "x": g.points.iter().map(|p| p.position.x).collect::<Vec<_>>(),
        "y": g.points.iter().map(|p| p.position.y).collect::<Vec<_>>(),
        "mode": "markers",
        "marker": {
            "color": g.points.iter().map(|p| p.color.as_str()).collect::<Vec<_>>(),
            "size": 10,
        },
        "name": g.name,
        "hovertext": g.points.iter().map(|p| p.hover.html()).collect::<Vec<_>>(),
        "hoverinfo": "text",
    })
}

/// `animate` method args: target frames plus frame timing. `mode` and `fromcurrent` are only
/// emitted when set.
fn animate_args(frames: Value, duration_ms: u32, mode: Option<&str>, fromcurrent: bool) -> Value {
    let mut opts = serde_json::Map::new();
    opts.insert(
        "frame".to_string(),
        json!({ "duration": duration_ms, "redraw": false }),
    );
    if let Some(mode) = mode {
        opts.insert("mode".to_string(), json!(mode));
    }
    if fromcurrent {
        opts.insert("fromcurrent".to_string(), json!(true));
    }
    opts.insert("transition".to_string(), json!({ "duration": 0 }));
    json!([frames, Value::Object(opts)])
}

fn layout(seq: &SceneSequence) -> Value {
    let ctx = &seq.context;
    let title = format!(
        "{}{}{}",
        seq.title,
        "<br>".repeat(DESCRIPTION_OFFSET_LINES),
        ctx.description.joined("<br>")
    );

    let steps: Vec<Value> = seq
        .steps
        .iter()
        .map(|s| {
            json!({
                "args": animate_args(json!([s.label]), FRAME_DURATION_MS, Some("immediate"), false),
                "label": s.label,
                "method": "animate",
            })
        })
        .collect();

    let annotations: Vec<Value> = [0.0, 53.0]
        .into_iter()
        .map(|y: f64| {
            json!({
                "x": seq.overlay.first_down_marker,
                "y": y,
                "text": seq.overlay.down.to_string(),
                "showarrow": false,
                "font": { "family": "Courier New, monospace", "size": 16, "color": "black" },
                "align": "center",
                "bordercolor": "black",
                "borderwidth": 2,
                "borderpad": 4,
                "bgcolor": "#ff7f0e",
                "opacity": 1,
            })
        })
        .collect();

    let tickvals: Vec<u32> = (10..=110).step_by(5).collect();
    let xaxis = json!({
        "range": [0.0, FIELD_LENGTH_YDS],
        "autorange": false,
        "tickmode": "array",
        "tickvals": tickvals,
        "showticklabels": false,
    });
    let yaxis = json!({
        "range": [0.0, Y_AXIS_MAX],
        "autorange": false,
        "showgrid": false,
        "showticklabels": false,
    });

    let buttons = json!([
        {
            "args": animate_args(Value::Null, FRAME_DURATION_MS, None, true),
            "label": "Play",
            "method": "animate",
        },
        {
            "args": animate_args(json!([null]), 0, Some("immediate"), false),
            "label": "Pause",
            "method": "animate",
        },
    ]);
    let controls = json!({
        "buttons": buttons,
        "direction": "left",
        "pad": { "r": 10, "t": 87 },
        "showactive": false,
        "type": "buttons",
        "x": 0.1,
        "xanchor": "right",
        "y": 0,
        "yanchor": "top",
    });

    let current_value = json!({
        "font": { "size": 20 },
        "prefix": "Frame:",
        "visible": true,
        "xanchor": "right",
    });
    let slider = json!({
        "active": 0,
        "yanchor": "top",
        "xanchor": "left",
        "currentvalue": current_value,
        "transition": { "duration": 300, "easing": "cubic-in-out" },
        "pad": { "b": 10, "t": 50 },
        "len": 0.9,
        "x": 0.1,
        "y": 0,
        "steps": steps,
    });

    json!({
        "autosize": false,
        "width": FIELD_LENGTH_YDS * PIXELS_PER_YARD,
        "height": (FIELD_LENGTH_YDS / 2.0) * PIXELS_PER_YARD,
        "xaxis": xaxis,
        "yaxis": yaxis,
        "plot_bgcolor": "#00B140",
        "title": title,
        "updatemenus": [controls],
        "sliders": [slider],
        "annotations": annotations,
    })
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
#[path = "../../tests/unit/export/plotly.rs"]
mod tests;
