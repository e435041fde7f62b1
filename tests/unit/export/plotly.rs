use super::*;
use crate::fixtures::{GAME, PLAY, source};
use crate::pipeline::animate_play;
use crate::selection::Selection;
use crate::synth::synthesizer::SynthOpts;
use crate::tables::lookup::LookupTables;

fn fixture_sequence() -> SceneSequence {
    animate_play(
        &source(),
        Selection::new(GAME, PLAY),
        &LookupTables::default(),
        &SynthOpts::default(),
    )
    .unwrap()
}

#[test]
fn one_frame_per_scene_named_by_sample() {
    let fig = PlotlyFigure::from_sequence(&fixture_sequence()).unwrap();
    let names: Vec<_> = fig.frames.iter().map(|f| f["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["1", "2", "3"]);
    // two yard-number rows, two markers, four groups
    assert_eq!(fig.data.len(), 8);
    assert_eq!(fig.frames[0]["data"], Value::Array(fig.data.clone()));
}

#[test]
fn layout_carries_title_slider_and_badges() {
    let fig = PlotlyFigure::from_sequence(&fixture_sequence()).unwrap();
    let title = fig.layout["title"].as_str().unwrap();
    assert!(title.starts_with("GameId: 2022091113, PlayId: 1363<br>07:04 2Q, Line Set at Frame 2"));
    assert!(title.ends_with("for 6 yards"));

    let labels: Vec<_> = fig.layout["sliders"][0]["steps"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["label"].as_str().unwrap())
        .collect();
    assert_eq!(labels, vec!["1", "2", "3"]);
    assert_eq!(fig.layout["sliders"][0]["currentvalue"]["prefix"], "Frame:");

    let badges = fig.layout["annotations"].as_array().unwrap();
    assert_eq!(badges.len(), 2);
    for b in badges {
        assert_eq!(b["text"], "3");
        assert_eq!(b["x"], 52.0);
    }
}

#[test]
fn play_pause_and_slider_args_match_their_roles() {
    let fig = PlotlyFigure::from_sequence(&fixture_sequence()).unwrap();
    let buttons = &fig.layout["updatemenus"][0]["buttons"];

    let play = &buttons[0]["args"];
    assert_eq!(buttons[0]["label"], "Play");
    assert_eq!(play[0], Value::Null);
    assert_eq!(play[1]["frame"]["duration"], 100);
    assert_eq!(play[1]["fromcurrent"], true);
    assert!(play[1].get("mode").is_none());

    let pause = &buttons[1]["args"];
    assert_eq!(buttons[1]["label"], "Pause");
    assert_eq!(pause[0], json!([null]));
    assert_eq!(pause[1]["frame"]["duration"], 0);
    assert_eq!(pause[1]["mode"], "immediate");
    assert!(pause[1].get("fromcurrent").is_none());

    let step = &fig.layout["sliders"][0]["steps"][1]["args"];
    assert_eq!(step[0], json!(["2"]));
    assert_eq!(step[1]["mode"], "immediate");
    assert!(step[1].get("fromcurrent").is_none());
}

#[test]
fn group_traces_carry_hover_text() {
    let fig = PlotlyFigure::from_sequence(&fixture_sequence()).unwrap();
    let ball = fig
        .data
        .iter()
        .find(|t| t["name"] == "Ball")
        .unwrap();
    assert_eq!(ball["marker"]["color"][0], "#CBB67C");
    let hover = ball["hovertext"][0].as_str().unwrap();
    assert!(hover.starts_with("id: 0, pos: football"));
}

#[test]
fn html_embeds_figure_safely() {
    let mut seq = fixture_sequence();
    seq.context.description = crate::context::description::WrappedDescription::wrap("</script>");
    let fig = PlotlyFigure::from_sequence(&seq).unwrap();
    let html = fig.to_html("Play <1363>").unwrap();
    assert!(html.contains(PLOTLY_CDN));
    assert!(html.contains("<title>Play &lt;1363&gt;</title>"));
    assert_eq!(html.matches("</script>").count(), 2);
}

#[test]
fn writes_json_and_html_files() {
    let dir = tempfile::tempdir().unwrap();
    let fig = PlotlyFigure::from_sequence(&fixture_sequence()).unwrap();
    let json_path = dir.path().join("out/fig.json");
    let html_path = dir.path().join("out/fig.html");
    fig.write_json(&json_path).unwrap();
    fig.write_html(&html_path, "play").unwrap();

    let back: Value = serde_json::from_reader(std::fs::File::open(&json_path).unwrap()).unwrap();
    assert_eq!(back["frames"].as_array().unwrap().len(), 3);
    assert!(std::fs::read_to_string(&html_path).unwrap().starts_with("<!DOCTYPE html>"));
}

#[test]
fn empty_sequence_is_rejected() {
    let mut seq = fixture_sequence();
    seq.scenes.clear();
    seq.steps.clear();
    let err = PlotlyFigure::from_sequence(&seq).unwrap_err();
    assert!(matches!(err, SnapreelError::Validation(_)));
}
