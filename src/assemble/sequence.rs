use std::collections::BTreeMap;
use std::fmt;

use crate::context::resolver::EventContext;
use crate::foundation::core::TimeSampleId;
use crate::synth::scene::Scene;
use crate::synth::synthesizer::SceneOutput;

/// Sample at which the formation was set, if any sample says so.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineSet {
    /// Lowest sample tagged as line set.
    Found(TimeSampleId),
    /// No sample carried the tag.
    NotFound,
}

impl LineSet {
    /// Lowest candidate wins.
    pub fn from_candidates(candidates: impl IntoIterator<Item = TimeSampleId>) -> Self {
        candidates
            .into_iter()
            .min()
            .map_or(Self::NotFound, Self::Found)
    }

    /// The line-set sample, if found.
    pub fn sample(self) -> Option<TimeSampleId> {
        match self {
            Self::Found(s) => Some(s),
            Self::NotFound => None,
        }
    }
}

impl fmt::Display for LineSet {
    /// `-1` stands for "not found" in titles.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found(s) => write!(f, "{s}"),
            Self::NotFound => f.write_str("-1"),
        }
    }
}

/// One position of the playback slider.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PlaybackStep {
    /// Label shown by the position indicator.
    pub label: String,
    /// Scene the step jumps to.
    pub sample: TimeSampleId,
}

/// Static values annotated once on the field.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Overlay {
    /// Where the down badge sits.
    pub first_down_marker: f64,
    /// Down shown in the badge.
    pub down: u8,
}

/// Animation-ready output of the pipeline.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneSequence {
    /// Play context for titles and annotations.
    pub context: EventContext,
    /// Scenes, strictly ascending by sample.
    pub scenes: Vec<Scene>,
    /// One playback step per scene, same order.
    pub steps: Vec<PlaybackStep>,
    /// Line-set reference.
    pub line_set: LineSet,
    /// Static overlay values.
    pub overlay: Overlay,
    /// Title combining game, play, clock, quarter and line-set reference.
    pub title: String,
}

impl SceneSequence {
    /// Number of scenes.
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    /// True when the sequence has no scenes.
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// Sample ids in playback order.
    pub fn sample_ids(&self) -> impl Iterator<Item = TimeSampleId> + '_ {
        self.scenes.iter().map(|s| s.sample)
    }
}

/// `GameId: g, PlayId: p<br>clock qQ, Line Set at Frame n`.
pub fn compose_title(ctx: &EventContext, line_set: LineSet) -> String {
    format!(
        "GameId: {}, PlayId: {}<br>{} {}Q, Line Set at Frame {line_set}",
        ctx.game_id, ctx.play_id, ctx.game_clock, ctx.quarter
    )
}

/// Orders synthesized scenes and attaches sequence-level metadata.
pub struct SceneSequenceAssembler;

impl SceneSequenceAssembler {
    /// Sort by sample, merge duplicate samples (the later scene wins) and reduce line-set
    /// candidates to the lowest sample.
    #[tracing::instrument(skip_all, fields(game = %ctx.game_id, play = %ctx.play_id))]
    pub fn assemble(
        ctx: EventContext,
        outputs: impl IntoIterator<Item = SceneOutput>,
    ) -> SceneSequence {
        let mut by_sample: BTreeMap<TimeSampleId, Scene> = BTreeMap::new();
        let mut candidates = Vec::new();
        for out in outputs {
            if out.line_set {
                candidates.push(out.scene.sample);
            }
            if by_sample.insert(out.scene.sample, out.scene).is_some() {
                tracing::warn!("duplicate scene for one sample; keeping the later one");
            }
        }

        let line_set = LineSet::from_candidates(candidates);
        let scenes: Vec<Scene> = by_sample.into_values().collect();
        let steps = scenes
            .iter()
            .map(|s| PlaybackStep {
                label: s.sample.to_string(),
                sample: s.sample,
            })
            .collect();
        let overlay = Overlay {
            first_down_marker: ctx.first_down_marker,
            down: ctx.down,
        };
        let title = compose_title(&ctx, line_set);
        tracing::info!(scenes = scenes.len(), %line_set, "assembled scene sequence");

        SceneSequence {
            context: ctx,
            scenes,
            steps,
            line_set,
            overlay,
            title,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assemble/sequence.rs"]
mod tests;
