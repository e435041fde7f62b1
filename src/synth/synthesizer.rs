use std::collections::{BTreeMap, BTreeSet, HashMap, btree_map};

use rayon::prelude::*;

use crate::catalog::entities::TrackedSample;
use crate::context::resolver::EventContext;
use crate::foundation::core::{EntityKind, FIELD_WIDTH_YDS, Point, TimeSampleId};
use crate::foundation::error::{SnapreelError, SnapreelResult};
use crate::synth::scene::{
    DrawLayer, EntityPoint, FieldLabel, GroupLayer, HoverInfo, MarkerKind, MarkerLayer, Scene,
    TextLayer,
};
use crate::tables::lookup::LookupTables;

/// Event tag marking the moment the formation is set.
pub const LINE_SET_TAG: &str = "line_set";

/// Distance of the yard-number rows from each sideline.
const YARD_NUMBER_INSET: f64 = 5.0;

/// Threading options for [`FrameSynthesizer::synthesize_all`].
#[derive(Clone, Debug, Default)]
pub struct SynthOpts {
    /// Build scenes on a rayon pool instead of the calling thread.
    pub parallel: bool,
    /// Worker count override (parallel mode only).
    pub threads: Option<usize>,
}

/// A scene and whether its sample is a line-set candidate.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneOutput {
    /// The synthesized scene.
    pub scene: Scene,
    /// True when the sample's dominant event tag is the line-set marker.
    pub line_set: bool,
}

/// True when `tag` names the line-set event (`line_set`, `Line Set`, ...).
pub fn is_line_set(tag: &str) -> bool {
    let normalized: String = tag
        .trim()
        .chars()
        .map(|c| if c == ' ' || c == '-' { '_' } else { c.to_ascii_lowercase() })
        .collect();
    normalized == LINE_SET_TAG
}

/// Builds one [`Scene`] per time sample of a play.
///
/// Construction buckets the samples by time sample and merges duplicate rows (the last row of an
/// entity within a sample wins, kept at the entity's first position). Scene building itself is
/// pure, so scenes can be produced lazily via [`FrameSynthesizer::iter`] or all at once.
pub struct FrameSynthesizer<'a> {
    tables: &'a LookupTables,
    field: Vec<DrawLayer>,
    buckets: BTreeMap<TimeSampleId, Vec<&'a TrackedSample>>,
}

impl<'a> FrameSynthesizer<'a> {
    /// Bucket `samples` by time sample and precompute the field layers.
    #[tracing::instrument(skip_all, fields(samples = samples.len()))]
    pub fn new(ctx: &EventContext, samples: &'a [TrackedSample], tables: &'a LookupTables) -> Self {
        let buckets = bucket_samples(samples);
        report_gaps(&buckets, tables);
        Self {
            tables,
            field: field_layers(ctx),
            buckets,
        }
    }

    /// Number of distinct time samples.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// True when there is no sample to draw.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Time samples in ascending order.
    pub fn sample_ids(&self) -> impl Iterator<Item = TimeSampleId> + '_ {
        self.buckets.keys().copied()
    }

    /// Scene for `sample`, or `None` when the play has no rows at that sample.
    pub fn synthesize(&self, sample: TimeSampleId) -> Option<SceneOutput> {
        self.buckets
            .get(&sample)
            .map(|rows| self.build_scene(sample, rows))
    }

    /// Lazy, ascending scene iterator. Calling it again restarts from the first sample.
    pub fn iter(&self) -> SceneIter<'_, 'a> {
        SceneIter {
            synth: self,
            inner: self.buckets.iter(),
        }
    }

    /// Build every scene, ascending by sample.
    pub fn synthesize_all(&self, opts: &SynthOpts) -> SnapreelResult<Vec<SceneOutput>> {
        if !opts.parallel {
            return Ok(self.iter().collect());
        }
        let pool = build_thread_pool(opts.threads)?;
        let jobs: Vec<_> = self.buckets.iter().collect();
        Ok(pool.install(|| {
            jobs.par_iter()
                .map(|(sample, rows)| self.build_scene(**sample, rows))
                .collect()
        }))
    }

    fn build_scene(&self, sample: TimeSampleId, rows: &[&TrackedSample]) -> SceneOutput {
        let line_set = dominant_tag(rows).is_some_and(is_line_set);

        let mut groups: Vec<GroupLayer> = self
            .tables
            .groups
            .iter()
            .map(|g| GroupLayer {
                name: g.name.clone(),
                points: Vec::new(),
            })
            .collect();
        for row in rows {
            let Some(idx) = self.tables.group_of(&row.role) else {
                continue;
            };
            groups[idx].points.push(self.entity_point(row));
        }

        let mut layers = Vec::with_capacity(self.field.len() + groups.len());
        layers.extend(self.field.iter().cloned());
        layers.extend(groups.into_iter().map(DrawLayer::Group));

        SceneOutput {
            scene: Scene { sample, layers },
            line_set,
        }
    }

    fn entity_point(&self, row: &TrackedSample) -> EntityPoint {
        let color = self
            .tables
            .color_for(row.entity, &row.team)
            .unwrap_or(self.tables.fallback_color.as_str())
            .to_string();
        EntityPoint {
            entity: row.entity,
            position: row.position,
            color,
            hover: HoverInfo {
                id: row.entity.display_id(),
                role: row.role.clone(),
                name: row.display_name.clone(),
                speed: row.speed,
            },
        }
    }
}

/// Iterator returned by [`FrameSynthesizer::iter`].
pub struct SceneIter<'s, 'a> {
    synth: &'s FrameSynthesizer<'a>,
    inner: btree_map::Iter<'s, TimeSampleId, Vec<&'a TrackedSample>>,
}

impl Iterator for SceneIter<'_, '_> {
    type Item = SceneOutput;

    fn next(&mut self) -> Option<Self::Item> {
        let (sample, rows) = self.inner.next()?;
        Some(self.synth.build_scene(*sample, rows))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for SceneIter<'_, '_> {}

fn bucket_samples(samples: &[TrackedSample]) -> BTreeMap<TimeSampleId, Vec<&TrackedSample>> {
    let mut buckets: BTreeMap<TimeSampleId, Vec<&TrackedSample>> = BTreeMap::new();
    let mut slots: HashMap<(TimeSampleId, EntityKind), usize> = HashMap::new();
    let mut merged = 0usize;

    for s in samples {
        let bucket = buckets.entry(s.sample).or_default();
        match slots.get(&(s.sample, s.entity)) {
            Some(&idx) => {
                bucket[idx] = s;
                merged += 1;
            }
            None => {
                slots.insert((s.sample, s.entity), bucket.len());
                bucket.push(s);
            }
        }
    }
    if merged > 0 {
        tracing::warn!(merged, "duplicate entity rows within a sample; last row kept");
    }
    buckets
}

/// Logs the play-wide data-quality gaps once instead of per scene.
fn report_gaps(buckets: &BTreeMap<TimeSampleId, Vec<&TrackedSample>>, tables: &LookupTables) {
    let mut unmapped = BTreeSet::new();
    let mut unknown_teams = BTreeSet::new();
    let mut without_ball = 0usize;

    for rows in buckets.values() {
        if !rows.iter().any(|r| r.entity.is_ball()) {
            without_ball += 1;
        }
        for r in rows {
            if tables.group_of(&r.role).is_none() {
                unmapped.insert(r.role.as_str());
            }
            if tables.color_for(r.entity, &r.team).is_none() {
                unknown_teams.insert(r.team.as_str());
            }
        }
    }
    for role in unmapped {
        tracing::debug!(role, "role has no entity group; entities hidden");
    }
    if !unknown_teams.is_empty() {
        tracing::warn!(teams = ?unknown_teams, "no color for team; using fallback");
    }
    if without_ball > 0 {
        tracing::debug!(samples = without_ball, "samples without a ball row");
    }
}

/// Most frequent tag among `rows`; ties go to the tag seen first.
fn dominant_tag<'r>(rows: &[&'r TrackedSample]) -> Option<&'r str> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for tag in rows.iter().copied().filter_map(|r| r.event_tag.as_deref()) {
        match counts.iter_mut().find(|(t, _)| *t == tag) {
            Some((_, n)) => *n += 1,
            None => counts.push((tag, 1)),
        }
    }
    let mut best: Option<(&str, usize)> = None;
    for (tag, n) in counts {
        if best.is_none_or(|(_, m)| n > m) {
            best = Some((tag, n));
        }
    }
    best.map(|(tag, _)| tag)
}

fn field_layers(ctx: &EventContext) -> Vec<DrawLayer> {
    let yard_numbers = |y: f64| {
        let labels = (0..9u32)
            .map(|i| {
                let x = f64::from(20 + 10 * i);
                let yard = 10 * (i.min(8 - i) + 1);
                FieldLabel {
                    position: Point::new(x, y),
                    text: yard.to_string(),
                }
            })
            .collect();
        DrawLayer::YardNumbers(TextLayer { labels })
    };
    let marker = |kind, x| {
        DrawLayer::Marker(MarkerLayer {
            kind,
            x,
            y_from: 0.0,
            y_to: FIELD_WIDTH_YDS,
        })
    };

    vec![
        yard_numbers(YARD_NUMBER_INSET),
        yard_numbers(FIELD_WIDTH_YDS - YARD_NUMBER_INSET),
        marker(MarkerKind::Scrimmage, ctx.scrimmage_line),
        marker(MarkerKind::FirstDown, ctx.first_down_marker),
    ]
}

fn build_thread_pool(threads: Option<usize>) -> SnapreelResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(SnapreelError::validation(
            "synthesis 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| SnapreelError::validation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/synth/synthesizer.rs"]
mod tests;
