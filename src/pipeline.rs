use crate::assemble::sequence::{SceneSequence, SceneSequenceAssembler};
use crate::catalog::entities::EntityCatalog;
use crate::context::resolver::{PlayContextResolver, SelectedEvent};
use crate::foundation::error::SnapreelResult;
use crate::selection::Selection;
use crate::source::TrackingSource;
use crate::synth::synthesizer::{FrameSynthesizer, SynthOpts};
use crate::tables::lookup::LookupTables;

/// Load, resolve and synthesize one play into a [`SceneSequence`].
///
/// Pipeline:
/// 1. find the game's week and load that week's tracking rows
/// 2. keep the selected play's rows and resolve entity identities ([`EntityCatalog`])
/// 3. join with the play record and derive the [`crate::EventContext`]
/// 4. build one scene per time sample ([`FrameSynthesizer`])
/// 5. order scenes and reduce the line-set reference ([`SceneSequenceAssembler`])
///
/// Fails with a not-found error when the pair matches no event; data-quality gaps are logged
/// and absorbed.
#[tracing::instrument(skip(source, tables, opts), fields(game = %selection.game_id, play = %selection.play_id))]
pub fn animate_play(
    source: &dyn TrackingSource,
    selection: Selection,
    tables: &LookupTables,
    opts: &SynthOpts,
) -> SnapreelResult<SceneSequence> {
    tables.validate()?;

    let week = selection.week_in(&source.games()?)?;
    let plays = source.plays()?;
    let catalog = EntityCatalog::from_roster(&source.roster()?);

    let rows = source
        .week_samples(week)?
        .into_iter()
        .filter(|r| r.game_id == selection.game_id && r.play_id == selection.play_id);
    let (samples, report) = catalog.enrich(rows);
    tracing::debug!(week, kept = report.kept, dropped = report.dropped, "enriched samples");

    let event = SelectedEvent::select(selection, &plays, samples)?;
    let ctx = PlayContextResolver::resolve(&event)?;

    let synth = FrameSynthesizer::new(&ctx, &event.samples, tables);
    let outputs = synth.synthesize_all(opts)?;
    Ok(SceneSequenceAssembler::assemble(ctx, outputs))
}

#[cfg(test)]
#[path = "../tests/unit/pipeline/pipeline.rs"]
mod tests;
