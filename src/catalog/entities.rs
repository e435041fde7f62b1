use std::collections::{BTreeSet, HashMap};

use crate::foundation::core::{
    BALL_ROLE, EntityId, EntityKind, GameId, PlayId, Point, TimeSampleId,
};
use crate::source::tables::{RosterEntry, TrackingRow};

/// A tracking row after identity resolution.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TrackedSample {
    /// Resolved identity; the ball is [`EntityKind::Ball`].
    pub entity: EntityKind,
    /// Game the sample belongs to.
    pub game_id: GameId,
    /// Play the sample belongs to.
    pub play_id: PlayId,
    /// Time sample.
    pub sample: TimeSampleId,
    /// Field position in yards.
    pub position: Point,
    /// Speed in yards per second.
    pub speed: f64,
    /// Club code (`football` for the ball).
    pub team: String,
    /// Role, e.g. `QB` or `football`.
    pub role: String,
    /// Name shown on hover.
    pub display_name: String,
    /// Normalized event tag, if any.
    pub event_tag: Option<String>,
    /// Direction reported by the tracking row, if any.
    pub play_direction: Option<String>,
}

/// Roster metadata for one entity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Role used for grouping.
    pub role: String,
    /// Player name.
    pub display_name: String,
}

/// Outcome counters of [`EntityCatalog::enrich`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EnrichReport {
    /// Rows turned into samples.
    pub kept: usize,
    /// Rows dropped because their entity is not in the roster.
    pub dropped: usize,
    /// Distinct ids that failed to resolve.
    pub unmatched_ids: BTreeSet<EntityId>,
}

/// Identity/role lookup for every tracked entity, the ball included.
#[derive(Clone, Debug, Default)]
pub struct EntityCatalog {
    entries: HashMap<EntityId, CatalogEntry>,
}

impl EntityCatalog {
    /// Index the roster by entity id; roles are trimmed.
    pub fn from_roster(roster: &[RosterEntry]) -> Self {
        let entries = roster
            .iter()
            .map(|r| {
                (
                    r.nfl_id,
                    CatalogEntry {
                        role: r.position.trim().to_string(),
                        display_name: r.display_name.clone(),
                    },
                )
            })
            .collect();
        Self { entries }
    }

    /// Number of rostered entities.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the roster was empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Identity of a raw row. Rows without an id, or flagged with the ball marker, are the ball.
    pub fn kind_of(row: &TrackingRow) -> EntityKind {
        match row.nfl_id {
            Some(id) if row.club != BALL_ROLE => EntityKind::Player(id),
            _ => EntityKind::Ball,
        }
    }

    /// Metadata for `kind`; the ball always resolves.
    pub fn lookup(&self, kind: EntityKind) -> Option<CatalogEntry> {
        match kind {
            EntityKind::Ball => Some(CatalogEntry {
                role: BALL_ROLE.to_string(),
                display_name: BALL_ROLE.to_string(),
            }),
            EntityKind::Player(id) => self.entries.get(&id).cloned(),
        }
    }

    /// Attach role and name to every row; rows that cannot be matched are dropped.
    ///
    /// Row order is preserved.
    #[tracing::instrument(skip_all, fields(catalog = self.entries.len()))]
    pub fn enrich(
        &self,
        rows: impl IntoIterator<Item = TrackingRow>,
    ) -> (Vec<TrackedSample>, EnrichReport) {
        let mut report = EnrichReport::default();
        let mut out = Vec::new();

        for row in rows {
            let entity = Self::kind_of(&row);
            let Some(entry) = self.lookup(entity) else {
                report.dropped += 1;
                if let EntityKind::Player(id) = entity {
                    report.unmatched_ids.insert(id);
                }
                continue;
            };
            report.kept += 1;
            // Roster name first; the feed's own name covers blank roster entries.
            let display_name = match row.display_name {
                Some(name) if entry.display_name.trim().is_empty() && !name.trim().is_empty() => {
                    name
                }
                _ => entry.display_name,
            };
            out.push(TrackedSample {
                entity,
                game_id: row.game_id,
                play_id: row.play_id,
                sample: row.frame_id,
                position: Point::new(row.x, row.y),
                speed: row.s,
                team: row.club,
                role: entry.role,
                display_name,
                event_tag: normalize_tag(row.event.as_deref()),
                play_direction: normalize_tag(row.play_direction.as_deref()),
            });
        }

        if report.dropped > 0 {
            tracing::warn!(
                dropped = report.dropped,
                ids = ?report.unmatched_ids,
                "tracking rows without roster entry were dropped"
            );
        }
        (out, report)
    }
}

fn normalize_tag(raw: Option<&str>) -> Option<String> {
    let s = raw?.trim();
    if s.is_empty() || s.eq_ignore_ascii_case("na") {
        None
    } else {
        Some(s.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/entities.rs"]
mod tests;
