use std::collections::{BTreeMap, HashMap, HashSet};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::core::{BALL_ROLE, EntityKind};
use crate::foundation::error::{SnapreelError, SnapreelResult};

/// A named set of roles shown and toggled together.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EntityGroup {
    /// Legend name.
    pub name: String,
    /// Roles belonging to the group.
    pub roles: Vec<String>,
}

impl EntityGroup {
    /// Group `name` holding `roles`.
    pub fn new(name: &str, roles: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            roles: roles.iter().map(|r| r.to_string()).collect(),
        }
    }
}

/// Read-only grouping and coloring policy handed to the synthesizer.
///
/// Serializable so it can be overridden from a JSON file; fields left out fall back to the
/// built-in tables.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LookupTables {
    /// Groups in layer order.
    pub groups: Vec<EntityGroup>,
    /// Club code to `#RRGGBB`.
    pub team_colors: BTreeMap<String, String>,
    /// Color of the ball.
    pub ball_color: String,
    /// Color for clubs missing from `team_colors`.
    pub fallback_color: String,
}

impl Default for LookupTables {
    fn default() -> Self {
        let team_colors = [
            ("ARI", "#97233F"),
            ("ATL", "#A71930"),
            ("BAL", "#241773"),
            ("BUF", "#00338D"),
            ("CAR", "#0085CA"),
            ("CHI", "#C83803"),
            ("CIN", "#FB4F14"),
            ("CLE", "#311D00"),
            ("DAL", "#003594"),
            ("DEN", "#FB4F14"),
            ("DET", "#0076B6"),
            ("GB", "#203731"),
            ("HOU", "#03202F"),
            ("IND", "#002C5F"),
            ("JAX", "#9F792C"),
            ("KC", "#E31837"),
            ("LA", "#FFA300"),
            ("LAC", "#0080C6"),
            ("LV", "#000000"),
            ("MIA", "#008E97"),
            ("MIN", "#4F2683"),
            ("NE", "#002244"),
            ("NO", "#D3BC8D"),
            ("NYG", "#0B2265"),
            ("NYJ", "#125740"),
            ("PHI", "#004C54"),
            ("PIT", "#FFB612"),
            ("SEA", "#69BE28"),
            ("SF", "#AA0000"),
            ("TB", "#D50A0A"),
            ("TEN", "#4B92DB"),
            ("WAS", "#5A1414"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            groups: vec![
                EntityGroup::new("Backs & Receivers", &["QB", "WR", "RB", "FB", "TE"]),
                EntityGroup::new("Offensive Line", &["C", "G", "T"]),
                EntityGroup::new(
                    "Defense",
                    &[
                        "NT", "CB", "DT", "DE", "DB", "LB", "MLB", "ILB", "OLB", "SS", "FS",
                    ],
                ),
                EntityGroup::new("Ball", &[BALL_ROLE]),
            ],
            team_colors,
            ball_color: "#CBB67C".to_string(),
            fallback_color: "#808080".to_string(),
        }
    }
}

impl LookupTables {
    /// Parse tables from JSON.
    pub fn from_reader<R: std::io::Read>(r: R) -> SnapreelResult<Self> {
        let tables: Self = serde_json::from_reader(r)
            .map_err(|e| SnapreelError::validation(format!("parse lookup tables JSON: {e}")))?;
        tables.validate()?;
        Ok(tables)
    }

    /// Parse tables from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> SnapreelResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            SnapreelError::validation(format!("open lookup tables '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check names are unique, each role belongs to one group, and colors are hex.
    pub fn validate(&self) -> SnapreelResult<()> {
        if self.groups.is_empty() {
            return Err(SnapreelError::validation("at least one entity group is required"));
        }
        let mut names = HashSet::new();
        let mut owners = HashMap::new();
        for group in &self.groups {
            if group.name.trim().is_empty() {
                return Err(SnapreelError::validation("group name must be non-empty"));
            }
            if !names.insert(group.name.as_str()) {
                return Err(SnapreelError::validation(format!(
                    "duplicate group name {:?}",
                    group.name
                )));
            }
            for role in &group.roles {
                if let Some(prev) = owners.insert(role.as_str(), group.name.as_str()) {
                    return Err(SnapreelError::validation(format!(
                        "role {role:?} is in both {prev:?} and {:?}",
                        group.name
                    )));
                }
            }
        }
        validate_hex(&self.ball_color, "ball_color")?;
        validate_hex(&self.fallback_color, "fallback_color")?;
        for (team, color) in &self.team_colors {
            validate_hex(color, &format!("team color for {team}"))?;
        }
        Ok(())
    }

    /// Index into [`Self::groups`] of the group that holds `role`.
    pub fn group_of(&self, role: &str) -> Option<usize> {
        self.groups
            .iter()
            .position(|g| g.roles.iter().any(|r| r == role))
    }

    /// Marker color of an entity; `None` when its club has no entry.
    pub fn color_for(&self, entity: EntityKind, team: &str) -> Option<&str> {
        if entity.is_ball() {
            return Some(self.ball_color.as_str());
        }
        self.team_colors.get(team).map(String::as_str)
    }
}

fn validate_hex(color: &str, field: &str) -> SnapreelResult<()> {
    let ok = color
        .strip_prefix('#')
        .is_some_and(|hex| hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()));
    if ok {
        Ok(())
    } else {
        Err(SnapreelError::validation(format!(
            "{field} must be #RRGGBB, got {color:?}"
        )))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tables/lookup.rs"]
mod tests;
