use crate::foundation::core::{EntityKind, Point, TimeSampleId};

/// Units appended to speeds in hover text.
pub const SPEED_UNITS: &str = "yd/sec";

/// Everything needed to draw one time sample.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Scene {
    /// Sample this scene shows; also its playback label.
    pub sample: TimeSampleId,
    /// Layers in painter's order: field annotations first, then one per entity group.
    pub layers: Vec<DrawLayer>,
}

impl Scene {
    /// Group layers in declared group order.
    pub fn group_layers(&self) -> impl Iterator<Item = &GroupLayer> {
        self.layers.iter().filter_map(|l| match l {
            DrawLayer::Group(g) => Some(g),
            _ => None,
        })
    }

    /// Number of entities drawn across all groups.
    pub fn entity_count(&self) -> usize {
        self.group_layers().map(|g| g.points.len()).sum()
    }

    /// The group layer called `name`, if declared.
    pub fn group(&self, name: &str) -> Option<&GroupLayer> {
        self.group_layers().find(|g| g.name == name)
    }
}

/// One drawable layer.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum DrawLayer {
    /// Text labels painted on the field.
    YardNumbers(TextLayer),
    /// A vertical line across the field.
    Marker(MarkerLayer),
    /// Entities of one group.
    Group(GroupLayer),
}

/// Static text labels.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextLayer {
    /// Labels with their anchor points.
    pub labels: Vec<FieldLabel>,
}

/// A text label anchored in field coordinates.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FieldLabel {
    /// Anchor point.
    pub position: Point,
    /// Label text.
    pub text: String,
}

/// Which play marker a [`MarkerLayer`] draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerKind {
    /// Line of scrimmage.
    Scrimmage,
    /// First-down line.
    FirstDown,
}

/// Vertical marker line at `x`, spanning `y_from..=y_to`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MarkerLayer {
    /// Marker kind.
    pub kind: MarkerKind,
    /// Field x of the line.
    pub x: f64,
    /// Lower y end.
    pub y_from: f64,
    /// Upper y end.
    pub y_to: f64,
}

/// Entities of one group at one sample.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GroupLayer {
    /// Group name, used as legend entry and toggle key.
    pub name: String,
    /// Entities in source order.
    pub points: Vec<EntityPoint>,
}

/// One entity drawn as a point.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EntityPoint {
    /// Entity identity.
    pub entity: EntityKind,
    /// Field position.
    pub position: Point,
    /// Marker color, `#RRGGBB`.
    pub color: String,
    /// Hover payload.
    pub hover: HoverInfo,
}

/// Data shown when hovering an entity.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HoverInfo {
    /// Display id (`0` for the ball).
    pub id: u64,
    /// Role.
    pub role: String,
    /// Display name.
    pub name: String,
    /// Speed in [`SPEED_UNITS`].
    pub speed: f64,
}

impl HoverInfo {
    /// Hover lines, unterminated.
    pub fn lines(&self) -> [String; 3] {
        [
            format!("id: {}, pos: {}", self.id, self.role),
            format!("name: {}", self.name),
            format!("spd: {} {SPEED_UNITS}", self.speed),
        ]
    }

    /// Hover text as HTML, each line followed by `<br>`.
    pub fn html(&self) -> String {
        self.lines().iter().map(|l| format!("{l}<br>")).collect()
    }
}
