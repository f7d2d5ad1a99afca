use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::constants::{FULL_TURN_DEGREES, MIN_FULL_SPINS, WEDGE_TEXT_COLOR};
use crate::palette::{Color, Palette};
use crate::random::RandomSource;
use crate::storage::KeyValueStore;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    L,
    R,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::L => "L",
            Side::R => "R",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Limb {
    Hand,
    Foot,
}

/// The fixed (part, side) slots every color is crossed with.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum BodyPart {
    LeftHand,
    RightHand,
    LeftFoot,
    RightFoot,
}

/// Catalog order. Wedge positions depend on it, so never reorder.
pub const BODY_PARTS: [BodyPart; 4] = [
    BodyPart::LeftHand,
    BodyPart::RightHand,
    BodyPart::LeftFoot,
    BodyPart::RightFoot,
];

impl BodyPart {
    pub fn label(&self) -> &'static str {
        match self {
            BodyPart::LeftHand => "Left Hand",
            BodyPart::RightHand => "Right Hand",
            BodyPart::LeftFoot => "Left Foot",
            BodyPart::RightFoot => "Right Foot",
        }
    }

    pub fn side(&self) -> Side {
        match self {
            BodyPart::LeftHand | BodyPart::LeftFoot => Side::L,
            BodyPart::RightHand | BodyPart::RightFoot => Side::R,
        }
    }

    pub fn limb(&self) -> Limb {
        match self {
            BodyPart::LeftHand | BodyPart::RightHand => Limb::Hand,
            BodyPart::LeftFoot | BodyPart::RightFoot => Limb::Foot,
        }
    }
}

/// One slice of the wheel: a single (color, body part) pair.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Wedge {
    pub id: String,
    pub part: BodyPart,
    pub color_value: String,
    pub text_color: String,
}

impl Wedge {
    fn new(color: &Color, part: BodyPart) -> Self {
        Self {
            id: format!("{}-{}", color.id, part.label()),
            part,
            color_value: color.color_value.clone(),
            text_color: WEDGE_TEXT_COLOR.to_string(),
        }
    }

    pub fn label(&self) -> &'static str {
        self.part.label()
    }

    pub fn side(&self) -> Side {
        self.part.side()
    }
}

/// Palette-order major, catalog-order minor.
pub fn build_wedges(palette: &Palette) -> Vec<Wedge> {
    palette
        .colors()
        .iter()
        .flat_map(|color| BODY_PARTS.iter().map(move |part| Wedge::new(color, *part)))
        .collect()
}

/// Rotation to animate to: at least five full turns past `current`, plus a
/// random landing angle taken from `unit_draw` in `[0, 1)`.
pub fn spin_target(current: f64, unit_draw: f64) -> f64 {
    current + MIN_FULL_SPINS * FULL_TURN_DEGREES + unit_draw * FULL_TURN_DEGREES
}

/// Index of the wedge under the fixed top pointer once the wheel has been
/// rotated clockwise by `rotation` degrees. `None` when there are no wedges.
pub fn winning_index(rotation: f64, wedge_count: usize) -> Option<usize> {
    if wedge_count == 0 {
        return None;
    }
    let normalized = rotation.rem_euclid(FULL_TURN_DEGREES);
    let sector_angle = FULL_TURN_DEGREES / wedge_count as f64;
    let effective_angle = (FULL_TURN_DEGREES - normalized) % FULL_TURN_DEGREES;
    let index = (effective_angle / sector_angle).floor();
    Some((index.max(0.0) as usize).min(wedge_count - 1))
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct SpinState {
    pub cumulative_rotation_degrees: f64,
    pub is_spinning: bool,
    pub last_result_text: Option<String>,
}

/// Owns the palette, the derived wedges and the spin lifecycle.
/// `Idle -> Spinning` on [`request_spin`](Self::request_spin),
/// `Spinning -> Idle` only on [`complete_spin`](Self::complete_spin).
pub struct TwisterGame<S, R> {
    palette: Palette,
    wedges: Vec<Wedge>,
    spin: SpinState,
    store: S,
    rng: R,
}

impl<S: KeyValueStore, R: RandomSource> TwisterGame<S, R> {
    pub fn new(store: S, rng: R) -> Self {
        let palette = Palette::load(&store);
        Self::with_palette(palette, store, rng)
    }

    pub fn with_palette(palette: Palette, store: S, rng: R) -> Self {
        let wedges = build_wedges(&palette);
        Self {
            palette,
            wedges,
            spin: SpinState::default(),
            store,
            rng,
        }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn wedges(&self) -> &[Wedge] {
        &self.wedges
    }

    pub fn spin_state(&self) -> &SpinState {
        &self.spin
    }

    pub fn rotation(&self) -> f64 {
        self.spin.cumulative_rotation_degrees
    }

    pub fn is_spinning(&self) -> bool {
        self.spin.is_spinning
    }

    pub fn last_result(&self) -> Option<&str> {
        self.spin.last_result_text.as_deref()
    }

    pub fn can_spin(&self) -> bool {
        !self.spin.is_spinning && !self.wedges.is_empty()
    }

    /// Starts a spin and returns the new target rotation for the renderer.
    /// Ignored while a spin is in flight or when the wheel is empty.
    pub fn request_spin(&mut self) -> Option<f64> {
        if !self.can_spin() {
            return None;
        }
        let target = spin_target(self.spin.cumulative_rotation_degrees, self.rng.next_unit());

        self.spin.is_spinning = true;
        self.spin.last_result_text = None;
        self.spin.cumulative_rotation_degrees = target;

        debug!("Spin started, target rotation {:.2}", target);
        Some(target)
    }

    /// Handles the renderer's "animation finished" notification and returns
    /// the result text. Notifications while idle are ignored.
    pub fn complete_spin(&mut self) -> Option<&str> {
        if !self.spin.is_spinning {
            return None;
        }
        self.spin.is_spinning = false;

        let Some(index) = winning_index(self.spin.cumulative_rotation_degrees, self.wedges.len()) else {
            warn!("Spin finished with an empty wheel");
            return None;
        };
        let wedge = &self.wedges[index];
        let color_name = self.palette.name_for(&wedge.color_value).unwrap_or_default();
        let text = format!("{} on {}", wedge.label(), color_name);

        info!("Spin result: {}", text);
        self.spin.last_result_text = Some(text);
        self.last_result()
    }

    /// Appends a color and persists the palette. Returns the new color's id.
    pub fn add_color(&mut self, color_value: &str, display_name: &str, now_ms: u64) -> String {
        let id = self.palette.add(color_value, display_name, now_ms).id.clone();
        self.palette_changed();
        id
    }

    /// Removes a color and persists the palette. Unknown ids change nothing.
    pub fn remove_color(&mut self, id: &str) -> bool {
        if !self.palette.remove(id) {
            return false;
        }
        self.palette_changed();
        true
    }

    fn palette_changed(&mut self) {
        self.wedges = build_wedges(&self.palette);
        if let Err(e) = self.palette.save(&mut self.store) {
            warn!("Failed to save colors: {}", e);
        }
    }
}
