//! Order Generator
//!
//! Owns the roster, the entered names and the currently displayed batting
//! order. The three mutators are the only way the state changes:
//!
//! - `set_roster_size`: resize (and wipe) the name list, hide results
//! - `set_name`: edit one slot
//! - `generate_order`: shuffle positions and publish a new order
//!
//! Lifecycle: roster size set -> names collected -> order generated, and a
//! new roster size starts over.

pub mod shuffle;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{BattingError, Result};
use crate::MAX_ROSTER_SIZE;

pub use shuffle::{shuffle_positions, ChaChaDraw, RandDraw, ScriptedDraw, SlotDraw};

/// One row of a generated batting order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattingSlot {
    /// 1-based batting position
    pub position: u8,
    pub name: String,
}

/// Batting order form state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GeneratorSnapshot", into = "GeneratorSnapshot")]
pub struct OrderGenerator {
    names: Vec<String>,
    order: Vec<BattingSlot>,
    results_visible: bool,
}

impl OrderGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn roster_size(&self) -> usize {
        self.names.len()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Generated order, ascending by position. Empty while results are hidden.
    pub fn order(&self) -> &[BattingSlot] {
        &self.order
    }

    pub fn results_visible(&self) -> bool {
        self.results_visible
    }

    /// Resize the roster. Values outside `0..=11` are ignored and `false`
    /// is returned; the previous state is kept as is.
    ///
    /// Accepting a size always wipes every entered name, even when the
    /// size does not change, and hides the current order.
    pub fn set_roster_size(&mut self, requested: i64) -> bool {
        let size = match usize::try_from(requested) {
            Ok(size) if size <= MAX_ROSTER_SIZE => size,
            _ => {
                debug!("Ignoring roster size {}", requested);
                return false;
            }
        };

        self.names = vec![String::new(); size];
        self.order.clear();
        self.results_visible = false;
        debug!("Roster size set to {}", size);
        true
    }

    /// Replace the name at `index` (0-based). The value is stored verbatim.
    ///
    /// A visible order stays visible after the edit.
    pub fn set_name(&mut self, index: usize, value: impl Into<String>) -> Result<()> {
        let size = self.roster_size();
        match self.names.get_mut(index) {
            Some(slot) => {
                *slot = value.into();
                Ok(())
            }
            None => Err(BattingError::SlotOutOfRange {
                index,
                roster_size: size,
            }),
        }
    }

    /// Whether the generate action is enabled
    pub fn can_generate(&self) -> bool {
        self.check_ready().is_ok()
    }

    fn check_ready(&self) -> Result<()> {
        if self.names.is_empty() {
            return Err(BattingError::EmptyRoster);
        }
        match self.names.iter().position(|name| name.trim().is_empty()) {
            Some(index) => Err(BattingError::BlankName { slot: index + 1 }),
            None => Ok(()),
        }
    }

    /// Assign a random batting position to every name.
    ///
    /// Fails without touching any state if the roster is empty or any name
    /// is blank after trimming. On success the previous order is replaced
    /// wholesale and results become visible.
    pub fn generate_order(&mut self, draw: &mut impl SlotDraw) -> Result<&[BattingSlot]> {
        self.check_ready()?;

        let positions = shuffle_positions(self.names.len(), draw);
        let mut order: Vec<BattingSlot> = self
            .names
            .iter()
            .zip(positions)
            .map(|(name, position)| BattingSlot {
                position,
                name: name.clone(),
            })
            .collect();
        order.sort_by_key(|slot| slot.position);

        info!("Generated batting order for {} players", order.len());
        self.order = order;
        self.results_visible = true;
        Ok(&self.order)
    }

    pub fn generate_order_with_rng<R: Rng>(&mut self, rng: R) -> Result<&[BattingSlot]> {
        self.generate_order(&mut RandDraw::new(rng))
    }
}

/// Wire form of [`OrderGenerator`]; validated on the way in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorSnapshot {
    pub roster_size: usize,
    pub names: Vec<String>,
    #[serde(default)]
    pub order: Vec<BattingSlot>,
    #[serde(default)]
    pub results_visible: bool,
}

impl From<OrderGenerator> for GeneratorSnapshot {
    fn from(generator: OrderGenerator) -> Self {
        Self {
            roster_size: generator.names.len(),
            names: generator.names,
            order: generator.order,
            results_visible: generator.results_visible,
        }
    }
}

fn invalid(message: &str) -> BattingError {
    BattingError::InvalidSnapshot(message.to_string())
}

fn positions_in_order(order: &[BattingSlot]) -> bool {
    order
        .iter()
        .enumerate()
        .all(|(i, slot)| slot.position as usize == i + 1)
}

impl TryFrom<GeneratorSnapshot> for OrderGenerator {
    type Error = BattingError;

    /// Only positions are checked against the roster. Names in the order
    /// may differ from the current names because slots can be edited after
    /// generation.
    fn try_from(snapshot: GeneratorSnapshot) -> Result<Self> {
        let size = snapshot.roster_size;
        let count = snapshot.names.len();
        if size > MAX_ROSTER_SIZE {
            let message = format!("roster of {} exceeds {}", size, MAX_ROSTER_SIZE);
            return Err(BattingError::InvalidSnapshot(message));
        }
        if count != size {
            let message = format!("{} names for roster of {}", count, size);
            return Err(BattingError::InvalidSnapshot(message));
        }
        if snapshot.results_visible == snapshot.order.is_empty() {
            return Err(invalid("results_visible does not match order"));
        }
        if !snapshot.order.is_empty() {
            let sized = snapshot.order.len() == size;
            if !sized || !positions_in_order(&snapshot.order) {
                return Err(invalid("positions must be 1..=roster_size, ascending"));
            }
        }

        Ok(Self {
            names: snapshot.names,
            order: snapshot.order,
            results_visible: snapshot.results_visible,
        })
    }
}
