//! Position constraints for cloth.
//!
//! Pinned samples are forced to their target position after every
//! integration, whatever forces act on them.

use hashbrown::HashMap;
use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::cloth::ClothState;
use crate::error::Result;

/// Pins and the ground reference height.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClothConstraints {
    #[cfg_attr(feature = "serde", serde(with = "pin_list"))]
    fixed: HashMap<(usize, usize), Point3<f64>>,
    ground_z: f64,
}

impl Default for ClothConstraints {
    fn default() -> Self {
        Self::new()
    }
}

impl ClothConstraints {
    /// No pins, ground at `z = -1`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fixed: HashMap::new(),
            ground_z: -1.0,
        }
    }

    /// Set the ground reference height.
    #[must_use]
    pub const fn with_ground_z(mut self, ground_z: f64) -> Self {
        self.ground_z = ground_z;
        self
    }

    /// Ground reference height.
    ///
    /// Stored for collision extensions; [`apply_constraints`](crate::apply_constraints)
    /// does not correct positions against it.
    #[must_use]
    pub const fn ground_z(&self) -> f64 {
        self.ground_z
    }

    /// Pin sample `(ku, kv)` to `position`, replacing any earlier pin.
    pub fn fix_position(&mut self, ku: usize, kv: usize, position: Point3<f64>) {
        self.fixed.insert((ku, kv), position);
    }

    /// Pin sample `(ku, kv)` where it currently is.
    ///
    /// # Errors
    ///
    /// Returns [`DeformableError::IndexOutOfBounds`](crate::DeformableError::IndexOutOfBounds)
    /// if `(ku, kv)` is not on the cloth.
    pub fn pin_current(&mut self, state: &ClothState, ku: usize, kv: usize) -> Result<()> {
        state.check_index(ku, kv)?;
        self.fix_position(ku, kv, state.position[(ku, kv)]);
        Ok(())
    }

    /// Remove the pin on `(ku, kv)`, returning its target.
    pub fn release(&mut self, ku: usize, kv: usize) -> Option<Point3<f64>> {
        self.fixed.remove(&(ku, kv))
    }

    /// Whether `(ku, kv)` is pinned.
    #[must_use]
    pub fn is_fixed(&self, ku: usize, kv: usize) -> bool {
        self.fixed.contains_key(&(ku, kv))
    }

    /// Target of the pin on `(ku, kv)`.
    #[must_use]
    pub fn target(&self, ku: usize, kv: usize) -> Option<&Point3<f64>> {
        self.fixed.get(&(ku, kv))
    }

    /// Number of pins.
    #[must_use]
    pub fn fixed_count(&self) -> usize {
        self.fixed.len()
    }

    /// Iterate over `((ku, kv), target)` pins in arbitrary order.
    pub fn iter_fixed(&self) -> impl Iterator<Item = ((usize, usize), &Point3<f64>)> {
        self.fixed.iter().map(|(&k, p)| (k, p))
    }

    /// Remove all pins.
    pub fn clear(&mut self) {
        self.fixed.clear();
    }
}

/// Pins as a list of `((ku, kv), target)`, sorted by grid index.
///
/// Tuple keys are not valid map keys in formats such as JSON.
#[cfg(feature = "serde")]
mod pin_list {
    use hashbrown::HashMap;
    use nalgebra::Point3;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    type Pin = ((usize, usize), Point3<f64>);

    pub fn serialize<S: Serializer>(
        fixed: &HashMap<(usize, usize), Point3<f64>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let mut pins: Vec<Pin> = fixed.iter().map(|(&k, &p)| (k, p)).collect();
        pins.sort_unstable_by_key(|&(k, _)| k);
        pins.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<HashMap<(usize, usize), Point3<f64>>, D::Error> {
        let pins = Vec::<Pin>::deserialize(deserializer)?;
        Ok(pins.into_iter().collect())
    }
}
