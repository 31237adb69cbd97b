//! Nearest-name search by squared RGB distance.
//!
//! A linear scan over the reverse map under the registry read lock. The
//! registry holds a few hundred entries at most, so there is no spatial
//! index.

use std::collections::BTreeMap;

use crate::color::Color;
use crate::registry::ColorRegistry;

/// Name of the fallback candidate every search starts from.
const FALLBACK_NAME: &str = "black";

/// Closest name to `target` among `by_color`.
///
/// The running best starts at opaque black named "black", so this always
/// returns something, even for an empty map. Equal distances resolve to
/// the lexicographically smaller name, zero included: several entries can
/// share the target's RGB with different alpha, and the fallback itself
/// ties at zero for a black target.
pub(crate) fn nearest_in(by_color: &BTreeMap<Color, String>, target: Color) -> String {
    if let Some(name) = by_color.get(&target) {
        return name.clone();
    }

    let mut best_dist = target.rgb_distance_sq(Color::BLACK);
    let mut best_name = FALLBACK_NAME;

    for (color, name) in by_color {
        let dist = target.rgb_distance_sq(*color);
        if dist < best_dist || (dist == best_dist && name.as_str() < best_name) {
            best_dist = dist;
            best_name = name.as_str();
        }
    }

    tracing::trace!(target_color = %target, name = best_name, distance = best_dist, "Nearest color");
    best_name.to_string()
}

impl ColorRegistry {
    /// The closest known name to `color`. Never fails.
    ///
    /// An exact reverse-map hit (alpha included) is returned as is;
    /// otherwise alpha is ignored and the name with the smallest squared
    /// RGB distance wins.
    pub fn nearest(&self, color: Color) -> String {
        self.read_with(|maps| nearest_in(&maps.by_color, color))
    }
}
