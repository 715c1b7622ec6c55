use crate::chart::angles::{angular_distance, round2};
use crate::chart::types::{Aspect, AspectKind, BodyPosition};

/// Maximum deviation from an exact aspect angle, in degrees.
pub const ORB_TOLERANCE_DEG: f64 = 6.0;

/// Find every aspect between distinct placed bodies.
///
/// Pairs are visited in chart order (i, then j > i) and each pair is tested
/// against [`AspectKind::TABLE`] in order, so output is deterministic. A pair
/// may match more than one aspect; nothing is deduplicated.
pub fn find_aspects(positions: &[BodyPosition]) -> Vec<Aspect> {
    let placed: Vec<(&BodyPosition, f64)> = positions
        .iter()
        .filter(|p| p.is_placed())
        .filter_map(|p| p.longitude.map(|lon| (p, lon)))
        .collect();

    let mut aspects = Vec::new();
    for (i, &(a, lon_a)) in placed.iter().enumerate() {
        for &(b, lon_b) in &placed[i + 1..] {
            if a.key == b.key {
                continue;
            }
            let diff = angular_distance(lon_a, lon_b);
            for kind in AspectKind::TABLE {
                let deviation = (diff - kind.angle()).abs();
                if deviation <= ORB_TOLERANCE_DEG {
                    aspects.push(Aspect {
                        between: format!("{} & {}", a.name, b.name),
                        body_a: a.key,
                        body_b: b.key,
                        aspect: kind,
                        orb: round2(deviation),
                    });
                }
            }
        }
    }

    aspects
}
