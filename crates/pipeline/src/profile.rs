//! Honey lot profiles attached to answers.
//!
//! A profile is matched by keyword against the query. When none matches,
//! one is drawn from the caller's RNG, so seeded runs stay reproducible.

use rand::{Rng, RngCore};
use serde::Serialize;

/// A tracked honey lot with its trading notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoneyProfile {
    pub name: &'static str,
    pub region: &'static str,
    /// Matched as substrings of the lowercased query
    #[serde(skip)]
    pub keywords: &'static [&'static str],
    pub price_per_kg: &'static str,
    pub condition: &'static str,
    pub atmosphere: &'static str,
    pub marketing_tip: &'static str,
    pub inventory: &'static str,
}

impl HoneyProfile {
    fn matches(&self, normalized: &str) -> bool {
        self.keywords.iter().any(|keyword| normalized.contains(keyword))
    }
}

/// First profile, in table order, whose keywords appear in `query`.
pub fn matching_profile<'a>(query: &str, profiles: &'a [HoneyProfile]) -> Option<&'a HoneyProfile> {
    let normalized = query.to_lowercase();
    profiles.iter().find(|profile| profile.matches(&normalized))
}

/// Profile for `query`: a keyword match, else a draw from `rng`.
///
/// `None` only when `profiles` is empty.
pub fn pick_profile(
    query: &str,
    profiles: &[HoneyProfile],
    rng: &mut dyn RngCore,
) -> Option<HoneyProfile> {
    if let Some(profile) = matching_profile(query, profiles) {
        return Some(profile.clone());
    }
    if profiles.is_empty() {
        return None;
    }

    let picked = &profiles[rng.gen_range(0..profiles.len())];
    tracing::debug!(profile = picked.name, "No profile keyword matched; drew one at random");
    Some(picked.clone())
}

pub(crate) fn builtin_profiles() -> Vec<HoneyProfile> {
    vec![
        HoneyProfile {
            name: "Royal Amber",
            region: "Western Ghats • India",
            keywords: &["amber", "western", "ghats", "floral", "royal"],
            price_per_kg: "₹520 / kg",
            condition: "Moisture 16.8%, pollen-rich, premium floral blend.",
            atmosphere: "Harvest window stable for 2 weeks, humidity 62%.",
            marketing_tip: "Position as limited micro-lot, bundle with artisanal teas.",
            inventory: "2.1T in cooperative cold storage, batch tested 18 Nov.",
        },
        HoneyProfile {
            name: "Golden Valley",
            region: "Sonoma • USA",
            keywords: &["golden", "valley", "california", "sonoma"],
            price_per_kg: "$11.50 / kg",
            condition: "Moisture 17.5%, tasting notes of citrus peel and pine.",
            atmosphere: "Dry front keeps nectar yield high; bee stress minimal.",
            marketing_tip: "Target farm-to-table cafes, highlight sustainable apiaries.",
            inventory: "4.8T available FOB Oakland, QC cleared 20 Nov.",
        },
        HoneyProfile {
            name: "Desert Bloom",
            region: "Rajasthan • India",
            keywords: &["desert", "rajasthan", "acacia", "bloom"],
            price_per_kg: "₹410 / kg",
            condition: "Low crystallization, acacia-forward profile, light hue.",
            atmosphere: "Warm nights boost nectar flow; monitor dust ingress.",
            marketing_tip: "Bundle with ayurvedic wellness kits, emphasize low GI.",
            inventory: "3.3T raw drums, filtration pending, ready in 48h.",
        },
        HoneyProfile {
            name: "Nordic Heather",
            region: "Skåne • Sweden",
            keywords: &["heather", "nordic", "sweden", "skane"],
            price_per_kg: "€18.20 / kg",
            condition: "Thixotropic texture, high antioxidant payload.",
            atmosphere: "Cool, clean air mass; apiaries operating at 82% capacity.",
            marketing_tip: "Premium gifting SKU, pair with rye crackers and cheese.",
            inventory: "1.2T, ships with full EU organic dossier.",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_keyword_match_wins_over_rng() {
        let profiles = builtin_profiles();
        let mut rng = StdRng::seed_from_u64(9);

        let picked = pick_profile("Rajasthan ACACIA outlook", &profiles, &mut rng).unwrap();
        assert_eq!(picked.name, "Desert Bloom");

        let picked = pick_profile("marketing hook for nordic heather drums", &profiles, &mut rng).unwrap();
        assert_eq!(picked.name, "Nordic Heather");
    }

    #[test]
    fn test_table_order_breaks_ties() {
        // "floral" (Royal Amber) and "sonoma" (Golden Valley) both match
        let profiles = builtin_profiles();
        let picked = matching_profile("sonoma floral blend", &profiles).unwrap();
        assert_eq!(picked.name, "Royal Amber");
    }

    #[test]
    fn test_unmatched_query_draw_is_seeded() {
        let profiles = builtin_profiles();
        assert!(matching_profile("honey prices for delhi retail", &profiles).is_none());

        let first = pick_profile("honey prices for delhi retail", &profiles, &mut StdRng::seed_from_u64(4));
        let second = pick_profile("honey prices for delhi retail", &profiles, &mut StdRng::seed_from_u64(4));
        assert!(first.is_some());
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_table_yields_none() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(pick_profile("acacia", &[], &mut rng).is_none());
    }

    #[test]
    fn test_keywords_not_serialized() {
        let json = serde_json::to_value(&builtin_profiles()[0]).unwrap();
        assert!(json.get("keywords").is_none());
        assert_eq!(json["pricePerKg"], "₹520 / kg");
    }
}
