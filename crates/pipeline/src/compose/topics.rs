//! Canned general-knowledge answers.
//!
//! Topics are tried in a fixed order and the first match wins. The
//! types-of-honey topic is the only one that can draw on randomness, and
//! only through the RNG handed in by the caller.

use crate::corpus::{HoneyVariety, VarietyCategory};
use crate::keywords::{contains_phrase, words};
use rand::{Rng, RngCore};

const BEE_BIOLOGY: &str = "Honey bees (Apis mellifera) are social insects that produce honey through a complex process. \
Worker bees collect nectar from flowers using their long tongues and store it in their honey stomach. Back at the hive, \
they pass the nectar to house bees who add enzymes (invertase and glucose oxidase) that break complex sugars into simpler ones.

The nectar is deposited into hexagonal wax cells where workers fan their wings to evaporate water, bringing moisture down \
from roughly 70% to 18%. Once the honey reaches the right consistency, the bees cap the cells with wax to preserve it.

**Honey Production Facts:**
- A single bee visits 50-100 flowers per trip
- About 2 million flower visits go into 1 pound of honey
- A healthy hive can produce 30-100 pounds of honey per year
- Honey contains fructose, glucose, water, enzymes, minerals, and trace vitamins
- Different floral sources create distinct varieties (wildflower, clover, acacia, manuka, etc.)

**Honey Properties:**
- Natural preservative with antibacterial properties thanks to low water content and acidic pH
- Contains antioxidants that help reduce oxidative stress
- Keeps indefinitely when stored in sealed containers
- Crystallization is natural and can be reversed by gentle warming

**Uses:** Honey feeds the colony through winter and is harvested by beekeepers for food, medicine, skincare, and as a natural sweetener.";

const WHAT_IS_HONEY: &str = "Honey is a natural sweet substance produced by honey bees from the nectar of flowers. \
Bees collect nectar, transform it through enzymatic activity and evaporation, and store it in honeycombs. Honey is made up \
mostly of fructose and glucose, along with water, enzymes, minerals, and trace amounts of vitamins.

**Key Properties:**
- Natural preservative with antibacterial properties
- Contains antioxidants and enzymes
- Long shelf life when stored properly
- Flavor depends on the floral source

**Types of Honey:** Color, flavor, and texture vary with the flowers bees visit. Common types include wildflower, clover, \
acacia, manuka, and buckwheat honey.";

const BEEKEEPING: &str = "**Beekeeping Overview**

Beekeeping (apiculture) is the practice of maintaining bee colonies, usually in hives. Beekeepers manage hives to collect \
honey, beeswax, propolis, royal jelly, and pollen, and to provide pollination services.

**Essential Equipment:**
- Hive boxes with frames for the bees to build comb
- Protective suit and veil
- Smoker to calm bees during inspections
- Hive tool for prying frames apart
- Honey extractor for harvesting

**Basic Practices:**
- Regular inspections to check colony health
- Monitoring for diseases and pests
- Supplemental feeding when needed
- Managing swarms and preventing overcrowding
- Harvesting honey at the right time

**Benefits of Beekeeping:**
- Produces honey and other bee products
- Supports pollination of crops and gardens
- Works as a hobby or a commercial venture
- Helps maintain bee populations";

const LIFE_CYCLE: &str = "**Honey Bee Life Cycle**

A colony has three castes:

**Queen Bee:**
- Lives 2-5 years
- Lays up to 2,000 eggs per day
- The only fertile female in the colony
- Fed royal jelly throughout her life

**Worker Bees (Female):**
- Live about 6 weeks in summer, several months in winter
- Forage, nurse, clean, and build comb
- Move through different roles as they age
- Do not reproduce

**Drone Bees (Male):**
- Live about 8 weeks
- Exist to mate with a queen
- Die after mating or are expelled in fall
- Larger than workers but smaller than the queen

**Development Stages:**
1. Egg (3 days)
2. Larva (6 days for workers, 5 for drones, 5.5 for queens)
3. Pupa (12 days for workers, 14.5 for drones, 7.5 for queens)
4. Adult bee emerges";

const HEALTH_BENEFITS: &str = "**Health Benefits of Honey**

Honey has been used medicinally for thousands of years.

**Nutritional Value:**
- Natural source of energy (carbohydrates)
- Contains antioxidants that help reduce oxidative stress
- Provides small amounts of vitamins and minerals
- Contains enzymes that aid digestion

**Therapeutic Properties:**
- **Antibacterial:** Helps with wound healing and infection prevention
- **Cough Suppressant:** Soothes sore throats and reduces coughing
- **Digestive Health:** May help with digestive issues and gut health
- **Skin Care:** Used in natural skincare for its moisturizing properties

**Important Notes:**
- Never give honey to infants under 1 year (risk of botulism)
- People with diabetes should consume it in moderation
- Raw honey retains more enzymes than processed honey
- Quality and floral source affect nutritional content";

const HOW_MADE: &str = "**How Honey is Made**

**Step 1: Nectar Collection**
- Worker bees collect nectar with their long tongues
- They carry it in their \"honey stomach\", separate from the digestive stomach
- A bee visits 50-100 flowers per trip

**Step 2: Return to Hive**
- Foragers pass the nectar to house bees
- House bees add invertase, which breaks down complex sugars

**Step 3: Evaporation**
- Nectar is deposited into hexagonal wax cells
- Bees fan their wings to evaporate water (from ~70% down to ~18%)
- This can take several days

**Step 4: Ripening**
- More enzymes are added while moisture keeps dropping
- At the right consistency the bees cap the cell with wax

**Step 5: Harvesting**
- Beekeepers remove frames once cells are capped
- Honey is extracted by centrifugal force
- It is filtered to remove wax and debris
- Then bottled

**Fun Fact:** About 2 million flower visits go into 1 pound of honey!";

/// Topics in matching order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    BeeBiology,
    WhatIsHoney,
    Beekeeping,
    LifeCycle,
    HealthBenefits,
    TypesOfHoney,
    HowMade,
}

impl Topic {
    /// First topic matching the lowercased query, if any.
    pub fn detect(normalized: &str, varieties: &[HoneyVariety]) -> Option<Topic> {
        let has = |term: &str| normalized.contains(term);

        if has("honey bee") || (has("bee") && has("honey")) {
            Some(Topic::BeeBiology)
        } else if has("what is honey") || has("honey is") {
            Some(Topic::WhatIsHoney)
        } else if has("beekeeper") || has("beekeeping") {
            Some(Topic::Beekeeping)
        } else if has("bee") && (has("life") || has("cycle")) {
            Some(Topic::LifeCycle)
        } else if has("benefit") || has("health") {
            Some(Topic::HealthBenefits)
        } else if has("type")
            || has("variety")
            || has("kind")
            || named_variety(normalized, varieties).is_some()
        {
            Some(Topic::TypesOfHoney)
        } else if has("how") && has("make") {
            Some(Topic::HowMade)
        } else {
            None
        }
    }
}

/// First variety, in table order, named in the query as whole words.
pub fn named_variety<'a>(query: &str, varieties: &'a [HoneyVariety]) -> Option<&'a HoneyVariety> {
    let query_words = words(query);
    varieties
        .iter()
        .find(|variety| contains_phrase(&query_words, variety.name))
}

/// Best-matching canned answer for `query`.
pub fn general_answer(query: &str, varieties: &[HoneyVariety], rng: &mut dyn RngCore) -> String {
    let normalized = query.to_lowercase();

    match Topic::detect(&normalized, varieties) {
        Some(Topic::BeeBiology) => BEE_BIOLOGY.to_string(),
        Some(Topic::WhatIsHoney) => WHAT_IS_HONEY.to_string(),
        Some(Topic::Beekeeping) => BEEKEEPING.to_string(),
        Some(Topic::LifeCycle) => LIFE_CYCLE.to_string(),
        Some(Topic::HealthBenefits) => HEALTH_BENEFITS.to_string(),
        Some(Topic::TypesOfHoney) => types_answer(query, &normalized, varieties, rng),
        Some(Topic::HowMade) => HOW_MADE.to_string(),
        None => generic_answer(query),
    }
}

fn types_answer(
    query: &str,
    normalized: &str,
    varieties: &[HoneyVariety],
    rng: &mut dyn RngCore,
) -> String {
    if let Some(variety) = named_variety(normalized, varieties) {
        return format!(
            "**{name} Honey**\n\nCategory: {category} Honey\n\n{description}\n\n\
             **Note:** There are over 20 different types of honey available, each with unique \
             characteristics based on the floral source. Would you like to know about another specific type?",
            name = variety.name.trim_end_matches(" Honey"),
            category = variety.category.as_str(),
            description = variety.description,
        );
    }

    if varieties.is_empty() {
        return generic_answer(query);
    }

    let picked = &varieties[rng.gen_range(0..varieties.len())];
    let mut answer = format!(
        "**Honey Type: {}**\n\nCategory: {} Honey\n\n{}\n\n\
         **Important:** There are {}+ different types of honey available worldwide, each with unique characteristics:\n",
        picked.name,
        picked.category.as_str(),
        picked.description,
        varieties.len()
    );

    for category in VarietyCategory::ALL {
        let names: Vec<&str> = varieties
            .iter()
            .filter(|variety| variety.category == category)
            .map(|variety| variety.name)
            .collect();
        if !names.is_empty() {
            answer.push_str(&format!(
                "\n- **{} Honeys:** {}",
                category.as_str(),
                names.join(", ")
            ));
        }
    }

    answer.push_str(
        "\n\nEach type varies in color, flavor, texture, crystallization rate, and health properties. \
         Would you like to know about a specific type?",
    );
    answer
}

fn generic_answer(query: &str) -> String {
    format!(
        "**General Information About Honey and Beekeeping**\n\n\
         Based on your question about \"{}\", here's what I can share:\n\n\
         Honey is a natural product made by honey bees from flower nectar, enzymes, and evaporation. \
         Beekeeping is the practice of managing bee colonies to harvest honey and support pollination.\n\n\
         **Key Points:**\n\
         - Honey bees are essential pollinators for many crops\n\
         - A single hive can produce 30-100 pounds of honey per year\n\
         - Honey has natural preservative and antibacterial properties\n\
         - Beekeeping requires knowledge of bee biology and hive management\n\
         - Different floral sources create unique honey varieties\n\n\
         Ask about honey production, bee behavior, hive management, or honey varieties for more detail.",
        query
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Corpus;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn varieties() -> Vec<HoneyVariety> {
        Corpus::builtin().varieties
    }

    fn answer(query: &str) -> String {
        let mut rng = StdRng::seed_from_u64(7);
        general_answer(query, &varieties(), &mut rng)
    }

    #[test]
    fn test_topic_order() {
        let v = varieties();
        let detect = |q: &str| Topic::detect(&q.to_lowercase(), &v);

        assert_eq!(detect("how do honey bees live"), Some(Topic::BeeBiology));
        assert_eq!(detect("what is honey"), Some(Topic::WhatIsHoney));
        assert_eq!(detect("beekeeping for beginners"), Some(Topic::Beekeeping));
        assert_eq!(detect("bee life span"), Some(Topic::LifeCycle));
        assert_eq!(detect("health benefits of propolis"), Some(Topic::HealthBenefits));
        assert_eq!(detect("which kind should i buy"), Some(Topic::TypesOfHoney));
        assert_eq!(detect("how do they make it"), Some(Topic::HowMade));
        assert_eq!(detect("tell me something"), None);
    }

    #[test]
    fn test_named_variety_without_type_word() {
        let text = answer("tell me about manuka honey properties");
        assert!(text.starts_with("**Manuka Honey**"));
        assert!(text.contains("Category: Dark Honey"));
        assert!(text.contains("New Zealand"));
    }

    #[test]
    fn test_variety_inside_another_word_is_not_named() {
        let v = varieties();
        for query in ["tell me about honey dosage for kids", "strawberry and honey", "usage of propolis"] {
            assert!(named_variety(query, &v).is_none(), "{}", query);
        }

        let text = answer("tell me about honey dosage for kids");
        assert!(text.starts_with("**General Information About Honey and Beekeeping**"));
    }

    #[test]
    fn test_variety_followed_by_punctuation_is_named() {
        let text = answer("is manuka, really that special?");
        assert!(text.starts_with("**Manuka Honey**"));
    }

    #[test]
    fn test_specialty_variety_name_not_doubled() {
        let text = answer("creamed honey texture");
        assert!(text.starts_with("**Creamed Honey**"));
    }

    #[test]
    fn test_random_pick_is_reproducible_with_seed() {
        let v = varieties();
        let first = general_answer("types of sweeteners", &v, &mut StdRng::seed_from_u64(42));
        let second = general_answer("types of sweeteners", &v, &mut StdRng::seed_from_u64(42));

        assert_eq!(first, second);
        assert!(first.starts_with("**Honey Type: "));
        assert!(first.contains("- **Light Honeys:** Acacia, Clover, Orange Blossom, Tupelo, Sage, Alfalfa"));
        assert!(first.contains("- **Specialty Honeys:** Raw Honey, Creamed Honey, Comb Honey"));
        assert!(first.contains("18+ different types"));
    }

    #[test]
    fn test_types_without_varieties_uses_generic() {
        let mut rng = StdRng::seed_from_u64(1);
        let text = general_answer("types of nectar", &[], &mut rng);
        assert!(text.starts_with("**General Information About Honey and Beekeeping**"));
    }

    #[test]
    fn test_generic_fallback_quotes_query() {
        let text = answer("explain the origin of mead");
        assert!(text.contains("\"explain the origin of mead\""));
    }
}
