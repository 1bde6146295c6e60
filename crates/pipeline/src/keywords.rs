//! Fixed keyword tables and substring matching helpers.
//!
//! All matching is case-insensitive substring matching against the
//! lowercased query, so `"beekeepers"` matches `"beekeeper"` and
//! `"framework"` matches `"frame"`.

/// Terms whose presence alone puts a query in scope.
pub const DOMAIN_KEYWORDS: &[&str] = &[
    "honey",
    "bee",
    "bees",
    "beekeeper",
    "beekeeping",
    "apiary",
    "apiaries",
    "apiculture",
    "nectar",
    "pollination",
    "comb",
    "hive",
    "hives",
    "harvest",
    "apis",
    "mellifera",
    "wax",
    "beehive",
    "queen bee",
    "worker bee",
    "drone",
    "honeycomb",
    "propolis",
    "royal jelly",
    "pollen",
    "swarm",
    "colony",
    "frame",
    "smoker",
    "extractor",
];

/// Weaker signals that need corroboration.
pub const CONTEXTUAL_KEYWORDS: &[&str] = &[
    "sweet",
    "golden",
    "amber",
    "syrup",
    "natural sweetener",
    "apiary",
    "pollinator",
    "nectar",
    "floral",
    "wildflower",
    "manuka",
    "acacia",
    "clover",
    "buckwheat",
    "crystallization",
    "moisture content",
    "hmf",
    "diastase",
    "pollen",
    "wax",
    "beekeeping",
    "hive management",
    "colony",
    "queen",
    "worker",
    "drone",
    "harvest",
    "extraction",
    "comb",
    "propolis",
    "royal jelly",
    "apiculture",
];

/// Contextual terms strong enough to stand alone.
pub const STRONG_INDICATORS: &[&str] = &[
    "beekeeping",
    "apiary",
    "hive",
    "pollinator",
    "nectar",
    "manuka",
    "acacia",
];

/// Generic question phrasing.
pub const QUESTION_PATTERNS: &[&str] = &[
    "what is",
    "how to",
    "tell me about",
    "explain",
    "benefits of",
    "types of",
    "properties of",
    "health benefits",
    "nutritional value",
];

/// Terms signalling that the user wants research papers.
pub const RESEARCH_KEYWORDS: &[&str] = &[
    "paper",
    "papers",
    "study",
    "studies",
    "research",
    "report",
    "whitepaper",
    "pdf",
];

/// Commerce terms that route a query to the market narrative.
pub const MARKET_KEYWORDS: &[&str] = &[
    "price",
    "pricing",
    "cost",
    "market",
    "sell",
    "buy",
    "export",
    "import",
    "wholesale",
    "retail",
    "demand",
    "supply",
    "trend",
    "forecast",
    "inventory",
    "logistics",
    "shipping",
    "compliance",
    "certificate",
    "quality",
    "moisture",
    "hmf",
    "marketing",
    "packaging",
    "distribution",
];

/// Phrasing that routes a query to the general-knowledge narrative.
pub const GENERAL_KNOWLEDGE_KEYWORDS: &[&str] = &[
    "what is",
    "how does",
    "why",
    "explain",
    "tell me about",
    "information",
    "benefits",
    "types",
    "varieties",
    "properties",
    "nutrition",
    "health",
    "history",
    "origin",
    "process",
    "production",
    "make",
    "create",
    "difference",
];

/// Hostname fragments marking an institutional (government) source.
pub const AUTHORITY_DOMAIN_TOKENS: &[&str] = &[
    "usda",
    "fao",
    "nih",
    "icar",
    "eu",
    "ec.europa",
    "cdc",
    "gov",
    "government",
];

/// Lowercased whitespace tokens of a query.
pub fn tokenize(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Lowercased alphanumeric words of `text`; punctuation separates words.
pub fn words(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

/// Whether the words of `phrase` appear consecutively in `haystack`.
pub fn contains_phrase(haystack: &[String], phrase: &str) -> bool {
    let needle = words(phrase);
    !needle.is_empty()
        && haystack
            .windows(needle.len())
            .any(|window| window == needle.as_slice())
}

/// Whether `text` (already lowercased) contains any of `terms`.
pub fn contains_any(text: &str, terms: &[&str]) -> bool {
    terms.iter().any(|term| text.contains(term))
}

/// Terms from `terms` found in `text` (already lowercased), in table order.
pub fn matching_terms<'a>(text: &str, terms: &[&'a str]) -> Vec<&'a str> {
    terms
        .iter()
        .copied()
        .filter(|term| text.contains(term))
        .collect()
}

/// Whether the query asks for research material.
pub fn has_research_intent(query: &str) -> bool {
    contains_any(&query.to_lowercase(), RESEARCH_KEYWORDS)
}
