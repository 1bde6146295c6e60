//! Fixed in-memory data tables.
//!
//! The built-in corpus is assembled once per process and shared behind an
//! `Arc`; components receive it by injection, so tests can hand them a
//! smaller [`Corpus`] instead.

use crate::profile::{builtin_profiles, HoneyProfile};
use crate::types::{ResearchPaper, SourceDocument};
use std::sync::{Arc, OnceLock};

/// Colour/strength grouping of a honey variety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarietyCategory {
    Light,
    Medium,
    Dark,
    Specialty,
}

impl VarietyCategory {
    pub const ALL: [VarietyCategory; 4] = [
        VarietyCategory::Light,
        VarietyCategory::Medium,
        VarietyCategory::Dark,
        VarietyCategory::Specialty,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VarietyCategory::Light => "Light",
            VarietyCategory::Medium => "Medium",
            VarietyCategory::Dark => "Dark",
            VarietyCategory::Specialty => "Specialty",
        }
    }
}

/// One entry of the honey variety table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoneyVariety {
    pub name: &'static str,
    pub category: VarietyCategory,
    pub description: &'static str,
}

/// All fixed tables the pipeline reads from.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    /// Fallback search index, in priority order
    pub sources: Vec<SourceDocument>,

    /// Research paper corpus
    pub papers: Vec<ResearchPaper>,

    /// Honey varieties for the types-of-honey answer
    pub varieties: Vec<HoneyVariety>,

    /// Honey lot profiles attached to answers
    pub profiles: Vec<HoneyProfile>,
}

static BUILTIN: OnceLock<Arc<Corpus>> = OnceLock::new();

impl Corpus {
    pub fn new(
        sources: Vec<SourceDocument>,
        papers: Vec<ResearchPaper>,
        varieties: Vec<HoneyVariety>,
    ) -> Self {
        Self {
            sources,
            papers,
            varieties,
            profiles: Vec::new(),
        }
    }

    pub fn with_profiles(mut self, profiles: Vec<HoneyProfile>) -> Self {
        self.profiles = profiles;
        self
    }

    /// The built-in tables, constructed on first use.
    pub fn shared() -> Arc<Corpus> {
        BUILTIN.get_or_init(|| Arc::new(Self::builtin())).clone()
    }

    /// Build a fresh copy of the built-in tables.
    pub fn builtin() -> Self {
        Self::new(builtin_sources(), builtin_papers(), builtin_varieties())
            .with_profiles(builtin_profiles())
    }

    /// The first `count` papers, keywords stripped.
    pub fn paper_shelf(&self, count: usize) -> Vec<SourceDocument> {
        self.papers.iter().take(count).map(ResearchPaper::strip).collect()
    }
}

fn builtin_sources() -> Vec<SourceDocument> {
    vec![
        SourceDocument::new(
            "FAO Honey Market Intelligence",
            "https://www.fao.org/faostat/en/#data",
            "FAO reports Indian spot prices rising 3.4% on tighter acacia supply while EU demand shifts toward premium monoflorals.",
            1,
        ),
        SourceDocument::new(
            "Apimondia Honey Quality Standards",
            "https://www.apimondia.org/",
            "Apimondia recommends 16–18% moisture for export-ready honey; anything above 19% needs dehumidification before bottling.",
            2,
        ),
        SourceDocument::new(
            "Honey Market Analysis & Trends",
            "https://www.marketresearch.com/",
            "Market research shows NCR consumers paying ₹480–₹560/kg for branded wildflower honey with strong demand for wellness bundles.",
            3,
        ),
        SourceDocument::new(
            "EU Organic Certification Guidelines",
            "https://ec.europa.eu/info/food-farming-fisheries/organic-farming_en",
            "Key paperwork: organic certificate, residue lab tests (<10 ppb), moisture log, and apiary traceability map.",
            4,
        ),
        SourceDocument::new(
            "Agricultural Weather Monitoring",
            "https://www.weather.gov/",
            "Weather data shows night temps at 24°C with 22% humidity, meaning acacia nectar flow remains stable for the next 10 days.",
            5,
        ),
        SourceDocument::new(
            "Honey and Beekeeping Information",
            "https://www.beeculture.com/",
            "Comprehensive information about honey production, bee biology, hive management, and beekeeping practices for beginners and experts.",
            6,
        ),
        SourceDocument::new(
            "National Honey Board - Honey Facts",
            "https://www.honey.com/",
            "Educational resources about honey varieties, health benefits, cooking with honey, and the science behind honey production.",
            7,
        ),
        SourceDocument::new(
            "USDA Beekeeping Resources",
            "https://www.usda.gov/",
            "Government resources on beekeeping best practices, bee health, pollination services, and agricultural support programs.",
            8,
        ),
    ]
}

fn builtin_papers() -> Vec<ResearchPaper> {
    let paper = |title: &str, url: &str, snippet: &str, position: u32, keywords: &[&str]| {
        ResearchPaper::new(SourceDocument::new(title, url, snippet, position), keywords)
    };

    vec![
        // Government research
        paper(
            "USDA - Honey Quality Standards and Moisture Content Analysis",
            "https://www.ams.usda.gov/sites/default/files/media/HoneyGradingInspection.pdf",
            "USDA Agricultural Marketing Service research on honey grading standards, moisture content (16-18.6%), and quality parameters for commercial honey production.",
            1,
            &["moisture", "quality", "usda", "government", "standards", "paper"],
        ),
        paper(
            "FAO - Honey Production and Beekeeping Development",
            "https://www.fao.org/3/i0842e/i0842e.pdf",
            "FAO (UN) comprehensive report on honey production, beekeeping practices, market analysis, and sustainable development in apiculture worldwide.",
            2,
            &["production", "beekeeping", "fao", "government", "un", "paper"],
        ),
        paper(
            "NIH - Antimicrobial Properties of Honey: A Review",
            "https://www.ncbi.nlm.nih.gov/pmc/articles/PMC4377380/",
            "National Institutes of Health research review on honey's antibacterial, antifungal, and wound-healing properties based on scientific evidence.",
            3,
            &["antimicrobial", "health", "nih", "government", "medical", "paper"],
        ),
        paper(
            "ICAR - Honey Quality Parameters and Export Standards",
            "https://icar.org.in/",
            "Indian Council of Agricultural Research guidelines on honey quality parameters, HMF levels, moisture content, and export certification requirements.",
            4,
            &["quality", "export", "icar", "government", "india", "standards", "paper"],
        ),
        paper(
            "USDA ARS - Bee Health and Colony Collapse Disorder Research",
            "https://www.ars.usda.gov/oc/brccd/",
            "USDA Agricultural Research Service studies on bee health, colony collapse disorder, pesticides impact, and sustainable beekeeping practices.",
            5,
            &["bee health", "colony", "usda", "government", "research", "paper"],
        ),
        paper(
            "EU Commission - Honey Authenticity and Adulteration Detection",
            "https://ec.europa.eu/food/safety/official_controls/legislation/guidance_documents_en",
            "European Commission research on honey authenticity testing, adulteration detection methods, and regulatory compliance for honey imports.",
            6,
            &["authenticity", "adulteration", "eu", "government", "testing", "paper"],
        ),
        paper(
            "CDC - Honey and Infant Botulism Prevention Guidelines",
            "https://www.cdc.gov/botulism/prevention.html",
            "Centers for Disease Control and Prevention guidelines on honey safety, infant botulism prevention, and proper honey handling practices.",
            7,
            &["safety", "botulism", "cdc", "government", "health", "paper"],
        ),
        paper(
            "USDA - Pollination Services and Agricultural Productivity",
            "https://www.usda.gov/topics/farming/bees-pollinators",
            "USDA research on honey bee pollination services, crop productivity enhancement, and economic value of pollination in agriculture.",
            8,
            &["pollination", "agriculture", "usda", "government", "productivity", "paper"],
        ),
        // Peer-reviewed journals
        paper(
            "Nature - Honey Bee Colony Health and Varroa Mite Management",
            "https://www.nature.com/articles/s41598-019-54536-8",
            "Nature Scientific Reports study on honey bee colony health, varroa mite impact, and integrated pest management strategies for sustainable beekeeping.",
            9,
            &["colony health", "varroa", "nature", "journal", "research", "paper"],
        ),
        paper(
            "Journal of Apicultural Research - Honey Composition and Floral Sources",
            "https://www.tandfonline.com/toc/tjar20/current",
            "Peer-reviewed research on honey composition analysis, pollen identification, floral source determination, and geographical origin authentication.",
            10,
            &["composition", "pollen", "floral", "journal", "research", "paper"],
        ),
        paper(
            "Food Chemistry - Honey Adulteration Detection Methods",
            "https://www.sciencedirect.com/journal/food-chemistry",
            "Scientific research on advanced analytical methods for detecting honey adulteration, including NMR spectroscopy and isotope ratio analysis.",
            11,
            &["adulteration", "detection", "chemistry", "journal", "research", "paper"],
        ),
        paper(
            "PLOS ONE - Honey Antioxidant Properties and Health Benefits",
            "https://journals.plos.org/plosone/article?id=10.1371/journal.pone.0124861",
            "Open-access research on honey's antioxidant capacity, phenolic compounds, and potential health benefits including anti-inflammatory effects.",
            12,
            &["antioxidant", "health", "benefits", "journal", "research", "paper"],
        ),
    ]
}

fn builtin_varieties() -> Vec<HoneyVariety> {
    use VarietyCategory::*;

    let variety = |name, category, description| HoneyVariety {
        name,
        category,
        description,
    };

    vec![
        variety("Acacia", Light, "Mild, light, and slow to crystallize. Very popular for its delicate flavor."),
        variety("Clover", Light, "Sweet and mild, very popular. One of the most common honey varieties."),
        variety("Orange Blossom", Light, "Fruity and citrusy flavor. Popular in Mediterranean regions."),
        variety("Wildflower", Medium, "Varies by region, complex flavors. Made from multiple flower sources."),
        variety("Lavender", Medium, "Floral and aromatic. Distinctive lavender scent and flavor."),
        variety("Sunflower", Medium, "Strong, slightly bitter. Rich golden color."),
        variety("Buckwheat", Dark, "Strong, molasses-like flavor, high in antioxidants. Dark color."),
        variety("Manuka", Dark, "From New Zealand, known for medicinal properties. High antibacterial activity."),
        variety("Eucalyptus", Dark, "Distinctive flavor, often used for respiratory health. From Australia."),
        variety("Raw Honey", Specialty, "Unfiltered and unpasteurized. Retains all natural enzymes and pollen."),
        variety("Creamed Honey", Specialty, "Processed to have smooth, spreadable texture. Controlled crystallization."),
        variety("Comb Honey", Specialty, "Honey still in the wax comb. Purest form of honey."),
        variety("Tupelo", Light, "Very light, mild flavor. Rare and highly prized."),
        variety("Sage", Light, "Light color, mild flavor. Slow to crystallize."),
        variety("Alfalfa", Light, "Light amber color, mild flavor. Common in North America."),
        variety("Heather", Dark, "Strong, distinctive flavor. Thick, jelly-like texture."),
        variety("Forest Honey", Dark, "Dark color, rich flavor. From tree nectars and honeydew."),
        variety("Linden", Medium, "Light color, minty flavor. Calming properties."),
    ]
}
