//! Known crop diseases with symptoms, treatments, and prevention.

use crate::tools::Crop;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Treatment {
    pub name: &'static str,
    pub instructions: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiseaseProfile {
    pub name: &'static str,
    pub symptoms: &'static [&'static str],
    pub treatments: &'static [Treatment],
    pub prevention: &'static [&'static str],
}

/// Diseases per crop. Crops without an entry fall back to wheat, matching
/// the lookup the detector always resolved.
pub fn profiles(crop: Crop) -> &'static [DiseaseProfile] {
    match crop {
        Crop::Wheat => WHEAT,
        Crop::Rice => RICE,
        Crop::Potato => POTATO,
        Crop::Tomato => TOMATO,
        Crop::Sugarcane => SUGARCANE,
        Crop::Mustard => MUSTARD,
        Crop::Maize => MAIZE,
        Crop::Cotton => COTTON,
        _ => WHEAT,
    }
}

pub fn find(crop: Crop, name: &str) -> Option<&'static DiseaseProfile> {
    profiles(crop).iter().find(|profile| profile.name == name)
}

const WHEAT: &[DiseaseProfile] = &[
    DiseaseProfile {
        name: "Wheat Rust",
        symptoms: &[
            "Orange-brown pustules on leaves",
            "Yellowing of leaf tissue",
            "Reduced grain filling",
        ],
        treatments: &[
            Treatment { name: "Propiconazole", instructions: "Spray 0.1% solution" },
            Treatment { name: "Mancozeb", instructions: "Apply 2.5 kg/ha" },
        ],
        prevention: &[
            "Use resistant varieties",
            "Early sowing",
            "Remove infected debris",
        ],
    },
    DiseaseProfile {
        name: "Powdery Mildew",
        symptoms: &[
            "White powdery patches",
            "Leaf curling",
            "Stunted growth",
        ],
        treatments: &[
            Treatment { name: "Sulfur dust", instructions: "Apply 25 kg/ha" },
            Treatment { name: "Karathane", instructions: "Spray 0.05%" },
        ],
        prevention: &[
            "Avoid dense planting",
            "Good air circulation",
            "Balanced nitrogen",
        ],
    },
];

const RICE: &[DiseaseProfile] = &[
    DiseaseProfile {
        name: "Rice Blast",
        symptoms: &[
            "Diamond-shaped lesions",
            "Gray center with brown border",
            "Neck rot",
        ],
        treatments: &[
            Treatment { name: "Tricyclazole", instructions: "Spray 0.06%" },
            Treatment { name: "Carbendazim", instructions: "Apply 1 g/L water" },
        ],
        prevention: &[
            "Balanced fertilization",
            "Avoid excess nitrogen",
            "Resistant varieties",
        ],
    },
    DiseaseProfile {
        name: "Bacterial Leaf Blight",
        symptoms: &[
            "Water-soaked lesions",
            "Yellow to white stripes",
            "Leaf wilting",
        ],
        treatments: &[
            Treatment { name: "Streptocycline", instructions: "15 g/ha spray" },
            Treatment { name: "Copper oxychloride", instructions: "0.25% solution" },
        ],
        prevention: &[
            "Clip seedling tips",
            "Avoid field flooding",
            "Seed treatment",
        ],
    },
];

const POTATO: &[DiseaseProfile] = &[
    DiseaseProfile {
        name: "Late Blight",
        symptoms: &[
            "Dark brown spots",
            "White fungal growth",
            "Rapid leaf death",
        ],
        treatments: &[
            Treatment { name: "Mancozeb", instructions: "Spray 2.5 kg/ha" },
            Treatment { name: "Metalaxyl", instructions: "Apply 2.5 g/L" },
        ],
        prevention: &[
            "Certified seed",
            "Destroy infected tubers",
            "Good drainage",
        ],
    },
    DiseaseProfile {
        name: "Early Blight",
        symptoms: &[
            "Concentric ring spots",
            "Target board appearance",
            "Lower leaves first",
        ],
        treatments: &[
            Treatment { name: "Chlorothalonil", instructions: "2 g/L spray" },
            Treatment { name: "Copper fungicide", instructions: "0.3% solution" },
        ],
        prevention: &[
            "Crop rotation",
            "Remove crop debris",
            "Adequate spacing",
        ],
    },
];

const TOMATO: &[DiseaseProfile] = &[
    DiseaseProfile {
        name: "Tomato Leaf Curl",
        symptoms: &[
            "Upward leaf curling",
            "Stunted growth",
            "Yellow leaf margins",
        ],
        treatments: &[
            Treatment { name: "Imidacloprid", instructions: "Control whitefly vector" },
            Treatment { name: "Neem oil", instructions: "5 ml/L spray" },
        ],
        prevention: &[
            "Yellow sticky traps",
            "Remove infected plants",
            "Resistant varieties",
        ],
    },
    DiseaseProfile {
        name: "Fusarium Wilt",
        symptoms: &[
            "One-sided wilting",
            "Yellow lower leaves",
            "Brown vascular tissue",
        ],
        treatments: &[
            Treatment { name: "Carbendazim", instructions: "Soil drench 1 g/L" },
            Treatment { name: "Trichoderma", instructions: "Bio-control" },
        ],
        prevention: &[
            "Crop rotation 3-4 years",
            "Grafted seedlings",
            "Soil solarization",
        ],
    },
];

const SUGARCANE: &[DiseaseProfile] = &[
    DiseaseProfile {
        name: "Red Rot",
        symptoms: &[
            "Red internal tissue",
            "White patches in red",
            "Sour smell",
        ],
        treatments: &[
            Treatment { name: "Carbendazim", instructions: "Sett treatment 0.1%" },
            Treatment { name: "Hot water treatment", instructions: "52C for 30 min" },
        ],
        prevention: &[
            "Disease-free setts",
            "Resistant varieties",
            "Field sanitation",
        ],
    },
];

const MUSTARD: &[DiseaseProfile] = &[
    DiseaseProfile {
        name: "White Rust",
        symptoms: &[
            "White pustules underside",
            "Distorted flowers",
            "Staghead formation",
        ],
        treatments: &[
            Treatment { name: "Metalaxyl", instructions: "Seed treatment 6 g/kg" },
            Treatment { name: "Mancozeb", instructions: "Spray 0.25%" },
        ],
        prevention: &[
            "Early sowing",
            "Crop rotation",
            "Destroy infected plants",
        ],
    },
];

const MAIZE: &[DiseaseProfile] = &[
    DiseaseProfile {
        name: "Maize Leaf Blight",
        symptoms: &[
            "Cigar-shaped lesions",
            "Gray-green color",
            "Leaf drying",
        ],
        treatments: &[
            Treatment { name: "Mancozeb", instructions: "Spray 2.5 g/L" },
            Treatment { name: "Propiconazole", instructions: "1 ml/L spray" },
        ],
        prevention: &[
            "Resistant hybrids",
            "Remove crop residue",
            "Balanced fertilizer",
        ],
    },
];

const COTTON: &[DiseaseProfile] = &[
    DiseaseProfile {
        name: "Cotton Leaf Curl",
        symptoms: &[
            "Upward leaf curling",
            "Vein thickening",
            "Stunted plants",
        ],
        treatments: &[
            Treatment { name: "Whitefly control", instructions: "Spray Imidacloprid" },
            Treatment { name: "Neem extract", instructions: "5% spray" },
        ],
        prevention: &[
            "Bt cotton varieties",
            "Border crop of maize",
            "Remove alternate hosts",
        ],
    },
];
