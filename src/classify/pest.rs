//! Common crop pests with damage descriptions, treatments, and prevention.

use crate::tools::Crop;

use super::disease::Treatment;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PestProfile {
    pub name: &'static str,
    pub damage: &'static str,
    pub treatments: &'static [Treatment],
    pub prevention: &'static [&'static str],
}

/// Pests per crop. Crops without an entry fall back to wheat, matching the
/// lookup the identifier always resolved.
pub fn profiles(crop: Crop) -> &'static [PestProfile] {
    match crop {
        Crop::Wheat => WHEAT,
        Crop::Rice => RICE,
        Crop::Vegetables => VEGETABLES,
        Crop::Sugarcane => SUGARCANE,
        Crop::Cotton => COTTON,
        _ => WHEAT,
    }
}

pub fn find(crop: Crop, name: &str) -> Option<&'static PestProfile> {
    profiles(crop).iter().find(|profile| profile.name == name)
}

const WHEAT: &[PestProfile] = &[
    PestProfile {
        name: "Aphid",
        damage: "Sucks sap, causes yellowing",
        treatments: &[
            Treatment { name: "Imidacloprid", instructions: "0.5 ml/L spray" },
            Treatment { name: "Neem oil", instructions: "5 ml/L spray" },
        ],
        prevention: &["Early sowing", "Remove weeds", "Use yellow sticky traps"],
    },
    PestProfile {
        name: "Termite",
        damage: "Damages roots and stems",
        treatments: &[Treatment {
            name: "Chlorpyrifos",
            instructions: "Soil treatment 5 L/ha",
        }],
        prevention: &["Proper field drainage", "Remove crop residue"],
    },
];

const RICE: &[PestProfile] = &[
    PestProfile {
        name: "Stem Borer",
        damage: "Bores into stem, causes dead hearts",
        treatments: &[
            Treatment { name: "Cartap", instructions: "1 kg/ha granules" },
            Treatment { name: "Chlorantraniliprole", instructions: "0.4 ml/L spray" },
        ],
        prevention: &["Light traps", "Remove stubbles", "Timely transplanting"],
    },
    PestProfile {
        name: "BPH",
        damage: "Sucks sap, causes hopper burn",
        treatments: &[
            Treatment { name: "Buprofezin", instructions: "1.5 ml/L spray" },
            Treatment { name: "Thiamethoxam", instructions: "0.2 g/L spray" },
        ],
        prevention: &["Avoid excess nitrogen", "Alternate wetting drying"],
    },
];

const VEGETABLES: &[PestProfile] = &[
    PestProfile {
        name: "Whitefly",
        damage: "Transmits viruses, causes leaf curl",
        treatments: &[
            Treatment { name: "Imidacloprid", instructions: "0.5 ml/L spray" },
            Treatment { name: "Yellow sticky traps", instructions: "Install 10/acre" },
        ],
        prevention: &["Reflective mulch", "Intercrop with maize"],
    },
    PestProfile {
        name: "Fruit Borer",
        damage: "Bores into fruits",
        treatments: &[
            Treatment { name: "Spinosad", instructions: "0.5 ml/L spray" },
            Treatment { name: "Neem extract", instructions: "5% spray" },
        ],
        prevention: &["Pheromone traps", "Remove infested fruits"],
    },
];

const SUGARCANE: &[PestProfile] = &[PestProfile {
    name: "Early Shoot Borer",
    damage: "Causes dead hearts in young shoots",
    treatments: &[Treatment {
        name: "Carbofuran",
        instructions: "30 kg/ha in furrows",
    }],
    prevention: &["Light traps", "Remove dry leaves"],
}];

const COTTON: &[PestProfile] = &[PestProfile {
    name: "Pink Bollworm",
    damage: "Damages bolls and seeds",
    treatments: &[Treatment {
        name: "Quinalphos",
        instructions: "2 ml/L spray",
    }],
    prevention: &["Pheromone traps", "Bt cotton varieties"],
}];
