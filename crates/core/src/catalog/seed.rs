//! Built-in catalog compiled into the crate.

use crate::domain::coffee::{Acidity, Body, Coffee, CoffeeId, Origin, Roast};
use crate::domain::equipment::{Equipment, EquipmentId};
use crate::domain::preferences::{ExperienceLevel, PriceRange};
use crate::domain::recipe::{BrewDuration, Difficulty, Recipe, RecipeCategory, RecipeId};

#[derive(Debug, Clone, Copy)]
struct CoffeeSeed {
    id: &'static str,
    name: &'static str,
    origin: &'static str,
    roast: Roast,
    flavor_profile: &'static [&'static str],
    acidity: Acidity,
    body: Body,
    description: &'static str,
}

const COFFEE_SEEDS: &[CoffeeSeed] = &[
    CoffeeSeed {
        id: "ethiopian-yirgacheffe",
        name: "Ethiopian Yirgacheffe",
        origin: "Yirgacheffe, Ethiopia",
        roast: Roast::Light,
        flavor_profile: &["Blueberry", "Jasmine", "Lemon zest"],
        acidity: Acidity::High,
        body: Body::Light,
        description: "Washed heirloom varietals with a tea-like body and bright berry notes.",
    },
    CoffeeSeed {
        id: "colombian-supremo",
        name: "Colombian Supremo",
        origin: "Huila, Colombia",
        roast: Roast::Medium,
        flavor_profile: &["Milk chocolate", "Caramel", "Red apple"],
        acidity: Acidity::Medium,
        body: Body::Medium,
        description: "A balanced everyday cup that works for drip, pour-over, and milk drinks.",
    },
    CoffeeSeed {
        id: "brazil-santos",
        name: "Brazil Santos",
        origin: "Santos, Brazil",
        roast: Roast::Medium,
        flavor_profile: &["Cocoa", "Hazelnut", "Brown sugar"],
        acidity: Acidity::Low,
        body: Body::Medium,
        description: "Natural-process beans with low acidity and a sweet, nutty finish.",
    },
    CoffeeSeed {
        id: "sumatra-mandheling",
        name: "Sumatra Mandheling",
        origin: "Sumatra, Indonesia",
        roast: Roast::Dark,
        flavor_profile: &["Earthy", "Cedar", "Dark chocolate"],
        acidity: Acidity::Low,
        body: Body::Full,
        description: "Wet-hulled and syrupy, with deep earthy and herbal tones.",
    },
    CoffeeSeed {
        id: "kenya-aa",
        name: "Kenya AA",
        origin: "Nyeri, Kenya",
        roast: Roast::Light,
        flavor_profile: &["Blackcurrant", "Grapefruit", "Tomato"],
        acidity: Acidity::High,
        body: Body::Medium,
        description: "Top-grade SL28 and SL34 lots with a juicy, winey acidity.",
    },
    CoffeeSeed {
        id: "guatemala-antigua",
        name: "Guatemala Antigua",
        origin: "Antigua, Guatemala",
        roast: Roast::MediumDark,
        flavor_profile: &["Spice", "Cocoa", "Smoky"],
        acidity: Acidity::Medium,
        body: Body::Full,
        description: "Volcanic-soil beans roasted just past second crack for a spicy depth.",
    },
    CoffeeSeed {
        id: "costa-rica-tarrazu",
        name: "Costa Rica Tarrazu",
        origin: "Tarrazu, Costa Rica",
        roast: Roast::Medium,
        flavor_profile: &["Honey", "Citrus", "Smooth"],
        acidity: Acidity::Medium,
        body: Body::Medium,
        description: "High-altitude honey process with a clean, sweet citrus finish.",
    },
    CoffeeSeed {
        id: "italian-espresso-blend",
        name: "Italian Espresso Blend",
        origin: "Brazil, India",
        roast: Roast::Dark,
        flavor_profile: &["Dark chocolate", "Toasted nut", "Molasses"],
        acidity: Acidity::Low,
        body: Body::Full,
        description: "A classic dark blend built for thick crema and milk-based drinks.",
    },
];

#[derive(Debug, Clone, Copy)]
struct RecipeSeed {
    id: &'static str,
    title: &'static str,
    category: RecipeCategory,
    difficulty: Difficulty,
    time: &'static str,
    description: &'static str,
    ingredients: &'static [&'static str],
    steps: &'static [&'static str],
    tips: &'static [&'static str],
}

const RECIPE_SEEDS: &[RecipeSeed] = &[
    RecipeSeed {
        id: "basic-latte",
        title: "Basic Latte",
        category: RecipeCategory::Beginner,
        difficulty: Difficulty::Easy,
        time: "5 minutes",
        description: "Strong coffee topped with steamed, lightly foamed milk.",
        ingredients: &["18g ground coffee", "200ml whole milk"],
        steps: &[
            "Brew a concentrated shot or moka pot coffee.",
            "Steam the milk to about 60C.",
            "Pour the milk over the coffee and finish with a thin layer of foam.",
        ],
        tips: &["Oat milk foams well if you want a dairy-free version."],
    },
    RecipeSeed {
        id: "v60-pour-over",
        title: "V60 Pour Over",
        category: RecipeCategory::Hot,
        difficulty: Difficulty::Medium,
        time: "4 minutes",
        description: "A clean, bright cup brewed by hand through a paper filter.",
        ingredients: &["15g medium-fine ground coffee", "250ml water at 94C"],
        steps: &[
            "Rinse the filter and discard the water.",
            "Bloom with 30ml of water for 30 seconds.",
            "Pour the remaining water in slow spirals until 250ml.",
        ],
        tips: &["Aim for a total brew time of 3 to 4 minutes."],
    },
    RecipeSeed {
        id: "french-press",
        title: "French Press",
        category: RecipeCategory::Hot,
        difficulty: Difficulty::Easy,
        time: "5 minutes",
        description: "Full-bodied immersion coffee with no paper filter.",
        ingredients: &["30g coarse ground coffee", "500ml water at 95C"],
        steps: &[
            "Add the coffee and pour all the water.",
            "Stir gently and steep for 4 minutes.",
            "Press the plunger slowly and serve immediately.",
        ],
        tips: &["Decant the coffee after pressing so it does not over-extract."],
    },
    RecipeSeed {
        id: "cold-brew",
        title: "Cold Brew Concentrate",
        category: RecipeCategory::Cold,
        difficulty: Difficulty::Easy,
        time: "12-24 hours",
        description: "Smooth, low-acid concentrate steeped in cold water.",
        ingredients: &["100g coarse ground coffee", "1L cold filtered water"],
        steps: &[
            "Combine coffee and water in a jar.",
            "Steep in the fridge for 12 to 24 hours.",
            "Strain twice and dilute 1:1 to serve.",
        ],
        tips: &["Keeps for up to two weeks refrigerated."],
    },
    RecipeSeed {
        id: "classic-espresso",
        title: "Classic Espresso",
        category: RecipeCategory::Hot,
        difficulty: Difficulty::Hard,
        time: "2 minutes",
        description: "A concentrated shot pulled under nine bars of pressure.",
        ingredients: &["18g fine ground coffee"],
        steps: &[
            "Dose and distribute the grounds evenly.",
            "Tamp level with firm pressure.",
            "Pull 36g of espresso in 25 to 30 seconds.",
        ],
        tips: &["Adjust the grind, not the dose, to fix shot time."],
    },
    RecipeSeed {
        id: "iced-espresso-tonic",
        title: "Espresso Tonic",
        category: RecipeCategory::Cold,
        difficulty: Difficulty::Medium,
        time: "3 minutes",
        description: "A fizzy, bittersweet summer drink.",
        ingredients: &["1 double espresso", "150ml tonic water", "Ice"],
        steps: &[
            "Fill a glass with ice and tonic.",
            "Pour the espresso slowly over the back of a spoon.",
        ],
        tips: &["Fruity light roasts pair best with tonic."],
    },
    RecipeSeed {
        id: "aeropress-quick",
        title: "Quick AeroPress",
        category: RecipeCategory::Beginner,
        difficulty: Difficulty::Easy,
        time: "2 minutes",
        description: "A forgiving single cup that is hard to get wrong.",
        ingredients: &["15g medium ground coffee", "220ml water at 90C"],
        steps: &[
            "Add coffee and water, stir for 10 seconds.",
            "Steep for 1 minute.",
            "Press gently for 30 seconds.",
        ],
        tips: &["Use the inverted method to prevent early dripping."],
    },
    RecipeSeed {
        id: "auto-drip-batch",
        title: "Drip Machine Batch",
        category: RecipeCategory::Beginner,
        difficulty: Difficulty::Easy,
        time: "6 minutes",
        description: "Dialing in a standard drip machine for a better pot.",
        ingredients: &["60g medium ground coffee", "1L water"],
        steps: &[
            "Use a ratio of 60g coffee per litre.",
            "Pre-wet the filter.",
            "Start the machine and remove the pot when brewing finishes.",
        ],
        tips: &["Do not leave the pot on the hot plate for more than 20 minutes."],
    },
    RecipeSeed {
        id: "moka-pot",
        title: "Stovetop Moka Pot",
        category: RecipeCategory::Hot,
        difficulty: Difficulty::Medium,
        time: "8 minutes",
        description: "Rich, espresso-style coffee made on the stove.",
        ingredients: &["20g fine ground coffee", "Hot water"],
        steps: &[
            "Fill the base with hot water up to the valve.",
            "Level the grounds in the basket without tamping.",
            "Heat on medium until the coffee gurgles, then cool the base.",
        ],
        tips: &["Starting with hot water keeps the grounds from cooking."],
    },
];

#[derive(Debug, Clone, Copy)]
struct EquipmentSeed {
    id: &'static str,
    name: &'static str,
    category: &'static str,
    price_range: PriceRange,
    difficulty: ExperienceLevel,
    description: &'static str,
}

const EQUIPMENT_SEEDS: &[EquipmentSeed] = &[
    EquipmentSeed {
        id: "hario-v60",
        name: "Hario V60 Dripper",
        category: "brewer",
        price_range: PriceRange::Budget,
        difficulty: ExperienceLevel::Intermediate,
        description: "Ceramic cone dripper with spiral ribs for even flow.",
    },
    EquipmentSeed {
        id: "bodum-french-press",
        name: "Bodum Chambord French Press",
        category: "brewer",
        price_range: PriceRange::Budget,
        difficulty: ExperienceLevel::Beginner,
        description: "The classic immersion brewer.",
    },
    EquipmentSeed {
        id: "aeropress",
        name: "AeroPress Original",
        category: "brewer",
        price_range: PriceRange::Budget,
        difficulty: ExperienceLevel::Beginner,
        description: "Durable, portable, and very forgiving.",
    },
    EquipmentSeed {
        id: "baratza-encore",
        name: "Baratza Encore Grinder",
        category: "grinder",
        price_range: PriceRange::MidRange,
        difficulty: ExperienceLevel::Beginner,
        description: "Entry-level conical burr grinder with 40 settings.",
    },
    EquipmentSeed {
        id: "fellow-stagg-ekg",
        name: "Fellow Stagg EKG Kettle",
        category: "kettle",
        price_range: PriceRange::MidRange,
        difficulty: ExperienceLevel::Intermediate,
        description: "Gooseneck kettle with precise temperature control.",
    },
    EquipmentSeed {
        id: "breville-barista-express",
        name: "Breville Barista Express",
        category: "espresso-machine",
        price_range: PriceRange::Premium,
        difficulty: ExperienceLevel::Intermediate,
        description: "All-in-one espresso machine with a built-in grinder.",
    },
    EquipmentSeed {
        id: "la-marzocco-linea-mini",
        name: "La Marzocco Linea Mini",
        category: "espresso-machine",
        price_range: PriceRange::Premium,
        difficulty: ExperienceLevel::Advanced,
        description: "Dual-boiler commercial-grade machine for the home.",
    },
    EquipmentSeed {
        id: "comandante-c40",
        name: "Comandante C40 Hand Grinder",
        category: "grinder",
        price_range: PriceRange::Premium,
        difficulty: ExperienceLevel::Advanced,
        description: "Hand grinder with high-nitrogen steel burrs.",
    },
];

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}

pub(crate) fn coffees() -> Vec<Coffee> {
    COFFEE_SEEDS
        .iter()
        .map(|seed| Coffee {
            id: CoffeeId(seed.id.to_string()),
            name: seed.name.to_string(),
            origin: Origin::parse(seed.origin),
            roast: seed.roast,
            flavor_profile: owned(seed.flavor_profile),
            acidity: seed.acidity,
            body: seed.body,
            description: seed.description.to_string(),
        })
        .collect()
}

pub(crate) fn recipes() -> Vec<Recipe> {
    RECIPE_SEEDS
        .iter()
        .map(|seed| Recipe {
            id: RecipeId(seed.id.to_string()),
            title: seed.title.to_string(),
            category: seed.category,
            difficulty: seed.difficulty,
            time: BrewDuration::parse(seed.time),
            description: seed.description.to_string(),
            ingredients: owned(seed.ingredients),
            steps: owned(seed.steps),
            tips: owned(seed.tips),
        })
        .collect()
}

pub(crate) fn equipment() -> Vec<Equipment> {
    EQUIPMENT_SEEDS
        .iter()
        .map(|seed| Equipment {
            id: EquipmentId(seed.id.to_string()),
            name: seed.name.to_string(),
            category: seed.category.to_string(),
            price_range: seed.price_range,
            difficulty: seed.difficulty,
            description: seed.description.to_string(),
        })
        .collect()
}
