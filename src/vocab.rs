//! Fixed reference vocabularies sampled during generation.
//!
//! Every entry ends up verbatim in a tab-separated output field, so
//! entries must not contain a tab or a newline. This is a precondition
//! on the lists below, not something the emitters validate.

// Max length of each name: 20
pub static FIRST_NAMES: &[&str] = &[
    "Suzanne",
    "John",
    "David",
    "Ashley",
    "Leah",
    "Heather",
    // Top 10 girls', boys' names
    // from http://www.socialsecurity.gov/OACT/babynames/
    "Emily",
    "Isabella",
    "Emma",
    "Ava",
    "Madison",
    "Sophia",
    "Olivia",
    "Abigail",
    "Hannah",
    "Elizabeth",
    "Jacob",
    "Michael",
    "Ethan",
    "Joshua",
    "Daniel",
    "Christopher",
    "Anthony",
    "William",
    "Matthew",
    "Andrew",
];

// Max length of each: 20
pub static LAST_NAMES: &[&str] = &[
    "Chin",
    "Smith",
    "Kim",
    "Jackson",
    "Roberts",
    "Achebe",
    "Baker",
    "Esteban",
    "MacDonald",
    "Lucas",
    "Hernandez",
    "Ramirez",
    "El-Baz",
    "Wilson",
    "Crichton",
    "Philips",
    "Carter",
];

pub static DIRECTIONS: &[&str] = &["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

// Max length of each: 10
pub static CITIES: &[&str] = &[
    "Kirkland",
    "Seattle",
    "Vancouver",
    "Bremerton",
    "Brier",
    "Mukilteo",
    "Sumner",
    "Puyallup",
    "Sequim",
    "Renton",
    "Moses Lake",
    "Bothell",
];

// Max length of each: 20
pub static DISEASES: &[&str] = &[
    "heart failure",
    "chemical burn",
    "lung cancer",
    "breast cancer",
    "other cancer",
    "repetitive stress",
    "insomnia",
    "hearing loss",
    "arthritis",
    "glaucoma",
    "broken limb",
    "sickle-cell anemia",
    "kidney failure",
];

// Max length of each: 20
pub static SPECIALTIES: &[&str] = &[
    "cardiology",
    "pulmonology",
    "orthopedics",
    "obstretics",
    "gynecology",
    "urology",
    "otology",
    "pediatrics",
    "neurology",
    "neurosurgery",
    "surgery",
    "opthamology",
    "dentistry",
    "immunology",
    "psychology",
    "dermatology",
];

// Max length of each: 20
pub static PRODUCT_DESCRIPTIONS: &[&str] = &[
    "stethoscope",
    "scalpel",
    "blanket",
    "bedsheet",
    "towel",
    "X-ray film",
    "clipboard",
    "blank medical chart",
    "pipette",
    "test tube",
    "saline solution",
    "type O- blood",
    "meal tray",
    "linen bandage",
    "plaster bandage",
    "paper cup",
    "hospital robe",
    "soap",
    "cleaning fluid",
];

// Max length of each: 20
pub static SUPPLIER_NAMES: &[&str] = &[
    "Quantum Pharma.",
    "New Medical Supply",
    "Intercon. Linens",
    "American Plastics",
    "Everett Chemical",
    "Blood Centers",
    "Wilson Electronics",
    "Western Diagnostics",
    "Hippocratic Systems",
];
