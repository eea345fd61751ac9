use wevt_sdk::objects::Category;

/// Fixed part of a generated event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventTemplate {
    pub category: Category,
    pub title: &'static str,
    pub description: &'static str,
}

impl EventTemplate {
    const fn new(category: Category, title: &'static str, description: &'static str) -> Self {
        Self {
            category,
            title,
            description,
        }
    }
}

/// One event is generated per entry, in this order before sorting.
pub const EVENT_TEMPLATES: [EventTemplate; 15] = [
    EventTemplate::new(
        Category::Politics,
        "Summit meeting scheduled between world leaders",
        "International diplomats gather to discuss global cooperation and trade agreements.",
    ),
    EventTemplate::new(
        Category::Economy,
        "Stock markets show volatility amid economic concerns",
        "Major indices fluctuate as investors react to changing economic indicators.",
    ),
    EventTemplate::new(
        Category::Technology,
        "Major tech company announces breakthrough in AI research",
        "New developments in artificial intelligence promise to revolutionize multiple industries.",
    ),
    EventTemplate::new(
        Category::Environment,
        "Climate conference yields new commitments",
        "Countries pledge to reduce carbon emissions and invest in renewable energy.",
    ),
    EventTemplate::new(
        Category::Health,
        "WHO reports progress in global health initiatives",
        "International health organization announces improvements in disease prevention programs.",
    ),
    EventTemplate::new(
        Category::Conflict,
        "Peace talks continue in conflict zone",
        "Diplomatic efforts intensify as parties work toward resolution.",
    ),
    EventTemplate::new(
        Category::Sports,
        "International championship draws global attention",
        "Athletes from around the world compete in prestigious tournament.",
    ),
    EventTemplate::new(
        Category::Culture,
        "UNESCO recognizes new world heritage sites",
        "Historic and cultural landmarks gain international protection status.",
    ),
    EventTemplate::new(
        Category::Economy,
        "Central bank announces policy changes",
        "Monetary authorities adjust interest rates to manage economic growth.",
    ),
    EventTemplate::new(
        Category::Technology,
        "Cybersecurity experts warn of new threats",
        "Security researchers identify emerging risks to digital infrastructure.",
    ),
    EventTemplate::new(
        Category::Environment,
        "Major conservation effort launched",
        "International coalition works to protect endangered species and habitats.",
    ),
    EventTemplate::new(
        Category::Politics,
        "Election results reshape political landscape",
        "Democratic process brings changes to government composition.",
    ),
    EventTemplate::new(
        Category::Health,
        "Medical breakthrough offers new treatment options",
        "Researchers announce promising results in clinical trials.",
    ),
    EventTemplate::new(
        Category::Economy,
        "Trade agreement signed between nations",
        "Economic partnership aims to boost bilateral commerce and investment.",
    ),
    EventTemplate::new(
        Category::Technology,
        "Space agency announces new exploration mission",
        "Ambitious project to explore outer space gains momentum.",
    ),
];
