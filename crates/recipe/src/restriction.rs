//! Built-in table of forbidden ingredient terms per dietary tag and health
//! condition.
//!
//! Keys are lower-cased tag names. A tag absent from the table carries no
//! restriction; the offered choice lists deliberately include a few such tags
//! (`Mediterranean`, `Anemia`).

use std::collections::HashMap;
use std::sync::LazyLock;

const DIETARY: &[(&str, &[&str])] = &[
    (
        "vegan",
        &[
            "chicken", "beef", "pork", "lamb", "goat", "turkey", "duck", "fish", "tuna", "salmon",
            "shrimp", "prawn", "crab", "bacon", "ham", "sausage", "meat", "egg", "milk", "cheese",
            "butter", "cream", "yogurt", "yoghurt", "honey", "gelatin", "whey", "mayonnaise",
            "ghee", "anchovy",
        ],
    ),
    (
        "vegetarian",
        &[
            "chicken", "beef", "pork", "lamb", "goat", "turkey", "duck", "fish", "tuna", "salmon",
            "shrimp", "prawn", "crab", "bacon", "ham", "sausage", "meat", "gelatin", "anchovy",
        ],
    ),
    (
        "pescatarian",
        &[
            "chicken", "beef", "pork", "lamb", "goat", "turkey", "duck", "bacon", "ham",
            "sausage", "meat",
        ],
    ),
    (
        "halal",
        &[
            "pork", "bacon", "ham", "lard", "gelatin", "wine", "beer", "rum", "brandy", "alcohol",
        ],
    ),
    (
        "kosher",
        &[
            "pork", "bacon", "ham", "lard", "shrimp", "prawn", "crab", "lobster", "oyster",
            "shellfish",
        ],
    ),
    (
        "gluten-free",
        &[
            "wheat", "flour", "barley", "rye", "bread", "pasta", "couscous", "semolina", "malt",
            "noodle",
        ],
    ),
    (
        "dairy-free",
        &[
            "milk", "cheese", "butter", "cream", "yogurt", "yoghurt", "whey", "casein", "ghee",
        ],
    ),
    (
        "nut-free",
        &[
            "peanut", "almond", "cashew", "walnut", "pecan", "hazelnut", "pistachio",
            "macadamia",
        ],
    ),
    (
        "keto",
        &[
            "sugar", "rice", "bread", "pasta", "potato", "flour", "corn", "honey", "banana",
            "oats",
        ],
    ),
];

const HEALTH: &[(&str, &[&str])] = &[
    (
        "diabetes",
        &[
            "sugar", "honey", "syrup", "molasses", "white bread", "white rice", "candy", "soda",
            "sweetened condensed milk",
        ],
    ),
    (
        "hypertension",
        &[
            "salt", "soy sauce", "bouillon", "stock cube", "msg", "bacon", "ham", "sausage",
        ],
    ),
    (
        "heart disease",
        &[
            "lard", "butter", "bacon", "sausage", "salt", "cream", "palm oil", "deep fried",
        ],
    ),
    (
        "celiac disease",
        &[
            "wheat", "flour", "barley", "rye", "bread", "pasta", "couscous", "semolina", "malt",
        ],
    ),
    (
        "lactose intolerance",
        &["milk", "cheese", "butter", "cream", "yogurt", "yoghurt", "whey"],
    ),
    (
        "gout",
        &[
            "liver", "kidney", "anchovy", "sardine", "mussel", "organ meat", "beer",
        ],
    ),
    (
        "kidney disease",
        &[
            "salt", "banana", "potato", "tomato", "processed cheese", "bouillon",
        ],
    ),
];

static BUILTIN: LazyLock<RestrictionTable> =
    LazyLock::new(|| RestrictionTable::from_entries(DIETARY.iter().chain(HEALTH.iter()).copied()));

/// Mapping from lower-cased tag name to its forbidden terms.
#[derive(Debug, Clone, Default)]
pub struct RestrictionTable {
    entries: HashMap<String, Vec<String>>,
}

impl RestrictionTable {
    /// The table shipped with the application.
    pub fn builtin() -> &'static RestrictionTable {
        &BUILTIN
    }

    pub fn from_entries<'a>(
        entries: impl IntoIterator<Item = (&'a str, &'a [&'a str])>,
    ) -> Self {
        let entries = entries
            .into_iter()
            .map(|(tag, terms)| {
                let terms = terms.iter().map(|term| term.to_lowercase()).collect();

                (tag.to_lowercase(), terms)
            })
            .collect();

        Self { entries }
    }

    /// Forbidden terms for a tag, matched case-insensitively on the tag name.
    pub fn terms(&self, tag: &str) -> Option<&[String]> {
        self.entries.get(&tag.to_lowercase()).map(Vec::as_slice)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.terms(tag).is_some()
    }
}
