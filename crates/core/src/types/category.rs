//! Product categories and the listing category selector.

use serde::{Deserialize, Serialize};

/// Product category.
///
/// The catalog uses a fixed set of categories; records carrying anything
/// else are treated as malformed at the catalog-fetch boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Smartphones,
    Laptops,
    Audio,
    Wearables,
    Gaming,
    Accessories,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Self; 6] = [
        Self::Smartphones,
        Self::Laptops,
        Self::Audio,
        Self::Wearables,
        Self::Gaming,
        Self::Accessories,
    ];

    /// Stable identifier used on the wire and in query strings.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Smartphones => "smartphones",
            Self::Laptops => "laptops",
            Self::Audio => "audio",
            Self::Wearables => "wearables",
            Self::Gaming => "gaming",
            Self::Accessories => "accessories",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "smartphones" => Ok(Self::Smartphones),
            "laptops" => Ok(Self::Laptops),
            "audio" => Ok(Self::Audio),
            "wearables" => Ok(Self::Wearables),
            "gaming" => Ok(Self::Gaming),
            "accessories" => Ok(Self::Accessories),
            _ => Err(format!("invalid category: {s}")),
        }
    }
}

/// Category selector for the product listing.
///
/// `All` is the sentinel that disables the category constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Whether a product in `category` passes this selector.
    #[must_use]
    pub fn matches(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => *selected == category,
        }
    }
}

impl std::str::FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s == "all" {
            Ok(Self::All)
        } else {
            s.parse::<Category>().map(Self::Only)
        }
    }
}
