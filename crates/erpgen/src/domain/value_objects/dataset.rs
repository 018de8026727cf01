//! Dataset - Groups of collections generated together

use serde::{Deserialize, Serialize};

/// A business area whose collections are generated as one unit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Dataset {
    Sales,
    Purchase,
    Finance,
    Gst,
    Hr,
    Logistics,
    Production,
    Quality,
    Stores,
    /// FAQ and conversation records built from templates
    Interaction,
}

impl Dataset {
    pub const ALL: [Dataset; 10] = [
        Dataset::Sales,
        Dataset::Purchase,
        Dataset::Finance,
        Dataset::Gst,
        Dataset::Hr,
        Dataset::Logistics,
        Dataset::Production,
        Dataset::Quality,
        Dataset::Stores,
        Dataset::Interaction,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dataset::Sales => "sales",
            Dataset::Purchase => "purchase",
            Dataset::Finance => "finance",
            Dataset::Gst => "gst",
            Dataset::Hr => "hr",
            Dataset::Logistics => "logistics",
            Dataset::Production => "production",
            Dataset::Quality => "quality",
            Dataset::Stores => "stores",
            Dataset::Interaction => "interaction",
        }
    }
}

impl std::fmt::Display for Dataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Dataset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_lowercase();
        Dataset::ALL
            .into_iter()
            .find(|d| d.as_str() == wanted)
            .ok_or_else(|| format!("Unknown dataset: {}", s))
    }
}
