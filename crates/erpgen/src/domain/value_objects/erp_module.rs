//! ErpModule - Business domain tag for FAQ and conversation records

use serde::{Deserialize, Serialize};

/// Business module a question/answer pair belongs to.
///
/// Selects which template pools apply.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ErpModule {
    Sales,
    Purchase,
    Finance,
    Inventory,
    #[serde(rename = "HR")]
    Hr,
    #[serde(rename = "GST")]
    Gst,
}

impl ErpModule {
    pub const ALL: [ErpModule; 6] = [
        ErpModule::Sales,
        ErpModule::Purchase,
        ErpModule::Finance,
        ErpModule::Inventory,
        ErpModule::Hr,
        ErpModule::Gst,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErpModule::Sales => "Sales",
            ErpModule::Purchase => "Purchase",
            ErpModule::Finance => "Finance",
            ErpModule::Inventory => "Inventory",
            ErpModule::Hr => "HR",
            ErpModule::Gst => "GST",
        }
    }
}

impl std::fmt::Display for ErpModule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ErpModule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sales" => Ok(ErpModule::Sales),
            "purchase" => Ok(ErpModule::Purchase),
            "finance" => Ok(ErpModule::Finance),
            "inventory" => Ok(ErpModule::Inventory),
            "hr" => Ok(ErpModule::Hr),
            "gst" => Ok(ErpModule::Gst),
            _ => Err(format!("Unknown ERP module: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_display_names() {
        let json = serde_json::to_string(&ErpModule::ALL).unwrap();
        assert_eq!(
            json,
            r#"["Sales","Purchase","Finance","Inventory","HR","GST"]"#
        );
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("gst".parse::<ErpModule>().unwrap(), ErpModule::Gst);
        assert_eq!("HR".parse::<ErpModule>().unwrap(), ErpModule::Hr);
        assert!("Payroll".parse::<ErpModule>().is_err());
    }
}
