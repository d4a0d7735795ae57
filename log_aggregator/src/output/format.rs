//!
//! Output report format.
//!

///
/// Output report format.
///
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum Format {
    /// One `(class, xstreams, threads): mean` line per group.
    #[default]
    Text,
    /// JSON array of group summaries.
    Json,
    /// CSV table compatible with the chart renderer input.
    Csv,
}

impl std::str::FromStr for Format {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            string => anyhow::bail!(
                "Unknown output format `{string}`. Supported formats: {}",
                vec![Self::Text, Self::Json, Self::Csv]
                    .into_iter()
                    .map(|element| element.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Text => write!(f, "text"),
            Format::Json => write!(f, "json"),
            Format::Csv => write!(f, "csv"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::Format;

    #[test]
    fn parse() {
        assert_eq!(Format::from_str("JSON").expect("Always valid"), Format::Json);
        assert_eq!(Format::from_str("csv").expect("Always valid"), Format::Csv);
        assert!(Format::from_str("xlsx")
            .expect_err("Must be rejected")
            .to_string()
            .contains("text, json, csv"));
    }
}
