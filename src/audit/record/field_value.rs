use std::fmt;

pub const NOT_FOUND: &str = "Not Found";
pub const MISSING: &str = "missing";
pub const NOT_SPECIFIED: &str = "Not Specified";
pub const UNKNOWN: &str = "Unknown";
pub const ERROR: &str = "Error";
pub const NONE: &str = "None";

/// A single cell of the report.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Count(usize),
    Number(f64),
    Flag(bool),
    Status(u16),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }

    /// `Some(value)` as text, `None` as the "Not Found" sentinel.
    pub fn text_or_not_found(value: Option<&str>) -> Self {
        FieldValue::Text(value.unwrap_or(NOT_FOUND).to_string())
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) => f.write_str(text),
            FieldValue::Count(count) => write!(f, "{}", count),
            FieldValue::Number(number) => write!(f, "{}", number),
            FieldValue::Flag(flag) => write!(f, "{}", flag),
            FieldValue::Status(status) => write!(f, "{}", status),
        }
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<usize> for FieldValue {
    fn from(value: usize) -> Self {
        FieldValue::Count(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

impl From<u16> for FieldValue {
    fn from(value: u16) -> Self {
        FieldValue::Status(value)
    }
}

macro_rules! verdict {
    ($name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<$name> for FieldValue {
            fn from(value: $name) -> Self {
                FieldValue::Text(value.as_str().to_string())
            }
        }
    };
}

verdict!(Quality {
    Good => "Good",
    NeedsImprovement => "Needs Improvement",
});

verdict!(YesNo {
    Yes => "Yes",
    No => "No",
});

verdict!(Presence {
    Found => "Found",
    NotFound => "Not Found",
});

verdict!(Validity {
    Valid => "Valid",
    Invalid => "Invalid",
});

impl Quality {
    pub fn within(value: usize, range: std::ops::RangeInclusive<usize>) -> Self {
        if range.contains(&value) {
            Quality::Good
        } else {
            Quality::NeedsImprovement
        }
    }
}

impl From<bool> for YesNo {
    fn from(value: bool) -> Self {
        if value { YesNo::Yes } else { YesNo::No }
    }
}

impl From<bool> for Presence {
    fn from(value: bool) -> Self {
        if value {
            Presence::Found
        } else {
            Presence::NotFound
        }
    }
}

impl From<bool> for Validity {
    fn from(value: bool) -> Self {
        if value {
            Validity::Valid
        } else {
            Validity::Invalid
        }
    }
}
