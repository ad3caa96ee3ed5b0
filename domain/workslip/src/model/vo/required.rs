use serde::Serialize;

/// A field that must be filled before a slip can be submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RequiredField {
    SoNumber,
    Offices,
    Date,
    Area,
    TimeStarted,
    TimeEnded,
    /// Request type of the first technical report row.
    Request,
    Technician,
}

impl RequiredField {
    pub const ALL: [RequiredField; 8] = [
        RequiredField::SoNumber,
        RequiredField::Offices,
        RequiredField::Date,
        RequiredField::Area,
        RequiredField::TimeStarted,
        RequiredField::TimeEnded,
        RequiredField::Request,
        RequiredField::Technician,
    ];

    /// Message shown next to the field.
    pub fn message(self) -> &'static str {
        match self {
            Self::Offices => "Select at least one office",
            Self::Area => "Select at least one area",
            Self::Request => "Select request type for at least one report",
            Self::SoNumber
            | Self::Date
            | Self::TimeStarted
            | Self::TimeEnded
            | Self::Technician => "Required",
        }
    }
}

impl std::fmt::Display for RequiredField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::SoNumber => "SO number",
            Self::Offices => "offices",
            Self::Date => "date",
            Self::Area => "area",
            Self::TimeStarted => "time started",
            Self::TimeEnded => "time ended",
            Self::Request => "request",
            Self::Technician => "technician",
        };
        f.write_str(name)
    }
}
