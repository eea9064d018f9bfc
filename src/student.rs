use compact_str::CompactString;

/// One row of the department roster.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Student {
    pub first_name: CompactString,
    pub last_name: CompactString,
    pub id: CompactString,
    /// The "Type" column, e.g. `UG` or `PGR`.
    pub kind: CompactString,
    pub year: CompactString,
    pub course: String,
    /// `None` until the profile pages have been visited.
    pub pronouns: Option<Pronouns>,
}

/// What the profile page said about a student's pronouns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Pronouns {
    /// The page had no attribute block at all.
    Unknown,
    /// The attribute block exists but has no pronoun line.
    NotStated,
    Stated(CompactString),
}

impl Pronouns {
    /// Text written to the spreadsheet cell.
    #[must_use]
    pub fn as_cell(&self) -> &str {
        match self {
            Self::Unknown => "unknown",
            Self::NotStated => "",
            Self::Stated(s) => s,
        }
    }
}

impl Student {
    #[must_use]
    pub fn pronouns_cell(&self) -> &str {
        self.pronouns.as_ref().map_or("", Pronouns::as_cell)
    }
}
