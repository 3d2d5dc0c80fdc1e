/// Logical type applied to a school column during projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Dictionary-coded label with a small value set, kept as text.
    Category,
    /// Free text.
    Text,
    /// Bounded count stored as a 16-bit integer.
    Count,
}

/// One column of the combined school output schema.
#[derive(Debug, Clone, Copy)]
pub struct SchoolField {
    /// Column header in the source workbook.
    pub source: &'static str,
    /// Column name in the output CSV.
    pub output: &'static str,
    pub kind: FieldKind,
}

/// School columns in output order. Source columns outside this table are
/// dropped during projection.
pub const SCHOOL_FIELDS: [SchoolField; 7] = [
    SchoolField {
        source: "시도",
        output: "province",
        kind: FieldKind::Category,
    },
    SchoolField {
        source: "지역규모",
        output: "region_size",
        kind: FieldKind::Category,
    },
    SchoolField {
        source: "학교급",
        output: "school_level",
        kind: FieldKind::Category,
    },
    SchoolField {
        source: "학교명",
        output: "school_name",
        kind: FieldKind::Text,
    },
    SchoolField {
        source: "통합구분",
        output: "integration_type",
        kind: FieldKind::Category,
    },
    SchoolField {
        source: "학급수",
        output: "class_count",
        kind: FieldKind::Count,
    },
    SchoolField {
        source: "학생수",
        output: "student_count",
        kind: FieldKind::Count,
    },
];
