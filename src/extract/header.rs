//! Header block parsing.
//!
//! Terminal exports identify each employee with a free-text header cell
//! of the form `Name:... ID:... Dept:... Date:...`, with no fixed column
//! and no guarantee that every tag is present. A small tokenizer splits
//! the cell text into `{tag, value}` pairs so each field can be extracted
//! (and tested) independently; missing tags degrade to empty fields
//! rather than failing the row.

use std::sync::OnceLock;

use regex::Regex;

/// The four field markers recognized in a header cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderTag {
    /// `Name:` marker.
    Name,
    /// `ID:` marker.
    Id,
    /// `Dept:` marker.
    Dept,
    /// `Date:` marker.
    Date,
}

impl HeaderTag {
    fn from_marker(marker: &str) -> Option<Self> {
        match marker {
            "Name:" => Some(Self::Name),
            "ID:" => Some(Self::Id),
            "Dept:" => Some(Self::Dept),
            "Date:" => Some(Self::Date),
            _ => None,
        }
    }
}

/// One tagged run of text inside a header cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderToken<'a> {
    /// Which marker introduced this run.
    pub tag: HeaderTag,
    /// Trimmed text between this marker and the next one (or end of cell).
    pub value: &'a str,
}

static TAG_PATTERN: OnceLock<Regex> = OnceLock::new();

fn tag_pattern() -> &'static Regex {
    TAG_PATTERN.get_or_init(|| Regex::new(r"Name:|ID:|Dept:|Date:").expect("valid tag pattern"))
}

/// Splits a header cell into tagged tokens, in text order.
///
/// A token's value runs from its marker to the start of the next marker,
/// so `Dept:Discipline Date:...` yields the full `Discipline` value no
/// matter which letters the department name contains. Text before the
/// first marker is ignored.
///
/// # Example
///
/// ```
/// use attendance_engine::extract::{tokenize_header, HeaderTag};
///
/// let tokens = tokenize_header("Name:John Smith ID:P001");
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(tokens[0].tag, HeaderTag::Name);
/// assert_eq!(tokens[0].value, "John Smith");
/// assert_eq!(tokens[1].value, "P001");
/// ```
pub fn tokenize_header(text: &str) -> Vec<HeaderToken<'_>> {
    let markers: Vec<(usize, usize, HeaderTag)> = tag_pattern()
        .find_iter(text)
        .filter_map(|m| HeaderTag::from_marker(m.as_str()).map(|tag| (m.start(), m.end(), tag)))
        .collect();

    let mut tokens = Vec::with_capacity(markers.len());
    for (index, (_, value_start, tag)) in markers.iter().enumerate() {
        let value_end = markers
            .get(index + 1)
            .map_or(text.len(), |next_marker| next_marker.0);
        tokens.push(HeaderToken {
            tag: *tag,
            value: text[*value_start..value_end].trim(),
        });
    }
    tokens
}

/// The employee fields extracted from one header row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderFields {
    /// Cleaned display name; never empty.
    pub name: String,
    /// `ID:` value, or empty when the tag is missing.
    pub employee_id: String,
    /// `Dept:` value, or empty when the tag is missing.
    pub department: String,
    /// Raw `Date:` token (`YY.MM.DD~YY.MM.DD`), or empty when missing.
    pub date_range: String,
}

/// Columns scanned for name fragments that overflowed the header cell.
const NAME_SUPPLEMENT_COLUMNS: std::ops::RangeInclusive<usize> = 4..=7;

/// Parses a spreadsheet row as an employee header block.
///
/// Scans cells left to right and uses the first cell containing a `Name:`
/// marker; later matches in the same row are ignored. The raw name has
/// repeated words removed (case-insensitive, first occurrence kept), is
/// supplemented from columns 4-7 with fragments not already present, and
/// is whitespace-collapsed. `ID:` and `Date:` values are cut at the first
/// whitespace; the `Dept:` value is kept whole.
///
/// Returns `None` when no cell carries a `Name:` marker or the resulting
/// name is empty.
pub fn parse_header_row(row: &[String]) -> Option<HeaderFields> {
    let header_cell = row.iter().find(|cell| cell.contains("Name:"))?;
    let tokens = tokenize_header(header_cell);
    let first_value = |tag: HeaderTag| {
        tokens
            .iter()
            .find(|token| token.tag == tag)
            .map(|token| token.value)
    };

    let mut name = dedup_words(first_value(HeaderTag::Name).unwrap_or(""));
    for column in NAME_SUPPLEMENT_COLUMNS {
        let Some(cell) = row.get(column) else {
            break;
        };
        let fragment = cell.trim();
        if fragment.is_empty() || tag_pattern().is_match(fragment) {
            continue;
        }
        if !name.to_lowercase().contains(&fragment.to_lowercase()) {
            name.push(' ');
            name.push_str(fragment);
        }
    }
    let name = collapse_whitespace(&name);
    if name.is_empty() {
        return None;
    }

    Some(HeaderFields {
        name,
        employee_id: first_token(first_value(HeaderTag::Id).unwrap_or("")),
        department: first_value(HeaderTag::Dept).unwrap_or("").to_string(),
        date_range: first_token(first_value(HeaderTag::Date).unwrap_or("")),
    })
}

/// Removes repeated words, keeping the first occurrence of each.
fn dedup_words(raw: &str) -> String {
    let mut seen: Vec<String> = Vec::new();
    let mut kept: Vec<&str> = Vec::new();
    for word in raw.split_whitespace() {
        let lowered = word.to_lowercase();
        if !seen.contains(&lowered) {
            seen.push(lowered);
            kept.push(word);
        }
    }
    kept.join(" ")
}

fn first_token(value: &str) -> String {
    value.split_whitespace().next().unwrap_or("").to_string()
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|cell| cell.to_string()).collect()
    }

    // ==========================================================================
    // HP-001: Full header cell yields all four fields
    // ==========================================================================
    #[test]
    fn test_hp_001_full_header_cell() {
        let fields = parse_header_row(&row(&[
            "Name:John Smith ID:P001 Dept:Discipline Date:25.06.01~25.06.30",
        ]))
        .unwrap();

        assert_eq!(fields.name, "John Smith");
        assert_eq!(fields.employee_id, "P001");
        assert_eq!(fields.department, "Discipline");
        assert_eq!(fields.date_range, "25.06.01~25.06.30");
    }

    // ==========================================================================
    // HP-002: Repeated name words are removed, first occurrence kept
    // ==========================================================================
    #[test]
    fn test_hp_002_repeated_words_removed() {
        let fields = parse_header_row(&row(&["Name:Aye Chan Aye Chan ID:33"])).unwrap();
        assert_eq!(fields.name, "Aye Chan");

        let fields = parse_header_row(&row(&["Name:Ko KO ko Latt ID:7"])).unwrap();
        assert_eq!(fields.name, "Ko Latt");
    }

    // ==========================================================================
    // HP-003: Names containing marker letters are kept whole
    // ==========================================================================
    #[test]
    fn test_hp_003_name_with_marker_letters() {
        let fields = parse_header_row(&row(&["Name:David Nanda ID:12"])).unwrap();
        assert_eq!(fields.name, "David Nanda");
        assert_eq!(fields.employee_id, "12");
    }

    // ==========================================================================
    // HP-004: Department runs to the next marker, whatever it contains
    // ==========================================================================
    #[test]
    fn test_hp_004_department_kept_whole() {
        let fields =
            parse_header_row(&row(&["Name:A B ID:1 Dept:Discipline Date:25.06.01~25.06.30"]))
                .unwrap();
        assert_eq!(fields.department, "Discipline");

        let fields = parse_header_row(&row(&["Name:A B Dept:General Admin"])).unwrap();
        assert_eq!(fields.department, "General Admin");
    }

    // ==========================================================================
    // HP-005: Name fragments in columns 4-7 are appended when new
    // ==========================================================================
    #[test]
    fn test_hp_005_supplementary_name_columns() {
        let fields = parse_header_row(&row(&[
            "Name:Aye ID:33",
            "",
            "",
            "",
            "Chan",
            "aye",
            "Date:25.06.01~25.06.30",
            "Moe",
        ]))
        .unwrap();

        // "Chan" and "Moe" are new; "aye" is already a substring of the
        // name; the tag-bearing cell is not a name fragment.
        assert_eq!(fields.name, "Aye Chan Moe");
    }

    // ==========================================================================
    // HP-006: Missing markers default to empty fields
    // ==========================================================================
    #[test]
    fn test_hp_006_missing_markers_default_empty() {
        let fields = parse_header_row(&row(&["Name:Solo"])).unwrap();
        assert_eq!(fields.name, "Solo");
        assert_eq!(fields.employee_id, "");
        assert_eq!(fields.department, "");
        assert_eq!(fields.date_range, "");
    }

    // ==========================================================================
    // HP-007: Empty name yields no record
    // ==========================================================================
    #[test]
    fn test_hp_007_empty_name_yields_none() {
        assert_eq!(parse_header_row(&row(&["Name: ID:33"])), None);
        assert_eq!(parse_header_row(&row(&["Name:"])), None);
    }

    // ==========================================================================
    // HP-008: Only the first Name-bearing cell in a row is used
    // ==========================================================================
    #[test]
    fn test_hp_008_first_name_cell_wins() {
        let fields = parse_header_row(&row(&[
            "",
            "Name:First Person ID:1",
            "Name:Second Person ID:2",
        ]))
        .unwrap();
        assert_eq!(fields.name, "First Person");
        assert_eq!(fields.employee_id, "1");
    }

    // ==========================================================================
    // HP-009: Rows without a Name marker yield no record
    // ==========================================================================
    #[test]
    fn test_hp_009_no_marker_yields_none() {
        assert_eq!(parse_header_row(&row(&["06.02", "MON", "06:40"])), None);
        assert_eq!(parse_header_row(&row(&[])), None);
    }

    #[test]
    fn test_id_and_date_cut_at_first_whitespace() {
        let fields =
            parse_header_row(&row(&["Name:A B ID:P001 (temp) Date:25.06.01~25.06.30 printed"]))
                .unwrap();
        assert_eq!(fields.employee_id, "P001");
        assert_eq!(fields.date_range, "25.06.01~25.06.30");
    }

    #[test]
    fn test_tokenize_orders_tokens_by_position() {
        let tokens = tokenize_header("Date:25.06.01~25.06.30 Name:A ID:1");
        let tags: Vec<HeaderTag> = tokens.iter().map(|t| t.tag).collect();
        assert_eq!(tags, vec![HeaderTag::Date, HeaderTag::Name, HeaderTag::Id]);
    }

    #[test]
    fn test_tokenize_ignores_text_before_first_marker() {
        let tokens = tokenize_header("report for Name:A");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].value, "A");
    }

    #[test]
    fn test_tokenize_keeps_repeated_markers_in_order() {
        let tokens = tokenize_header("ID:1 ID:2");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].value, "1");
        assert_eq!(tokens[1].value, "2");
    }

    #[test]
    fn test_name_whitespace_is_collapsed() {
        let fields = parse_header_row(&row(&["Name:  Aye   Chan  ID:33"])).unwrap();
        assert_eq!(fields.name, "Aye Chan");
    }
}
