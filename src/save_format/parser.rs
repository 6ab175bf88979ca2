use crate::save_format::document::SaveDocument;

/// Parses the text of a save file into a [`SaveDocument`].
///
/// Parsing never fails: lines that are neither section headers nor
/// `key = value` assignments are skipped.
///
/// # Arguments
///
/// * `text` - The full contents of the save file.
///
/// # Returns
///
/// A `SaveDocument` with every section found in the text. Repeated keys keep
/// all of their values in file order.
pub fn parse_save_text(text: &str) -> SaveDocument {
    let mut document = SaveDocument::default();
    let mut current_section: Option<String> = None;

    for (line_number, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            continue;
        }

        if let Some(name) = parse_section_header(line) {
            document.section_mut(name);
            current_section = Some(name.to_owned());
            continue;
        }

        match parse_assignment(line) {
            Some((key, value)) => {
                let section_name = current_section.as_deref().unwrap_or("");
                document.section_mut(section_name).push(key, value);
            }
            None => log::debug!("Skipping unparseable line {}: {line}", line_number + 1),
        }
    }

    document
}

fn parse_section_header(line: &str) -> Option<&str> {
    line.strip_prefix('[')?
        .strip_suffix(']')
        .map(str::trim)
        .filter(|name| !name.is_empty())
}

/// Splits `key = value` on the first `=`.
///
/// Returns `None` for lines without `=` or with an empty key.
fn parse_assignment(line: &str) -> Option<(&str, String)> {
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    let key = key.strip_suffix("[]").unwrap_or(key).trim_end();
    if key.is_empty() {
        return None;
    }
    Some((key, unquote(value.trim()).to_owned()))
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}
