//! Nominal-only ARFF reader.
//!
//! Supported: `%` comment lines, `@relation`, `@attribute name {v1, v2, ..}`
//! with optionally quoted names and values, `@data` and comma separated
//! rows. Keywords are case-insensitive. Every other construct, including
//! numeric attributes and `?` missing values, is rejected with the line it
//! appears on.

use crate::core::attributes::{AttributeRef, NominalAttribute};
use crate::core::dataset::Dataset;
use crate::core::error::DatasetError;
use crate::core::instance_header::InstanceHeader;
use crate::core::value::Value;
use crate::core::views::DatasetView;
use crate::utils::file_parsing::{
    split_csv_preserving_quotes, split_leading_token, strip_surrounding_quotes,
};
use log::{debug, info};
use std::fs;
use std::path::Path;

/// Reads an ARFF file. The relation name falls back to the file stem.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dataset, DatasetError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("dataset");
    let dataset = parse_arff(stem, &text)?;
    info!(
        "loaded '{}' from {}: {} attributes, {} instances",
        dataset.name(),
        path.display(),
        dataset.header().number_of_attributes(),
        dataset.num_instances()
    );
    Ok(dataset)
}

/// Parses ARFF text; `name_hint` names the relation when the text has no
/// `@relation` line.
pub fn parse_arff(name_hint: &str, text: &str) -> Result<Dataset, DatasetError> {
    let mut relation: Option<String> = None;
    let mut attributes: Vec<AttributeRef> = Vec::new();
    let mut dataset: Option<Dataset> = None;
    let mut last_line = 0;

    for (i, raw) in text.lines().enumerate() {
        let line_no = i + 1;
        last_line = line_no;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('%') {
            continue;
        }

        if let Some(data) = dataset.as_mut() {
            if line.starts_with('@') {
                return Err(DatasetError::parse(
                    line_no,
                    format!("unexpected declaration '{line}' after @data"),
                ));
            }
            let row = parse_row(line, line_no, data.header().number_of_attributes())?;
            data.add_instance(row).map_err(|e| at_line(line_no, e))?;
            continue;
        }

        let Some(declaration) = line.strip_prefix('@') else {
            return Err(DatasetError::parse(line_no, "data row before @data"));
        };
        let (keyword, rest) = split_leading_token(declaration)
            .ok_or_else(|| DatasetError::parse(line_no, "empty declaration"))?;

        match keyword.to_ascii_lowercase().as_str() {
            "relation" => {
                let name = strip_surrounding_quotes(rest);
                if name.is_empty() {
                    return Err(DatasetError::parse(line_no, "@relation without a name"));
                }
                relation = Some(name.to_string());
            }
            "attribute" => {
                let attribute = parse_attribute(rest, line_no)?;
                debug!("line {line_no}: {}", attribute.arff_representation());
                attributes.push(attribute.into_ref());
            }
            "data" => {
                if attributes.is_empty() {
                    return Err(DatasetError::parse(line_no, "@data before any @attribute"));
                }
                let name = relation.take().unwrap_or_else(|| name_hint.to_string());
                let header = InstanceHeader::new(name, std::mem::take(&mut attributes))
                    .map_err(|e| at_line(line_no, e))?;
                dataset = Some(Dataset::new(header));
            }
            other => {
                return Err(DatasetError::parse(
                    line_no,
                    format!("unsupported declaration '@{other}'"),
                ));
            }
        }
    }

    dataset.ok_or_else(|| DatasetError::parse(last_line.max(1), "missing @data section"))
}

fn at_line(line: usize, err: DatasetError) -> DatasetError {
    DatasetError::parse(line, err.to_string())
}

fn parse_attribute(rest: &str, line_no: usize) -> Result<NominalAttribute, DatasetError> {
    let (name, declared_type) = split_leading_token(rest)
        .ok_or_else(|| DatasetError::parse(line_no, "@attribute without a name"))?;
    let Some(inner) = declared_type
        .strip_prefix('{')
        .and_then(|s| s.strip_suffix('}'))
    else {
        return Err(DatasetError::parse(
            line_no,
            format!("attribute '{name}' has unsupported type '{declared_type}'; only nominal attributes are supported"),
        ));
    };

    let mut attribute = NominalAttribute::new(name).map_err(|e| at_line(line_no, e))?;
    for field in split_csv_preserving_quotes(inner) {
        let value = strip_surrounding_quotes(&field);
        if value.is_empty() {
            return Err(DatasetError::parse(
                line_no,
                format!("attribute '{name}' declares an empty value"),
            ));
        }
        attribute
            .add_value(Value::from(value))
            .map_err(|e| at_line(line_no, e))?;
    }
    if attribute.num_values() == 0 {
        return Err(DatasetError::parse(
            line_no,
            format!("attribute '{name}' declares no values"),
        ));
    }
    Ok(attribute)
}

fn parse_row(line: &str, line_no: usize, arity: usize) -> Result<Vec<Value>, DatasetError> {
    let fields = split_csv_preserving_quotes(line);
    if fields.len() != arity {
        return Err(DatasetError::parse(
            line_no,
            format!("expected {arity} values, found {}", fields.len()),
        ));
    }
    fields
        .iter()
        .map(|field| match field.as_str() {
            "?" => Err(DatasetError::parse(line_no, "missing values ('?') are not supported")),
            _ => Ok(Value::from(strip_surrounding_quotes(field))),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::dummies::{WEATHER_ARFF, weather_dataset};
    use std::io::Write;

    fn parse_error_line(result: Result<Dataset, DatasetError>) -> usize {
        match result {
            Err(DatasetError::Parse { line, .. }) => line,
            Err(other) => panic!("expected a parse error, got {other}"),
            Ok(_) => panic!("expected a parse error"),
        }
    }

    #[test]
    fn test_weather_text_matches_fixture() {
        let parsed = parse_arff("ignored", WEATHER_ARFF).unwrap();
        let fixture = weather_dataset();
        assert_eq!(parsed.name(), "weather.symbolic");
        assert_eq!(parsed.num_instances(), 14);
        assert_eq!(parsed.num_attributes(), 5);
        assert_eq!(parsed.to_string(), fixture.to_string());

        let windy = parsed.attribute_named("windy").unwrap();
        assert_eq!(windy.values(), &[Value::from("TRUE"), Value::from("FALSE")]);
        assert_eq!(parsed.last_attribute().unwrap().name(), "play");
    }

    #[test]
    fn test_load_from_file_defaults_relation_to_stem() {
        let mut file = tempfile::Builder::new()
            .prefix("contact")
            .suffix(".arff")
            .tempfile()
            .unwrap();
        writeln!(
            file,
            "@ATTRIBUTE 'tear rate' {{reduced, normal}}\n@Attribute lens {{none, soft}}\n\n@DATA\nreduced,none\n'normal',soft"
        )
        .unwrap();

        let dataset = load_from_file(file.path()).unwrap();
        let stem = file.path().file_stem().unwrap().to_str().unwrap();
        assert_eq!(dataset.name(), stem);
        assert_eq!(dataset.num_instances(), 2);
        assert_eq!(dataset.attribute_at(0).unwrap().name(), "tear rate");
        assert_eq!(
            dataset.instance_at(1).unwrap().values(),
            &[Value::from("normal"), Value::from("soft")]
        );
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_from_file(dir.path().join("absent.arff"));
        assert!(matches!(result, Err(DatasetError::Io(_))));
    }

    #[test]
    fn test_numeric_attribute_is_rejected() {
        let text = "@relation r\n@attribute temperature numeric\n@data\n";
        assert_eq!(parse_error_line(parse_arff("r", text)), 2);
    }

    #[test]
    fn test_row_errors_report_their_line() {
        let header = "@relation r\n@attribute a {x, y}\n@attribute c {p, q}\n@data\n";
        assert_eq!(parse_error_line(parse_arff("r", &format!("{header}x,p\nx\n"))), 6);
        assert_eq!(parse_error_line(parse_arff("r", &format!("{header}x,?\n"))), 5);
        assert_eq!(parse_error_line(parse_arff("r", &format!("{header}z,p\n"))), 5);
        assert_eq!(parse_error_line(parse_arff("r", &format!("{header}x,p\n@attribute b {{u}}\n"))), 6);
    }

    #[test]
    fn test_structural_errors() {
        assert_eq!(parse_error_line(parse_arff("r", "x,y\n")), 1);
        assert_eq!(parse_error_line(parse_arff("r", "@relation r\n@data\n")), 2);
        assert_eq!(parse_error_line(parse_arff("r", "@relation r\n@attribute a {x}\n")), 2);
        assert_eq!(
            parse_error_line(parse_arff("r", "@relation r\n@attribute a {x, x}\n@data\n")),
            2
        );
        assert_eq!(parse_error_line(parse_arff("r", "@relation r\n@attribute a {}\n")), 2);
        assert_eq!(parse_error_line(parse_arff("r", "@relation r\n@frobnicate\n")), 2);
    }

    #[test]
    fn test_comments_and_blank_lines_are_skipped() {
        let text = "% header comment\n\n@relation tiny\n% between\n@attribute a {x}\n@data\n% rows\nx\n\nx\n";
        let dataset = parse_arff("hint", text).unwrap();
        assert_eq!(dataset.name(), "tiny");
        assert_eq!(dataset.num_instances(), 2);
    }
}
