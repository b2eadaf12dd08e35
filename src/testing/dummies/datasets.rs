use crate::core::attributes::NominalAttribute;
use crate::core::dataset::Dataset;
use crate::core::instance_header::InstanceHeader;
use crate::core::value::Value;

fn row(cells: &[&str]) -> Vec<Value> {
    cells.iter().map(|&c| Value::from(c)).collect()
}

/// Two columns `A {a1, a2}` and `C {yes, no}`; `A` predicts `C` perfectly.
pub fn binary_dataset() -> Dataset {
    let a = NominalAttribute::with_values("A", ["a1", "a2"])
        .unwrap()
        .into_ref();
    let c = NominalAttribute::with_values("C", ["yes", "no"])
        .unwrap()
        .into_ref();
    let header = InstanceHeader::new("binary".into(), vec![a, c]).unwrap();
    Dataset::from_rows(
        header,
        [
            row(&["a1", "yes"]),
            row(&["a1", "yes"]),
            row(&["a2", "no"]),
            row(&["a2", "no"]),
        ],
    )
    .unwrap()
}

const WEATHER_ROWS: [[&str; 5]; 14] = [
    ["sunny", "hot", "high", "FALSE", "no"],
    ["sunny", "hot", "high", "TRUE", "no"],
    ["overcast", "hot", "high", "FALSE", "yes"],
    ["rainy", "mild", "high", "FALSE", "yes"],
    ["rainy", "cool", "normal", "FALSE", "yes"],
    ["rainy", "cool", "normal", "TRUE", "no"],
    ["overcast", "cool", "normal", "TRUE", "yes"],
    ["sunny", "mild", "high", "FALSE", "no"],
    ["sunny", "cool", "normal", "FALSE", "yes"],
    ["rainy", "mild", "normal", "FALSE", "yes"],
    ["sunny", "mild", "normal", "TRUE", "yes"],
    ["overcast", "mild", "high", "TRUE", "yes"],
    ["overcast", "hot", "normal", "FALSE", "yes"],
    ["rainy", "mild", "high", "TRUE", "no"],
];

/// The 14-row nominal weather data with `play` as the last column.
pub fn weather_dataset() -> Dataset {
    let attributes = [
        ("outlook", vec!["sunny", "overcast", "rainy"]),
        ("temperature", vec!["hot", "mild", "cool"]),
        ("humidity", vec!["high", "normal"]),
        ("windy", vec!["TRUE", "FALSE"]),
        ("play", vec!["yes", "no"]),
    ]
    .into_iter()
    .map(|(name, values)| NominalAttribute::with_values(name, values).unwrap().into_ref())
    .collect();
    let header = InstanceHeader::new("weather.symbolic".into(), attributes).unwrap();
    Dataset::from_rows(header, WEATHER_ROWS.iter().map(|cells| row(cells))).unwrap()
}

/// Same data as [`weather_dataset`], in ARFF form.
pub const WEATHER_ARFF: &str = "\
% nominal weather data
@relation weather.symbolic

@attribute outlook {sunny, overcast, rainy}
@attribute temperature {hot, mild, cool}
@attribute humidity {high, normal}
@attribute windy {TRUE, FALSE}
@attribute play {yes, no}

@data
sunny,hot,high,FALSE,no
sunny,hot,high,TRUE,no
overcast,hot,high,FALSE,yes
rainy,mild,high,FALSE,yes
rainy,cool,normal,FALSE,yes
rainy,cool,normal,TRUE,no
overcast,cool,normal,TRUE,yes
sunny,mild,high,FALSE,no
sunny,cool,normal,FALSE,yes
rainy,mild,normal,FALSE,yes
sunny,mild,normal,TRUE,yes
overcast,mild,high,TRUE,yes
overcast,hot,normal,FALSE,yes
rainy,mild,high,TRUE,no
";
