mod datasets;

pub use datasets::{WEATHER_ARFF, binary_dataset, weather_dataset};
