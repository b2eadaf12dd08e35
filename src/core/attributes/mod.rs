mod nominal_attribute;

pub use nominal_attribute::AttributeId;
pub use nominal_attribute::AttributeRef;
pub use nominal_attribute::NominalAttribute;
