//! Model/view mapping contract
//!
//! Form adapters for a concrete UI framework implement their rendering and
//! submission lifecycle around this trait.

/// Bidirectional mapping between one model value and a tree of sub-fields
pub trait DataMapper {
    /// Model value type
    type Model;

    /// Data handed to the sub-fields for display
    type View;

    /// Raw data submitted by the sub-fields
    type Submitted;

    /// Validation error for rejected submissions
    type Error;

    /// Map the model value (or its absence) to sub-field data
    fn to_view(&self, model: Option<Self::Model>) -> Self::View;

    /// Map submitted sub-field data back to a model value
    fn from_view(&self, submitted: &Self::Submitted) -> Result<Option<Self::Model>, Self::Error>;
}
