pub mod catalog;
pub mod record;
pub mod reject;
pub mod relations;
pub mod taxonomy;

pub use catalog::ProductRecord;
pub use record::{AvailabilityStatus, SizeGroup, SizeRecord};
pub use reject::{RejectReason, RejectedRecord};
pub use relations::{DimProductRow, DimRetailerRow, DimSizeRow, FactSalesRow, StarSchema};
pub use taxonomy::{Category, ColorGroup, Subcategory};
