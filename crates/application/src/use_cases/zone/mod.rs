mod binding;
mod load;
mod partition;
mod records;
mod type_index;

pub use binding::{Resolution, ResolverBinding};
pub use load::LoadZoneUseCase;
pub use partition::ZonePartition;
pub use records::ZoneRecords;
pub use type_index::TypeIndex;
