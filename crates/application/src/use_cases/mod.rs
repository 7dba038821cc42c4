pub mod dns;
pub mod zone;

pub use dns::{Dispatch, Question, RequestCounter, ZoneDispatcher};
pub use zone::{LoadZoneUseCase, Resolution, ResolverBinding, TypeIndex, ZonePartition, ZoneRecords};
