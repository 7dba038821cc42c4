mod counter;
mod dispatcher;

pub use counter::RequestCounter;
pub use dispatcher::{Dispatch, Question, ZoneDispatcher};
