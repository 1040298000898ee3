mod allergy;
mod command;
mod conflict;
mod filter;
mod query;
mod restriction;
mod session;
mod types;
mod video;

pub use allergy::*;
pub use command::*;
pub use conflict::*;
pub use filter::*;
pub use query::*;
pub use restriction::*;
pub use session::*;
pub use types::*;
pub use video::*;
