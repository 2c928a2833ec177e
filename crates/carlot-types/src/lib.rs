pub mod cars;
pub mod payload;
pub mod review;
pub mod services;
pub mod session;

pub use cars::*;
pub use payload::*;
pub use review::*;
pub use services::*;
pub use session::*;
