mod clock;
mod token;

pub use clock::Clock;
pub use clock::SystemClock;
pub use token::TokenState;
