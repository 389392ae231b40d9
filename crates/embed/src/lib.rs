pub mod providers;
pub mod resolver;
mod util;

pub use resolver::{DEFAULT_GOODGAME_PROXY, EmbedContext, Provider, detect, normalize};
