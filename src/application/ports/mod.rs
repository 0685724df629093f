pub mod notifier;
pub mod storage;
pub mod time;
pub mod util;
