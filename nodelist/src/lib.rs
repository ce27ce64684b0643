pub mod nodelist;

pub use self::nodelist::{CursorMut, Iter, NodeList};
