//! A cursor over any iterator that can look arbitrarily far ahead, pop items
//! while skipping over others, and take items back so they are delivered again
//! before the wrapped iterator resumes.
//!
//! ```
//! use lookahead_cursor::{Error, LookaheadExt as _};
//!
//! let mut cursor = "abc".chars().lookahead();
//! assert_eq!(cursor.peek(2), Ok(&'c'));
//! assert_eq!(cursor.pop(1), Ok('b'));
//! cursor.push_many(['x', 'y']);
//! assert_eq!(cursor.by_ref().collect::<String>(), "xyc");
//! assert_eq!(cursor.pop(0), Err(Error::NotAvailable { offset: 0 }));
//! ```

pub use self::{cursor::*, error::*, ext::*};

mod cursor;
mod error;
mod ext;
