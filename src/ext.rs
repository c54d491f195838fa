use crate::cursor::LookaheadCursor;

pub trait LookaheadExt: Iterator + Sized {
    /// Wraps this iterator in a [`LookaheadCursor`].
    fn lookahead(self) -> LookaheadCursor<Self>;
}

impl<I: Iterator> LookaheadExt for I {
    fn lookahead(self) -> LookaheadCursor<Self> {
        LookaheadCursor::new(self)
    }
}
