use crate::error::Error;

/// Membership index over a word set. `'a` is the index's own arena lifetime;
/// insertion borrows the index for the rest of its life.
pub trait Index<'a> {
    fn add(&'a self, word: &str) -> Result<(), Error>;
    fn contains(&self, word: &str) -> bool;

    fn add_all<'f, I>(&'a self, items: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = &'f str>,
        Self: Sized,
    {
        for word in items {
            self.add(word)?;
        }
        Ok(())
    }
}
