use super::deal::Deal;
use super::who::Who;

/// Decides showdowns. Hand ranking lives outside this crate.
///
/// Returns the winner, or `None` for a split pot.
pub trait Arbiter: Send + Sync {
    fn verdict(&self, deal: &Deal) -> Option<Who>;
}

impl<F> Arbiter for F
where
    F: Fn(&Deal) -> Option<Who> + Send + Sync,
{
    fn verdict(&self, deal: &Deal) -> Option<Who> {
        self(deal)
    }
}

/// Always awards the same verdict. Handy for deterministic tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fixed(pub Option<Who>);

impl Arbiter for Fixed {
    fn verdict(&self, _: &Deal) -> Option<Who> {
        self.0
    }
}
