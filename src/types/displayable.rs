//! Human-readable rendering capability

/// Types that can render a one-line summary for display
///
/// `describe(false)` omits sensitive detail such as balances.
pub trait Displayable {
    /// Render a one-line summary, optionally including the balance
    fn describe(&self, show_balance: bool) -> String;

    /// Render the full one-line summary
    fn display(&self) -> String {
        self.describe(true)
    }
}
