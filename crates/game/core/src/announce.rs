//! Line sink for character announcements.
//!
//! Characters never print directly. Every user-visible line (stat sheets,
//! special abilities, equip confirmations) goes through an [`Announcer`] handed
//! in by the caller, so the demo can print to stdout while tests record lines.

/// Receives announcement lines in the order they are produced.
pub trait Announcer {
    fn announce(&mut self, line: &str);
}

/// Records every line, used by tests and by transcript capture.
impl Announcer for Vec<String> {
    fn announce(&mut self, line: &str) {
        self.push(line.to_owned());
    }
}

impl<A: Announcer + ?Sized> Announcer for &mut A {
    #[inline]
    fn announce(&mut self, line: &str) {
        (**self).announce(line);
    }
}
