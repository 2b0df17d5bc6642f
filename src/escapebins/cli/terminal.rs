//! Terminal width discovery for the listing layout.

use console::Term;

/// Something that can tell how many columns the output has.
pub trait DisplayWidth {
    fn columns(&self) -> Option<usize>;
}

/// Width of the terminal attached to stdout, if there is one.
pub struct TerminalWidth;

impl DisplayWidth for TerminalWidth {
    fn columns(&self) -> Option<usize> {
        Term::stdout()
            .size_checked()
            .map(|(_rows, cols)| cols as usize)
            .filter(|cols| *cols > 0)
    }
}

/// The provider's width, or `fallback` when it cannot be determined.
pub fn resolve_width(provider: &impl DisplayWidth, fallback: usize) -> usize {
    match provider.columns() {
        Some(cols) => cols,
        None => {
            log::debug!("terminal width unknown, using {}", fallback);
            fallback
        }
    }
}
