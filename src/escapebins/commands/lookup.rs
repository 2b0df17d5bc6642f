use crate::commands::{CmdMessage, CmdResult};
use crate::model::Catalog;

/// Looks up `name` by exact, case-sensitive match.
///
/// A miss is not an error: the result carries a message and no entry.
pub fn run(catalog: &Catalog, name: &str) -> CmdResult {
    match catalog.get(name) {
        Some(entry) => CmdResult::default().with_entry(entry.clone()),
        None => {
            log::debug!("lookup miss for {:?}", name);
            CmdResult::default().with_message(CmdMessage::error(format!(
                "Sorry, couldn't find anything for {}",
                name
            )))
        }
    }
}
