use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

use super::helpers::load_pending;

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let pending = load_pending(store, &mut result)?;
    Ok(result.with_pending(pending))
}
