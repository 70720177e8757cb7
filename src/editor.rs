//! Editor session state and launch-mode selection.

pub(crate) mod launch;
pub(crate) mod state;
