pub(crate) mod props;
pub(crate) mod registry;
pub(crate) mod scenes;
