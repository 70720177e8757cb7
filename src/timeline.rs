pub(crate) mod window;
