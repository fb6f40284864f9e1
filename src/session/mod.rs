pub(crate) mod hover;
