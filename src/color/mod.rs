pub(crate) mod scale;
