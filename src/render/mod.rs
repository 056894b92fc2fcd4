pub(crate) mod compositor;
pub(crate) mod encode;
pub(crate) mod text;
