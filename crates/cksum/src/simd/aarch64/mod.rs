pub(crate) mod pmull;
