pub(crate) mod collect_sorted;
pub(crate) mod extrema;
pub(crate) mod keyed;
pub(crate) mod matching;
