//! Element-wise maps over slices, run on rayon when the `parallel` feature is on
//! and sequentially otherwise. Results keep input order either way.

macro_rules! par_map {
    ($slice:expr, $f:expr) => {{
        #[cfg(feature = "parallel")]
        {
            use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
            $slice.par_iter().map($f).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            $slice.iter().map($f).collect()
        }
    }};
}

/// Like `par_map!`, but `$f` returns a Result and the whole map collects into `Result<Vec<_>, _>`.
macro_rules! par_try_map {
    ($slice:expr, $f:expr) => {
        par_map!($slice, $f)
    };
}
