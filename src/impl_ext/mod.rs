// Crate-internal.
// ---

pub(crate) mod standard_storages {
    pub(crate) mod file;
    pub(crate) mod in_memory;
}

pub(crate) mod standard_submitters {
    pub(crate) mod simulated;
}

// Public exports.
// ---

pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod standard_storages {
        pub use crate::impl_ext::standard_storages::file::*;
        pub use crate::impl_ext::standard_storages::in_memory::*;
    }

    pub mod standard_submitters {
        pub use crate::impl_ext::standard_submitters::simulated::*;
    }
}
