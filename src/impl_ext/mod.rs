// Crate-internal.
// ---

pub(crate) mod regeneration {
    pub(crate) mod retry_policy;
}

pub(crate) mod standard_accounts {
    pub(crate) mod vat_receivables;
}

// Public exports.
// ---

pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod regeneration {
        pub use crate::impl_ext::regeneration::retry_policy::*;
    }

    pub mod standard_accounts {
        pub use crate::impl_ext::standard_accounts::vat_receivables::*;
    }
}
