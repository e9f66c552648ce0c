use std::fmt;

macro_rules! resource_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default, PartialOrd, Ord)]
        pub struct $name(pub u32);

        impl $name {
            #[inline]
            pub const fn new(id: u32) -> Self {
                Self(id)
            }

            #[inline]
            pub const fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

resource_id!(
    /// Slot in the memory image's buffer table.
    BufferId
);
resource_id!(
    /// Slot in the memory image's texture table.
    TextureId
);
resource_id!(
    /// Slot in the memory image's program table.
    ProgramId
);
